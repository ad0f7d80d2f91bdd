// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::config::{AuthMethod, Config};
use crate::context::default_context;
use crate::JmsApi;
use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::uri::PathAndQuery;
use http::{HeaderValue, Method, Request, Uri};
use jmsapi_core::utils::{encode_query, QueryValues};
use jmsapi_core::{Context, Error, Result, Signer};
use jmsapi_http_send_reqwest::ReqwestHttpSend;
use jmsapi_jumpserver::{
    BrokerCredentialProvider, Credential, RequestSigner, StaticTokenCredentialProvider,
    VaultCredentialProvider,
};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;

/// Client for the JumpServer api.
///
/// Cheap to clone, clones share the same config and context.
#[derive(Debug, Clone)]
pub struct Client {
    config: Arc<Config>,
    method: AuthMethod,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a new client with [`default_context`].
    pub fn new(config: Config) -> Result<Self> {
        Self::with_context(default_context(), config)
    }

    /// Create a new client with the given context.
    ///
    /// The authentication method is picked by [`Config::auth_method`]. The
    /// broker is always reached with certificate verification disabled.
    pub fn with_context(ctx: Context, config: Config) -> Result<Self> {
        if config.endpoint.is_empty() {
            return Err(Error::config_missing("endpoint is required"));
        }

        let method = config.auth_method();
        debug!("creating jumpserver client for {} with {method:?}", config.endpoint);

        let signer = match method {
            AuthMethod::StaticToken => Signer::new(
                ctx,
                StaticTokenCredentialProvider::new(config.token.as_deref().unwrap_or_default()),
                RequestSigner::new(),
            ),
            AuthMethod::VaultClient => Signer::new(
                ctx,
                VaultCredentialProvider::new(config.vault.clone().unwrap_or_default()),
                RequestSigner::new(),
            ),
            AuthMethod::BrokerFetch => Signer::new(
                ctx,
                BrokerCredentialProvider::new(config.broker.clone().unwrap_or_default())
                    .with_http_send(ReqwestHttpSend::danger_accept_invalid_certs()?),
                RequestSigner::new(),
            ),
        };

        Ok(Self {
            config: Arc::new(config),
            method,
            signer,
        })
    }

    /// The authentication method of this client.
    pub fn auth_method(&self) -> AuthMethod {
        self.method
    }

    /// The config this client was created with.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl JmsApi for Client {
    async fn make_request<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Request<Bytes>>
    where
        B: Serialize + Sync + ?Sized,
    {
        let body = match body {
            Some(body) => serde_json::to_vec(body).map(Bytes::from).map_err(|e| {
                Error::request_encode(format!("failed to encode request body: {e}")).with_source(e)
            })?,
            None => Bytes::new(),
        };

        let req = Request::builder()
            .method(method)
            .uri(endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .map_err(|e| {
                Error::request_invalid(format!("failed to build request for {endpoint}"))
                    .with_source(e)
            })?;

        let (mut parts, body) = req.into_parts();
        self.signer
            .sign(&mut parts)
            .await
            .map_err(|err| err.with_context("sign request"))?;

        Ok(Request::from_parts(parts, body))
    }

    async fn do_request<T>(&self, req: Request<Bytes>, result: Option<&mut T>) -> Result<()>
    where
        T: DeserializeOwned + Send,
    {
        let resp = self.signer.context().http_send(req).await?;
        let (parts, body) = resp.into_parts();

        if self.config.debug {
            info!("response body: {}", String::from_utf8_lossy(&body));
        }

        let status = parts.status;
        if !(200..400).contains(&status.as_u16()) {
            return Err(Error::server_status(
                status,
                String::from_utf8_lossy(&body),
            ));
        }

        let Some(result) = result else {
            return Ok(());
        };
        *result = serde_json::from_slice(&body).map_err(|e| {
            Error::response_decode(format!("failed to decode response body: {e}")).with_source(e)
        })?;

        Ok(())
    }

    fn set_query<'a>(
        &self,
        req: &'a mut Request<Bytes>,
        params: &QueryValues,
    ) -> Result<&'a mut Request<Bytes>> {
        let query = encode_query(params);

        let mut parts = req.uri().clone().into_parts();
        let path = parts
            .path_and_query
            .as_ref()
            .map(|v| v.path())
            .unwrap_or("/");
        let path_and_query = if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        };
        parts.path_and_query = Some(PathAndQuery::from_str(&path_and_query)?);

        *req.uri_mut() = Uri::from_parts(parts)?;
        Ok(req)
    }

    fn get_endpoint(&self) -> &str {
        &self.config.endpoint
    }
}
