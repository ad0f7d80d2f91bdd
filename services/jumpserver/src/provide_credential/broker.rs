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

use super::utils::fetch_secret;
use crate::constants::{
    BROKER_ACCESS_KEY_ID_PATH, BROKER_ACCESS_TOKEN_PATH, BROKER_ORGANIZATION,
    BROKER_SECRET_ACCESS_KEY_PATH, CONJUR_APPLIANCE_URL,
};
use crate::Credential;
use async_trait::async_trait;
use jmsapi_core::hash::base64_encode;
use jmsapi_core::{Context, HttpSend, ProvideCredential, Result};
use log::debug;
use serde::Deserialize;
use std::sync::Arc;

/// Config for [`BrokerCredentialProvider`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Path of the access token file mounted by the broker sidecar.
    pub token_path: String,
    /// Base url of the broker.
    ///
    /// Read from `CONJUR_APPLIANCE_URL` on every load if not set.
    pub endpoint: Option<String>,
    /// Organization segment of the secret urls.
    pub organization: String,
    /// Secret id of the access key id.
    pub access_key_id_path: String,
    /// Secret id of the secret access key.
    pub secret_access_key_path: String,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            token_path: BROKER_ACCESS_TOKEN_PATH.to_string(),
            endpoint: None,
            organization: BROKER_ORGANIZATION.to_string(),
            access_key_id_path: BROKER_ACCESS_KEY_ID_PATH.to_string(),
            secret_access_key_path: BROKER_SECRET_ACCESS_KEY_PATH.to_string(),
        }
    }
}

/// BrokerCredentialProvider loads an access key pair from a secret broker.
///
/// The access token file is read and base64 encoded, then the access key id
/// and the secret access key are fetched one after another from
/// `<endpoint>/secrets/<organization>/variable/<path>`. Secret ids are put
/// into the url as is.
#[derive(Debug, Default)]
pub struct BrokerCredentialProvider {
    config: BrokerConfig,
    http: Option<Arc<dyn HttpSend>>,
}

impl BrokerCredentialProvider {
    /// Create a new `BrokerCredentialProvider` instance.
    pub fn new(config: BrokerConfig) -> Self {
        Self { config, http: None }
    }

    /// Send broker requests with a dedicated client instead of the context's.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Some(Arc::new(http));
        self
    }

    fn secret_url(&self, endpoint: &str, path: &str) -> String {
        format!(
            "{endpoint}/secrets/{}/variable/{path}",
            self.config.organization
        )
    }
}

#[async_trait]
impl ProvideCredential for BrokerCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let token = ctx.file_read(&self.config.token_path).await?;
        let token = base64_encode(&token);

        let endpoint = match &self.config.endpoint {
            Some(v) => v.clone(),
            None => ctx.env_var_required(CONJUR_APPLIANCE_URL)?,
        };
        debug!("loading access key from broker {endpoint}");

        let http = self.http.as_deref();
        let access_key_id = fetch_secret(
            ctx,
            http,
            &self.secret_url(&endpoint, &self.config.access_key_id_path),
            &token,
        )
        .await
        .map_err(|e| e.with_context("get access key id"))?;
        let secret_access_key = fetch_secret(
            ctx,
            http,
            &self.secret_url(&endpoint, &self.config.secret_access_key_path),
            &token,
        )
        .await
        .map_err(|e| e.with_context("get secret access key"))?;

        Ok(Some(Credential::access_key(
            access_key_id,
            secret_access_key,
        )))
    }
}
