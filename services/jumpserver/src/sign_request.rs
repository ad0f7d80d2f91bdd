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

use crate::constants::{DEFAULT_SIGNED_HEADERS, SIGNATURE_ALGORITHM};
use crate::Credential;
use async_trait::async_trait;
use http::header::{AUTHORIZATION, CONTENT_LENGTH, DATE};
use http::request::Parts;
use http::{HeaderName, HeaderValue};
use jmsapi_core::hash::base64_hmac_sha256;
use jmsapi_core::time::{format_http_date, now};
use jmsapi_core::{Context, Error, Result, SignRequest, SigningRequest};
use log::debug;

/// RequestSigner that implements JumpServer API authentication.
///
/// Token credentials are sent as is. Access key credentials produce an
/// [http signature](https://datatracker.ietf.org/doc/html/draft-cavage-http-signatures)
/// computed with `hmac-sha256` over the configured headers, `(request-target)`
/// and `date` by default.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    headers: Vec<String>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new signer covering `(request-target)` and `date`.
    pub fn new() -> Self {
        Self {
            headers: DEFAULT_SIGNED_HEADERS.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Replace the ordered list of headers covered by the signature.
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        credential: &Self::Credential,
    ) -> Result<()> {
        let (access_key_id, secret_access_key) = match credential {
            Credential::Token(token) => {
                req.headers
                    .insert(AUTHORIZATION, authorization_value(&format!("Token {token}"))?);
                return Ok(());
            }
            Credential::AccessKey {
                access_key_id,
                secret_access_key,
            } => (access_key_id, secret_access_key),
        };

        let mut signing_req = SigningRequest::build(req)?;
        if !signing_req.headers.contains_key(DATE) {
            signing_req
                .headers
                .insert(DATE, HeaderValue::from_str(&format_http_date(now()))?);
        }

        let string_to_sign = match build_string_to_sign(&signing_req, &self.headers) {
            Ok(v) => v,
            Err(err) => {
                signing_req.apply(req)?;
                return Err(err);
            }
        };
        debug!("string to sign: {}", &string_to_sign);

        let signature = base64_hmac_sha256(secret_access_key.as_bytes(), string_to_sign.as_bytes());
        let signed_headers = self
            .headers
            .iter()
            .map(|v| v.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        let authorization = format!(
            "Signature keyId=\"{access_key_id}\",algorithm=\"{SIGNATURE_ALGORITHM}\",headers=\"{signed_headers}\",signature=\"{signature}\""
        );

        let value = match authorization_value(&authorization) {
            Ok(v) => v,
            Err(err) => {
                signing_req.apply(req)?;
                return Err(err);
            }
        };
        signing_req.headers.insert(AUTHORIZATION, value);

        signing_req.apply(req)
    }
}

fn authorization_value(value: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(value).map_err(|err| {
        Error::sign_failed("credential is not a valid authorization header value").with_source(err)
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Build the string to sign for the given headers.
///
/// One line per header in exactly the given order, joined by `\n`. Besides
/// plain headers the following names are computed from the request:
///
/// - `(request-target)`: lowercased method plus path and query
/// - `request-line`: method, path and query, http version
/// - `host`: the `Host` header or the uri authority
/// - `content-length`: the header value, `0` if absent
pub fn build_string_to_sign<S: AsRef<str>>(req: &SigningRequest, headers: &[S]) -> Result<String> {
    let mut lines = Vec::with_capacity(headers.len());

    for name in headers {
        let name = name.as_ref().to_lowercase();
        let line = match name.as_str() {
            "(request-target)" => format!(
                "(request-target): {} {}",
                req.method.as_str().to_lowercase(),
                req.path_and_query()
            ),
            "request-line" => format!(
                "{} {} {:?}",
                req.method.as_str(),
                req.path_and_query(),
                req.version
            ),
            "host" => {
                let host = req.host().ok_or_else(|| Error::missing_header("host"))?;
                format!("host: {host}")
            }
            "content-length" => {
                let length = req.header_get(&CONTENT_LENGTH)?.unwrap_or("0");
                format!("content-length: {length}")
            }
            _ => {
                let key = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|_| Error::missing_header(&name))?;
                let value = req
                    .header_get(&key)?
                    .ok_or_else(|| Error::missing_header(&name))?;
                format!("{name}: {value}")
            }
        };
        lines.push(line);
    }

    Ok(lines.join("\n"))
}
