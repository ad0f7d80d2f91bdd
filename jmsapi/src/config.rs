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

use jmsapi_core::Context;
use jmsapi_jumpserver::{BrokerConfig, VaultConfig};
use serde::Deserialize;

/// Environment variable holding the base url of the JumpServer api.
pub const JUMPSERVER_ENDPOINT: &str = "JUMPSERVER_ENDPOINT";
/// Environment variable enabling response body logging.
pub const JUMPSERVER_DEBUG: &str = "JUMPSERVER_DEBUG";
/// Environment variable holding a pre-shared api token.
pub const JUMPSERVER_TOKEN: &str = "JUMPSERVER_TOKEN";

/// Config for [`crate::Client`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base url of the JumpServer api, for example `https://jms.example.com`.
    #[serde(alias = "endpoints")]
    pub endpoint: String,
    /// Log every response body at `info` level.
    pub debug: bool,
    /// Pre-shared api token, selects [`AuthMethod::StaticToken`].
    pub token: Option<String>,
    /// Selects [`AuthMethod::VaultClient`] when no token is set.
    pub vault: Option<VaultConfig>,
    /// Broker settings for [`AuthMethod::BrokerFetch`], defaults apply if unset.
    pub broker: Option<BrokerConfig>,
}

/// The way requests are authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// `Authorization: Token <token>` with a pre-shared token.
    StaticToken,
    /// HMAC signature with an access key fetched from the secret broker.
    BrokerFetch,
    /// HMAC signature with an access key retrieved through a Conjur client.
    VaultClient,
}

impl Config {
    /// Load config from `JUMPSERVER_ENDPOINT`, `JUMPSERVER_DEBUG` and
    /// `JUMPSERVER_TOKEN`.
    pub fn from_env(ctx: &Context) -> Self {
        let debug = ctx
            .env_var(JUMPSERVER_DEBUG)
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "on" | "yes"))
            .unwrap_or_default();

        Self {
            endpoint: ctx.env_var(JUMPSERVER_ENDPOINT).unwrap_or_default(),
            debug,
            token: ctx.env_var(JUMPSERVER_TOKEN).filter(|v| !v.is_empty()),
            ..Default::default()
        }
    }

    /// The authentication method selected by the populated fields.
    ///
    /// A non-empty token wins, then a vault config, the broker is used
    /// otherwise.
    pub fn auth_method(&self) -> AuthMethod {
        if self.token.as_deref().is_some_and(|v| !v.is_empty()) {
            AuthMethod::StaticToken
        } else if self.vault.is_some() {
            AuthMethod::VaultClient
        } else {
            AuthMethod::BrokerFetch
        }
    }
}
