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

use crate::conjur::{ConjurClient, ConjurConfig};
use crate::constants::{
    VAULT_ACCESS_KEY_ID_PATH, VAULT_SECRET_ACCESS_KEY_PATH, VAULT_TOKEN_FILE_ENV_NAME,
};
use crate::Credential;
use async_trait::async_trait;
use jmsapi_core::{Context, ProvideCredential, Result};
use log::debug;
use serde::Deserialize;

/// Config for [`VaultCredentialProvider`].
///
/// Every field is the *name* of an environment variable, the values are read
/// on each load.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Variable naming a second variable that holds the token file path.
    pub token_file_env: String,
    /// Variable holding the secret id of the access key id.
    pub access_key_id_path_env: String,
    /// Variable holding the secret id of the secret access key.
    pub secret_access_key_path_env: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            token_file_env: VAULT_TOKEN_FILE_ENV_NAME.to_string(),
            access_key_id_path_env: VAULT_ACCESS_KEY_ID_PATH.to_string(),
            secret_access_key_path_env: VAULT_SECRET_ACCESS_KEY_PATH.to_string(),
        }
    }
}

/// VaultCredentialProvider loads an access key pair through a [`ConjurClient`].
#[derive(Debug, Default)]
pub struct VaultCredentialProvider {
    config: VaultConfig,
}

impl VaultCredentialProvider {
    /// Create a new `VaultCredentialProvider` instance.
    pub fn new(config: VaultConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for VaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let token_file_env = ctx.env_var_required(&self.config.token_file_env)?;
        let access_key_id_path = ctx.env_var_required(&self.config.access_key_id_path_env)?;
        let secret_access_key_path =
            ctx.env_var_required(&self.config.secret_access_key_path_env)?;
        let token_file = ctx.env_var_required(&token_file_env)?;

        let config = ConjurConfig::from_env(ctx)
            .map_err(|e| e.with_context("error loading conjur config"))?;
        debug!("loading access key from conjur {}", config.appliance_url);

        let client = ConjurClient::from_token_file(ctx, config, &token_file)
            .await
            .map_err(|e| e.with_context("error creating conjur client"))?;

        let access_key_id = client
            .retrieve_secret(ctx, &access_key_id_path)
            .await
            .map_err(|e| e.with_context("error retrieving access key id"))?;
        let secret_access_key = client
            .retrieve_secret(ctx, &secret_access_key_path)
            .await
            .map_err(|e| e.with_context("error retrieving secret access key"))?;

        Ok(Some(Credential::access_key(
            access_key_id,
            secret_access_key,
        )))
    }
}
