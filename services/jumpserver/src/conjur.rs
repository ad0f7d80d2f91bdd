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

//! A minimal client for the Conjur secrets api.

use crate::constants::{CONJUR_ACCOUNT, CONJUR_APPLIANCE_URL};
use crate::provide_credential::fetch_secret;
use jmsapi_core::hash::base64_encode;
use jmsapi_core::utils::Redact;
use jmsapi_core::{Context, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::{Debug, Formatter};

/// Characters kept as is in a variable id, everything else is escaped,
/// including `/`.
const VARIABLE_ID_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Connection settings of a Conjur appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConjurConfig {
    /// Base url of the appliance, without trailing `/`.
    pub appliance_url: String,
    /// Conjur account.
    pub account: String,
}

impl ConjurConfig {
    /// Load config from `CONJUR_APPLIANCE_URL` and `CONJUR_ACCOUNT`.
    pub fn from_env(ctx: &Context) -> Result<Self> {
        let appliance_url = ctx.env_var_required(CONJUR_APPLIANCE_URL)?;
        let account = ctx.env_var_required(CONJUR_ACCOUNT)?;

        Ok(Self {
            appliance_url: appliance_url.trim_end_matches('/').to_string(),
            account,
        })
    }
}

/// Client authenticated with an access token file.
#[derive(Clone)]
pub struct ConjurClient {
    config: ConjurConfig,
    token: String,
}

impl Debug for ConjurClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConjurClient")
            .field("config", &self.config)
            .field("token", &Redact::from(&self.token))
            .finish()
    }
}

impl ConjurClient {
    /// Create a client from the token stored in `path`.
    pub async fn from_token_file(ctx: &Context, config: ConjurConfig, path: &str) -> Result<Self> {
        let token = ctx.file_read(path).await?;

        Ok(Self {
            config,
            token: base64_encode(&token),
        })
    }

    /// Url of a variable, the id is percent encoded as a single segment.
    pub fn variable_url(&self, id: &str) -> String {
        format!(
            "{}/secrets/{}/variable/{}",
            self.config.appliance_url,
            self.config.account,
            utf8_percent_encode(id, VARIABLE_ID_ENCODE_SET)
        )
    }

    /// Retrieve the value of a variable.
    pub async fn retrieve_secret(&self, ctx: &Context, id: &str) -> Result<String> {
        fetch_secret(ctx, None, &self.variable_url(id), &self.token).await
    }
}
