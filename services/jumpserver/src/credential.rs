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

use jmsapi_core::utils::Redact;
use jmsapi_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential used to authenticate JumpServer API requests.
#[derive(Clone)]
pub enum Credential {
    /// Pre-shared api token, sent as `Authorization: Token <value>`.
    Token(String),
    /// Access key pair used to compute an HMAC http signature.
    AccessKey {
        /// Access key id, announced as `keyId`.
        access_key_id: String,
        /// Secret access key, used as the HMAC key.
        secret_access_key: String,
    },
}

impl Credential {
    /// Create a token credential.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Create an access key credential.
    pub fn access_key(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self::AccessKey {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::Token(token) => f
                .debug_tuple("Token")
                .field(&Redact::from(token))
                .finish(),
            Credential::AccessKey {
                access_key_id,
                secret_access_key,
            } => f
                .debug_struct("AccessKey")
                .field("access_key_id", access_key_id)
                .field("secret_access_key", &Redact::from(secret_access_key))
                .finish(),
        }
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        match self {
            Credential::Token(token) => !token.is_empty(),
            Credential::AccessKey {
                access_key_id,
                secret_access_key,
            } => !access_key_id.is_empty() && !secret_access_key.is_empty(),
        }
    }
}
