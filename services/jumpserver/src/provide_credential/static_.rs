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

use crate::Credential;
use async_trait::async_trait;
use jmsapi_core::{Context, ProvideCredential, Result};

/// StaticTokenCredentialProvider always returns the pre-shared api token it
/// was created with.
#[derive(Debug)]
pub struct StaticTokenCredentialProvider {
    credential: Credential,
}

impl StaticTokenCredentialProvider {
    /// Create a new StaticTokenCredentialProvider with the given api token.
    pub fn new(token: &str) -> Self {
        Self {
            credential: Credential::token(token),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticTokenCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
