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

use super::{detail_endpoint, get, list_endpoint, LabeledValue};
use crate::JmsApi;
use jmsapi_core::Result;
use serde::{Deserialize, Serialize};

const ACCOUNTS_PATH: &str = "/api/v1/accounts/accounts/";

/// An account on an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub username: String,
    pub asset: AccountAsset,
    pub secret_type: LabeledValue,
    pub has_secret: bool,
    pub privileged: bool,
    pub is_active: bool,
    pub su_from: Option<serde_json::Value>,
    pub version: i64,
    pub source: LabeledValue,
    pub source_id: String,
    pub connectivity: LabeledValue,
    pub comment: String,
    pub created_by: String,
    pub org_id: String,
    pub org_name: String,
    pub date_created: String,
    pub date_updated: String,
}

/// The asset an account belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAsset {
    pub id: String,
    pub name: String,
    pub address: String,
    pub platform: serde_json::Value,
}

/// Query parameters for [`Accounts::list`], unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_secret: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Accounts, `/api/v1/accounts/accounts/`.
#[derive(Debug, Clone)]
pub struct Accounts<A> {
    api: A,
}

impl<A: JmsApi> Accounts<A> {
    /// Create a new `Accounts` on top of `api`.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Get an account by id.
    pub async fn get(&self, id: &str) -> Result<Account> {
        let endpoint = detail_endpoint(&self.api, ACCOUNTS_PATH, "account", id)?;
        get(&self.api, &endpoint).await
    }

    /// List accounts matching `filter`.
    pub async fn list(&self, filter: Option<&AccountFilter>) -> Result<Vec<Account>> {
        let endpoint = list_endpoint(&self.api, ACCOUNTS_PATH, filter)?;
        get(&self.api, &endpoint).await
    }
}
