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

use super::{detail_endpoint, get, list_endpoint, LabeledValue, NamedRef};
use crate::JmsApi;
use jmsapi_core::Result;
use serde::{Deserialize, Serialize};

const ASSETS_PATH: &str = "/api/v1/assets/assets/";

/// An asset, a host or database reachable through JumpServer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub address: String,
    pub comment: String,
    pub domain: Option<serde_json::Value>,
    pub platform: AssetPlatform,
    pub nodes: Vec<NamedRef>,
    pub labels: Vec<serde_json::Value>,
    pub protocols: Vec<AssetProtocol>,
    pub nodes_display: Vec<String>,
    pub accounts: Vec<AssetAccount>,
    pub category: LabeledValue,
    #[serde(rename = "type")]
    pub kind: LabeledValue,
    pub connectivity: LabeledValue,
    /// Automation settings, kept as returned.
    pub auto_config: serde_json::Value,
    pub created_by: String,
    pub org_id: String,
    pub org_name: String,
    pub gathered_info: serde_json::Value,
    pub spec_info: serde_json::Value,
    pub is_active: bool,
    pub date_verified: Option<String>,
    pub date_created: String,
}

/// Platform of an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPlatform {
    pub id: i64,
    pub name: String,
}

/// A protocol enabled on an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetProtocol {
    pub name: String,
    pub port: u16,
}

/// An account as embedded in an asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetAccount {
    pub id: String,
    pub name: String,
    pub username: String,
    pub secret_type: LabeledValue,
    pub created_by: String,
    pub comment: String,
    pub su_from: Option<serde_json::Value>,
    pub version: i64,
    pub source: LabeledValue,
    pub source_id: String,
    pub connectivity: LabeledValue,
    pub privileged: bool,
    pub is_active: bool,
    pub date_created: String,
    pub date_updated: String,
}

/// Query parameters for [`Assets::list`], unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gather_facts_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_secret_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_account_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_account_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gather_accounts_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Assets, `/api/v1/assets/assets/`.
#[derive(Debug, Clone)]
pub struct Assets<A> {
    api: A,
}

impl<A: JmsApi> Assets<A> {
    /// Create a new `Assets` on top of `api`.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Get an asset by id.
    pub async fn get(&self, id: &str) -> Result<Asset> {
        let endpoint = detail_endpoint(&self.api, ASSETS_PATH, "asset", id)?;
        get(&self.api, &endpoint).await
    }

    /// List assets matching `filter`.
    pub async fn list(&self, filter: Option<&AssetFilter>) -> Result<Vec<Asset>> {
        let endpoint = list_endpoint(&self.api, ASSETS_PATH, filter)?;
        get(&self.api, &endpoint).await
    }
}
