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

use super::{detail_endpoint, get_without_result, list_endpoint};
use crate::JmsApi;
use jmsapi_core::Result;
use serde::Serialize;

const OPERATE_LOGS_PATH: &str = "/api/v1/audits/operate-logs/";

/// Query parameters for [`OperateLogs::list`], unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OperateLogFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Operate logs, `/api/v1/audits/operate-logs/`.
///
/// Responses are checked for their status only, bodies are not decoded.
#[derive(Debug, Clone)]
pub struct OperateLogs<A> {
    api: A,
}

impl<A: JmsApi> OperateLogs<A> {
    /// Create a new `OperateLogs` on top of `api`.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetch an operate log by id.
    pub async fn get(&self, id: &str) -> Result<()> {
        let endpoint = detail_endpoint(&self.api, OPERATE_LOGS_PATH, "operate log", id)?;
        get_without_result(&self.api, &endpoint).await
    }

    /// Fetch operate logs matching `filter`.
    pub async fn list(&self, filter: Option<&OperateLogFilter>) -> Result<()> {
        let endpoint = list_endpoint(&self.api, OPERATE_LOGS_PATH, filter)?;
        get_without_result(&self.api, &endpoint).await
    }
}
