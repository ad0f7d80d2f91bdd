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

const SESSIONS_PATH: &str = "/api/v1/terminal/sessions/";

/// A terminal session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub id: String,
    pub user: String,
    pub asset: String,
    pub user_id: String,
    pub asset_id: String,
    pub account: String,
    pub account_id: String,
    pub protocol: String,
    #[serde(rename = "type")]
    pub kind: LabeledValue,
    pub login_from: LabeledValue,
    pub remote_addr: String,
    pub comment: Option<String>,
    pub terminal_display: String,
    pub is_locked: bool,
    pub command_amount: i64,
    pub terminal: SessionTerminal,
    pub org_id: String,
    pub org_name: String,
    pub is_success: bool,
    pub is_finished: bool,
    pub has_replay: bool,
    pub has_command: bool,
    pub can_replay: bool,
    pub can_join: bool,
    pub can_terminate: bool,
    pub date_start: String,
    pub date_end: Option<String>,
}

/// The terminal component serving a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionTerminal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Query parameters for [`Sessions::list`], unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_addr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_finished: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Terminal sessions, `/api/v1/terminal/sessions/`.
#[derive(Debug, Clone)]
pub struct Sessions<A> {
    api: A,
}

impl<A: JmsApi> Sessions<A> {
    /// Create a new `Sessions` on top of `api`.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Get a session by id.
    pub async fn get(&self, id: &str) -> Result<Session> {
        let endpoint = detail_endpoint(&self.api, SESSIONS_PATH, "session", id)?;
        get(&self.api, &endpoint).await
    }

    /// List sessions matching `filter`.
    pub async fn list(&self, filter: Option<&SessionFilter>) -> Result<Vec<Session>> {
        let endpoint = list_endpoint(&self.api, SESSIONS_PATH, filter)?;
        get(&self.api, &endpoint).await
    }
}
