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

const USERS_PATH: &str = "/api/v1/users/users/";

/// A JumpServer user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub wechat: String,
    pub phone: Option<String>,
    pub mfa_level: LabeledValue<i64>,
    pub source: LabeledValue,
    pub wecom_id: Option<String>,
    pub dingtalk_id: Option<String>,
    pub feishu_id: Option<String>,
    pub created_by: String,
    pub updated_by: String,
    pub comment: String,
    pub is_superuser: bool,
    pub is_org_admin: bool,
    pub avatar_url: String,
    pub groups: Vec<serde_json::Value>,
    pub system_roles: Vec<RoleRef>,
    pub org_roles: Vec<RoleRef>,
    pub password_strategy: LabeledValue,
    pub is_service_account: bool,
    pub is_valid: bool,
    pub is_expired: bool,
    pub is_active: bool,
    pub is_otp_secret_key_bound: bool,
    pub can_public_key_auth: bool,
    pub mfa_enabled: bool,
    pub need_update_password: bool,
    pub mfa_force_enabled: bool,
    pub is_first_login: bool,
    pub login_blocked: bool,
    pub date_expired: String,
    pub date_joined: String,
    pub last_login: Option<String>,
    pub date_updated: String,
    pub date_password_last_updated: String,
}

/// A role granted to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleRef {
    pub id: String,
    pub name: String,
    pub display_name: String,
}

/// Query parameters for [`Users::list`], unset fields are not sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_roles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_roles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Users, `/api/v1/users/users/`.
#[derive(Debug, Clone)]
pub struct Users<A> {
    api: A,
}

impl<A: JmsApi> Users<A> {
    /// Create a new `Users` on top of `api`.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Get a user by id.
    pub async fn get(&self, id: &str) -> Result<User> {
        let endpoint = detail_endpoint(&self.api, USERS_PATH, "user", id)?;
        get(&self.api, &endpoint).await
    }

    /// List users matching `filter`.
    pub async fn list(&self, filter: Option<&UserFilter>) -> Result<Vec<User>> {
        let endpoint = list_endpoint(&self.api, USERS_PATH, filter)?;
        get(&self.api, &endpoint).await
    }
}
