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

mod sessions;
pub use sessions::{Session, SessionFilter, SessionTerminal, Sessions};

mod assets;
pub use assets::{Asset, AssetAccount, AssetFilter, AssetPlatform, AssetProtocol, Assets};

mod accounts;
pub use accounts::{Account, AccountAsset, AccountFilter, Accounts};

mod users;
pub use users::{RoleRef, User, UserFilter, Users};

mod audits;
pub use audits::{OperateLogFilter, OperateLogs};

use crate::utils::combine_url;
use crate::{Client, JmsApi};
use http::Method;
use jmsapi_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A choice field rendered by JumpServer as `{"value": ..., "label": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabeledValue<T = String> {
    /// Machine readable value.
    pub value: T,
    /// Human readable label.
    pub label: String,
}

/// A reference to another object by id and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    /// Object id.
    pub id: String,
    /// Object name.
    pub name: String,
}

/// All resources over one shared api.
#[derive(Debug, Clone)]
pub struct JmsClient<A = Client> {
    /// Terminal sessions.
    pub sessions: Sessions<A>,
    /// Assets.
    pub assets: Assets<A>,
    /// Accounts.
    pub accounts: Accounts<A>,
    /// Users.
    pub users: Users<A>,
    /// Operate logs.
    pub operate_logs: OperateLogs<A>,
}

impl<A: JmsApi + Clone> JmsClient<A> {
    /// Create every resource on top of `api`.
    pub fn new(api: A) -> Self {
        Self {
            sessions: Sessions::new(api.clone()),
            assets: Assets::new(api.clone()),
            accounts: Accounts::new(api.clone()),
            users: Users::new(api.clone()),
            operate_logs: OperateLogs::new(api),
        }
    }
}

fn detail_endpoint(api: &impl JmsApi, path: &str, kind: &str, id: &str) -> Result<String> {
    if id.is_empty() {
        return Err(Error::request_invalid(format!("{kind} id can not be empty")));
    }

    Ok(combine_url(api.get_endpoint(), &format!("{path}{id}/")))
}

/// Filters become part of the endpoint before the request is signed, so
/// the signed `(request-target)` covers them.
fn list_endpoint<F: Serialize>(api: &impl JmsApi, path: &str, filter: Option<&F>) -> Result<String> {
    let endpoint = combine_url(api.get_endpoint(), path);
    let Some(filter) = filter else {
        return Ok(endpoint);
    };

    let query = serde_urlencoded::to_string(filter).map_err(|e| {
        Error::request_encode(format!("failed to encode filter: {e}")).with_source(e)
    })?;
    if query.is_empty() {
        Ok(endpoint)
    } else {
        Ok(format!("{endpoint}?{query}"))
    }
}

async fn get<A, T>(api: &A, endpoint: &str) -> Result<T>
where
    A: JmsApi,
    T: DeserializeOwned + Default + Send,
{
    let req = api.make_request(Method::GET, endpoint, None::<&()>).await?;

    let mut data = T::default();
    api.do_request(req, Some(&mut data)).await?;
    Ok(data)
}

async fn get_without_result<A: JmsApi>(api: &A, endpoint: &str) -> Result<()> {
    let req = api.make_request(Method::GET, endpoint, None::<&()>).await?;
    api.do_request(req, None::<&mut ()>).await
}
