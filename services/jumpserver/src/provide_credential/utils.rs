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

use bytes::Bytes;
use http::header::AUTHORIZATION;
use http::{Method, StatusCode};
use jmsapi_core::{Context, Error, HttpSend, Result};
use log::debug;

/// Fetch a single secret value as plain text.
///
/// `token` is the base64 encoded access token, sent as
/// `Authorization: Token token="<token>"`. Requests go through `http` when
/// given, the context's client otherwise. Any status other than `200` is
/// reported as an invalid credential carrying the status and body.
pub(crate) async fn fetch_secret(
    ctx: &Context,
    http: Option<&dyn HttpSend>,
    url: &str,
    token: &str,
) -> Result<String> {
    debug!("fetching secret from {url}");

    let req = http::Request::builder()
        .method(Method::GET)
        .uri(url)
        .header(AUTHORIZATION, format!("Token token=\"{token}\""))
        .body(Bytes::new())
        .map_err(|e| Error::request_invalid(format!("invalid secret url {url}")).with_source(e))?;

    let resp = match http {
        Some(http) => http.http_send(req).await?,
        None => ctx.http_send(req).await?,
    };

    let (parts, body) = resp.into_parts();
    let body = String::from_utf8_lossy(&body).to_string();
    if parts.status != StatusCode::OK {
        return Err(Error::credential_invalid(format!(
            "request to {url} failed, status code:{} : {body}",
            parts.status.as_u16()
        )));
    }

    Ok(body)
}
