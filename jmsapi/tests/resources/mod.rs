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

use crate::token_client;
use jmsapi::{
    AccountFilter, AssetFilter, ErrorKind, JmsClient, OperateLogFilter, SessionFilter,
};
use pretty_assertions::assert_eq;
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SESSION: &str = r#"{
    "id": "abc",
    "user": "Alice(alice)",
    "asset": "web-01(10.0.0.1)",
    "protocol": "ssh",
    "type": {"value": "normal", "label": "Normal"},
    "login_from": {"value": "WT", "label": "Web Terminal"},
    "remote_addr": "10.0.0.100",
    "comment": null,
    "terminal": {"id": "t1", "name": "koko", "type": "koko"},
    "is_finished": true,
    "command_amount": 3,
    "date_start": "2024/01/02 10:00:00 +0800",
    "date_end": null
}"#;

async fn jms(server: &MockServer) -> JmsClient {
    JmsClient::new(token_client(&server.uri()))
}

#[tokio::test]
async fn test_session_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/terminal/sessions/abc/"))
        .and(header("authorization", "Token abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SESSION))
        .expect(1)
        .mount(&server)
        .await;

    let session = jms(&server).await.sessions.get("abc").await.unwrap();

    assert_eq!(session.id, "abc");
    assert_eq!(session.login_from.value, "WT");
    assert_eq!(session.terminal.kind, "koko");
    assert_eq!(session.command_amount, 3);
    assert!(session.is_finished);
    assert!(session.date_end.is_none());
}

#[tokio::test]
async fn test_session_list_with_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/terminal/sessions/"))
        .and(query_param("user", "alice"))
        .and(query_param("is_finished", "false"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!("[{SESSION}]")))
        .expect(1)
        .mount(&server)
        .await;

    let sessions = jms(&server)
        .await
        .sessions
        .list(Some(&SessionFilter {
            user: Some("alice".to_string()),
            is_finished: Some(false),
            limit: Some(5),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].kind.label, "Normal");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("user=alice&is_finished=false&limit=5"));
}

#[tokio::test]
async fn test_asset_list_without_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/assets/assets/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"id": "a1", "name": "web-01", "address": "10.0.0.1",
                 "platform": {"id": 1, "name": "Linux"},
                 "protocols": [{"name": "ssh", "port": 22}],
                 "category": {"value": "host", "label": "Host"}},
                {"id": "a2", "name": "db-01", "address": "10.0.0.2", "domain": null}
            ]"#,
        ))
        .mount(&server)
        .await;

    let assets = jms(&server).await.assets.list(None).await.unwrap();

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].platform.name, "Linux");
    assert_eq!(assets[0].protocols[0].port, 22);
    assert_eq!(assets[1].name, "db-01");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_empty_filter_sends_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/assets/assets/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let assets = jms(&server)
        .await
        .assets
        .list(Some(&AssetFilter::default()))
        .await
        .unwrap();

    assert!(assets.is_empty());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_account_get_and_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/accounts/acc1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id": "acc1", "username": "root", "asset": {"id": "a1", "name": "web-01", "address": "10.0.0.1"},
                "secret_type": {"value": "password", "label": "Password"}, "privileged": true}"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/accounts/accounts/"))
        .and(query_param("asset_id", "a1"))
        .and(query_param("type", "linux"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let jms = jms(&server).await;

    let account = jms.accounts.get("acc1").await.unwrap();
    assert_eq!(account.username, "root");
    assert_eq!(account.asset.name, "web-01");
    assert_eq!(account.secret_type.value, "password");
    assert!(account.privileged);

    let accounts = jms
        .accounts
        .list(Some(&AccountFilter {
            asset_id: Some("a1".to_string()),
            kind: Some("linux".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();
    assert!(accounts.is_empty());
}

#[tokio::test]
async fn test_operate_logs_do_not_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/audits/operate-logs/"))
        .and(query_param("action", "delete"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/audits/operate-logs/log1/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    let jms = jms(&server).await;

    jms.operate_logs
        .list(Some(&OperateLogFilter {
            action: Some("delete".to_string()),
            ..Default::default()
        }))
        .await
        .unwrap();

    let err = jms.operate_logs.get("log1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServerStatus);
    assert_eq!(err.response_body(), Some("gone"));
}

#[test_case("sessions"; "sessions")]
#[test_case("assets"; "assets")]
#[test_case("accounts"; "accounts")]
#[test_case("users"; "users")]
#[test_case("operate_logs"; "operate logs")]
#[tokio::test]
async fn test_get_with_empty_id(resource: &str) {
    let server = MockServer::start().await;
    let jms = jms(&server).await;

    let err = match resource {
        "sessions" => jms.sessions.get("").await.map(|_| ()),
        "assets" => jms.assets.get("").await.map(|_| ()),
        "accounts" => jms.accounts.get("").await.map(|_| ()),
        "users" => jms.users.get("").await.map(|_| ()),
        _ => jms.operate_logs.get("").await,
    }
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(server.received_requests().await.unwrap().is_empty());
}
