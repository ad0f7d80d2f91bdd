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

use crate::{broker_client, mount_broker, signed};
use http::header::{AUTHORIZATION, DATE};
use http::Method;
use jmsapi::utils::combine_url;
use jmsapi::{JmsApi, JmsClient, UserFilter};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_broker_signed_request() {
    let server = MockServer::start().await;
    mount_broker(&server, 200).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/users/"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _token) = broker_client(&server, true);
    let req = client
        .make_request(
            Method::GET,
            &combine_url(&server.uri(), "/api/v1/users/users/"),
            None::<&()>,
        )
        .await
        .unwrap();

    assert!(req.headers().contains_key(DATE));
    let authorization = req.headers()[AUTHORIZATION].to_str().unwrap();
    assert!(
        authorization.starts_with(
            "Signature keyId=\"test-ak\",algorithm=\"hmac-sha256\",headers=\"(request-target) date\","
        ),
        "{authorization}"
    );

    let mut users = Vec::<serde_json::Value>::new();
    client.do_request(req, Some(&mut users)).await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_broker_signature_covers_list_filter() {
    let server = MockServer::start().await;
    mount_broker(&server, 200).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/users/"))
        .and(query_param("username", "alice"))
        .and(query_param("is_active", "true"))
        .and(query_param("limit", "10"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"id":"u1","username":"alice","mfa_level":{"value":0,"label":"Disabled"}}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _token) = broker_client(&server, false);
    let jms = JmsClient::new(client);

    let users = jms
        .users
        .list(Some(&UserFilter {
            username: Some("alice".to_string()),
            is_active: Some(true),
            limit: Some(10),
            ..Default::default()
        }))
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "alice");
    assert_eq!(users[0].mfa_level.label, "Disabled");
}

#[tokio::test]
async fn test_broker_credentials_are_fetched_per_request() {
    let server = MockServer::start().await;
    mount_broker(&server, 200).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/audits/operate-logs/"))
        .and(signed())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let (client, _token) = broker_client(&server, false);
    let jms = JmsClient::new(client);
    jms.operate_logs.list(None).await.unwrap();
    jms.operate_logs.list(None).await.unwrap();

    let broker_calls = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path().starts_with("/secrets/"))
        .count();
    assert_eq!(broker_calls, 4);
}
