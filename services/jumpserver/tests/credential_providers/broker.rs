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

use crate::{create_test_context, MockSecretServer, SeenRequest};
use http::StatusCode;
use jmsapi_core::hash::base64_encode;
use jmsapi_core::{ErrorKind, ProvideCredential};
use jmsapi_jumpserver::{BrokerConfig, BrokerCredentialProvider, Credential};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const TOKEN: &str = r#"{"protected":"x","payload":"y","signature":"z"}"#;

fn token_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TOKEN.as_bytes()).unwrap();
    file
}

fn config(token_path: &str) -> BrokerConfig {
    BrokerConfig {
        token_path: token_path.to_string(),
        organization: "acme".to_string(),
        access_key_id_path: "jms/username".to_string(),
        secret_access_key_path: "jms/password".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_broker_loads_access_key() {
    let file = token_file();
    let server = MockSecretServer::new(&[
        ("/secrets/acme/variable/jms/username", StatusCode::OK, "AKID"),
        ("/secrets/acme/variable/jms/password", StatusCode::OK, "SECRET"),
    ]);
    let ctx = create_test_context(
        &[("CONJUR_APPLIANCE_URL", "https://broker.local")],
        server.clone(),
    );

    let cred = BrokerCredentialProvider::new(config(file.path().to_str().unwrap()))
        .provide_credential(&ctx)
        .await
        .unwrap()
        .unwrap();

    match cred {
        Credential::AccessKey {
            access_key_id,
            secret_access_key,
        } => {
            assert_eq!(access_key_id, "AKID");
            assert_eq!(secret_access_key, "SECRET");
        }
        other => panic!("unexpected credential {other:?}"),
    }

    let authorization = format!("Token token=\"{}\"", base64_encode(TOKEN.as_bytes()));
    assert_eq!(
        server.seen(),
        vec![
            SeenRequest {
                uri: "https://broker.local/secrets/acme/variable/jms/username".to_string(),
                authorization: authorization.clone(),
            },
            SeenRequest {
                uri: "https://broker.local/secrets/acme/variable/jms/password".to_string(),
                authorization,
            },
        ]
    );
}

#[tokio::test]
async fn test_broker_prefers_dedicated_client() {
    let file = token_file();
    let context_server = MockSecretServer::new(&[]);
    let dedicated = MockSecretServer::new(&[
        ("/secrets/acme/variable/jms/username", StatusCode::OK, "AKID"),
        ("/secrets/acme/variable/jms/password", StatusCode::OK, "SECRET"),
    ]);
    let ctx = create_test_context(
        &[("CONJUR_APPLIANCE_URL", "https://broker.local")],
        context_server.clone(),
    );

    let cred = BrokerCredentialProvider::new(config(file.path().to_str().unwrap()))
        .with_http_send(dedicated.clone())
        .provide_credential(&ctx)
        .await
        .unwrap();

    assert!(cred.is_some());
    assert_eq!(dedicated.seen().len(), 2);
    assert!(context_server.seen().is_empty());
}

#[tokio::test]
async fn test_broker_uses_configured_endpoint() {
    let file = token_file();
    let server = MockSecretServer::new(&[
        ("/secrets/acme/variable/jms/username", StatusCode::OK, "AKID"),
        ("/secrets/acme/variable/jms/password", StatusCode::OK, "SECRET"),
    ]);
    let ctx = create_test_context(&[], server.clone());

    let provider = BrokerCredentialProvider::new(BrokerConfig {
        endpoint: Some("https://other.local".to_string()),
        ..config(file.path().to_str().unwrap())
    });
    provider.provide_credential(&ctx).await.unwrap();

    assert!(server.seen()[0].uri.starts_with("https://other.local/"));
}

#[tokio::test]
async fn test_broker_without_token_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("access-token");
    let server = MockSecretServer::new(&[]);
    let ctx = create_test_context(
        &[("CONJUR_APPLIANCE_URL", "https://broker.local")],
        server.clone(),
    );

    let err = BrokerCredentialProvider::new(config(missing.to_str().unwrap()))
        .provide_credential(&ctx)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigMissing);
    assert!(server.seen().is_empty());
}

#[tokio::test]
async fn test_broker_without_endpoint_env() {
    let file = token_file();
    let server = MockSecretServer::new(&[]);
    let ctx = create_test_context(&[], server.clone());

    let err = BrokerCredentialProvider::new(config(file.path().to_str().unwrap()))
        .provide_credential(&ctx)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigMissing);
    assert!(err.to_string().contains("CONJUR_APPLIANCE_URL"), "{err}");
    assert!(server.seen().is_empty());
}

#[tokio::test]
async fn test_broker_secret_error_carries_status_and_body() {
    let file = token_file();
    let server = MockSecretServer::new(&[
        ("/secrets/acme/variable/jms/username", StatusCode::OK, "AKID"),
        (
            "/secrets/acme/variable/jms/password",
            StatusCode::FORBIDDEN,
            "token expired",
        ),
    ]);
    let ctx = create_test_context(
        &[("CONJUR_APPLIANCE_URL", "https://broker.local")],
        server.clone(),
    );

    let err = BrokerCredentialProvider::new(config(file.path().to_str().unwrap()))
        .provide_credential(&ctx)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    let message = err.to_string();
    assert!(message.starts_with("get secret access key"), "{message}");
    assert!(message.contains("403"), "{message}");
    assert!(message.contains("token expired"), "{message}");
}
