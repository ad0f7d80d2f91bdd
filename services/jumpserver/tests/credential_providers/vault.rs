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

use crate::{create_test_context, MockSecretServer};
use http::StatusCode;
use jmsapi_core::hash::base64_encode;
use jmsapi_core::{ErrorKind, ProvideCredential};
use jmsapi_jumpserver::{Credential, VaultConfig, VaultCredentialProvider};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use test_case::test_case;

fn token_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"conjur-token").unwrap();
    file
}

fn envs(token_path: &str) -> Vec<(&'static str, String)> {
    vec![
        ("ConjurEnvName", "CONJUR_AUTHN_TOKEN_FILE".to_string()),
        ("CONJUR_AUTHN_TOKEN_FILE", token_path.to_string()),
        ("AKPath", "Prd_Vault/jms/username".to_string()),
        ("SKPath", "Prd_Vault/jms/password".to_string()),
        ("CONJUR_APPLIANCE_URL", "https://conjur.local".to_string()),
        ("CONJUR_ACCOUNT", "prod".to_string()),
    ]
}

fn server() -> MockSecretServer {
    MockSecretServer::new(&[
        (
            "/secrets/prod/variable/Prd_Vault%2Fjms%2Fusername",
            StatusCode::OK,
            "AKID",
        ),
        (
            "/secrets/prod/variable/Prd_Vault%2Fjms%2Fpassword",
            StatusCode::OK,
            "SECRET",
        ),
    ])
}

#[tokio::test]
async fn test_vault_loads_access_key() {
    let file = token_file();
    let envs = envs(file.path().to_str().unwrap());
    let envs = envs.iter().map(|(k, v)| (*k, v.as_str())).collect::<Vec<_>>();
    let server = server();
    let ctx = create_test_context(&envs, server.clone());

    let cred = VaultCredentialProvider::default()
        .provide_credential(&ctx)
        .await
        .unwrap()
        .unwrap();

    assert!(matches!(
        cred,
        Credential::AccessKey { ref access_key_id, ref secret_access_key }
            if access_key_id == "AKID" && secret_access_key == "SECRET"
    ));

    let seen = server.seen();
    assert_eq!(seen.len(), 2);
    assert_eq!(
        seen[0].authorization,
        format!("Token token=\"{}\"", base64_encode(b"conjur-token"))
    );
}

#[tokio::test]
async fn test_vault_with_custom_env_names() {
    let file = token_file();
    let envs = [
        ("JMS_TOKEN_VAR", "MY_TOKEN_FILE"),
        ("MY_TOKEN_FILE", file.path().to_str().unwrap()),
        ("JMS_AK", "Prd_Vault/jms/username"),
        ("JMS_SK", "Prd_Vault/jms/password"),
        ("CONJUR_APPLIANCE_URL", "https://conjur.local"),
        ("CONJUR_ACCOUNT", "prod"),
    ];
    let ctx = create_test_context(&envs, server());

    let provider = VaultCredentialProvider::new(VaultConfig {
        token_file_env: "JMS_TOKEN_VAR".to_string(),
        access_key_id_path_env: "JMS_AK".to_string(),
        secret_access_key_path_env: "JMS_SK".to_string(),
    });

    assert!(provider.provide_credential(&ctx).await.unwrap().is_some());
}

#[test_case("ConjurEnvName"; "token file variable name")]
#[test_case("AKPath"; "access key id path")]
#[test_case("SKPath"; "secret access key path")]
#[test_case("CONJUR_AUTHN_TOKEN_FILE"; "token file path")]
#[test_case("CONJUR_ACCOUNT"; "conjur account")]
#[tokio::test]
async fn test_vault_missing_env(missing: &str) {
    let file = token_file();
    let envs = envs(file.path().to_str().unwrap());
    let envs = envs
        .iter()
        .filter(|(k, _)| *k != missing)
        .map(|(k, v)| (*k, v.as_str()))
        .collect::<Vec<_>>();
    let server = server();
    let ctx = create_test_context(&envs, server.clone());

    let err = VaultCredentialProvider::default()
        .provide_credential(&ctx)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigMissing);
    assert!(err.to_string().contains(missing), "{err}");
    assert!(server.seen().is_empty());
}

#[tokio::test]
async fn test_vault_retrieval_failure() {
    let file = token_file();
    let envs = envs(file.path().to_str().unwrap());
    let envs = envs
        .iter()
        .map(|(k, v)| match *k {
            "SKPath" => (*k, "Prd_Vault/jms/unknown"),
            _ => (*k, v.as_str()),
        })
        .collect::<Vec<_>>();
    let ctx = create_test_context(&envs, server());

    let err = VaultCredentialProvider::default()
        .provide_credential(&ctx)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(
        err.to_string().starts_with("error retrieving secret access key"),
        "{err}"
    );
}
