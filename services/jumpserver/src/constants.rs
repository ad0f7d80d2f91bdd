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

//! Environment variable names and defaults used by the JumpServer signer.

/// Environment variable holding the base url of the secret broker / Conjur appliance.
pub const CONJUR_APPLIANCE_URL: &str = "CONJUR_APPLIANCE_URL";
/// Environment variable holding the Conjur account.
pub const CONJUR_ACCOUNT: &str = "CONJUR_ACCOUNT";

/// Access token file mounted by the broker sidecar.
pub const BROKER_ACCESS_TOKEN_PATH: &str = "/run/conjur/access-token";
/// Organization segment used in broker secret urls.
pub const BROKER_ORGANIZATION: &str = "lixiang";
/// Secret id of the access key id in the broker.
pub const BROKER_ACCESS_KEY_ID_PATH: &str =
    "Prd_Vault/authn/App_JMS-Tools_prd/IT_JumpServer_JMS-Tools/username";
/// Secret id of the secret access key in the broker.
pub const BROKER_SECRET_ACCESS_KEY_PATH: &str =
    "Prd_Vault/authn/App_JMS-Tools_prd/IT_JumpServer_JMS-Tools/password";

/// Environment variable naming the variable that holds the Conjur token file path.
pub const VAULT_TOKEN_FILE_ENV_NAME: &str = "ConjurEnvName";
/// Environment variable holding the secret id of the access key id.
pub const VAULT_ACCESS_KEY_ID_PATH: &str = "AKPath";
/// Environment variable holding the secret id of the secret access key.
pub const VAULT_SECRET_ACCESS_KEY_PATH: &str = "SKPath";

/// Headers covered by the signature unless configured otherwise.
pub const DEFAULT_SIGNED_HEADERS: [&str; 2] = ["(request-target)", "date"];
/// Algorithm name announced in the `Authorization` header.
pub const SIGNATURE_ALGORITHM: &str = "hmac-sha256";
