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

//! JumpServer API signing implementation for jmsapi.
//!
//! This crate signs requests for the JumpServer management API, either with
//! a pre-shared api token or with an HMAC http signature computed from an
//! access key pair fetched from a secret broker or a Conjur appliance.
//!
//! ## Example
//!
//! ```no_run
//! use jmsapi_core::{Context, OsEnv, Signer};
//! use jmsapi_file_read_tokio::TokioFileRead;
//! use jmsapi_http_send_reqwest::ReqwestHttpSend;
//! use jmsapi_jumpserver::{BrokerCredentialProvider, BrokerConfig, RequestSigner};
//!
//! #[tokio::main]
//! async fn main() -> jmsapi_core::Result<()> {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let loader = BrokerCredentialProvider::new(BrokerConfig::default())
//!         .with_http_send(ReqwestHttpSend::danger_accept_invalid_certs()?);
//!     let signer = Signer::new(ctx, loader, RequestSigner::new());
//!
//!     let mut req = http::Request::get("https://jms.example.com/api/v1/users/users/")
//!         .body(())?
//!         .into_parts()
//!         .0;
//!     signer.sign(&mut req).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod constants;

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{build_string_to_sign, RequestSigner};

mod provide_credential;
pub use provide_credential::*;

mod conjur;
pub use conjur::{ConjurClient, ConjurConfig};
