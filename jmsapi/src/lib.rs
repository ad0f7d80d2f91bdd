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

//! Signed client for the JumpServer management API.
//!
//! [`Client`] builds JSON requests, signs them with the configured
//! authentication method and executes them. The resource wrappers in this
//! crate ([`Sessions`], [`Assets`], [`Accounts`], [`Users`], [`OperateLogs`])
//! are written against the [`JmsApi`] trait so they work with any
//! implementation of it.
//!
//! ## Example
//!
//! ```no_run
//! use jmsapi::{Config, JmsClient, SessionFilter};
//!
//! #[tokio::main]
//! async fn main() -> jmsapi::Result<()> {
//!     let client = jmsapi::Client::new(Config {
//!         endpoint: "https://jms.example.com".to_string(),
//!         token: Some("my-api-token".to_string()),
//!         ..Default::default()
//!     })?;
//!     let jms = JmsClient::new(client);
//!
//!     let filter = SessionFilter {
//!         user: Some("alice".to_string()),
//!         limit: Some(10),
//!         ..Default::default()
//!     };
//!     for session in jms.sessions.list(Some(&filter)).await? {
//!         println!("{} {}", session.id, session.asset);
//!     }
//!     Ok(())
//! }
//! ```

mod api;
pub use api::JmsApi;

mod client;
pub use client::Client;

mod config;
pub use config::{AuthMethod, Config};

mod context;
pub use context::default_context;

mod resources;
pub use resources::*;

pub mod utils;

pub use jmsapi_core::utils::QueryValues;
pub use jmsapi_core::{Context, Error, ErrorKind, Result};
pub use jmsapi_jumpserver::{BrokerConfig, VaultConfig};
