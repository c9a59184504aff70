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

//! Core components shared by objstore drivers.
//!
//! This crate defines the contract every driver implements and the narrow
//! interfaces drivers consume from their environment.
//!
//! ## Overview
//!
//! - **Context**: holds the http transport ([`HttpSend`]) and environment ([`Env`]) shared by all drivers
//! - **ObjectStorage**: the uniform create/list contract, returning [`Object`] entries
//! - **Signer**: pairs a credential provider ([`ProvideCredential`]) with a signing algorithm ([`SignRequest`])
//! - **parse_error**: turns a non-success response into a structured [`Error`]
//!
//! ## Example
//!
//! ```no_run
//! use objstore_core::{Context, ObjectStorage, Result};
//!
//! async fn print_page(storage: &dyn ObjectStorage) -> Result<()> {
//!     storage.create().await?;
//!     for obj in storage.list("logs/", "", 1000).await? {
//!         println!("{} {} {}", obj.key, obj.size, obj.mtime);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers used by signers
//! - [`time`]: http-date formatting and RFC3339 parsing
//! - [`utils`]: secret redaction for `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod error_response;
pub use error_response::parse_error;

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};

mod signer;
pub use signer::Signer;

mod storage;
pub use storage::{Object, ObjectStorage};
