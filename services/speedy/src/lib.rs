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

//! Speedy object storage driver.
//!
//! Speedy speaks a small subset of the S3 REST protocol: bucket creation and
//! paged listing, signed with the `AWS` flavor of the HMAC-SHA1 header
//! signature from [`objstore_sign_v2`].
//!
//! ## Endpoint
//!
//! The endpoint names both the bucket and the service, as in
//! `https://<bucket>.<service host>`. Requests are sent path style to the
//! service host:
//!
//! - create: `PUT <scheme>://<service host>/<bucket>/`
//! - list: `GET <scheme>://<service host>/?marker=..&max-keys=..&prefix=..`
//!
//! ## Example
//!
//! ```no_run
//! use objstore_core::{Context, ObjectStorage, OsEnv, Result};
//! use objstore_http_send_reqwest::ReqwestHttpSend;
//! use objstore_speedy::Speedy;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!
//!     let storage = Speedy::new(ctx, "https://bucket.example.com", "access_key", "secret_key")?;
//!     storage.create().await?;
//!
//!     let mut marker = String::new();
//!     loop {
//!         let page = storage.list("logs/", &marker, 1000).await?;
//!         let Some(last) = page.last() else { break };
//!         marker = last.key.clone();
//!         for obj in &page {
//!             println!("{} {}", obj.key, obj.size);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! [`Speedy::from_config`] falls back to env for every unset field:
//!
//! ```bash
//! export SPEEDY_ENDPOINT=https://bucket.example.com
//! export SPEEDY_ACCESS_KEY=your-access-key
//! export SPEEDY_SECRET_KEY=your-secret-key
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod backend;
pub use backend::Speedy;

mod config;
pub use config::Config;

pub mod constants;

mod endpoint;
pub use endpoint::Endpoint;

mod list;
