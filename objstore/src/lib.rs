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

//! Uniform object storage drivers.
//!
//! `objstore` bundles the driver contract from [`objstore_core`] with a
//! scheme keyed [`Registry`] of drivers and a process wide default
//! [`Context`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use objstore::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let storage = objstore::create_storage(
//!         "speedy",
//!         "https://bucket.example.com",
//!         "access_key",
//!         "secret_key",
//!     )?;
//!     storage.create().await?;
//!
//!     for obj in storage.list("logs/", "", 1000).await? {
//!         println!("{} {} {}", obj.key, obj.size, obj.mtime);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `default-context`: [`default_context`] and [`create_storage`], backed by `reqwest`
//! - `speedy`: the [`speedy`] driver, registered as `speedy`

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub use objstore_core::*;

mod registry;
pub use registry::{Registry, StorageFactory, DEFAULT_REGISTRY};

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::{create_storage, default_context};

#[cfg(feature = "speedy")]
pub mod speedy;
