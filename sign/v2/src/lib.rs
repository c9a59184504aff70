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

//! Header based HMAC-SHA1 signing for objstore drivers.
//!
//! Many RESTful object stores accept the same "version 2" header signature
//! and only differ in the name written into `Authorization` and the prefix
//! of the vendor headers covered by the signature. [`SignName`] picks the
//! variant; drivers fix it at construction.
//!
//! ## String to sign
//!
//! ```text
//! METHOD\n
//! Content-MD5\n
//! Content-Type\n
//! Date\n
//! <vendor headers, lowercased and sorted, one "name:value\n" each>
//! <decoded path>[?<sorted sub-resources>]
//! ```
//!
//! The signature is `base64(hmac_sha1(secret_key, string_to_sign))`, sent as
//! `Authorization: <SignName> <access_key>:<signature>`.
//!
//! ## Example
//!
//! ```no_run
//! use objstore_core::{Context, Result, Signer};
//! use objstore_sign_v2::{RequestSigner, SignName, StaticCredentialProvider};
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("access_key", "secret_key"),
//!     RequestSigner::new(SignName::Aws),
//! );
//!
//! let mut parts = http::Request::put("https://example.com/bucket/")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts).await?;
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod credential;
pub use credential::Credential;

mod sign_name;
pub use sign_name::SignName;

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
