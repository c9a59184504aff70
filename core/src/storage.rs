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

use crate::Result;
use std::fmt::{Debug, Display};

/// Object is a single entry returned by a listing.
///
/// Timestamps are whole seconds since the unix epoch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    /// Full key of the object inside the bucket.
    pub key: String,
    /// Size in bytes.
    pub size: i64,
    /// Last modified time.
    pub mtime: i64,
    /// Creation time. Backends without a separate creation time report `mtime`.
    pub ctime: i64,
}

/// ObjectStorage is the uniform contract every driver implements.
///
/// `Display` renders a human readable identifier such as `speedy://example.com`,
/// used for logging only.
#[async_trait::async_trait]
pub trait ObjectStorage: Debug + Display + Send + Sync + 'static {
    /// Create the bucket this driver points at.
    ///
    /// Creating a bucket that already exists succeeds.
    async fn create(&self) -> Result<()>;

    /// List at most `limit` objects whose keys start with `prefix` and sort
    /// after `marker`, in the order the service returns them.
    async fn list(&self, prefix: &str, marker: &str, limit: i64) -> Result<Vec<Object>>;
}
