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

use crate::{Context, ObjectStorage, OsEnv, Result, DEFAULT_REGISTRY};
use objstore_http_send_reqwest::ReqwestHttpSend;
use once_cell::sync::Lazy;

static DEFAULT_CONTEXT: Lazy<Context> = Lazy::new(|| {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
});

/// Process wide context with a shared reqwest client and the OS env.
///
/// Clones share the same client, so connections are pooled across drivers.
pub fn default_context() -> Context {
    DEFAULT_CONTEXT.clone()
}

/// Build a driver by scheme from [`DEFAULT_REGISTRY`] with [`default_context`].
///
/// Unknown schemes and malformed endpoints are `ConfigInvalid` errors.
pub fn create_storage(
    scheme: &str,
    endpoint: &str,
    access_key: &str,
    secret_key: &str,
) -> Result<Box<dyn ObjectStorage>> {
    DEFAULT_REGISTRY.build(&default_context(), scheme, endpoint, access_key, secret_key)
}
