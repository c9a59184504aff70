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

use objstore_sign_v2::SignName;

/// Scheme name the driver is registered under.
pub const SCHEME: &str = "speedy";

/// Signature variant expected by the service.
pub const SIGN_NAME: SignName = SignName::Aws;

/// Upper bound for a single listing page.
pub const MAX_LIST_KEYS: i64 = 100_000;

/// Marker objects representing empty directories end with this suffix.
pub const DIR_FLAG_SUFFIX: &str = "/.speedycloud_dir_flag";

// Env values used by speedy.

/// Env value for the endpoint, `<scheme>://<bucket>.<service host>`.
pub const SPEEDY_ENDPOINT: &str = "SPEEDY_ENDPOINT";
/// Env value for the access key.
pub const SPEEDY_ACCESS_KEY: &str = "SPEEDY_ACCESS_KEY";
/// Env value for the secret key.
pub const SPEEDY_SECRET_KEY: &str = "SPEEDY_SECRET_KEY";
