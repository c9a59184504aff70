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

use crate::constants::*;
use objstore_core::utils::Redact;
use objstore_core::Context;
use std::fmt::{Debug, Formatter};

/// Config carries the settings of a speedy driver.
#[derive(Clone, Default)]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPEEDY_ENDPOINT`]
    pub endpoint: Option<String>,
    /// `access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPEEDY_ACCESS_KEY`]
    pub access_key: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`SPEEDY_SECRET_KEY`]
    pub secret_key: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("access_key", &self.access_key.as_deref().map(Redact::from))
            .field("secret_key", &self.secret_key.as_deref().map(Redact::from))
            .finish()
    }
}

impl Config {
    /// Fill the unset fields from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.endpoint.is_none() {
            self.endpoint = ctx.env_var(SPEEDY_ENDPOINT);
        }
        if self.access_key.is_none() {
            self.access_key = ctx.env_var(SPEEDY_ACCESS_KEY);
        }
        if self.secret_key.is_none() {
            self.secret_key = ctx.env_var(SPEEDY_SECRET_KEY);
        }
        self
    }
}
