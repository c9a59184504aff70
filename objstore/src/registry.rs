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

use crate::{Context, Error, ObjectStorage, Result};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// StorageFactory builds a driver from a context, an endpoint and a static
/// key pair.
pub type StorageFactory = fn(
    ctx: &Context,
    endpoint: &str,
    access_key: &str,
    secret_key: &str,
) -> Result<Box<dyn ObjectStorage>>;

/// Registry with every driver enabled by crate features.
pub static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::default);

/// Registry maps scheme names to driver factories.
///
/// [`Registry::default`] holds the drivers enabled by crate features, while
/// [`Registry::new`] starts empty.
#[derive(Clone)]
pub struct Registry {
    factories: HashMap<String, StorageFactory>,
}

impl Debug for Registry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("schemes", &self.schemes())
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();
        #[cfg(feature = "speedy")]
        registry.register(crate::speedy::constants::SCHEME, crate::speedy::new_storage);
        registry
    }
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register `factory` under `scheme`, returning the factory it replaced.
    pub fn register(&mut self, scheme: &str, factory: StorageFactory) -> Option<StorageFactory> {
        self.factories.insert(scheme.to_string(), factory)
    }

    /// Get the factory registered under `scheme`.
    pub fn get(&self, scheme: &str) -> Option<StorageFactory> {
        self.factories.get(scheme).copied()
    }

    /// Registered schemes in sorted order.
    pub fn schemes(&self) -> Vec<&str> {
        let mut schemes: Vec<_> = self.factories.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        schemes
    }

    /// Build a driver for `scheme`.
    pub fn build(
        &self,
        ctx: &Context,
        scheme: &str,
        endpoint: &str,
        access_key: &str,
        secret_key: &str,
    ) -> Result<Box<dyn ObjectStorage>> {
        let factory = self.get(scheme).ok_or_else(|| {
            Error::config_invalid(format!("unknown storage scheme: {scheme}"))
                .with_context(format!("known schemes: {}", self.schemes().join(", ")))
        })?;

        let storage = factory(ctx, endpoint, access_key, secret_key)?;
        debug!("built storage {storage} for scheme {scheme}");
        Ok(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Object};
    use std::fmt::Display;

    #[derive(Debug)]
    struct MemoryStorage(String);

    impl Display for MemoryStorage {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "memory://{}", self.0)
        }
    }

    #[async_trait::async_trait]
    impl ObjectStorage for MemoryStorage {
        async fn create(&self) -> Result<()> {
            Ok(())
        }

        async fn list(&self, _prefix: &str, _marker: &str, _limit: i64) -> Result<Vec<Object>> {
            Ok(vec![])
        }
    }

    fn memory(_: &Context, endpoint: &str, _: &str, _: &str) -> Result<Box<dyn ObjectStorage>> {
        Ok(Box::new(MemoryStorage(endpoint.to_string())))
    }

    #[test]
    fn test_register_and_build() {
        let mut registry = Registry::new();
        assert!(registry.schemes().is_empty());
        assert!(registry.register("memory", memory).is_none());
        assert!(registry.register("memory", memory).is_some());

        let storage = registry
            .build(&Context::new(), "memory", "local", "", "")
            .unwrap();
        assert_eq!(storage.to_string(), "memory://local");
    }

    #[test]
    fn test_unknown_scheme() {
        let mut registry = Registry::new();
        registry.register("memory", memory);

        let err = registry
            .build(&Context::new(), "ftp", "ftp://example.com", "", "")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context(), &["known schemes: memory".to_string()]);
    }

    #[cfg(feature = "speedy")]
    #[test]
    fn test_default_has_speedy() {
        let registry = Registry::default();
        assert_eq!(registry.schemes(), vec!["speedy"]);

        let storage = registry
            .build(&Context::new(), "speedy", "https://b.example.com", "ak", "sk")
            .unwrap();
        assert_eq!(storage.to_string(), "speedy://example.com");

        let err = registry
            .build(&Context::new(), "speedy", "https://localhost", "ak", "sk")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
