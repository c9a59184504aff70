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

use crate::config::Config;
use crate::constants::*;
use crate::endpoint::Endpoint;
use crate::list::{list_query, parse_list_result, read_declared_body};
use async_trait::async_trait;
use bytes::Bytes;
use http::header::DATE;
use http::{Method, Request, StatusCode};
use log::debug;
use objstore_core::time::{format_http_date, now};
use objstore_core::{parse_error, Context, Error, Object, ObjectStorage, Result, Signer};
use objstore_sign_v2::{Credential, RequestSigner, StaticCredentialProvider};
use std::fmt::{Display, Formatter};

/// Speedy is the object storage driver for the speedy service.
///
/// The bucket lives in the first label of the endpoint host and every request
/// is sent path style to the remaining service host.
#[derive(Debug, Clone)]
pub struct Speedy {
    ctx: Context,
    endpoint: Endpoint,
    signer: Signer<Credential>,
}

impl Speedy {
    /// Create a driver for `endpoint`, such as `https://bucket.example.com`.
    ///
    /// An empty `access_key` makes every request anonymous.
    pub fn new(ctx: Context, endpoint: &str, access_key: &str, secret_key: &str) -> Result<Self> {
        let endpoint = Endpoint::parse(endpoint)?;
        let signer = Signer::new(
            ctx.clone(),
            StaticCredentialProvider::new(access_key, secret_key),
            RequestSigner::new(SIGN_NAME),
        );

        Ok(Self {
            ctx,
            endpoint,
            signer,
        })
    }

    /// Create a driver from [`Config`], filling unset fields from env.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let config = config.from_env(&ctx);
        let endpoint = config.endpoint.ok_or_else(|| {
            Error::config_invalid("speedy endpoint is not set")
                .with_context(format!("env: {SPEEDY_ENDPOINT}"))
        })?;

        Self::new(
            ctx,
            &endpoint,
            config.access_key.as_deref().unwrap_or_default(),
            config.secret_key.as_deref().unwrap_or_default(),
        )
    }

    /// Endpoint this driver talks to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    async fn signed_request(&self, method: Method, url: &str) -> Result<Request<Bytes>> {
        let req = Request::builder()
            .method(method)
            .uri(url)
            .header(DATE, format_http_date(now()))
            .body(Bytes::new())?;

        let (mut parts, body) = req.into_parts();
        self.signer.sign(&mut parts).await?;
        Ok(Request::from_parts(parts, body))
    }
}

impl Display for Speedy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{SCHEME}://{}", self.endpoint.host())
    }
}

#[async_trait]
impl ObjectStorage for Speedy {
    async fn create(&self) -> Result<()> {
        let bucket = self.endpoint.bucket();
        let req = self
            .signed_request(Method::PUT, &self.endpoint.bucket_url())
            .await?;
        let resp = self.ctx.http_send(req).await?;

        match resp.status() {
            StatusCode::OK | StatusCode::CREATED => {
                debug!("{self}: bucket {bucket} created");
                Ok(())
            }
            StatusCode::CONFLICT => {
                debug!("{self}: bucket {bucket} already exists");
                Ok(())
            }
            _ => Err(parse_error(resp).with_context(format!("bucket: {bucket}"))),
        }
    }

    async fn list(&self, prefix: &str, marker: &str, limit: i64) -> Result<Vec<Object>> {
        let url = self.endpoint.root_url(&list_query(prefix, marker, limit));
        let req = self.signed_request(Method::GET, &url).await?;
        let resp = self.ctx.http_send(req).await?;

        if resp.status() != StatusCode::OK {
            return Err(parse_error(resp)
                .with_context(format!("prefix: {prefix}"))
                .with_context(format!("marker: {marker}")));
        }

        let body = read_declared_body(resp)?;
        let result = parse_list_result(&body)?;
        debug!(
            "{self}: listed bucket {} with {} entries",
            self.endpoint.bucket(),
            result.contents.len()
        );
        result.into_objects()
    }
}
