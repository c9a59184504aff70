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

use crate::{Credential, SignName};
use async_trait::async_trait;
use http::header::{AUTHORIZATION, DATE};
use http::HeaderValue;
use log::debug;
use once_cell::sync::Lazy;
use objstore_core::hash::base64_hmac_sha1;
use objstore_core::time::{format_http_date, now, DateTime};
use objstore_core::{Context, Result, SignRequest};
use percent_encoding::percent_decode_str;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

const CONTENT_MD5: &str = "content-md5";
const CONTENT_TYPE_NAME: &str = "content-type";
const DATE_NAME: &str = "date";

/// RequestSigner signs requests with the HMAC-SHA1 header signature.
///
/// The variant is fixed at construction by [`SignName`].
#[derive(Debug)]
pub struct RequestSigner {
    sign_name: SignName,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given variant.
    pub fn new(sign_name: SignName) -> Self {
        Self {
            sign_name,
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// The time is only used when the request carries no `Date` header.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The variant this signer applies.
    pub fn sign_name(&self) -> SignName {
        self.sign_name
    }

    fn get_time(&self) -> DateTime {
        self.time.unwrap_or_else(now)
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Ok(());
        };

        // Callers usually stamp Date themselves; the signature must cover
        // the value that goes on the wire.
        if !req.headers.contains_key(DATE) {
            req.headers
                .insert(DATE, format_http_date(self.get_time()).parse()?);
        }

        let string_to_sign = self.build_string_to_sign(req)?;
        debug!("calculated string to sign: {string_to_sign:?}");

        let signature = base64_hmac_sha1(cred.secret_key.as_bytes(), string_to_sign.as_bytes());

        let mut value: HeaderValue =
            format!("{} {}:{}", self.sign_name, cred.access_key, signature).parse()?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

impl RequestSigner {
    fn build_string_to_sign(&self, req: &http::request::Parts) -> Result<String> {
        let mut s = String::new();
        writeln!(&mut s, "{}", req.method.as_str())?;

        for name in [CONTENT_MD5, CONTENT_TYPE_NAME, DATE_NAME] {
            let value = match req.headers.get(name) {
                Some(v) => v.to_str()?,
                None => "",
            };
            writeln!(&mut s, "{value}")?;
        }

        for (name, value) in self.canonicalize_headers(req)? {
            writeln!(&mut s, "{name}:{value}")?;
        }

        write!(&mut s, "{}", canonicalize_resource(req))?;

        Ok(s)
    }

    /// Vendor headers, lowercased and sorted, repeated values joined by `,`.
    fn canonicalize_headers(&self, req: &http::request::Parts) -> Result<BTreeMap<String, String>> {
        let prefix = self.sign_name.header_prefix();
        let mut headers: BTreeMap<String, String> = BTreeMap::new();

        for (name, value) in &req.headers {
            let name = name.as_str();
            if !name.starts_with(prefix) {
                continue;
            }
            let value = value.to_str()?.trim();
            headers
                .entry(name.to_string())
                .and_modify(|v| {
                    v.push(',');
                    v.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }

        Ok(headers)
    }
}

fn canonicalize_resource(req: &http::request::Parts) -> String {
    let path = percent_decode_str(req.uri.path()).decode_utf8_lossy();

    let mut query_pairs: Vec<(String, String)> = req
        .uri
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (
                percent_decode_str(k).decode_utf8_lossy().to_string(),
                percent_decode_str(v).decode_utf8_lossy().to_string(),
            )
        })
        .filter(|(k, _)| is_sub_resource(k))
        .collect();

    if query_pairs.is_empty() {
        return path.to_string();
    }

    query_pairs.sort();
    let query = query_pairs
        .iter()
        .map(|(k, v)| {
            if v.is_empty() {
                k.clone()
            } else {
                format!("{k}={v}")
            }
        })
        .collect::<Vec<_>>()
        .join("&");

    format!("{path}?{query}")
}

fn is_sub_resource(key: &str) -> bool {
    SUB_RESOURCES.contains(key)
}

/// Query parameters that address a sub-resource and are therefore signed.
static SUB_RESOURCES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "acl",
        "cors",
        "delete",
        "lifecycle",
        "location",
        "logging",
        "notification",
        "partNumber",
        "policy",
        "requestPayment",
        "response-cache-control",
        "response-content-disposition",
        "response-content-encoding",
        "response-content-language",
        "response-content-type",
        "response-expires",
        "tagging",
        "torrent",
        "uploadId",
        "uploads",
        "versionId",
        "versioning",
        "versions",
        "website",
    ])
});
