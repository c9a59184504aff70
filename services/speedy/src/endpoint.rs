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

use http::Uri;
use objstore_core::{Error, Result};

/// Endpoint is the resolved form of `<scheme>://<bucket>.<service host>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    bucket: String,
    host: String,
}

impl Endpoint {
    /// Split the endpoint host on its first `.` into bucket and service host.
    ///
    /// The port, if any, stays with the service host. Path and query of the
    /// endpoint are ignored.
    pub fn parse(endpoint: &str) -> Result<Self> {
        let invalid = |message: &str| {
            Error::config_invalid(message.to_string()).with_context(format!("endpoint: {endpoint}"))
        };

        let uri: Uri = endpoint
            .parse()
            .map_err(|e| invalid("endpoint is not a valid url").with_source(e))?;
        let scheme = uri
            .scheme_str()
            .ok_or_else(|| invalid("endpoint must be an absolute url"))?;
        let host = uri
            .host()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| invalid("endpoint has no host"))?;

        let Some((bucket, service)) = host.split_once('.') else {
            return Err(invalid("endpoint host must look like <bucket>.<service host>"));
        };
        if bucket.is_empty() {
            return Err(invalid("endpoint has an empty bucket name"));
        }
        if service.is_empty() {
            return Err(invalid("endpoint has an empty service host"));
        }

        let host = match uri.port_u16() {
            Some(port) => format!("{service}:{port}"),
            None => service.to_string(),
        };

        Ok(Self {
            scheme: scheme.to_string(),
            bucket: bucket.to_string(),
            host,
        })
    }

    /// Url scheme, `http` or `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Bucket name taken from the first host label.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Service host, including the port when the endpoint had one.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Path style url of the bucket: `<scheme>://<host>/<bucket>/`.
    pub fn bucket_url(&self) -> String {
        format!("{}://{}/{}/", self.scheme, self.host, self.bucket)
    }

    /// Url of the service root with the given encoded query.
    pub fn root_url(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}://{}/", self.scheme, self.host)
        } else {
            format!("{}://{}/?{}", self.scheme, self.host, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objstore_core::ErrorKind;
    use test_case::test_case;

    #[test_case("https://b.example.com", "https", "b", "example.com"; "basic")]
    #[test_case("http://bucket.speedycloud.example.org:8080", "http", "bucket", "speedycloud.example.org:8080"; "port kept")]
    #[test_case("https://my-bucket.s3.example.com/ignored/path?x=1", "https", "my-bucket", "s3.example.com"; "path ignored")]
    fn test_parse(input: &str, scheme: &str, bucket: &str, host: &str) {
        let ep = Endpoint::parse(input).expect("endpoint must be valid");
        assert_eq!(ep.scheme(), scheme);
        assert_eq!(ep.bucket(), bucket);
        assert_eq!(ep.host(), host);
    }

    #[test_case("https://localhost"; "no dot")]
    #[test_case("https://.example.com"; "empty bucket")]
    #[test_case("https://bucket."; "empty service")]
    #[test_case("b.example.com"; "no scheme")]
    #[test_case("https://exa mple.com"; "not a url")]
    #[test_case(""; "empty")]
    fn test_parse_invalid(input: &str) {
        let err = Endpoint::parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
        assert_eq!(err.context(), &[format!("endpoint: {input}")]);
    }

    #[test]
    fn test_urls() {
        let ep = Endpoint::parse("https://b.example.com").unwrap();
        assert_eq!(ep.bucket_url(), "https://example.com/b/");
        assert_eq!(ep.root_url(""), "https://example.com/");
        assert_eq!(
            ep.root_url("marker=&max-keys=11&prefix="),
            "https://example.com/?marker=&max-keys=11&prefix="
        );
    }
}
