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

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{AUTHORIZATION, CONTENT_LENGTH, DATE};
use http::{HeaderMap, Method, StatusCode, Uri};
use objstore_core::{
    Context, Error, ErrorKind, HttpSend, Object, ObjectStorage, Result, StaticEnv,
};
use objstore_speedy::{Config, Speedy};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Mutex};
use test_case::test_case;

type Handler = dyn Fn(&http::Request<Bytes>) -> Result<http::Response<Bytes>> + Send + Sync;

/// Sent is what MockHttpSend remembers of a request.
#[derive(Debug, Clone)]
struct Sent {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
}

/// MockHttpSend records every request and answers with a fixed handler.
#[derive(Clone)]
struct MockHttpSend {
    handler: Arc<Handler>,
    requests: Arc<Mutex<Vec<Sent>>>,
}

impl Debug for MockHttpSend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpSend").finish_non_exhaustive()
    }
}

impl MockHttpSend {
    fn new(
        handler: impl Fn(&http::Request<Bytes>) -> Result<http::Response<Bytes>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            handler: Arc::new(handler),
            requests: Arc::default(),
        }
    }

    fn requests(&self) -> Vec<Sent> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.requests.lock().unwrap().push(Sent {
            method: req.method().clone(),
            uri: req.uri().clone(),
            headers: req.headers().clone(),
        });
        (self.handler)(&req)
    }
}

fn init(mock: &MockHttpSend, access_key: &str) -> Speedy {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_http_send(mock.clone());
    Speedy::new(ctx, "https://b.example.com", access_key, "secret_key").unwrap()
}

fn status(code: u16) -> http::Response<Bytes> {
    http::Response::builder()
        .status(code)
        .header(CONTENT_LENGTH, "0")
        .body(Bytes::new())
        .unwrap()
}

fn xml(body: String) -> http::Response<Bytes> {
    http::Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_LENGTH, body.len())
        .body(Bytes::from(body))
        .unwrap()
}

fn listing(keys: &[&str]) -> String {
    let contents: String = keys
        .iter()
        .map(|key| {
            format!(
                "<Contents><Key>{key}</Key><LastModified>2022-03-01T08:12:34.567Z</LastModified><Size>{}</Size></Contents>",
                key.len()
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><ListBucketResult><Name>b</Name><IsTruncated>false</IsTruncated>{contents}</ListBucketResult>"#
    )
}

fn query(uri: &Uri) -> HashMap<String, String> {
    form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}

#[test]
fn test_display_uses_service_host() {
    let mock = MockHttpSend::new(|_| Ok(status(200)));
    let storage = init(&mock, "access_key");

    assert_eq!(storage.to_string(), "speedy://example.com");
    assert_eq!(storage.endpoint().bucket(), "b");
}

#[test_case("https://localhost"; "no bucket label")]
#[test_case("https://.example.com"; "empty bucket")]
#[test_case("example.com"; "no scheme")]
fn test_invalid_endpoint_fails_at_construction(endpoint: &str) {
    let err = Speedy::new(Context::new(), endpoint, "ak", "sk").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test]
fn test_from_config_reads_env() {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([(
            "SPEEDY_ENDPOINT".to_string(),
            "http://bucket.speedy.local:9000".to_string(),
        )]),
    });

    let storage = Speedy::from_config(ctx, Config::default()).unwrap();
    assert_eq!(storage.to_string(), "speedy://speedy.local:9000");
    assert_eq!(storage.endpoint().bucket(), "bucket");
}

#[test]
fn test_from_config_without_endpoint() {
    let err = Speedy::from_config(Context::new(), Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

#[test_case(200; "ok")]
#[test_case(201; "created")]
#[test_case(409; "already exists")]
#[tokio::test]
async fn test_create(code: u16) -> Result<()> {
    let mock = MockHttpSend::new(move |_| Ok(status(code)));
    let storage = init(&mock, "access_key");

    storage.create().await?;

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::PUT);
    assert_eq!(req.uri.to_string(), "https://example.com/b/");
    assert!(req.headers.contains_key(DATE));
    assert!(req.headers[AUTHORIZATION]
        .to_str()?
        .starts_with("AWS access_key:"));
    Ok(())
}

#[test_case(301; "moved")]
#[test_case(403; "forbidden")]
#[test_case(404; "not found")]
#[test_case(500; "internal error")]
#[tokio::test]
async fn test_create_unexpected_status(code: u16) {
    let mock = MockHttpSend::new(move |_| Ok(status(code)));
    let storage = init(&mock, "access_key");

    let err = storage.create().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.status().map(|v| v.as_u16()), Some(code));
    assert!(err.context().contains(&"bucket: b".to_string()));
}

#[tokio::test]
async fn test_create_error_document() {
    let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>AccessDenied</Code><Message>Access Denied</Message><RequestId>4442587FB7D0A2F9</RequestId></Error>"#;
    let mock = MockHttpSend::new(move |_| {
        Ok(http::Response::builder()
            .status(StatusCode::FORBIDDEN)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap())
    });
    let storage = init(&mock, "access_key");

    let err = storage.create().await.unwrap_err();
    assert_eq!(err.message(), "AccessDenied: Access Denied");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_transport_error_is_returned_unchanged() {
    let mock = MockHttpSend::new(|_| Err(Error::transport("connection reset")));
    let storage = init(&mock, "access_key");

    let err = storage.create().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.message(), "connection reset");
    assert!(err.is_retryable());

    let err = storage.list("", "", 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_anonymous_requests_are_not_signed() -> Result<()> {
    let mock = MockHttpSend::new(|_| Ok(status(200)));
    let storage = init(&mock, "");

    storage.create().await?;

    let req = &mock.requests()[0];
    assert!(req.headers.contains_key(DATE));
    assert!(!req.headers.contains_key(AUTHORIZATION));
    Ok(())
}

#[tokio::test]
async fn test_access_key_without_secret_is_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock = MockHttpSend::new(|_| Ok(status(200)));
    let ctx = Context::new().with_http_send(mock.clone());
    let storage = Speedy::new(ctx, "https://b.example.com", "access_key", "").unwrap();

    let err = storage.create().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);

    let err = storage.list("", "", 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_list_request() -> Result<()> {
    let mock = MockHttpSend::new(|_| Ok(xml(listing(&[]))));
    let storage = init(&mock, "access_key");

    storage.list("a/", "a/1", 10).await?;

    let req = &mock.requests()[0];
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.uri.host(), Some("example.com"));
    assert_eq!(req.uri.path(), "/");
    assert_eq!(req.uri.query(), Some("marker=a%2F1&max-keys=11&prefix=a%2F"));
    assert!(req.headers.contains_key(DATE));
    assert!(req.headers.contains_key(AUTHORIZATION));
    Ok(())
}

#[test_case(10, "11"; "small")]
#[test_case(200_000, "100001"; "clamped")]
#[tokio::test]
async fn test_list_max_keys(limit: i64, expected: &str) -> Result<()> {
    let mock = MockHttpSend::new(|_| Ok(xml(listing(&[]))));
    let storage = init(&mock, "access_key");

    storage.list("", "", limit).await?;

    assert_eq!(query(&mock.requests()[0].uri)["max-keys"], expected);
    Ok(())
}

#[tokio::test]
async fn test_list_skips_directory_markers() -> Result<()> {
    let mock = MockHttpSend::new(|_| {
        Ok(xml(listing(&["a/1", "a/.speedycloud_dir_flag", "a/2"])))
    });
    let storage = init(&mock, "access_key");

    let objects = storage.list("a/", "", 10).await?;

    assert_eq!(
        objects,
        vec![
            Object {
                key: "a/1".to_string(),
                size: 3,
                mtime: 1646122354,
                ctime: 1646122354,
            },
            Object {
                key: "a/2".to_string(),
                size: 3,
                mtime: 1646122354,
                ctime: 1646122354,
            },
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_list_returns_look_ahead_entry() -> Result<()> {
    let mock = MockHttpSend::new(|_| Ok(xml(listing(&["k1", "k2", "k3"]))));
    let storage = init(&mock, "access_key");

    // The service may answer with limit + 1 entries, all of them are returned.
    let objects = storage.list("", "", 2).await?;
    assert_eq!(objects.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_list_short_body() {
    let mock = MockHttpSend::new(|_| {
        let body = listing(&["a/1"]);
        Ok(http::Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_LENGTH, body.len() + 100)
            .body(Bytes::from(body))
            .unwrap())
    });
    let storage = init(&mock, "access_key");

    let err = storage.list("", "", 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_list_without_content_length() {
    let mock = MockHttpSend::new(|_| {
        Ok(http::Response::builder()
            .status(StatusCode::OK)
            .body(Bytes::from(listing(&["a/1"])))
            .unwrap())
    });
    let storage = init(&mock, "access_key");

    let err = storage.list("", "", 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_list_malformed_document() {
    let mock = MockHttpSend::new(|_| Ok(xml("<ListBucketResult><Contents>".to_string())));
    let storage = init(&mock, "access_key");

    let err = storage.list("", "", 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test_case(201; "created")]
#[test_case(404; "not found")]
#[test_case(503; "unavailable")]
#[tokio::test]
async fn test_list_non_ok_status(code: u16) {
    // A valid listing with the wrong status is still an error.
    let mock = MockHttpSend::new(move |_| {
        let body = listing(&["a/1"]);
        Ok(http::Response::builder()
            .status(code)
            .header(CONTENT_LENGTH, body.len())
            .body(Bytes::from(body))
            .unwrap())
    });
    let storage = init(&mock, "access_key");

    let err = storage.list("a/", "m", 10).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.status().map(|v| v.as_u16()), Some(code));
    assert_eq!(err.is_retryable(), code == 503);
    assert!(err.context().contains(&"prefix: a/".to_string()));
    assert!(err.context().contains(&"marker: m".to_string()));
}

#[tokio::test]
async fn test_concurrent_lists() -> Result<()> {
    // Every page echoes its marker back as the only key.
    let mock = MockHttpSend::new(|req| {
        let marker = query(req.uri()).remove("marker").unwrap_or_default();
        Ok(xml(listing(&[format!("after-{marker}").as_str()])))
    });
    let storage = Arc::new(init(&mock, "access_key"));

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let storage = storage.clone();
            tokio::spawn(async move { storage.list("", &format!("m{i}"), 10).await })
        })
        .collect();

    for (i, task) in tasks.into_iter().enumerate() {
        let objects = task.await.expect("task must not panic")?;
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].key, format!("after-m{i}"));
    }
    assert_eq!(mock.requests().len(), 8);
    Ok(())
}
