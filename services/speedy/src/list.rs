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
use bytes::Bytes;
use http::header::CONTENT_LENGTH;
use objstore_core::time::parse_rfc3339;
use objstore_core::{Error, Object, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Build the listing query.
///
/// Keys are written in sorted order. One more key than `limit` is requested
/// so the service reports truncation the same way for every page.
pub(crate) fn list_query(prefix: &str, marker: &str, limit: i64) -> String {
    let max_keys = limit.min(MAX_LIST_KEYS) + 1;

    form_urlencoded::Serializer::new(String::new())
        .append_pair("marker", marker)
        .append_pair("max-keys", &max_keys.to_string())
        .append_pair("prefix", prefix)
        .finish()
}

/// Take exactly the number of bytes declared by `Content-Length`.
///
/// Bytes beyond the declared length are dropped.
pub(crate) fn read_declared_body(resp: http::Response<Bytes>) -> Result<Bytes> {
    let declared = resp
        .headers()
        .get(CONTENT_LENGTH)
        .ok_or_else(|| Error::decode("listing response has no content length"))?;
    let declared: usize = declared
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .ok_or_else(|| {
            Error::decode("listing response has an invalid content length")
                .with_context(format!("content-length: {declared:?}"))
        })?;

    let body = resp.into_body();
    if body.len() < declared {
        return Err(
            Error::decode("listing response body is shorter than its content length")
                .with_context(format!("expected: {declared}"))
                .with_context(format!("actual: {}", body.len())),
        );
    }
    Ok(body.slice(..declared))
}

/// Decode a `ListBucketResult` document.
///
/// Text is taken verbatim, so keys keep leading and trailing whitespace.
/// Only `Contents/Key`, `Contents/Size` and `Contents/LastModified` are read;
/// every other element, including `CommonPrefixes` between entries, is
/// skipped.
pub(crate) fn parse_list_result(body: &[u8]) -> Result<ListBucketResult> {
    let mut reader = Reader::from_reader(body);
    reader.config_mut().trim_text(false);

    let mut result = ListBucketResult::default();
    // Local names of the open elements, root first.
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut entry: Option<ListEntry> = None;
    let mut text = String::new();
    let mut has_root = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::decode("failed to decode listing response")
                .with_source(e)
                .with_context(format!("position: {}", reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                has_root = true;
                if path.len() == 1 && name == b"Contents" {
                    entry = Some(ListEntry::default());
                }
                path.push(name);
                text.clear();
            }
            Event::Empty(e) => {
                let name = e.local_name();
                has_root = true;
                if path.len() == 1 && name.as_ref() == b"Contents" {
                    result.contents.push(ListEntry::default());
                } else if let (2, Some(entry)) = (path.len(), entry.as_mut()) {
                    entry.set_field(name.as_ref(), "")?;
                }
            }
            Event::Text(e) => {
                let v = e.unescape().map_err(|e| {
                    Error::decode("listing response has invalid text").with_source(e)
                })?;
                text.push_str(&v);
            }
            Event::CData(e) => {
                let v = std::str::from_utf8(&e).map_err(|e| {
                    Error::decode("listing response has invalid text").with_source(e)
                })?;
                text.push_str(v);
            }
            Event::End(_) => {
                let name = path.pop().unwrap_or_default();
                if path.len() == 1 && name == b"Contents" {
                    result.contents.extend(entry.take());
                } else if let (2, Some(entry)) = (path.len(), entry.as_mut()) {
                    entry.set_field(&name, &text)?;
                }
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !has_root {
        return Err(Error::decode("listing response is empty"));
    }
    if !path.is_empty() {
        return Err(Error::decode("listing response ends inside an element")
            .with_context(format!("open elements: {}", path.len())));
    }
    Ok(result)
}

#[derive(Default, Debug)]
pub(crate) struct ListBucketResult {
    pub contents: Vec<ListEntry>,
}

#[derive(Default, Debug)]
pub(crate) struct ListEntry {
    pub key: String,
    pub size: i64,
    pub last_modified: String,
}

impl ListEntry {
    fn set_field(&mut self, name: &[u8], value: &str) -> Result<()> {
        match name {
            b"Key" => self.key = value.to_string(),
            b"LastModified" => self.last_modified = value.to_string(),
            b"Size" => {
                let v = value.trim();
                self.size = if v.is_empty() {
                    0
                } else {
                    v.parse().map_err(|e| {
                        Error::decode("listing entry has an invalid size")
                            .with_source(e)
                            .with_context(format!("size: {value}"))
                    })?
                };
            }
            _ => {}
        }
        Ok(())
    }
}

impl ListBucketResult {
    /// Directory marker keys are skipped, the order of the remaining entries
    /// is kept as is.
    pub(crate) fn into_objects(self) -> Result<Vec<Object>> {
        self.contents
            .into_iter()
            .filter(|entry| !entry.key.ends_with(DIR_FLAG_SUFFIX))
            .map(|entry| {
                let mtime = parse_rfc3339(&entry.last_modified)
                    .map_err(|e| e.with_context(format!("key: {}", entry.key)))?
                    .timestamp();
                Ok(Object {
                    key: entry.key,
                    size: entry.size,
                    mtime,
                    ctime: mtime,
                })
            })
            .collect()
    }
}
