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

use crate::Error;
use bytes::Bytes;
use http::StatusCode;
use quick_xml::de;
use serde::Deserialize;

/// Translate a non-success response into an [`Error`].
///
/// The response is consumed. S3 style error documents contribute their code,
/// message, request id and resource; any other body is kept verbatim.
pub fn parse_error(resp: http::Response<Bytes>) -> Error {
    let (parts, body) = resp.into_parts();
    let status = parts.status;

    let request_id = parts
        .headers
        .get("x-amz-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    let mut err = match de::from_reader::<_, ErrorResponse>(body.as_ref()) {
        Ok(resp) if !resp.code.is_empty() => {
            let message = if resp.message.is_empty() {
                resp.code
            } else {
                format!("{}: {}", resp.code, resp.message)
            };
            let mut err = Error::service(status, message);
            if let Some(id) = request_id.or((!resp.request_id.is_empty()).then_some(resp.request_id)) {
                err = err.with_context(format!("request_id: {id}"));
            }
            if !resp.resource.is_empty() {
                err = err.with_context(format!("resource: {}", resp.resource));
            }
            err
        }
        _ => {
            let text = String::from_utf8_lossy(&body);
            let message = match text.trim() {
                "" => status.canonical_reason().unwrap_or("unknown status").to_string(),
                v => v.to_string(),
            };
            let mut err = Error::service(status, message);
            if let Some(id) = request_id {
                err = err.with_context(format!("request_id: {id}"));
            }
            err
        }
    };

    if is_retryable(status) {
        err = err.set_retryable(true);
    }
    err
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
}

#[derive(Default, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct ErrorResponse {
    code: String,
    message: String,
    resource: String,
    request_id: String,
}
