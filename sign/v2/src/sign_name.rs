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

use std::fmt;

/// SignName selects the variant of the header signature.
///
/// All variants share the HMAC-SHA1 string-to-sign layout and differ in the
/// `Authorization` scheme and in which vendor headers are signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignName {
    /// `Authorization: AWS <ak>:<sig>`, signs `x-amz-*` headers.
    Aws,
    /// `Authorization: OSS <ak>:<sig>`, signs `x-oss-*` headers.
    Oss,
    /// `Authorization: OBS <ak>:<sig>`, signs `x-obs-*` headers.
    Obs,
}

impl SignName {
    /// Scheme written before the access key in `Authorization`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignName::Aws => "AWS",
            SignName::Oss => "OSS",
            SignName::Obs => "OBS",
        }
    }

    /// Lowercase prefix of the headers that take part in the signature.
    pub fn header_prefix(&self) -> &'static str {
        match self {
            SignName::Aws => "x-amz-",
            SignName::Oss => "x-oss-",
            SignName::Obs => "x-obs-",
        }
    }
}

impl fmt::Display for SignName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
