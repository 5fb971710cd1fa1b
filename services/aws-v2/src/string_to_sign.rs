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

use http::header::{CONTENT_TYPE, DATE};
use log::debug;

use super::constants::*;
use super::request::Request;

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// HTTP-Verb + "\n" +
/// Content-MD5 + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// CanonicalizedAmzHeaders +
/// CanonicalizedResource;
/// ```
///
/// The date line is dropped entirely when neither `x-amz-date` nor `Date`
/// is set, while empty Content-MD5 and Content-Type still leave a blank line.
///
/// ## Reference
///
/// - [Signing and authenticating REST requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)
pub fn build_string_to_sign(req: &Request) -> String {
    let mut s = String::new();
    s.push_str(req.method());
    s.push('\n');
    s.push_str(req.header_value(CONTENT_MD5));
    s.push('\n');
    s.push_str(req.header_value(CONTENT_TYPE.as_str()));
    s.push('\n');

    let date = match req.header_value(X_AMZ_DATE) {
        "" => req.header_value(DATE.as_str()),
        v => v,
    };
    if !date.is_empty() {
        s.push_str(date);
        s.push('\n');
    }

    let headers = req.canonical_amz_headers();
    if !headers.is_empty() {
        s.push_str(&headers);
        s.push('\n');
    }

    s.push_str(&canonical_resource(req));

    debug!("string to sign: {}", &s);
    s
}

/// Build CanonicalizedResource.
///
/// `/bucket` followed by the object path and the flag sub-resources. A path
/// that still starts with the bucket (path-style requests) has the bucket
/// stripped; when the byte at `bucket.len() + 1` is `/`, the strip goes one
/// byte further.
pub fn canonical_resource(req: &Request) -> String {
    let bucket = req.bucket();
    let path = req.path();

    let mut s = String::with_capacity(bucket.len() + path.len() + 2);
    s.push('/');
    s.push_str(bucket);

    if path.is_empty() {
        if !bucket.is_empty() {
            s.push('/');
        }
    } else if !bucket.is_empty() && path.starts_with(bucket) {
        let n = bucket.len();
        if path.as_bytes().get(n + 1) == Some(&b'/') {
            s.push_str(&path[n + 1..]);
        } else {
            s.push_str(&path[n..]);
        }
    } else {
        s.push('/');
        s.push_str(path);
    }

    s.push_str(&req.flag_parameters_as_query_fragment());
    s
}
