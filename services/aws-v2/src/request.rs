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

//! Request model consumed by the V2 canonicalizer.

use std::collections::BTreeMap;

use super::constants::*;

/// Request holds everything AWS Signature Version 2 needs from a REST call.
///
/// A `Request` never changes after [`RequestBuilder::build`]. Absent string
/// fields are empty strings, header names are stored lower-cased, and
/// parameters keep the difference between a flag (`?acl`, value `None`) and
/// an empty value (`?prefix=`, value `Some("")`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    endpoint: String,
    path: String,
    bucket: String,
    access_key: String,
    secret_key: String,
    method: String,
    parameters: BTreeMap<String, Option<String>>,
    headers: BTreeMap<String, String>,
}

/// Builder for [`Request`].
#[derive(Clone, Debug, Default)]
pub struct RequestBuilder {
    req: Request,
}

impl RequestBuilder {
    /// Set the endpoint, for example `johnsmith.s3.amazonaws.com`.
    ///
    /// A non-empty endpoint becomes the `Host` header unless one is set explicitly.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.req.endpoint = endpoint.into();
        self
    }

    /// Set the object path. The path must already be percent-encoded.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.req.path = path.into();
        self
    }

    /// Set the bucket name used in the canonicalized resource.
    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.req.bucket = bucket.into();
        self
    }

    /// Set the access key id.
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.req.access_key = access_key.into();
        self
    }

    /// Set the secret access key.
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.req.secret_key = secret_key.into();
        self
    }

    /// Set the HTTP method, such as `GET`.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.req.method = method.into();
        self
    }

    /// Add a `key=value` query parameter.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.req.parameters.insert(key.into(), Some(value.into()));
        self
    }

    /// Add a flag query parameter that carries no value, such as `acl`.
    pub fn flag_parameter(mut self, key: impl Into<String>) -> Self {
        self.req.parameters.insert(key.into(), None);
        self
    }

    /// Add query parameters in bulk. `None` values are flag parameters.
    pub fn parameters<K, V>(mut self, params: impl IntoIterator<Item = (K, Option<V>)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.req
            .parameters
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.map(Into::into))));
        self
    }

    /// Set a header. Names are case-insensitive, the last value set wins.
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.req
            .headers
            .insert(name.as_ref().to_lowercase(), value.into());
        self
    }

    /// Set headers in bulk.
    pub fn headers<K, V>(self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        headers
            .into_iter()
            .fold(self, |builder, (k, v)| builder.header(k, v))
    }

    /// Build the immutable request.
    pub fn build(mut self) -> Request {
        if !self.req.endpoint.is_empty() {
            let host = self.req.endpoint.clone();
            self.req.headers.entry("host".to_string()).or_insert(host);
        }

        self.req
    }
}

impl Request {
    /// Create a builder.
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// Endpoint this request targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Percent-encoded object path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Access key id.
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Secret access key.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// HTTP method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Query parameters, ordered by key.
    pub fn parameters(&self) -> &BTreeMap<String, Option<String>> {
        &self.parameters
    }

    /// Headers as `(lower-cased name, value)`, ordered by name.
    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get header value by name, case-insensitive.
    ///
    /// Returns empty string if header not found.
    pub fn header_value(&self, name: &str) -> &str {
        self.headers
            .get(&name.to_lowercase())
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Render parameters as `k1=v1&k2=v2` sorted by key, values left raw.
    ///
    /// Flag parameters render with an empty value: `acl=`.
    pub fn query_string_sorted(&self) -> String {
        self.join_parameters(|v| v.to_string())
    }

    /// Render parameters like [`Request::query_string_sorted`] with every value
    /// form-urlencoded (space becomes `+`).
    pub fn url_encoded_query_string(&self) -> String {
        self.join_parameters(|v| form_urlencoded::byte_serialize(v.as_bytes()).collect())
    }

    /// Every parameter as a `key=value` string, sorted by the whole string.
    pub fn query_parameters(&self) -> Vec<String> {
        let mut params: Vec<String> = self
            .parameters
            .iter()
            .map(|(k, v)| format!("{k}={}", v.as_deref().unwrap_or_default()))
            .collect();
        params.sort_unstable();
        params
    }

    /// Build CanonicalizedAmzHeaders.
    ///
    /// Every `x-amz-*` header except `x-amz-date`, as `name:value` lines sorted
    /// by the whole line and joined by `\n`.
    pub fn canonical_amz_headers(&self) -> String {
        let mut lines: Vec<String> = self
            .headers
            .iter()
            .filter(|(k, _)| k.starts_with(X_AMZ_PREFIX) && k.as_str() != X_AMZ_DATE)
            .map(|(k, v)| format!("{k}:{v}"))
            .collect();
        lines.sort_unstable();
        lines.join("\n")
    }

    /// Render flag parameters as `?k1&k2`, or an empty string if there are none.
    pub fn flag_parameters_as_query_fragment(&self) -> String {
        let flags: Vec<&str> = self
            .parameters
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(k, _)| k.as_str())
            .collect();

        if flags.is_empty() {
            String::new()
        } else {
            format!("?{}", flags.join("&"))
        }
    }

    fn join_parameters(&self, encode: impl Fn(&str) -> String) -> String {
        let mut s = String::new();
        for (idx, (k, v)) in self.parameters.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }
            s.push_str(k);
            s.push('=');
            s.push_str(&encode(v.as_deref().unwrap_or_default()));
        }
        s
    }
}
