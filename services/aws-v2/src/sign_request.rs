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

use http::header::{AUTHORIZATION, DATE};
use http::HeaderValue;
use log::debug;
use percent_encoding::percent_decode_str;
use s3sign_core::hash::base64_hmac_sha1;
use s3sign_core::time::{format_http_date, now, DateTime};
use s3sign_core::{Context, Error, Result, SignRequest};

use super::constants::*;
use super::credential::Credential;
use super::request::Request;
use super::string_to_sign::build_string_to_sign;

/// Sign `data` with `secret_key`: base64 of the HMAC-SHA1 digest.
///
/// An empty secret key is rejected with [`s3sign_core::ErrorKind::KeyInvalid`].
pub fn sign(secret_key: &str, data: &str) -> Result<String> {
    if secret_key.is_empty() {
        return Err(Error::key_invalid("secret key must not be empty"));
    }

    base64_hmac_sha1(secret_key.as_bytes(), data.as_bytes())
}

/// Build the Authorization header value: `AWS {access_key}:{signature}`.
pub fn authorization(req: &Request) -> Result<String> {
    let string_to_sign = build_string_to_sign(req);
    let signature = sign(req.secret_key(), &string_to_sign)?;

    Ok(format!("{AWS_AUTH_SCHEME} {}:{signature}", req.access_key()))
}

/// Build the full header line: `Authorization: AWS {access_key}:{signature}`.
pub fn format_authorization_header(req: &Request) -> Result<String> {
    Ok(format!("Authorization: {}", authorization(req)?))
}

/// RequestSigner applies AWS Signature Version 2 to `http::request::Parts`.
///
/// - [Signing and authenticating REST requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)
#[derive(Debug)]
pub struct RequestSigner {
    bucket: String,
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a signer for requests against `bucket`.
    ///
    /// Use an empty bucket for service-level calls such as listing buckets.
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let date = if has_value(parts, X_AMZ_DATE) || has_value(parts, DATE.as_str()) {
            None
        } else {
            let now = self.time.unwrap_or_else(now);
            Some(HeaderValue::from_str(&format_http_date(now))?)
        };

        let req = build_request(parts, &self.bucket, cred, date.as_ref())?;
        let mut value: HeaderValue = authorization(&req)?.parse()?;
        value.set_sensitive(true);

        // Only touch the request once signing can no longer fail.
        if let Some(date) = date {
            parts.headers.insert(DATE, date);
        }
        parts.headers.insert(AUTHORIZATION, value);

        debug!("signed {} {} with access key {}", parts.method, parts.uri, cred.access_key_id);
        Ok(())
    }
}

/// Whether `name` carries a non-empty value, the same test the canonicalizer
/// uses for its date line.
fn has_value(parts: &http::request::Parts, name: &str) -> bool {
    parts
        .headers
        .get_all(name)
        .iter()
        .any(|v| !v.is_empty())
}

/// Collect everything the canonicalizer needs from the http parts.
///
/// Repeated headers are joined by `,` as the REST authentication rules require.
/// `date` stands in for a `Date` header that is not on the parts yet.
fn build_request(
    parts: &http::request::Parts,
    bucket: &str,
    cred: &Credential,
    date: Option<&HeaderValue>,
) -> Result<Request> {
    let path = parts.uri.path();
    let mut builder = Request::builder()
        .endpoint(parts.uri.authority().map(|v| v.as_str()).unwrap_or_default())
        .path(path.strip_prefix('/').unwrap_or(path))
        .bucket(bucket)
        .access_key(&cred.access_key_id)
        .secret_key(&cred.secret_access_key)
        .method(parts.method.as_str());

    if let Some(query) = parts.uri.query() {
        builder = builder.parameters(parse_query(query));
    }

    for name in parts.headers.keys() {
        let values = parts
            .headers
            .get_all(name)
            .iter()
            .map(|v| v.to_str())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        builder = builder.header(name.as_str(), values.join(","));
    }

    if let Some(date) = date {
        builder = builder.header(DATE.as_str(), date.to_str()?);
    }

    Ok(builder.build())
}

/// Split a raw query into parameters. A pair without `=` is a flag parameter.
fn parse_query(query: &str) -> Vec<(String, Option<String>)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (percent_decode(k), Some(percent_decode(v))),
            None => (percent_decode(pair), None),
        })
        .collect()
}

fn percent_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}
