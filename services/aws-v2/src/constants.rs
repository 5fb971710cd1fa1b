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

// Headers used in the string to sign.
pub const CONTENT_MD5: &str = "content-md5";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_PREFIX: &str = "x-amz-";

// Prefix of the Authorization header value.
pub const AWS_AUTH_SCHEME: &str = "AWS";

// Env values used in aws services.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const S3SIGN_BUCKET: &str = "S3SIGN_BUCKET";
pub const S3SIGN_ENDPOINT: &str = "S3SIGN_ENDPOINT";
