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

//! The REST authentication examples published by AWS.

use pretty_assertions::assert_eq;
use s3sign_aws_v2::{
    authorization, build_string_to_sign, format_authorization_header, sign, Request,
};
use test_case::test_case;

use super::{init_logger, ACCESS_KEY, SECRET_KEY};

fn request() -> s3sign_aws_v2::RequestBuilder {
    Request::builder()
        .endpoint("s3.amazonaws.com")
        .access_key(ACCESS_KEY)
        .secret_key(SECRET_KEY)
}

fn get_object() -> Request {
    request()
        .method("GET")
        .bucket("johnsmith")
        .path("photos/puppy.jpg")
        .header("Date", "Tue, 27 Mar 2007 19:36:42 +0000")
        .build()
}

fn put_object() -> Request {
    request()
        .method("PUT")
        .bucket("johnsmith")
        .path("photos/puppy.jpg")
        .header("Content-Type", "image/jpeg")
        .header("Content-Length", "94328")
        .header("Date", "Tue, 27 Mar 2007 21:15:45 +0000")
        .build()
}

fn list_objects() -> Request {
    request()
        .method("GET")
        .bucket("johnsmith")
        .parameter("prefix", "photos")
        .parameter("max-keys", "50")
        .parameter("marker", "puppy")
        .header("User-Agent", "Mozilla/5.0")
        .header("Date", "Tue, 27 Mar 2007 19:42:41 +0000")
        .build()
}

fn fetch_acl() -> Request {
    request()
        .method("GET")
        .bucket("johnsmith")
        .flag_parameter("acl")
        .header("Date", "Tue, 27 Mar 2007 19:44:46 +0000")
        .build()
}

fn delete_object() -> Request {
    request()
        .method("DELETE")
        .bucket("johnsmith")
        .path("johnsmith/photos/puppy.jpg")
        .header("User-Agent", "dotnet")
        .header("Date", "Tue, 27 Mar 2007 21:20:27 +0000")
        .header("x-amz-date", "Tue, 27 Mar 2007 21:20:26 +0000")
        .build()
}

fn upload() -> Request {
    request()
        .endpoint("static.johnsmith.net:8080")
        .method("PUT")
        .bucket("static.johnsmith.net")
        .path("db-backup.dat.gz")
        .header("User-Agent", "curl/7.15.5")
        .header("Date", "Tue, 27 Mar 2007 21:06:08 +0000")
        .header("x-amz-acl", "public-read")
        .header("content-type", "application/x-download")
        .header("Content-MD5", "4gJE4saaMU4BqNR0kLY+lw==")
        .header(
            "X-Amz-Meta-ReviewedBy",
            "joe@johnsmith.net,jane@johnsmith.net",
        )
        .header("X-Amz-Meta-FileChecksum", "0x02661779")
        .header("X-Amz-Meta-ChecksumAlgorithm", "crc32")
        .header("Content-Disposition", "attachment; filename=database.dat")
        .header("Content-Encoding", "gzip")
        .header("Content-Length", "5913339")
        .build()
}

fn list_all_buckets() -> Request {
    request()
        .method("GET")
        .header("Date", "Wed, 28 Mar 2007 01:29:59 +0000")
        .build()
}

fn unicode_keys() -> Request {
    request()
        .method("GET")
        .bucket("dictionary")
        .path("fran%C3%A7ais/pr%c3%a9f%c3%a8re")
        .header("Date", "Wed, 28 Mar 2007 01:49:49 +0000")
        .build()
}

#[test_case(
    get_object(),
    "GET\n\n\nTue, 27 Mar 2007 19:36:42 +0000\n/johnsmith/photos/puppy.jpg",
    "bWq2s1WEIj+Ydj0vQ697zp+IXMU="
    ; "get object"
)]
#[test_case(
    put_object(),
    "PUT\n\nimage/jpeg\nTue, 27 Mar 2007 21:15:45 +0000\n/johnsmith/photos/puppy.jpg",
    "MyyxeRY7whkBe+bq8fHCL/2kKUg="
    ; "put object"
)]
#[test_case(
    list_objects(),
    "GET\n\n\nTue, 27 Mar 2007 19:42:41 +0000\n/johnsmith/",
    "htDYFYduRNen8P9ZfE/s9SuKy0U="
    ; "list objects"
)]
#[test_case(
    fetch_acl(),
    "GET\n\n\nTue, 27 Mar 2007 19:44:46 +0000\n/johnsmith/?acl",
    "c2WLPFtWHVgbEmeEG93a4cG37dM="
    ; "fetch acl"
)]
#[test_case(
    delete_object(),
    "DELETE\n\n\nTue, 27 Mar 2007 21:20:26 +0000\n/johnsmith/photos/puppy.jpg",
    "lx3byBScXR6KzyMaifNkardMwNk="
    ; "delete object"
)]
#[test_case(
    upload(),
    "PUT\n4gJE4saaMU4BqNR0kLY+lw==\napplication/x-download\nTue, 27 Mar 2007 21:06:08 +0000\n\
     x-amz-acl:public-read\n\
     x-amz-meta-checksumalgorithm:crc32\n\
     x-amz-meta-filechecksum:0x02661779\n\
     x-amz-meta-reviewedby:joe@johnsmith.net,jane@johnsmith.net\n\
     /static.johnsmith.net/db-backup.dat.gz",
    "ilyl83RwaSoYIEdixDQcA4OnAnc="
    ; "upload"
)]
#[test_case(
    list_all_buckets(),
    "GET\n\n\nWed, 28 Mar 2007 01:29:59 +0000\n/",
    "qGdzdERIC03wnaRNKh6OqZehG9s="
    ; "list all buckets"
)]
#[test_case(
    unicode_keys(),
    "GET\n\n\nWed, 28 Mar 2007 01:49:49 +0000\n/dictionary/fran%C3%A7ais/pr%c3%a9f%c3%a8re",
    "DNEZGsoieTZ92F3bUfSPQcbGmlM="
    ; "unicode keys"
)]
fn test_rest_authentication_example(
    req: Request,
    expected_string_to_sign: &str,
    expected_signature: &str,
) {
    init_logger();

    let string_to_sign = build_string_to_sign(&req);
    assert_eq!(string_to_sign, expected_string_to_sign);
    assert_eq!(
        sign(SECRET_KEY, &string_to_sign).expect("sign must succeed"),
        expected_signature
    );
    assert_eq!(
        authorization(&req).expect("authorization must succeed"),
        format!("AWS {ACCESS_KEY}:{expected_signature}")
    );
    assert_eq!(
        format_authorization_header(&req).expect("header must be formatted"),
        format!("Authorization: AWS {ACCESS_KEY}:{expected_signature}")
    );
}

#[test]
fn test_host_header_is_injected() {
    assert_eq!(get_object().header_value("Host"), "s3.amazonaws.com");
    assert_eq!(upload().header_value("host"), "static.johnsmith.net:8080");
}

#[test]
fn test_non_flag_parameters_stay_out_of_resource() {
    let req = list_objects();
    assert_eq!(
        req.query_string_sorted(),
        "marker=puppy&max-keys=50&prefix=photos"
    );
    assert!(!build_string_to_sign(&req).contains('?'));
}
