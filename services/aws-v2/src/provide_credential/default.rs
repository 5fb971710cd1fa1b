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

use log::debug;
use s3sign_core::{Context, ProvideCredential, Result};

use crate::provide_credential::EnvCredentialProvider;
use crate::Credential;

/// DefaultCredentialProvider tries its providers in order and returns the
/// first credential found.
///
/// Resolution order:
///
/// 1. Providers added with [`DefaultCredentialProvider::push_front`]
/// 2. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: Vec<Box<dyn ProvideCredential<Credential = Credential>>>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        Self {
            chain: vec![Box::new(EnvCredentialProvider::new())],
        }
    }

    /// Add a credential provider to the front of the chain.
    ///
    /// # Example
    ///
    /// ```
    /// use s3sign_aws_v2::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("access_key_id", "secret_access_key"));
    /// ```
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.chain.insert(0, Box::new(provider));
        self
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.chain {
            if let Some(cred) = provider.provide_credential(ctx)? {
                return Ok(Some(cred));
            }
            debug!("{provider:?} returned no credential, trying next");
        }

        Ok(None)
    }
}
