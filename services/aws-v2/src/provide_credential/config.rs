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

use std::sync::Arc;

use crate::{Config, Credential};
use s3sign_core::{Context, Error, ProvideCredential, Result};

/// ConfigCredentialProvider takes the key pair from a [`Config`].
///
/// A config that carries only one half of the pair is a configuration error.
#[derive(Debug, Clone)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.access_key_id, &self.config.secret_access_key) {
            (Some(ak), Some(sk)) => Ok(Some(Credential::new(ak.clone(), sk.clone()))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(Error::config_invalid(
                "access_key_id is set but secret_access_key is missing",
            )),
            (None, Some(_)) => Err(Error::config_invalid(
                "secret_access_key is set but access_key_id is missing",
            )),
        }
    }
}
