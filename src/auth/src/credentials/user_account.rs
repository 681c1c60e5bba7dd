// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! [User Account] Credentials type.
//!
//! User accounts represent a developer, administrator, or any other person who
//! interacts with Google APIs and services. They are typically created with
//! `gcloud auth application-default login`, which writes an `authorized_user`
//! JSON file to the well-known path. The same values can be supplied through
//! the `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET` and `GOOGLE_REFRESH_TOKEN`
//! environment variables.
//!
//! The refresh token is exchanged for access tokens at
//! [USER_TOKEN_CREDENTIAL_URI] by an OAuth2 client, this module only collects
//! the values needed for that exchange.
//!
//! [User Account]: https://cloud.google.com/docs/authentication#user-accounts

use crate::Result;
use crate::constants::{
    CLIENT_ID_VAR, CLIENT_SECRET_VAR, REFRESH_TOKEN_VAR, USER_TOKEN_CREDENTIAL_URI,
};
use crate::credentials::loader::{
    CredentialsLoader, MakeCredsOptions, optional_str, read_json, required_str, required_var,
};
use crate::scope::Scope;
use serde_json::Value;

/// Credentials for an end user, refreshed with an OAuth2 refresh token.
#[derive(Clone, PartialEq)]
pub struct UserRefreshCredentials {
    token_credential_uri: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    scope: Scope,
    quota_project_id: Option<String>,
}

impl UserRefreshCredentials {
    pub(crate) fn from_json(json: &Value, scope: Scope) -> Result<Self> {
        Ok(Self {
            token_credential_uri: USER_TOKEN_CREDENTIAL_URI.to_string(),
            client_id: required_str(json, "client_id")?,
            client_secret: required_str(json, "client_secret")?,
            refresh_token: required_str(json, "refresh_token")?,
            scope,
            quota_project_id: optional_str(json, "quota_project_id"),
        })
    }

    fn from_env_vars(scope: Scope) -> Result<Self> {
        Ok(Self {
            token_credential_uri: USER_TOKEN_CREDENTIAL_URI.to_string(),
            client_id: required_var(CLIENT_ID_VAR)?,
            client_secret: required_var(CLIENT_SECRET_VAR)?,
            refresh_token: required_var(REFRESH_TOKEN_VAR)?,
            scope,
            quota_project_id: None,
        })
    }

    pub fn token_credential_uri(&self) -> &str {
        &self.token_credential_uri
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The [quota project] billed for requests made with these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn quota_project_id(&self) -> Option<&str> {
        self.quota_project_id.as_deref()
    }
}

impl std::fmt::Debug for UserRefreshCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRefreshCredentials")
            .field("token_credential_uri", &self.token_credential_uri)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[censored]")
            .field("refresh_token", &"[censored]")
            .field("scope", &self.scope)
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

impl CredentialsLoader for UserRefreshCredentials {
    fn make_creds(options: MakeCredsOptions<'_>) -> Result<Self> {
        match options.json_key_io {
            Some(json_key_io) => Self::from_json(&read_json(json_key_io)?, options.scope),
            None => Self::from_env_vars(options.scope),
        }
    }
}
