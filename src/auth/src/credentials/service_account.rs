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

//! [Service Account] Credentials type.
//!
//! A service account is an account for an application or compute workload
//! instead of an individual end user. When the application runs outside of
//! Google Cloud it may need a downloaded [service account key] to
//! authenticate.
//!
//! A service account key is a JSON object in the format described by
//! [aip/4112]. This module only needs two of its fields: `client_email`
//! identifies the service account and `private_key` holds the PEM-encoded RSA
//! key used to sign token requests. Other fields are ignored.
//!
//! Services account keys should be treated as any other secret with security
//! implications. Think of them as unencrypted passwords. Do not store them
//! where unauthorized persons or programs may read them.
//!
//! The types in this module do not fetch tokens. They carry the issuer,
//! audience, scopes and signing key that an OAuth2 client needs to build and
//! sign the JWT assertion exchanged at [TOKEN_CREDENTIAL_URI].
//!
//! Example usage:
//!
//! ```no_run
//! # use google_cloud_auth_loader::credentials::CredentialsLoader;
//! # use google_cloud_auth_loader::credentials::service_account::ServiceAccountCredentials;
//! let credentials = ServiceAccountCredentials::from_env(
//!     "https://www.googleapis.com/auth/cloud-platform",
//! )?;
//! if let Some(credentials) = credentials {
//!     println!("issuer: {}", credentials.issuer());
//! }
//! # Ok::<(), google_cloud_auth_loader::errors::Error>(())
//! ```
//!
//! [aip/4112]: https://google.aip.dev/auth/4112
//! [Service Account]: https://cloud.google.com/iam/docs/service-account-overview
//! [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating

mod signing_key;

pub use signing_key::SigningKey;

use crate::Result;
use crate::constants::{CLIENT_EMAIL_VAR, PRIVATE_KEY_VAR, PROJECT_ID_VAR, TOKEN_CREDENTIAL_URI};
use crate::credentials::loader::{
    CredentialsLoader, MakeCredsOptions, optional_str, read_json, required_str, required_var,
};
use crate::scope::Scope;
use serde_json::Value;
use std::io::Read;

/// Reads a service account key and returns its `(private_key, client_email)`.
///
/// Fails with a missing field error naming `client_email` or `private_key` if
/// either is absent.
pub fn read_json_key(json_key_io: &mut dyn Read) -> Result<(String, String)> {
    let key = ServiceAccountKey::from_json(&read_json(json_key_io)?)?;
    Ok((key.private_key, key.client_email))
}

/// A representation of a [service account key] in the format described by [aip/4112].
///
/// [aip/4112]: https://google.aip.dev/auth/4112
/// [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating
#[derive(Clone, Default, PartialEq)]
pub struct ServiceAccountKey {
    /// The client email address of the service account.
    /// (e.g., "my-sa@my-project.iam.gserviceaccount.com").
    pub client_email: String,
    /// The PEM-encoded RSA private key, in PKCS#8 or PKCS#1 form.
    pub private_key: String,
    /// The project id the service account belongs to.
    pub project_id: Option<String>,
}

impl ServiceAccountKey {
    pub(crate) fn from_json(json: &Value) -> Result<Self> {
        let client_email = required_str(json, "client_email")?;
        let private_key = required_str(json, "private_key")?;
        Ok(Self {
            client_email,
            private_key,
            project_id: optional_str(json, "project_id"),
        })
    }

    // The key is usually exported with escaped newlines, e.g. from a `.env`
    // file.
    fn from_env_vars() -> Result<Self> {
        let private_key = required_var(PRIVATE_KEY_VAR)?.replace("\\n", "\n");
        let client_email = required_var(CLIENT_EMAIL_VAR)?;
        Ok(Self {
            client_email,
            private_key,
            project_id: std::env::var(PROJECT_ID_VAR).ok(),
        })
    }
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"[censored]")
            .field("project_id", &self.project_id)
            .finish()
    }
}

/// Builds [ServiceAccountCredentials] from an in-memory key.
///
/// Use this when the key is not in a file, for example when it is fetched
/// from [Cloud Secret Manager].
///
/// [Cloud Secret Manager]: https://cloud.google.com/secret-manager/docs
#[derive(Debug, Default)]
pub struct Builder {
    service_account_key: ServiceAccountKey,
    scope: Scope,
}

impl Builder {
    /// Sets the [service account key] for this credential.
    ///
    /// [service account key]: https://cloud.google.com/iam/docs/keys-create-delete#creating
    pub fn service_account_key(mut self, service_account_key: ServiceAccountKey) -> Self {
        self.service_account_key = service_account_key;
        self
    }

    /// Sets the [scopes] for this credential.
    ///
    /// [scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
    pub fn scope<S: Into<Scope>>(mut self, scope: S) -> Self {
        self.scope = scope.into();
        self
    }

    /// Returns a [ServiceAccountCredentials] instance with the configured
    /// settings.
    ///
    /// Fails if the private key is not a PEM-encoded RSA key.
    pub fn build(self) -> Result<ServiceAccountCredentials> {
        let signing_key = SigningKey::from_pem(&self.service_account_key.private_key)?;
        Ok(ServiceAccountCredentials {
            token_credential_uri: TOKEN_CREDENTIAL_URI.to_string(),
            audience: TOKEN_CREDENTIAL_URI.to_string(),
            scope: self.scope,
            issuer: self.service_account_key.client_email,
            signing_key,
            project_id: self.service_account_key.project_id,
        })
    }
}

/// Credentials for a service account, ready to request tokens with a signed
/// JWT assertion.
#[derive(Clone, Debug)]
pub struct ServiceAccountCredentials {
    token_credential_uri: String,
    audience: String,
    scope: Scope,
    issuer: String,
    signing_key: SigningKey,
    project_id: Option<String>,
}

impl ServiceAccountCredentials {
    pub(crate) fn from_json(json: &Value, scope: Scope) -> Result<Self> {
        Builder::default()
            .service_account_key(ServiceAccountKey::from_json(json)?)
            .scope(scope)
            .build()
    }

    /// The endpoint where the signed assertion is exchanged for a token.
    pub fn token_credential_uri(&self) -> &str {
        &self.token_credential_uri
    }

    /// The `aud` claim of the assertion.
    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The `iss` claim of the assertion, the service account email.
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

impl CredentialsLoader for ServiceAccountCredentials {
    fn make_creds(options: MakeCredsOptions<'_>) -> Result<Self> {
        let key = match options.json_key_io {
            Some(json_key_io) => ServiceAccountKey::from_json(&read_json(json_key_io)?)?,
            None => ServiceAccountKey::from_env_vars()?,
        };
        Builder::default()
            .service_account_key(key)
            .scope(options.scope)
            .build()
    }
}
