// Copyright 2024 Google LLC
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

mod loader;
pub mod service_account;
pub mod user_account;

pub use loader::{CredentialsLoader, MakeCredsOptions, from_env_with, from_well_known_path_with};

use crate::Result;
use crate::constants::{ACCOUNT_TYPE_VAR, AUTHORIZED_USER_TYPE, SERVICE_ACCOUNT_TYPE};
use crate::errors::Error;
use crate::scope::Scope;
use loader::{authorized_user_env_vars, read_json, required_str, service_account_env_vars};
use serde_json::Value;
use service_account::ServiceAccountCredentials;
use user_account::UserRefreshCredentials;

/// Credentials of any type supported by [Application Default Credentials].
///
/// When the credentials come from a file, the `type` field of the JSON
/// selects the variant. When they come from the environment,
/// `GOOGLE_ACCOUNT_TYPE` selects the variant if set, otherwise the variant
/// follows from which of the inline environment bundles is present.
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
#[derive(Clone, Debug)]
pub enum DefaultCredentials {
    /// Credentials from a service account key, `"type": "service_account"`.
    ServiceAccount(ServiceAccountCredentials),
    /// Credentials for an end user, `"type": "authorized_user"`.
    AuthorizedUser(UserRefreshCredentials),
}

impl DefaultCredentials {
    fn from_json(json: &Value, scope: Scope) -> Result<Self> {
        match required_str(json, "type")?.as_str() {
            SERVICE_ACCOUNT_TYPE => {
                ServiceAccountCredentials::from_json(json, scope).map(Self::ServiceAccount)
            }
            AUTHORIZED_USER_TYPE => {
                UserRefreshCredentials::from_json(json, scope).map(Self::AuthorizedUser)
            }
            other => Err(Error::unknown_type(other)),
        }
    }

    fn from_env_vars(scope: Scope) -> Result<Self> {
        let credentials_type = match std::env::var(ACCOUNT_TYPE_VAR) {
            Ok(t) => t,
            Err(_) if service_account_env_vars() => SERVICE_ACCOUNT_TYPE.to_string(),
            Err(_) if authorized_user_env_vars() => AUTHORIZED_USER_TYPE.to_string(),
            Err(_) => return Err(Error::missing_field(ACCOUNT_TYPE_VAR)),
        };
        let options = MakeCredsOptions {
            json_key_io: None,
            scope,
        };
        match credentials_type.as_str() {
            SERVICE_ACCOUNT_TYPE => {
                ServiceAccountCredentials::make_creds(options).map(Self::ServiceAccount)
            }
            AUTHORIZED_USER_TYPE => {
                UserRefreshCredentials::make_creds(options).map(Self::AuthorizedUser)
            }
            _ => Err(Error::unknown_type(credentials_type)),
        }
    }

    /// The service account credentials, if that is the variant.
    pub fn as_service_account(&self) -> Option<&ServiceAccountCredentials> {
        match self {
            Self::ServiceAccount(c) => Some(c),
            Self::AuthorizedUser(_) => None,
        }
    }

    /// The user credentials, if that is the variant.
    pub fn as_authorized_user(&self) -> Option<&UserRefreshCredentials> {
        match self {
            Self::AuthorizedUser(c) => Some(c),
            Self::ServiceAccount(_) => None,
        }
    }

    pub fn scope(&self) -> &Scope {
        match self {
            Self::ServiceAccount(c) => c.scope(),
            Self::AuthorizedUser(c) => c.scope(),
        }
    }

    pub fn token_credential_uri(&self) -> &str {
        match self {
            Self::ServiceAccount(c) => c.token_credential_uri(),
            Self::AuthorizedUser(c) => c.token_credential_uri(),
        }
    }
}

impl CredentialsLoader for DefaultCredentials {
    fn make_creds(options: MakeCredsOptions<'_>) -> Result<Self> {
        match options.json_key_io {
            Some(json_key_io) => Self::from_json(&read_json(json_key_io)?, options.scope),
            None => Self::from_env_vars(options.scope),
        }
    }
}

/// Finds [Application Default Credentials].
///
/// Tries, in order:
///
/// 1. The file named by `GOOGLE_APPLICATION_CREDENTIALS`.
/// 2. The inline environment bundles (`GOOGLE_PRIVATE_KEY` +
///    `GOOGLE_CLIENT_EMAIL`, or `GOOGLE_CLIENT_ID` + `GOOGLE_CLIENT_SECRET` +
///    `GOOGLE_REFRESH_TOKEN`).
/// 3. The gcloud well-known file, see [crate::platform::well_known_path].
///
/// Returns `Ok(None)` if none of these sources is present. If a source is
/// present but cannot be loaded the error is returned, later sources are not
/// tried.
///
/// ```no_run
/// # use google_cloud_auth_loader::credentials::application_default;
/// match application_default("https://www.googleapis.com/auth/cloud-platform")? {
///     Some(credentials) => println!("found {credentials:?}"),
///     None => println!("no default credentials"),
/// }
/// # Ok::<(), google_cloud_auth_loader::errors::Error>(())
/// ```
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
pub fn application_default<S>(scope: S) -> Result<Option<DefaultCredentials>>
where
    S: Into<Scope>,
{
    let scope = scope.into();
    if let Some(credentials) = DefaultCredentials::from_env(scope.clone())? {
        return Ok(Some(credentials));
    }
    let credentials = DefaultCredentials::from_well_known_path(scope)?;
    if credentials.is_none() {
        tracing::debug!("no application default credentials found");
    }
    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        CLIENT_EMAIL_VAR, CLIENT_ID_VAR, CLIENT_SECRET_VAR, PRIVATE_KEY_VAR, REFRESH_TOKEN_VAR,
    };
    use crate::credentials::service_account::test::generate_pkcs8_private_key;
    use scoped_env::ScopedEnv;
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    fn make_creds(json: Value) -> Result<DefaultCredentials> {
        let contents = json.to_string();
        DefaultCredentials::make_creds(MakeCredsOptions {
            json_key_io: Some(&mut contents.as_bytes()),
            scope: Scope::from("test-only-scope"),
        })
    }

    #[test]
    fn service_account_type() -> TestResult {
        let credentials = make_creds(json!({
            "type": "service_account",
            "client_email": "test-client-email",
            "private_key": generate_pkcs8_private_key(),
        }))?;
        let sa = credentials
            .as_service_account()
            .expect("expected service account credentials");
        assert_eq!(sa.issuer(), "test-client-email");
        assert!(credentials.as_authorized_user().is_none());
        assert_eq!(credentials.scope(), &Scope::from("test-only-scope"));
        assert_eq!(
            credentials.token_credential_uri(),
            "https://www.googleapis.com/oauth2/v3/token"
        );
        Ok(())
    }

    #[test]
    fn authorized_user_type() -> TestResult {
        let credentials = make_creds(json!({
            "type": "authorized_user",
            "client_id": "test-client-id",
            "client_secret": "test-client-secret",
            "refresh_token": "test-refresh-token",
        }))?;
        let user = credentials
            .as_authorized_user()
            .expect("expected user credentials");
        assert_eq!(user.client_id(), "test-client-id");
        assert!(credentials.as_service_account().is_none());
        assert_eq!(
            credentials.token_credential_uri(),
            "https://oauth2.googleapis.com/token"
        );
        Ok(())
    }

    #[test]
    fn missing_type() {
        let err = make_creds(json!({"client_email": "test-client-email"})).unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains("type"), "{err}");
    }

    #[test]
    fn unknown_type() {
        let err = make_creds(json!({"type": "external_account"})).unwrap_err();
        assert!(err.is_unknown_type(), "{err:?}");
        assert!(err.to_string().contains("external_account"), "{err}");
    }

    fn clear_env() -> Vec<ScopedEnv<&'static str>> {
        [
            ACCOUNT_TYPE_VAR,
            PRIVATE_KEY_VAR,
            CLIENT_EMAIL_VAR,
            CLIENT_ID_VAR,
            CLIENT_SECRET_VAR,
            REFRESH_TOKEN_VAR,
        ]
        .into_iter()
        .map(ScopedEnv::remove)
        .collect()
    }

    #[test]
    #[serial_test::serial]
    fn from_env_inferred_service_account() -> TestResult {
        let _e = clear_env();
        let key = generate_pkcs8_private_key();
        let _k = ScopedEnv::set(PRIVATE_KEY_VAR, key.as_str());
        let _c = ScopedEnv::set(CLIENT_EMAIL_VAR, "test-client-email");
        let credentials = DefaultCredentials::from_env_vars(Scope::Unset)?;
        assert!(credentials.as_service_account().is_some(), "{credentials:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env_inferred_authorized_user() -> TestResult {
        let _e = clear_env();
        let _i = ScopedEnv::set(CLIENT_ID_VAR, "test-client-id");
        let _s = ScopedEnv::set(CLIENT_SECRET_VAR, "test-client-secret");
        let _r = ScopedEnv::set(REFRESH_TOKEN_VAR, "test-refresh-token");
        let credentials = DefaultCredentials::from_env_vars(Scope::Unset)?;
        assert!(credentials.as_authorized_user().is_some(), "{credentials:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env_account_type_wins() -> TestResult {
        let _e = clear_env();
        let _t = ScopedEnv::set(ACCOUNT_TYPE_VAR, "authorized_user");
        let key = generate_pkcs8_private_key();
        let _k = ScopedEnv::set(PRIVATE_KEY_VAR, key.as_str());
        let _c = ScopedEnv::set(CLIENT_EMAIL_VAR, "test-client-email");
        let _i = ScopedEnv::set(CLIENT_ID_VAR, "test-client-id");
        let _s = ScopedEnv::set(CLIENT_SECRET_VAR, "test-client-secret");
        let _r = ScopedEnv::set(REFRESH_TOKEN_VAR, "test-refresh-token");
        let credentials = DefaultCredentials::from_env_vars(Scope::Unset)?;
        assert!(credentials.as_authorized_user().is_some(), "{credentials:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env_unknown_account_type() {
        let _e = clear_env();
        let _t = ScopedEnv::set(ACCOUNT_TYPE_VAR, "impersonated_service_account");
        let err = DefaultCredentials::from_env_vars(Scope::Unset).unwrap_err();
        assert!(err.is_unknown_type(), "{err:?}");
    }

    #[test]
    #[serial_test::serial]
    fn from_env_no_account_type() {
        let _e = clear_env();
        let err = DefaultCredentials::from_env_vars(Scope::Unset).unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        assert!(err.to_string().contains(ACCOUNT_TYPE_VAR), "{err}");
    }
}
