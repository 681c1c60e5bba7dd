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

use crate::Result;
use crate::constants::{
    CLIENT_EMAIL_VAR, CLIENT_ID_VAR, CLIENT_SECRET_VAR, ENV_VAR, PRIVATE_KEY_VAR, REFRESH_TOKEN_VAR,
};
use crate::errors::Error;
use crate::platform;
use crate::scope::Scope;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The arguments handed to [CredentialsLoader::make_creds].
///
/// When the credentials come from a file `json_key_io` reads its contents.
/// When they come from the inline environment bundle `json_key_io` is `None`
/// and the implementation reads the environment itself.
pub struct MakeCredsOptions<'a> {
    pub json_key_io: Option<&'a mut dyn Read>,
    pub scope: Scope,
}

impl std::fmt::Debug for MakeCredsOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MakeCredsOptions")
            .field("json_key_io", &self.json_key_io.as_ref().map(|_| "[stream]"))
            .field("scope", &self.scope)
            .finish()
    }
}

/// Discovers credentials from the environment.
///
/// Implementations only provide [make_creds](CredentialsLoader::make_creds).
/// The search order lives in the provided methods:
///
/// 1. [from_env](CredentialsLoader::from_env): the file named by
///    `GOOGLE_APPLICATION_CREDENTIALS`, or the inline environment bundle.
/// 2. [from_well_known_path](CredentialsLoader::from_well_known_path): the
///    file written by `gcloud auth application-default login`.
///
/// Each method returns `Ok(None)` when its source does not apply. Once a
/// source applies, any failure is an error; discovery never falls through
/// from a broken source to the next one.
pub trait CredentialsLoader: Sized {
    /// Builds the credentials from a key stream, or from the environment.
    fn make_creds(options: MakeCredsOptions<'_>) -> Result<Self>;

    /// Loads credentials named by the environment.
    ///
    /// If `GOOGLE_APPLICATION_CREDENTIALS` is set the file it names must
    /// exist, a missing file is an error. Otherwise, if either the
    /// `GOOGLE_PRIVATE_KEY` + `GOOGLE_CLIENT_EMAIL` or the `GOOGLE_CLIENT_ID` +
    /// `GOOGLE_CLIENT_SECRET` + `GOOGLE_REFRESH_TOKEN` variables are all set,
    /// the credentials are built from the environment. Otherwise this returns
    /// `Ok(None)`.
    fn from_env<S>(scope: S) -> Result<Option<Self>>
    where
        S: Into<Scope>,
    {
        from_env_with(Self::make_creds, scope)
    }

    /// Loads credentials from the gcloud well-known file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    fn from_well_known_path<S>(scope: S) -> Result<Option<Self>>
    where
        S: Into<Scope>,
    {
        from_well_known_path_with(Self::make_creds, scope)
    }
}

/// Runs the [from_env](CredentialsLoader::from_env) search with an explicit
/// construction function.
pub fn from_env_with<T, F, S>(make_creds: F, scope: S) -> Result<Option<T>>
where
    F: FnOnce(MakeCredsOptions<'_>) -> Result<T>,
    S: Into<Scope>,
{
    load_from_env(make_creds, scope.into()).map_err(Error::from_env_stage)
}

/// Runs the [from_well_known_path](CredentialsLoader::from_well_known_path)
/// search with an explicit construction function.
pub fn from_well_known_path_with<T, F, S>(make_creds: F, scope: S) -> Result<Option<T>>
where
    F: FnOnce(MakeCredsOptions<'_>) -> Result<T>,
    S: Into<Scope>,
{
    let path = platform::well_known_path();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no credentials in the well-known file");
        return Ok(None);
    }
    tracing::debug!(path = %path.display(), "loading credentials from the well-known file");
    make_creds_from_file(&path, make_creds, scope.into())
        .map(Some)
        .map_err(Error::well_known_file_stage)
}

fn load_from_env<T, F>(make_creds: F, scope: Scope) -> Result<Option<T>>
where
    F: FnOnce(MakeCredsOptions<'_>) -> Result<T>,
{
    if let Some(path) = std::env::var_os(ENV_VAR).filter(|p| !p.is_empty()) {
        let path = Path::new(&path);
        tracing::debug!(path = %path.display(), "loading credentials from {ENV_VAR}");
        if !path.exists() {
            return Err(Error::not_found(path));
        }
        return make_creds_from_file(path, make_creds, scope).map(Some);
    }
    if service_account_env_vars() || authorized_user_env_vars() {
        tracing::debug!("loading credentials from environment variables");
        let options = MakeCredsOptions {
            json_key_io: None,
            scope,
        };
        return make_creds(options).map(Some);
    }
    tracing::debug!("no credentials found in the environment");
    Ok(None)
}

fn make_creds_from_file<T, F>(path: &Path, make_creds: F, scope: Scope) -> Result<T>
where
    F: FnOnce(MakeCredsOptions<'_>) -> Result<T>,
{
    // `file` is closed when it goes out of scope, on success or failure.
    let mut file = File::open(path).map_err(Error::loading)?;
    make_creds(MakeCredsOptions {
        json_key_io: Some(&mut file),
        scope,
    })
}

pub(crate) fn service_account_env_vars() -> bool {
    all_set(&[PRIVATE_KEY_VAR, CLIENT_EMAIL_VAR])
}

pub(crate) fn authorized_user_env_vars() -> bool {
    all_set(&[CLIENT_ID_VAR, CLIENT_SECRET_VAR, REFRESH_TOKEN_VAR])
}

fn all_set(vars: &[&str]) -> bool {
    vars.iter().all(|v| std::env::var_os(v).is_some())
}

/// Reads the whole stream as a JSON value.
pub(crate) fn read_json(json_key_io: &mut dyn Read) -> Result<Value> {
    serde_json::from_reader(json_key_io).map_err(|e| {
        if e.is_io() {
            Error::loading(e)
        } else {
            Error::parsing(e)
        }
    })
}

pub(crate) fn required_str(json: &Value, field: &'static str) -> Result<String> {
    optional_str(json, field).ok_or_else(|| Error::missing_field(field))
}

pub(crate) fn optional_str(json: &Value, field: &str) -> Option<String> {
    json.get(field).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn required_var(name: &'static str) -> Result<String> {
    std::env::var(name).map_err(|_| Error::missing_field(name))
}
