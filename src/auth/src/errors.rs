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

//! Errors created while discovering and constructing credentials.

use std::path::PathBuf;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for credentials discovery and construction.
///
/// The error is opaque, use the `is_*()` predicates to find out what went
/// wrong. The kind predicates (e.g. [Error::is_missing_field]) look through
/// the discovery stage, so they return the same answer whether the problem was
/// found in a file named by `GOOGLE_APPLICATION_CREDENTIALS` or in the
/// well-known gcloud file. Use [Error::is_from_env] and
/// [Error::is_from_well_known_path] to find out which stage failed.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// A required field, or environment variable, was missing.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingField(_))
    }

    /// The credentials file named by `GOOGLE_APPLICATION_CREDENTIALS` does
    /// not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound(_))
    }

    /// A problem parsing the credentials JSON or the private key PEM.
    pub fn is_parsing(&self) -> bool {
        matches!(self.kind(), ErrorKind::Parsing(_))
    }

    /// A problem opening or reading a credentials file.
    pub fn is_loading(&self) -> bool {
        matches!(self.kind(), ErrorKind::Loading(_))
    }

    /// The credentials type is invalid or unknown.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.kind(), ErrorKind::UnknownType(_))
    }

    /// The error was raised while loading credentials named by the
    /// environment.
    pub fn is_from_env(&self) -> bool {
        matches!(self.0, ErrorKind::FromEnv(_))
    }

    /// The error was raised while loading the well-known gcloud file.
    pub fn is_from_well_known_path(&self) -> bool {
        matches!(self.0, ErrorKind::WellKnownFile(_))
    }

    fn kind(&self) -> &ErrorKind {
        match &self.0 {
            ErrorKind::FromEnv(inner) | ErrorKind::WellKnownFile(inner) => inner.kind(),
            kind => kind,
        }
    }

    /// A required field was missing from the key, or from the environment.
    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }

    /// The explicit credentials path does not exist.
    pub(crate) fn not_found<P>(path: P) -> Error
    where
        P: Into<PathBuf>,
    {
        Error(ErrorKind::NotFound(path.into()))
    }

    pub(crate) fn parsing<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Parsing(source.into()))
    }

    pub(crate) fn loading<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Loading(source.into()))
    }

    pub(crate) fn unknown_type<T>(credentials_type: T) -> Error
    where
        T: Into<String>,
    {
        Error(ErrorKind::UnknownType(credentials_type.into()))
    }

    /// Wraps an error raised while loading credentials named by the
    /// environment.
    pub(crate) fn from_env_stage(inner: Error) -> Error {
        Error(ErrorKind::FromEnv(Box::new(inner)))
    }

    /// Wraps an error raised while loading the well-known gcloud file.
    pub(crate) fn well_known_file_stage(inner: Error) -> Error {
        Error(ErrorKind::WellKnownFile(Box::new(inner)))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("file {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("cannot parse the credentials: {0}")]
    Parsing(#[source] BoxError),
    #[error("could not open or read the credentials file: {0}")]
    Loading(#[source] BoxError),
    #[error("unknown or unsupported credentials type: {0}")]
    UnknownType(String),
    #[error("Unable to read the credential file specified by GOOGLE_APPLICATION_CREDENTIALS: {0}")]
    FromEnv(#[source] Box<Error>),
    #[error("Unable to read the default credential file: {0}")]
    WellKnownFile(#[source] Box<Error>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn constructors() {
        let error = Error::missing_field("client_email");
        assert!(error.is_missing_field(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("client_email"), "{error}");

        let error = Error::not_found("/no/such/file.json");
        assert!(error.is_not_found(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("/no/such/file.json"), "{error}");

        let error = Error::parsing("test message");
        assert!(error.is_parsing(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::loading("test message");
        assert!(error.is_loading(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::unknown_type("impersonated_service_account");
        assert!(error.is_unknown_type(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(
            error.to_string().contains("impersonated_service_account"),
            "{error}"
        );
    }

    #[test]
    fn from_env_stage() {
        let error = Error::from_env_stage(Error::not_found("missing.json"));
        assert!(error.is_from_env(), "{error:?}");
        assert!(!error.is_from_well_known_path(), "{error:?}");
        assert!(error.is_not_found(), "{error:?}");
        assert!(!error.is_missing_field(), "{error:?}");
        let msg = error.to_string();
        assert!(
            msg.starts_with(
                "Unable to read the credential file specified by GOOGLE_APPLICATION_CREDENTIALS"
            ),
            "{msg}"
        );
        assert!(msg.contains("missing.json"), "{msg}");
        let source = error.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("missing.json"), "{source}");
    }

    #[test]
    fn well_known_file_stage() {
        let error = Error::well_known_file_stage(Error::missing_field("private_key"));
        assert!(error.is_from_well_known_path(), "{error:?}");
        assert!(!error.is_from_env(), "{error:?}");
        assert!(error.is_missing_field(), "{error:?}");
        let msg = error.to_string();
        assert!(
            msg.starts_with("Unable to read the default credential file"),
            "{msg}"
        );
        assert!(msg.contains("private_key"), "{msg}");
    }
}
