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

//! Google Cloud Client Libraries for Rust - Default Credentials Discovery
//!
//! This crate finds the credentials an application should use to call Google
//! APIs. The process of finding credentials from the environment is called
//! [Application Default Credentials]. The search order is:
//!
//! 1. The JSON file named by the `GOOGLE_APPLICATION_CREDENTIALS` environment
//!    variable.
//! 2. Credentials spelled out in environment variables: `GOOGLE_PRIVATE_KEY`
//!    and `GOOGLE_CLIENT_EMAIL` for a service account, or `GOOGLE_CLIENT_ID`,
//!    `GOOGLE_CLIENT_SECRET` and `GOOGLE_REFRESH_TOKEN` for a user.
//! 3. The file written by `gcloud auth application-default login`, at
//!    `$HOME/.config/gcloud/application_default_credentials.json`, or
//!    `%APPDATA%\gcloud\application_default_credentials.json` on Windows.
//!
//! The crate does not talk to the network. The credentials it produces carry
//! the token endpoint, audience, [scopes](scope::Scope), issuer and signing
//! key that an OAuth2 client needs to request access tokens.
//!
//! [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials

pub mod errors;

/// Environment variables, endpoints and paths used during discovery.
pub mod constants;

/// Types and functions to discover and construct Google Cloud [Credentials].
///
/// [Credentials]: https://cloud.google.com/docs/authentication#credentials
pub mod credentials;

/// Host platform detection and the gcloud well-known file location.
pub mod platform;

pub mod scope;

/// A `Result` alias where the `Err` case is
/// `google_cloud_auth_loader::errors::Error`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::Error>;
