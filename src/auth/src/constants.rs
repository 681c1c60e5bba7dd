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

/// Explicit path to a JSON credentials file.
pub const ENV_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";
/// PEM-encoded private key of an inline service account.
pub const PRIVATE_KEY_VAR: &str = "GOOGLE_PRIVATE_KEY";
/// Client email of an inline service account.
pub const CLIENT_EMAIL_VAR: &str = "GOOGLE_CLIENT_EMAIL";
/// Client id of inline authorized user credentials.
pub const CLIENT_ID_VAR: &str = "GOOGLE_CLIENT_ID";
/// Client secret of inline authorized user credentials.
pub const CLIENT_SECRET_VAR: &str = "GOOGLE_CLIENT_SECRET";
/// Refresh token of inline authorized user credentials.
pub const REFRESH_TOKEN_VAR: &str = "GOOGLE_REFRESH_TOKEN";
/// Selects the credentials type when they are read from the environment.
pub const ACCOUNT_TYPE_VAR: &str = "GOOGLE_ACCOUNT_TYPE";
/// Project id for service accounts read from the environment.
pub const PROJECT_ID_VAR: &str = "GOOGLE_CLOUD_PROJECT";

pub(crate) const WINDOWS_APPDATA_VAR: &str = "APPDATA";
pub(crate) const UNIX_HOME_VAR: &str = "HOME";
pub(crate) const WELL_KNOWN_PATH: &str = "gcloud/application_default_credentials.json";
pub(crate) const WELL_KNOWN_PATH_PREFIX: &str = ".config";

/// Token endpoint (and JWT audience) used by service account credentials.
pub const TOKEN_CREDENTIAL_URI: &str = "https://www.googleapis.com/oauth2/v3/token";
/// Token endpoint used by authorized user credentials.
pub const USER_TOKEN_CREDENTIAL_URI: &str = "https://oauth2.googleapis.com/token";

pub(crate) const SERVICE_ACCOUNT_TYPE: &str = "service_account";
pub(crate) const AUTHORIZED_USER_TYPE: &str = "authorized_user";
