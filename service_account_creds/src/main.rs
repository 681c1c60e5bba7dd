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

//! Prints the credentials an application on this host would use.
//!
//! With no arguments, runs the Application Default Credentials search. With a
//! path, loads that file instead:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p service_account_creds -- /path/to/key.json
//! ```

use google_cloud_auth_loader::credentials::{
    CredentialsLoader, DefaultCredentials, MakeCredsOptions, application_default,
};

const SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let credentials = match std::env::args_os().nth(1) {
        Some(path) => {
            let mut file = std::fs::File::open(&path)?;
            Some(DefaultCredentials::make_creds(MakeCredsOptions {
                json_key_io: Some(&mut file),
                scope: SCOPE.into(),
            })?)
        }
        None => application_default(SCOPE)?,
    };

    match credentials {
        None => println!("no default credentials"),
        Some(DefaultCredentials::ServiceAccount(sa)) => {
            let signature = sa.signing_key().signer()?.sign(b"service_account_creds")?;
            println!("service account: {}", sa.issuer());
            println!("  token endpoint: {}", sa.token_credential_uri());
            println!("  scope: {}", sa.scope().to_claim().unwrap_or_default());
            println!("  project: {}", sa.project_id().unwrap_or("(unset)"));
            println!("  RS256 signature: {} bytes", signature.len());
        }
        Some(DefaultCredentials::AuthorizedUser(user)) => {
            println!("authorized user: {}", user.client_id());
            println!("  token endpoint: {}", user.token_credential_uri());
            println!(
                "  quota project: {}",
                user.quota_project_id().unwrap_or("(unset)")
            );
        }
    }
    Ok(())
}
