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
use crate::errors::Error;
use rustls::crypto::CryptoProvider;
use rustls::sign::Signer;
use rustls::{SignatureAlgorithm, SignatureScheme};
use rustls_pki_types::PrivateKeyDer;
use rustls_pki_types::pem::PemObject;
use std::sync::Arc;

/// The RSA key of a service account, decoded from its PEM form.
///
/// The key is loaded with the process default [CryptoProvider], or with the
/// `ring` provider if no default is installed.
#[derive(Clone)]
pub struct SigningKey {
    inner: Arc<dyn rustls::sign::SigningKey>,
}

impl SigningKey {
    /// Decodes a PEM-encoded RSA private key, in PKCS#1 or PKCS#8 form.
    pub fn from_pem(pem: &str) -> Result<Self> {
        let der = PrivateKeyDer::from_pem_slice(pem.as_bytes()).map_err(Error::parsing)?;
        if !matches!(der, PrivateKeyDer::Pkcs1(_) | PrivateKeyDer::Pkcs8(_)) {
            return Err(Error::parsing(
                "expected key to be in form of RSA (PKCS#1) or PKCS#8",
            ));
        }
        let key_provider = CryptoProvider::get_default().map_or_else(
            || rustls::crypto::ring::default_provider().key_provider,
            |p| p.key_provider,
        );
        let inner = key_provider
            .load_private_key(der)
            .map_err(Error::parsing)?;
        if inner.algorithm() != SignatureAlgorithm::RSA {
            return Err(Error::parsing(format!(
                "expected an RSA private key, found {:?}",
                inner.algorithm()
            )));
        }
        Ok(Self { inner })
    }

    /// Returns a signer for the `RS256` JWT algorithm.
    pub fn signer(&self) -> Result<Box<dyn Signer>> {
        self.inner
            .choose_scheme(&[SignatureScheme::RSA_PKCS1_SHA256])
            .ok_or_else(|| Error::parsing("unable to choose RSA_PKCS1_SHA256 signing scheme"))
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("algorithm", &self.inner.algorithm())
            .finish_non_exhaustive()
    }
}
