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

/// The [OAuth2 scopes] requested for a credential.
///
/// Discovery never inspects or rewrites the scopes, they are handed to the
/// credential as given.
///
/// ```
/// # use google_cloud_auth_loader::scope::Scope;
/// let scope = Scope::from("https://www.googleapis.com/auth/cloud-platform");
/// assert_eq!(scope.len(), 1);
///
/// let scope = Scope::from([
///     "https://www.googleapis.com/auth/pubsub",
///     "https://www.googleapis.com/auth/devstorage.read_only",
/// ]);
/// assert_eq!(
///     scope.to_claim().as_deref(),
///     Some("https://www.googleapis.com/auth/pubsub https://www.googleapis.com/auth/devstorage.read_only")
/// );
/// ```
///
/// [OAuth2 scopes]: https://developers.google.com/identity/protocols/oauth2/scopes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    /// No scope was requested.
    #[default]
    Unset,
    /// A single scope.
    Single(String),
    /// An ordered list of scopes.
    Multiple(Vec<String>),
}

impl Scope {
    pub fn is_unset(&self) -> bool {
        matches!(self, Scope::Unset)
    }

    /// The number of scopes.
    pub fn len(&self) -> usize {
        match self {
            Scope::Unset => 0,
            Scope::Single(_) => 1,
            Scope::Multiple(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the scopes, in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Scope::Unset => &[],
            Scope::Single(s) => std::slice::from_ref(s),
            Scope::Multiple(v) => v.as_slice(),
        };
        items.iter().map(String::as_str)
    }

    /// Formats the scopes as the space-delimited `scope` claim of a JWT, or
    /// of a token request.
    pub fn to_claim(&self) -> Option<String> {
        if self.is_unset() {
            return None;
        }
        Some(self.iter().collect::<Vec<_>>().join(" "))
    }
}

impl From<&str> for Scope {
    fn from(value: &str) -> Self {
        Scope::Single(value.to_string())
    }
}

impl From<String> for Scope {
    fn from(value: String) -> Self {
        Scope::Single(value)
    }
}

impl<T> From<Vec<T>> for Scope
where
    T: Into<String>,
{
    fn from(value: Vec<T>) -> Self {
        Scope::Multiple(value.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Scope
where
    T: Into<String>,
{
    fn from(value: [T; N]) -> Self {
        Scope::Multiple(value.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Scope
where
    T: Into<Scope>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Scope::Unset, Into::into)
    }
}
