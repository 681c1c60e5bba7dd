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

use crate::constants::{UNIX_HOME_VAR, WELL_KNOWN_PATH, WELL_KNOWN_PATH_PREFIX, WINDOWS_APPDATA_VAR};
use std::path::{MAIN_SEPARATOR_STR, PathBuf};
use std::sync::OnceLock;

static IS_WINDOWS: OnceLock<bool> = OnceLock::new();

/// Returns `true` if the host operating system is Windows.
///
/// The host is inspected once, the answer is kept for the lifetime of the
/// process.
pub fn is_windows() -> bool {
    *IS_WINDOWS.get_or_init(|| std::env::consts::OS == "windows")
}

/// Returns the path to the gcloud [Application Default Credentials] file.
///
/// On Windows the file lives under `%APPDATA%`, elsewhere it lives under
/// `$HOME/.config`. An unset or empty variable resolves to the filesystem
/// root, the path is never relative to the current directory.
///
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
pub fn well_known_path() -> PathBuf {
    let windows = is_windows();
    let var = if windows {
        WINDOWS_APPDATA_VAR
    } else {
        UNIX_HOME_VAR
    };
    let root = std::env::var(var).unwrap_or_default();
    well_known_path_under(&root, windows)
}

pub(crate) fn well_known_path_under(root: &str, windows: bool) -> PathBuf {
    let mut path = if root.is_empty() {
        PathBuf::from(MAIN_SEPARATOR_STR)
    } else {
        PathBuf::from(root)
    };
    if !windows {
        path.push(WELL_KNOWN_PATH_PREFIX);
    }
    path.extend(WELL_KNOWN_PATH.split('/'));
    path
}
