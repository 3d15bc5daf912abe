// SPDX-License-Identifier: MPL-2.0
//! Location of the persisted preferences.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_data_dir_with_override`] (for tests)
//! 2. **Environment variable** `CANDOGMATIC_DATA_DIR`
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "CanDogmatic";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "CANDOGMATIC_DATA_DIR";

/// Returns the application data directory path.
///
/// - Linux: `~/.local/share/CanDogmatic/`
/// - macOS: `~/Library/Application Support/CanDogmatic/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\CanDogmatic\`
///
/// Returns `None` if the data directory cannot be determined.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_DATA_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
