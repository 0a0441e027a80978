//! Profile discovery and layered merging.
//!
//! Resolution order (later overrides earlier, field by field):
//! 1. `~/.config/tokenkit/config.toml` (XDG user config)
//! 2. `./tokenkit.toml` (project-local)
//! 3. `TOKENKIT_<PROFILE>_*` environment variables

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::{Profile, ProfileOverlay, TokenkitConfig};

/// Default config filename for project-local config.
const PROJECT_CONFIG_FILE: &str = "tokenkit.toml";

/// Default config filename within the XDG config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Application name for XDG directory resolution.
const APP_NAME: &str = "tokenkit";

/// Resolve the user config directory.
///
/// `TOKENKIT_CONFIG_DIR` overrides the platform default.
pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("TOKENKIT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Path of the user config file, if a config directory can be resolved.
pub fn xdg_config_path() -> Option<PathBuf> {
    xdg_config_dir().map(|d| d.join(USER_CONFIG_FILE))
}

/// Load and resolve a named profile from all config layers.
pub fn load_profile(name: &str) -> Result<Profile> {
    load_profile_from(name, None, None)
}

/// Load a named profile with explicit control over the search directories.
///
/// `config_dir` overrides the XDG user config directory; `project_dir`
/// overrides the directory searched for `tokenkit.toml`. Pass `None` for
/// default resolution.
pub fn load_profile_from(
    name: &str,
    project_dir: Option<&Path>,
    config_dir: Option<&Path>,
) -> Result<Profile> {
    let mut overlay = ProfileOverlay::default();
    let mut found = false;

    // 1. User config
    let user_path = match config_dir {
        Some(dir) => Some(dir.join(USER_CONFIG_FILE)),
        None => xdg_config_path(),
    };
    if let Some(path) = user_path {
        found |= merge_layer(&mut overlay, &path, name)?;
    }

    // 2. Project-local config
    let project_path = project_dir
        .map(|d| d.join(PROJECT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));
    found |= merge_layer(&mut overlay, &project_path, name)?;

    // 3. Environment
    let env = env_overlay(name);
    if !env.is_empty() {
        overlay.merge_from(&env);
        found = true;
    }

    if !found {
        return Err(ConfigError::ProfileNotFound(name.to_string()));
    }

    overlay.into_profile(name)
}

/// Merge one config file's entry for `name` into the overlay.
///
/// A missing file is not an error; returns whether the profile was present.
fn merge_layer(overlay: &mut ProfileOverlay, path: &Path, name: &str) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    let config = TokenkitConfig::from_toml(&contents)?;

    match config.profile.get(name) {
        Some(layer) => {
            overlay.merge_from(layer);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Build an overlay from `TOKENKIT_<PROFILE>_*` environment variables.
///
/// The profile name is uppercased with `-` mapped to `_`. Empty values are
/// treated as unset. Scopes are comma-separated.
fn env_overlay(name: &str) -> ProfileOverlay {
    let var = |field: &str| {
        let key = env_key(name, field);
        std::env::var(key).ok().filter(|v| !v.is_empty())
    };

    ProfileOverlay {
        client_id: var("CLIENT_ID"),
        client_secret: var("CLIENT_SECRET"),
        base_url: var("BASE_URL"),
        callback_url: var("CALLBACK_URL"),
        scopes: var("SCOPES").map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        }),
    }
}

/// Environment variable name for one profile field.
fn env_key(name: &str, field: &str) -> String {
    format!(
        "TOKENKIT_{}_{}",
        name.to_uppercase().replace('-', "_"),
        field
    )
}
