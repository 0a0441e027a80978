//! Configuration system for the tokenkit CLI.
//!
//! Provides TOML-based profile configuration with:
//! - Named provider profiles (`[profile.keycloak]`, `[profile.dev]`, etc.)
//! - Config file layering (XDG user config + project-local overrides)
//! - Per-field environment variable overrides (`TOKENKIT_<PROFILE>_*`)
//!
//! Profiles resolve to an immutable [`Profile`] that callers pass
//! explicitly into flow functions.

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{load_profile, load_profile_from, xdg_config_dir, xdg_config_path};
pub use error::{ConfigError, Result};
pub use types::{Profile, ProfileOverlay, TokenkitConfig};
