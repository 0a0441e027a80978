//! Profile configuration types.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Resolved identity-provider registration for one named profile.
///
/// Immutable after loading; flow functions receive it by reference rather
/// than reading ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// OAuth client identifier.
    pub client_id: String,
    /// Client secret, absent for public (PKCE-only) clients.
    pub client_secret: Option<String>,
    /// Provider base URL; endpoint paths are derived from it.
    pub base_url: String,
    /// Redirect URI registered with the provider.
    pub callback_url: String,
    /// Default scopes requested during authorization.
    pub scopes: Vec<String>,
}

impl Profile {
    /// Authorization endpoint URL.
    pub fn authorize_url(&self) -> String {
        format!("{}/authorize", self.base_url.trim_end_matches('/'))
    }

    /// Token endpoint URL.
    pub fn token_url(&self) -> String {
        format!("{}/token", self.base_url.trim_end_matches('/'))
    }

    /// Token introspection endpoint URL.
    pub fn introspection_url(&self) -> String {
        format!("{}/introspect", self.base_url.trim_end_matches('/'))
    }
}

/// Partial profile used for layered merging.
///
/// Config file layers and the environment each produce one of these;
/// later layers override earlier ones field by field before the result
/// is validated into a [`Profile`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileOverlay {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub base_url: Option<String>,
    pub callback_url: Option<String>,
    pub scopes: Option<Vec<String>>,
}

impl ProfileOverlay {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.client_id.is_none()
            && self.client_secret.is_none()
            && self.base_url.is_none()
            && self.callback_url.is_none()
            && self.scopes.is_none()
    }

    /// Merge another overlay on top of this one; set fields in `other` win.
    pub fn merge_from(&mut self, other: &ProfileOverlay) {
        if other.client_id.is_some() {
            self.client_id = other.client_id.clone();
        }
        if other.client_secret.is_some() {
            self.client_secret = other.client_secret.clone();
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url.clone();
        }
        if other.callback_url.is_some() {
            self.callback_url = other.callback_url.clone();
        }
        if other.scopes.is_some() {
            self.scopes = other.scopes.clone();
        }
    }

    /// Validate required fields and produce a resolved [`Profile`].
    pub fn into_profile(self, name: &str) -> Result<Profile> {
        let require = |field: &str, value: Option<String>| {
            value.ok_or_else(|| ConfigError::MissingField {
                field: field.to_string(),
                profile: name.to_string(),
            })
        };

        Ok(Profile {
            client_id: require("client_id", self.client_id)?,
            client_secret: self.client_secret,
            base_url: require("base_url", self.base_url)?,
            callback_url: require("callback_url", self.callback_url)?,
            scopes: self.scopes.unwrap_or_default(),
        })
    }
}

/// On-disk config file schema: `[profile.<name>]` tables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenkitConfig {
    #[serde(default)]
    pub profile: BTreeMap<String, ProfileOverlay>,
}

impl TokenkitConfig {
    /// Parse a config file from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}
