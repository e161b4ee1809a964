//! Library configuration
//!
//! Settings are read from TOML. Every section is optional; anything left out
//! falls back to the compiled-in defaults below.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::template::TemplateError;

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse configuration TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid template override: {0}")]
    Template(#[from] TemplateError),
}

/// Default configuration
const DEFAULT_CONFIG: &str = r#"
[assets]
# URL prefix static asset paths are resolved against
base_url = "/static/"
# Directory `{% svg ... static=true %}` sources are read relative to
base_dir = "."

[icons]
kit_url = "https://kit.fontawesome.com/791417c75e.js"

[icons.prefixes]

[links]
login = "/components/user/login"
signup = "/components/user/signup"
profile = "/components/user/profile"
logout = "/components/user/logout"
admin = "/admin"

[templates]
"#;

/// Complete library configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentConfig {
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub icons: IconConfig,
    #[serde(default)]
    pub links: LinkConfig,
    /// Named slot template overrides, keyed by template name
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub base_url: String,
    pub base_dir: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_url: "/static/".to_string(),
            base_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub kit_url: String,
    /// Extra icon name to style prefix entries
    pub prefixes: BTreeMap<String, String>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            kit_url: crate::icon::DEFAULT_KIT_URL.to_string(),
            prefixes: BTreeMap::new(),
        }
    }
}

/// Targets of the user and admin menu buttons
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub login: String,
    pub signup: String,
    pub profile: String,
    pub logout: String,
    pub admin: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            login: "/components/user/login".to_string(),
            signup: "/components/user/signup".to_string(),
            profile: "/components/user/profile".to_string(),
            logout: "/components/user/logout".to_string(),
            admin: "/admin".to_string(),
        }
    }
}

impl ComponentConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the asset base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.assets.base_url = base_url.into();
        self
    }

    /// Set the directory static SVG sources are read from
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.assets.base_dir = base_dir.into();
        self
    }

    /// Override a named template
    pub fn with_template(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.templates.insert(name.into(), source.into());
        self
    }
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self::from_str(DEFAULT_CONFIG).expect("Default configuration should be valid TOML")
    }
}
