use anyhow::{Context, Result};
use repogen_core::GenerationOptions;
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// File read by `repogen generate` unless `--config` names another one.
pub const CONFIG_FILE: &str = "repogen.toml";

/// Contents of `repogen.toml`. Command-line flags override every value.
///
/// ```toml
/// url = "mysql://root@localhost:3306/shop"
/// out = "internal"
///
/// [generate]
/// include_json_tags = true
///
/// [generate.packages]
/// module = "github.com/acme/shop/internal"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Connection URL of the schema to introspect
    pub url: Option<String>,

    /// Directory artifacts are written under
    pub out: Option<PathBuf>,

    /// Directory holding template overrides
    pub templates: Option<PathBuf>,

    /// Generation options
    pub generate: GenerationOptions,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generation options
    pub fn generate(mut self, options: GenerationOptions) -> Self {
        self.generate = options;
        self
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("parsing {}", path.display()))
    }

    /// Like [`load`](Self::load), returning the defaults when `path` does not
    /// exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
