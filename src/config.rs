//! Configuration file support for ferro-sv.
//!
//! This module provides loading of `.ferro-sv.toml` configuration files
//! which can specify the data root and the browser-link template.
//!
//! # Example Configuration
//!
//! ```toml
//! [data]
//! root = "public"
//!
//! [browser]
//! base_url = "https://jbrowse.org/code/jb2/v2.6.3/?config=/demos/hg002_demo/config.json"
//! assembly = "hg19"
//! tracks = ["hg002_sv_calls", "hg19_genes"]
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.ferro-sv.toml` in current directory
//! 2. `~/.config/ferro-sv/config.toml`
//!
//! CLI flags take precedence over config file settings.

use std::fs;
use std::path::PathBuf;

use crate::link::LinkTemplate;

/// Parsed configuration from a .ferro-sv.toml file.
#[derive(Debug, Clone, Default)]
pub struct SvConfig {
    /// Data directory file paths are resolved against.
    pub data_root: Option<PathBuf>,
    /// Browser-link template overrides.
    pub browser: BrowserConfig,
}

/// Browser section of the config file.
#[derive(Debug, Clone, Default)]
pub struct BrowserConfig {
    pub base_url: Option<String>,
    pub assembly: Option<String>,
    pub tracks: Option<Vec<String>>,
}

/// Configuration loading error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "config IO error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SvConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Option<Self> {
        let cwd_config = PathBuf::from(".ferro-sv.toml");
        if cwd_config.exists() {
            if let Ok(config) = Self::load_from_path(&cwd_config) {
                return Some(config);
            }
        }

        if let Some(home) = std::env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("ferro-sv")
                .join("config.toml");
            if home_config.exists() {
                if let Ok(config) = Self::load_from_path(&home_config) {
                    return Some(config);
                }
            }
        }

        None
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(Self::parse(&content))
    }

    /// Parse configuration from TOML content.
    ///
    /// Only the small subset of TOML used here is understood; unknown
    /// sections and keys are ignored.
    pub fn parse(content: &str) -> Self {
        let mut config = SvConfig::default();
        let mut section = String::new();

        for line in content.lines() {
            let line = line.trim();

            if line.starts_with('#') || line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                section = line[1..line.len() - 1].to_string();
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match (section.as_str(), key) {
                ("data", "root") => {
                    config.data_root = Some(PathBuf::from(unquote(value)));
                }
                ("browser", "base_url") => {
                    config.browser.base_url = Some(unquote(value).to_string());
                }
                ("browser", "assembly") => {
                    config.browser.assembly = Some(unquote(value).to_string());
                }
                ("browser", "tracks") => {
                    config.browser.tracks = Some(parse_string_array(value));
                }
                _ => {}
            }
        }

        config
    }

    /// Apply the browser section on top of the default link template.
    pub fn link_template(&self) -> LinkTemplate {
        let mut template = LinkTemplate::default();
        if let Some(base_url) = &self.browser.base_url {
            template.base_url = base_url.clone();
        }
        if let Some(assembly) = &self.browser.assembly {
            template.assembly = assembly.clone();
        }
        if let Some(tracks) = &self.browser.tracks {
            template.tracks = tracks.clone();
        }
        template
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"').trim_matches('\'')
}

/// Parse a TOML string array like `["a", "b"]`.
fn parse_string_array(value: &str) -> Vec<String> {
    value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|item| unquote(item.trim()).to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
