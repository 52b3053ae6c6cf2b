//! Runtime configuration, read from YAML.
//!
//! ```yaml
//! output: build/output.cpp
//! preamble: "#include <iostream>"
//! log_level: info
//! colors:
//!   keyword: "#0000FF"
//! ```
//!
//! Every field is optional; anything missing falls back to its default.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "runic.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where `compile` writes the wrapped program.
    pub output: PathBuf,
    /// Text placed before the transpiled body.
    pub preamble: String,
    /// Entry point appended after the transpiled body.
    pub entry_point: String,
    /// Default log filter when neither `-v` nor `RUNIC_LOG` is set.
    pub log_level: String,
    pub colors: ColorSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output.cpp"),
            preamble: "#include <iostream>".to_string(),
            entry_point: "int main() {\n\treturn 0;\n}".to_string(),
            log_level: "warn".to_string(),
            colors: ColorSettings::default(),
        }
    }
}

/// Highlight colours as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSettings {
    pub keyword: String,
    pub string: String,
    pub comment: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            keyword: "#0000FF".to_string(),
            string: "#008000".to_string(),
            comment: "#808080".to_string(),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    #[diagnostic(code(runic::config::read))]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file '{path}'")]
    #[diagnostic(code(runic::config::parse), help("see the example at the top of config.rs"))]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl Config {
    pub fn from_yaml(text: &str, path: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_yaml(&text, &display)
    }

    /// An explicit path must exist; otherwise `runic.yaml` in the working
    /// directory is used when present, and defaults when it is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(fallback)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "output: out/main.cpp\ncolors:\n  comment: \"#111111\"\n";
        let config = Config::from_yaml(yaml, "test").unwrap();
        assert_eq!(config.output, PathBuf::from("out/main.cpp"));
        assert_eq!(config.preamble, "#include <iostream>");
        assert_eq!(config.colors.comment, "#111111");
        assert_eq!(config.colors.keyword, "#0000FF");
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_yaml("\n", "test").unwrap(), Config::default());
    }

    #[test]
    fn malformed_yaml_is_reported_with_path() {
        let err = Config::from_yaml("output: [unclosed", "bad.yaml").unwrap_err();
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::discover(Some(Path::new("definitely/not/here.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
