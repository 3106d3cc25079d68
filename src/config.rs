//! The config module loads the user's parsing preferences from a TOML file. Invalid configuration
//! is reported with a detailed error, and unrecognized keys are warned about and skipped.

use crate::error::{Result, TagParseError, TagParseExpectedError};
use crate::id3;
use crate::parsing::{self, ESCAPE_CHAR};
use crate::separators::Separators;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const KNOWN_KEYS: &[&str] = &["separators"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub separators: Separators,
}

impl Config {
    /// Read the configuration from `config_path_override`, or from the default location.
    pub fn parse(config_path_override: Option<&Path>) -> Result<Config> {
        let cfgpath = match config_path_override {
            Some(p) => p.to_path_buf(),
            None => default_config_path()?,
        };
        debug!("loading configuration from {}", cfgpath.display());

        let cfgtext = fs::read_to_string(&cfgpath).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TagParseExpectedError::ConfigNotFound { path: cfgpath.clone() }.into(),
            _ => TagParseError::Io(e),
        })?;
        Self::parse_str(&cfgtext, &cfgpath)
    }

    /// Parse configuration text. `cfgpath` is only used in error messages.
    pub fn parse_str(cfgtext: &str, cfgpath: &Path) -> Result<Config> {
        let data: toml::Table = cfgtext.parse().map_err(|e: toml::de::Error| TagParseExpectedError::ConfigDecode {
            path: cfgpath.to_path_buf(),
            message: e.message().to_string(),
        })?;

        let separators = match data.get("separators") {
            None => Separators::none(),
            Some(v) => v.clone().try_into::<Separators>().map_err(|e| TagParseExpectedError::InvalidConfigValue {
                key: "separators".to_string(),
                path: cfgpath.to_path_buf(),
                message: format!("must be a string: {}", e.message()),
            })?,
        };

        if separators.contains(ESCAPE_CHAR) {
            warn!("separators in {} contain the escape character {ESCAPE_CHAR:?}, which always splits and can never be escaped", cfgpath.display());
        }
        if separators.iter().any(char::is_whitespace) {
            warn!("separators in {} contain whitespace, which is trimmed from parsed values", cfgpath.display());
        }

        for key in data.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            warn!("unrecognized key {key} in configuration file ({}), ignoring", cfgpath.display());
        }

        Ok(Config { separators })
    }

    pub fn parse_multi_value<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        parsing::parse_multi_value(raw, &self.separators)
    }

    pub fn parse_id3_genre_names<S: AsRef<str>>(&self, raw: &[S]) -> Vec<String> {
        id3::parse_id3_genre_names(raw, &self.separators)
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("tagparse").join("config.toml"))
        .ok_or_else(|| TagParseError::Generic("could not determine the configuration directory".to_string()))
}
