use crate::error::{EncdecError, Result};
use crate::model::Algorithm;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_SEPARATOR: &str = " ";

/// Overrides the config directory (used by tests and portable setups).
pub const HOME_ENV: &str = "ENCDEC_HOME";

/// Keys accepted by `encdec config`, in display order.
pub const CONFIG_KEYS: [&str; 3] = ["default-alg", "strict-alg", "line-sep"];

/// Persisted defaults, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncdecConfig {
    /// Algorithm used when `--alg` is not given
    #[serde(default)]
    pub default_algorithm: Algorithm,

    /// Reject unknown `--alg` tokens instead of falling back to shift
    #[serde(default)]
    pub strict_algorithm: bool,

    /// String placed between the lines of an input file
    #[serde(default = "default_line_separator")]
    pub line_separator: String,
}

fn default_line_separator() -> String {
    DEFAULT_LINE_SEPARATOR.to_string()
}

impl Default for EncdecConfig {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::default(),
            strict_algorithm: false,
            line_separator: default_line_separator(),
        }
    }
}

/// Resolves the config directory: `$ENCDEC_HOME` if set, else the platform
/// config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "encdec", "encdec")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| EncdecError::Api("Could not determine config dir".into()))
}

impl EncdecConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| EncdecError::io(&config_path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(|e| EncdecError::io(config_dir, e))?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|e| EncdecError::io(&config_path, e))?;
        Ok(())
    }

    /// Display value for a config key.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-alg" => Ok(self.default_algorithm.to_string()),
            "strict-alg" => Ok(self.strict_algorithm.to_string()),
            "line-sep" => Ok(format!("{:?}", self.line_separator)),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-alg" => self.default_algorithm = value.parse()?,
            "strict-alg" => {
                self.strict_algorithm = value.parse().map_err(|_| {
                    EncdecError::Api(format!(
                        "Invalid value for strict-alg: {} (expected 'true' or 'false')",
                        value
                    ))
                })?
            }
            "line-sep" => self.line_separator = unescape(value),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their display values.
    pub fn entries(&self) -> Vec<(String, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|v| (key.to_string(), v)))
            .collect()
    }
}

fn unknown_key(key: &str) -> EncdecError {
    EncdecError::Api(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

// `\n` and `\t` expand to newline and tab.
fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\t", "\t")
}
