use directories::BaseDirs;
use figment::{
    providers::{Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub const CONFIG_FILE_NAME: &str = ".gitlab_mrs";

/// Written when no config exists; an unedited copy means "not configured yet"
pub const CONFIG_TEMPLATE: &str = r#"{
    "gitlab_host": "your.gitlab.host",
    "gitlab_token": "PRIVATE_TOKEN"
}"#;

/// GitLab credentials
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Hostname without scheme, e.g. `gitlab.example.com`
    pub gitlab_host: String,
    pub gitlab_token: String,
}

impl Config {
    pub fn is_complete(&self) -> bool {
        !self.gitlab_host.is_empty() && !self.gitlab_token.is_empty()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found, template written to {}", .path.display())]
    Missing { path: PathBuf },

    #[error("Config file {} still contains the template values", .path.display())]
    Unedited { path: PathBuf },

    #[error("Failed to access config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to load config from {}: {message}", .path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("Could not determine the home directory")]
    NoHomeDir,
}

impl ConfigError {
    /// Path the user should edit, for errors that mean "not configured yet"
    pub fn unconfigured_path(&self) -> Option<&Path> {
        match self {
            ConfigError::Missing { path } | ConfigError::Unedited { path } => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Reads credentials from a single JSON file
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `~/.gitlab_mrs`
    pub fn at_default_path() -> Result<Self, ConfigError> {
        let dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDir)?;
        Ok(Self::new(dirs.home_dir().join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config.
    ///
    /// A missing file is replaced by the template and reported as an error, as
    /// is a file that still matches the template byte for byte. Missing keys
    /// load as empty strings.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match fs::read_to_string(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.create_template()?;
                return Err(ConfigError::Missing {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
            Ok(content) if content == CONFIG_TEMPLATE => {
                return Err(ConfigError::Unedited {
                    path: self.path.clone(),
                });
            }
            Ok(_) => {}
        }

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Json::file(&self.path))
            .extract()
            .map_err(|e| ConfigError::Invalid {
                path: self.path.clone(),
                message: e.to_string(),
            })
    }

    /// Write the template unless a file already exists at the path
    fn create_template(&self) -> Result<(), ConfigError> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path);

        let mut file = match file {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        file.write_all(CONFIG_TEMPLATE.as_bytes())
            .map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;

        warn!(path = %self.path.display(), "wrote config template");
        Ok(())
    }
}
