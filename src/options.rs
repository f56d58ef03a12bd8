use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Error;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "fastlines.toml";

/// How the bytes of a line are turned into a `String`.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// Invalid UTF-8 is an error
    #[default]
    Utf8,
    /// Invalid sequences are replaced with U+FFFD
    Utf8Lossy,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// File to read when none is given on the command line
    pub path: Option<PathBuf>,
    pub encoding: Encoding,
    /// Transparently decompress gzip files
    pub decompress: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            path: None,
            encoding: Encoding::default(),
            decompress: true,
        }
    }
}

impl Options {
    pub fn config_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    /// Loads the options, falling back to the defaults if the file is missing or invalid.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!("No configuration file {path:?}, using default values");
            return Options::default();
        }
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str::<Options>(&text) {
                Ok(opts) => {
                    info!("Options loaded from {path:?}");
                    opts
                }
                Err(e) => {
                    warn!("Invalid configuration file {path:?}, using default values: {e}");
                    Options::default()
                }
            },
            Err(e) => {
                warn!("Unable to read {path:?}, using default values: {e}");
                Options::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let toml_text = toml::to_string_pretty(self).map_err(|e| Error::other(format!("{e}")))?;
        fs::write(path, toml_text)?;
        info!("Options saved into {path:?}");
        Ok(())
    }
}
