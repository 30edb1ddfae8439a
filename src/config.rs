use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{files::is_glob_pattern, table::ReplacementTable};

pub const CONFIG_FILE_NAME: &str = ".relabelrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base directory for `files` and `includes`, relative to the config file.
    #[serde(default = "default_root")]
    pub root: String,
    /// Explicit file list, processed in order.
    #[serde(default)]
    pub files: Vec<String>,
    /// Directories or glob patterns to expand when `files` is empty.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    /// File extensions kept when walking included directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "ReplacementTable::builtin")]
    pub rules: ReplacementTable,
    /// Apply longer source literals first.
    #[serde(default)]
    pub sort_by_length: bool,
}

fn default_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["swift".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            files: Vec::new(),
            includes: Vec::new(),
            ignores: Vec::new(),
            extensions: default_extensions(),
            rules: ReplacementTable::builtin(),
            sort_by_length: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` or `includes` is
    /// invalid, or if a replacement rule has an empty source literal.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for pattern in &self.includes {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        self.rules.validate().context("Invalid 'rules'")?;

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory that relative config paths resolve against.
    pub base_dir: PathBuf,
}

impl ConfigLoadResult {
    /// The configured root resolved against `base_dir`, without `.` segments.
    pub fn root(&self) -> PathBuf {
        let relative: PathBuf = Path::new(&self.config.root)
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        if relative.as_os_str().is_empty() {
            self.base_dir.clone()
        } else {
            self.base_dir.join(relative)
        }
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
