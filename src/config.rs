//! Configuration handling for Templatizer builds.
//! This module provides the build-file model (targets, file groups, format
//! options) and loading with support for JSON and YAML formats
//! (templatizer.json, templatizer.yml, templatizer.yaml).

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names, tried in order.
pub const CONFIG_FILES: [&str; 3] =
    ["templatizer.json", "templatizer.yml", "templatizer.yaml"];

/// Raw format options as they appear in the build file.
///
/// Every field is optional; unset fields fall back to the selected format's
/// descriptor defaults. Keys are spelled in camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    /// Module format name: "commonjs", "amd" or "namespace"
    pub format: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub first_prefix: Option<String>,
    pub each_prefix: Option<String>,
    pub each_middle: Option<String>,
    pub each_suffix: Option<String>,
    pub last_suffix: Option<String>,
}

/// Source patterns accepted as a single string or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SrcList {
    One(String),
    Many(Vec<String>),
}

impl SrcList {
    /// Returns the configured patterns as a slice, in order.
    pub fn patterns(&self) -> &[String] {
        match self {
            SrcList::One(pattern) => std::slice::from_ref(pattern),
            SrcList::Many(patterns) => patterns,
        }
    }
}

/// One src→dest pairing: an ordered list of source patterns and the
/// destination file their compiled templates are concatenated into.
#[derive(Debug, Clone, Deserialize)]
pub struct FileGroup {
    pub src: SrcList,
    pub dest: PathBuf,
}

/// The `files` section of a target, in either accepted shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilesSpec {
    /// List form: `files: [{src: [...], dest: "..."}, ...]`
    List(Vec<FileGroup>),
    /// Compact object form: `files: {"dest.js": ["src", ...], ...}`
    Map(IndexMap<String, SrcList>),
}

impl Default for FilesSpec {
    fn default() -> Self {
        FilesSpec::List(Vec::new())
    }
}

impl FilesSpec {
    /// Normalizes either shape into explicit file groups, preserving order.
    pub fn groups(&self) -> Vec<FileGroup> {
        match self {
            FilesSpec::List(groups) => groups.clone(),
            FilesSpec::Map(map) => map
                .iter()
                .map(|(dest, src)| FileGroup {
                    src: src.clone(),
                    dest: PathBuf::from(dest),
                })
                .collect(),
        }
    }
}

/// A named build target: its own option overrides plus the file groups to
/// process.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Target {
    #[serde(default)]
    pub options: FormatOptions,
    #[serde(default)]
    pub files: FilesSpec,
}

/// A full build configuration: task-level options and the ordered target
/// map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: FormatOptions,
    #[serde(default)]
    pub targets: IndexMap<String, Target>,
}

/// Loads configuration from a directory, trying the supported file names in
/// order.
///
/// # Arguments
/// * `config_dir` - Directory to look the configuration up in
///
/// # Returns
/// * `Result<Config>` - Parsed contents of the first found file
///
/// # Errors
/// * `Error::ConfigNotFoundError` if none of the candidates exists
pub fn get_config<P: AsRef<Path>>(config_dir: P) -> Result<Config> {
    let config_dir = config_dir.as_ref();
    for file in CONFIG_FILES {
        let config_path = config_dir.join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            let content =
                std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
            return parse_config(&content);
        }
    }

    Err(Error::ConfigNotFoundError {
        config_dir: config_dir.display().to_string(),
        config_files: CONFIG_FILES.join(", "),
    })
}

/// Loads configuration from an explicitly named file.
pub fn load_config_file<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();
    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(Error::IoError)?;
    parse_config(&content)
}

/// Parses configuration content.
///
/// # Arguments
/// * `content` - Raw configuration content as string
///
/// # Errors
/// * `Error::ConfigParseError` if parsing fails
pub fn parse_config(content: &str) -> Result<Config> {
    // Try parsing as JSON first, fall back to YAML
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigParseError(e.to_string())),
    }
}
