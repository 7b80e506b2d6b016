use crate::error::{Result, TemplarError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "templar.json";
const DEFAULT_TARGET_PREFIX: &str = "template_project";
const DEFAULT_PPT_DIR: &str = "PPT/templates";

/// Configuration for templar, stored in `templar.json` at the repository root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplarConfig {
    /// Names matching any of these globs are left out of tree copies
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,

    /// Prefix of the timestamped default target directory
    #[serde(default = "default_target_prefix")]
    pub target_prefix: String,

    /// Directory holding the .pptx templates, relative to the repository root
    #[serde(default = "default_ppt_dir")]
    pub ppt_dir: String,
}

fn default_ignore_patterns() -> Vec<String> {
    [
        "*.aux",
        "*.log",
        "*.out",
        "*.toc",
        "*.synctex.gz",
        "*.bbl",
        "*.blg",
        "*.fls",
        "*.fdb_latexmk",
        "*.nav",
        "*.snm",
        "*.vrb",
        "*.pdf",
        "site",
        "__pycache__",
        "*.pyc",
        ".git",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_target_prefix() -> String {
    DEFAULT_TARGET_PREFIX.to_string()
}

fn default_ppt_dir() -> String {
    DEFAULT_PPT_DIR.to_string()
}

impl Default for TemplarConfig {
    fn default() -> Self {
        Self {
            ignore_patterns: default_ignore_patterns(),
            target_prefix: default_target_prefix(),
            ppt_dir: default_ppt_dir(),
        }
    }
}

impl TemplarConfig {
    /// Load config from the repository root, or return defaults if not found
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let config_path = root.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TemplarError::Io)?;
        let config: TemplarConfig =
            serde_json::from_str(&content).map_err(TemplarError::Serialization)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }
}
