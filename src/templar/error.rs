use crate::model::Category;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplarError {
    #[error("No {category} template named '{name}'")]
    NotFound { category: Category, name: String },

    #[error(
        "Template source missing: {} (run `git submodule update --init --recursive`)",
        .0.display()
    )]
    NotInitialized(PathBuf),

    #[error("Template name cannot be empty")]
    InvalidName,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("--slide ppt needs --ppt-template (available: {})", available_list(.available))]
    PptTemplateRequired { available: Vec<String> },

    #[error("At least one template must be selected")]
    NothingSelected,

    #[error("Not a template repository: {}", .0.display())]
    RepositoryMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid ignore pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl TemplarError {
    /// True for both unknown names and catalog entries whose source is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TemplarError::NotFound { .. } | TemplarError::NotInitialized(_)
        )
    }
}

fn available_list(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

pub type Result<T> = std::result::Result<T, TemplarError>;
