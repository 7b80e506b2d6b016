use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Report,
    Slide,
    Ppt,
}

impl Category {
    /// Order in which categories are offered and materialized.
    pub fn all() -> &'static [Category] {
        &[Category::Report, Category::Slide, Category::Ppt]
    }

    /// Subdirectory of the target that receives this category's files.
    /// PPT decks are slides, so they land next to slide trees.
    pub fn dest_dir_name(&self) -> &'static str {
        match self {
            Category::Report => "report",
            Category::Slide | Category::Ppt => "slide",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Report => write!(f, "report"),
            Category::Slide => write!(f, "slide"),
            Category::Ppt => write!(f, "ppt"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(Category::Report),
            "slide" => Ok(Category::Slide),
            "ppt" => Ok(Category::Ppt),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// How a catalog entry is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Whole directory tree.
    Tree,
    /// Slide entry backed by the PPT directory; the actual file comes from the ppt category.
    PptDeck,
    /// A single file.
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub key: String,
    pub title: String,
    /// Relative to the repository root.
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl TemplateEntry {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<PathBuf>,
        kind: EntryKind,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            path: path.into(),
            kind,
        }
    }
}

/// What to do when a category's destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Remove the old destination and copy fresh.
    #[default]
    Replace,
    /// Leave the destination alone and report the category as skipped.
    Skip,
    /// Ask before replacing.
    Ask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub report: Option<String>,
    pub slide: Option<String>,
    pub ppt_template: Option<String>,
    /// Output file name for the PPT deck; defaults to the template's own name.
    pub ppt_name: Option<String>,
    pub target: PathBuf,
    pub overwrite: OverwritePolicy,
}

impl SelectionRequest {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            report: None,
            slide: None,
            ppt_template: None,
            ppt_name: None,
            target: target.into(),
            overwrite: OverwritePolicy::default(),
        }
    }

    pub fn with_report(mut self, name: impl Into<String>) -> Self {
        self.report = Some(name.into());
        self
    }

    pub fn with_slide(mut self, name: impl Into<String>) -> Self {
        self.slide = Some(name.into());
        self
    }

    pub fn with_ppt_template(mut self, name: impl Into<String>) -> Self {
        self.ppt_template = Some(name.into());
        self
    }

    pub fn with_ppt_name(mut self, name: impl Into<String>) -> Self {
        self.ppt_name = Some(name.into());
        self
    }

    pub fn with_overwrite(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite = policy;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.report.is_none() && self.slide.is_none() && self.ppt_template.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied { destination: PathBuf },
    Skipped { reason: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializationResult {
    pub category: Category,
    /// Catalog name, when one was requested.
    pub name: Option<String>,
    pub outcome: Outcome,
}

impl MaterializationResult {
    pub fn copied(category: Category, name: &str, destination: PathBuf) -> Self {
        Self {
            category,
            name: Some(name.to_string()),
            outcome: Outcome::Copied { destination },
        }
    }

    pub fn skipped(category: Category, name: Option<&str>, reason: impl Into<String>) -> Self {
        Self {
            category,
            name: name.map(str::to_string),
            outcome: Outcome::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn failed(category: Category, name: Option<&str>, reason: impl Into<String>) -> Self {
        Self {
            category,
            name: name.map(str::to_string),
            outcome: Outcome::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}
