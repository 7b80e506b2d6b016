use crate::model::{Category, MaterializationResult};

pub mod list;
pub mod materialize;
pub mod resolve;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One catalog entry as shown by `--list` and the interactive menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub key: String,
    pub title: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListing {
    pub category: Category,
    pub entries: Vec<ListedEntry>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub results: Vec<MaterializationResult>,
    pub listing: Vec<CatalogListing>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_result(&mut self, result: MaterializationResult) {
        self.results.push(result);
    }

    pub fn with_listing(mut self, listing: Vec<CatalogListing>) -> Self {
        self.listing = listing;
        self
    }

    /// True when no category failed. Skips count as success.
    pub fn succeeded(&self) -> bool {
        !self.results.iter().any(MaterializationResult::is_failure)
    }
}
