//! # Storage Layer
//!
//! Everything that writes to the target directory lives here. The command layer
//! decides *what* to copy and *where*; this layer only knows how to copy a tree
//! or a single file and which names to leave behind.
//!
//! Copies overwrite silently. Deciding whether an existing destination may be
//! replaced is the caller's job (see `commands::materialize`).

pub mod fs;

use crate::error::Result;
use glob::Pattern;
use std::path::Path;

/// Glob patterns matched against a single file or directory name.
///
/// A matching directory is pruned with everything below it.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.patterns.iter().any(|p| p.matches(&name))
    }
}
