//! # API Facade
//!
//! [`TemplarApi`] is the single entry point the CLI talks to. It owns the
//! immutable catalog and config for one run and dispatches to `commands/`.
//! It does no terminal I/O; prompts reach it only through an
//! [`OverwriteGuard`].

use crate::catalog::TemplateCatalog;
use crate::commands::materialize::OverwriteGuard;
use crate::commands::{self, CmdResult};
use crate::config::TemplarConfig;
use crate::error::Result;
use crate::model::{Category, SelectionRequest};
use crate::paths;
use crate::store::IgnoreSet;
use std::path::{Path, PathBuf};

pub use crate::commands::{CatalogListing, CmdMessage, ListedEntry, MessageLevel};

pub struct TemplarApi {
    catalog: TemplateCatalog,
    config: TemplarConfig,
    ignore: IgnoreSet,
}

impl TemplarApi {
    /// Loads config and catalog for the repository at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let config = TemplarConfig::load(root)?;
        Self::with_config(root, config)
    }

    pub fn with_config(root: impl AsRef<Path>, config: TemplarConfig) -> Result<Self> {
        let ignore = IgnoreSet::new(&config.ignore_patterns)?;
        let catalog = TemplateCatalog::load(root.as_ref(), &config)?;
        Ok(Self {
            catalog,
            config,
            ignore,
        })
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &TemplarConfig {
        &self.config
    }

    pub fn resolve(&self, category: Category, name: &str) -> Result<PathBuf> {
        commands::resolve::run(&self.catalog, category, name)
    }

    pub fn materialize(
        &self,
        request: &SelectionRequest,
        guard: &mut dyn OverwriteGuard,
    ) -> Result<CmdResult> {
        commands::materialize::run(&self.catalog, &self.ignore, request, guard)
    }

    pub fn list(&self, only: Option<Category>) -> CmdResult {
        commands::list::run(&self.catalog, only)
    }

    pub fn default_target(&self) -> PathBuf {
        paths::default_target(&self.config.target_prefix, chrono::Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::materialize::Decline;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_open_reads_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("beamer")).unwrap();
        fs::write(
            dir.path().join("templar.json"),
            r#"{ "target_prefix": "talk" }"#,
        )
        .unwrap();

        let api = TemplarApi::open(dir.path()).unwrap();
        assert_eq!(api.config().target_prefix, "talk");
        let name = api.default_target();
        assert!(name
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("talk_"));
    }

    #[test]
    fn test_bad_ignore_pattern_fails_open() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("beamer")).unwrap();
        let config = TemplarConfig {
            ignore_patterns: vec!["[".to_string()],
            ..TemplarConfig::default()
        };
        assert!(TemplarApi::with_config(dir.path(), config).is_err());
    }

    #[test]
    fn test_dispatches_resolve_and_materialize() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("beamer")).unwrap();
        fs::write(dir.path().join("beamer/a.tex"), "a").unwrap();
        let out = tempdir().unwrap();

        let api = TemplarApi::open(dir.path()).unwrap();
        assert_eq!(
            api.resolve(Category::Slide, "beamer").unwrap(),
            dir.path().join("beamer")
        );

        let req = SelectionRequest::new(out.path()).with_slide("beamer");
        let res = api.materialize(&req, &mut Decline).unwrap();
        assert!(res.succeeded());
        assert!(out.path().join("slide/a.tex").is_file());
        assert_eq!(api.list(None).listing.len(), 3);
    }
}
