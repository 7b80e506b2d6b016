//! # Template Catalog
//!
//! The catalog is the set of template names the tool knows about, grouped by
//! [`Category`]. It is built once from the repository layout and never mutated;
//! callers receive it by reference.
//!
//! Report and slide entries are fixed: they correspond to the submodules the
//! repository vendors. PPT entries are discovered by listing the `.pptx` files
//! in the PPT template directory, so dropping a new deck there makes it
//! selectable without code changes.
//!
//! ```text
//! <root>/
//! ├── latex_exp/            report  latex_exp
//! ├── markdown_template/    report  markdown_template
//! ├── beamer/               slide   beamer
//! ├── reveal-md/            slide   reveal-md
//! └── PPT/templates/        slide   ppt
//!     └── *.pptx            ppt     <file name>
//! ```
//!
//! Entries whose source is missing (an uninitialized submodule) stay in the
//! catalog; resolving them fails instead.

use crate::config::TemplarConfig;
use crate::error::{Result, TemplarError};
use crate::model::{Category, EntryKind, TemplateEntry};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const PPT_EXTENSION: &str = "pptx";

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    root: PathBuf,
    entries: BTreeMap<Category, Vec<TemplateEntry>>,
}

impl TemplateCatalog {
    /// Builds the catalog for the repository at `root`.
    ///
    /// Fails with [`TemplarError::RepositoryMissing`] when `root` is not a
    /// directory or none of the known template locations exist under it.
    pub fn load(root: impl Into<PathBuf>, config: &TemplarConfig) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(TemplarError::RepositoryMissing(root));
        }

        let ppt_dir = PathBuf::from(&config.ppt_dir);
        let mut entries = BTreeMap::new();
        entries.insert(
            Category::Report,
            vec![
                TemplateEntry::new("latex_exp", "LaTeX paper", "latex_exp", EntryKind::Tree),
                TemplateEntry::new(
                    "markdown_template",
                    "Markdown document",
                    "markdown_template",
                    EntryKind::Tree,
                ),
            ],
        );
        entries.insert(
            Category::Slide,
            vec![
                TemplateEntry::new("beamer", "Beamer LaTeX slides", "beamer", EntryKind::Tree),
                TemplateEntry::new("reveal-md", "reveal-md slides", "reveal-md", EntryKind::Tree),
                TemplateEntry::new("ppt", "PowerPoint deck", &ppt_dir, EntryKind::PptDeck),
            ],
        );
        entries.insert(Category::Ppt, list_ppt_files(&root, &ppt_dir));

        let catalog = Self { root, entries };
        let any_present = catalog
            .entries
            .values()
            .flatten()
            .any(|entry| catalog.is_present(entry));
        if !any_present {
            return Err(TemplarError::RepositoryMissing(catalog.root));
        }

        tracing::debug!(
            root = %catalog.root.display(),
            ppt_templates = catalog.entries(Category::Ppt).len(),
            "catalog built"
        );
        Ok(catalog)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entries of a category in display order.
    pub fn entries(&self, category: Category) -> &[TemplateEntry] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn get(&self, category: Category, name: &str) -> Option<&TemplateEntry> {
        self.entries(category).iter().find(|e| e.key == name)
    }

    pub fn names(&self, category: Category) -> Vec<String> {
        self.entries(category).iter().map(|e| e.key.clone()).collect()
    }

    pub fn source_path(&self, entry: &TemplateEntry) -> PathBuf {
        self.root.join(&entry.path)
    }

    /// Whether the entry's source exists with the expected shape.
    pub fn is_present(&self, entry: &TemplateEntry) -> bool {
        let path = self.source_path(entry);
        match entry.kind {
            EntryKind::File => path.is_file(),
            EntryKind::Tree | EntryKind::PptDeck => path.is_dir(),
        }
    }
}

/// Lists the `.pptx` files of the PPT directory. A directory that is absent
/// or cannot be read yields no entries; only the ppt category is affected.
fn list_ppt_files(root: &Path, ppt_dir: &Path) -> Vec<TemplateEntry> {
    let dir = root.join(ppt_dir);
    let mut names = match read_ppt_names(&dir) {
        Ok(names) => names,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "cannot list PPT templates");
            Vec::new()
        }
    };
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let path = ppt_dir.join(&name);
            TemplateEntry::new(name.clone(), name, path, EntryKind::File)
        })
        .collect()
}

fn read_ppt_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_ppt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PPT_EXTENSION));
        if !path.is_file() || !is_ppt {
            continue;
        }
        if let Some(name) = path.file_name() {
            names.push(name.to_string_lossy().into_owned());
        }
    }
    Ok(names)
}
