//! Copies a [`SelectionRequest`] into its target directory.
//!
//! Categories are handled independently in the order report → slide → ppt. A
//! failure in one is recorded and the next one still runs; there is no rollback.
//! Nothing is written for a category until its template has resolved, so an
//! unknown or uninitialized template leaves the target untouched.

use crate::catalog::TemplateCatalog;
use crate::commands::{resolve, CmdMessage, CmdResult};
use crate::error::{Result, TemplarError};
use crate::model::{
    Category, EntryKind, MaterializationResult, OverwritePolicy, Outcome, SelectionRequest,
};
use crate::store::{fs as store_fs, IgnoreSet};
use std::path::{Path, PathBuf};

const PPT_EXTENSION: &str = "pptx";

/// Decides whether an existing destination may be replaced under
/// [`OverwritePolicy::Ask`].
pub trait OverwriteGuard {
    fn confirm_overwrite(&mut self, destination: &Path) -> Result<bool>;
}

/// Declines every overwrite. Used where nobody can be asked.
pub struct Decline;

impl OverwriteGuard for Decline {
    fn confirm_overwrite(&mut self, _destination: &Path) -> Result<bool> {
        Ok(false)
    }
}

impl<F> OverwriteGuard for F
where
    F: FnMut(&Path) -> Result<bool>,
{
    fn confirm_overwrite(&mut self, destination: &Path) -> Result<bool> {
        self(destination)
    }
}

struct Materializer<'a, 'g> {
    catalog: &'a TemplateCatalog,
    ignore: &'a IgnoreSet,
    target: &'a Path,
    policy: OverwritePolicy,
    guard: &'g mut dyn OverwriteGuard,
}

pub fn run(
    catalog: &TemplateCatalog,
    ignore: &IgnoreSet,
    request: &SelectionRequest,
    guard: &mut dyn OverwriteGuard,
) -> Result<CmdResult> {
    if request.is_empty() {
        return Err(TemplarError::NothingSelected);
    }

    let mut m = Materializer {
        catalog,
        ignore,
        target: &request.target,
        policy: request.overwrite,
        guard,
    };
    let mut result = CmdResult::default();

    if let Some(name) = request.report.as_deref() {
        result.add_result(m.tree(Category::Report, name));
    }

    // A bare --ppt-template means the ppt slide entry.
    let slide = request
        .slide
        .as_deref()
        .or(request.ppt_template.as_ref().map(|_| "ppt"));

    if let Some(name) = slide {
        let is_deck = catalog
            .get(Category::Slide, name)
            .is_some_and(|e| e.kind == EntryKind::PptDeck);

        if is_deck {
            result.add_result(m.deck(
                request.ppt_template.as_deref(),
                request.ppt_name.as_deref(),
            ));
        } else {
            result.add_result(m.tree(Category::Slide, name));
            if let Some(ppt) = request.ppt_template.as_deref() {
                result.add_result(MaterializationResult::skipped(
                    Category::Ppt,
                    Some(ppt),
                    format!("only used with --slide ppt, not '{}'", name),
                ));
            }
        }
    }

    let copied = result
        .results
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Copied { .. }))
        .count();
    if copied > 0 {
        result.add_message(CmdMessage::success(format!(
            "Templates copied to {}",
            request.target.display()
        )));
    }
    if !result.succeeded() {
        result.add_message(CmdMessage::error(
            "Some templates could not be copied, see above",
        ));
    }

    Ok(result)
}

impl Materializer<'_, '_> {
    fn tree(&mut self, category: Category, name: &str) -> MaterializationResult {
        let source = match resolve::run(self.catalog, category, name) {
            Ok(source) => source,
            Err(e) => return MaterializationResult::failed(category, Some(name), e.to_string()),
        };
        let dest = self.target.join(category.dest_dir_name());

        match self.prepare(&dest) {
            Ok(true) => {}
            Ok(false) => {
                return MaterializationResult::skipped(
                    category,
                    Some(name),
                    format!("{} already exists", dest.display()),
                );
            }
            Err(e) => return MaterializationResult::failed(category, Some(name), e.to_string()),
        }

        match store_fs::copy_tree(&source, &dest, self.ignore) {
            Ok(files) => {
                tracing::info!(%category, name, files, dest = %dest.display(), "copied template");
                MaterializationResult::copied(category, name, dest)
            }
            Err(e) => MaterializationResult::failed(category, Some(name), e.to_string()),
        }
    }

    fn deck(&mut self, file: Option<&str>, rename: Option<&str>) -> MaterializationResult {
        let Some(file) = file else {
            let err = TemplarError::PptTemplateRequired {
                available: self.catalog.names(Category::Ppt),
            };
            return MaterializationResult::failed(Category::Slide, Some("ppt"), err.to_string());
        };

        let source = match resolve::run(self.catalog, Category::Ppt, file) {
            Ok(source) => source,
            Err(e) => return MaterializationResult::failed(Category::Ppt, Some(file), e.to_string()),
        };
        let output_name = match output_file_name(file, rename) {
            Ok(name) => name,
            Err(e) => return MaterializationResult::failed(Category::Ppt, Some(file), e.to_string()),
        };
        let dest = self
            .target
            .join(Category::Ppt.dest_dir_name())
            .join(output_name);

        match self.prepare(&dest) {
            Ok(true) => {}
            Ok(false) => {
                return MaterializationResult::skipped(
                    Category::Ppt,
                    Some(file),
                    format!("{} already exists", dest.display()),
                );
            }
            Err(e) => return MaterializationResult::failed(Category::Ppt, Some(file), e.to_string()),
        }

        match store_fs::copy_file(&source, &dest) {
            Ok(()) => {
                tracing::info!(file, dest = %dest.display(), "copied ppt template");
                MaterializationResult::copied(Category::Ppt, file, dest)
            }
            Err(e) => MaterializationResult::failed(Category::Ppt, Some(file), e.to_string()),
        }
    }

    /// Creates the target and clears `dest` according to the policy.
    /// Returns false when the copy must not happen.
    fn prepare(&mut self, dest: &Path) -> Result<bool> {
        store_fs::ensure_dir(self.target)?;
        if !dest.exists() {
            return Ok(true);
        }

        let replace = match self.policy {
            OverwritePolicy::Replace => true,
            OverwritePolicy::Skip => false,
            OverwritePolicy::Ask => self.guard.confirm_overwrite(dest)?,
        };
        if replace {
            tracing::debug!(dest = %dest.display(), "replacing existing destination");
            store_fs::remove_existing(dest)?;
        }
        Ok(replace)
    }
}

/// The deck keeps its template name unless renamed; a rename without an
/// extension (or with a bare trailing dot) gets `.pptx`.
fn output_file_name(template: &str, rename: Option<&str>) -> Result<PathBuf> {
    let Some(rename) = rename.map(str::trim) else {
        return Ok(PathBuf::from(template));
    };

    let path = Path::new(rename);
    let is_plain_name = path.file_name().is_some_and(|n| n == path.as_os_str());
    if rename.is_empty() || !is_plain_name {
        return Err(TemplarError::InvalidSelection(format!(
            "PPT output name must be a file name: '{}'",
            rename
        )));
    }

    if path.extension().is_some_and(|ext| !ext.is_empty()) {
        Ok(path.to_path_buf())
    } else {
        Ok(path.with_extension(PPT_EXTENSION))
    }
}
