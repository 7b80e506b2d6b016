//! # Selection Strategies
//!
//! A run starts by turning user input into a [`SelectionRequest`]. There are
//! two ways to do that and exactly one is picked at startup:
//!
//! - [`FlagSelection`]: everything came from the command line. Categories
//!   without a flag are skipped, nobody is asked anything.
//! - [`InteractiveSelection`]: no selection flags were given. The user walks
//!   through numbered menus (report → slide → PPT file → target) and must
//!   confirm the summary before anything is copied.
//!
//! Both implement [`SelectionSource`], which also supplies the
//! [`OverwriteGuard`] used while copying.

use crate::catalog::TemplateCatalog;
use crate::commands::materialize::OverwriteGuard;
use crate::error::{Result, TemplarError};
use crate::model::{Category, EntryKind, OverwritePolicy, SelectionRequest, TemplateEntry};
use crate::paths;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const MAX_ATTEMPTS: usize = 3;
const RULE: &str = "============================================================";

pub trait SelectionSource {
    /// Produces the request, or `None` when the user cancelled.
    fn select(&mut self, catalog: &TemplateCatalog) -> Result<Option<SelectionRequest>>;

    fn guard(&mut self) -> &mut dyn OverwriteGuard;
}

#[derive(Debug, Clone, Default)]
pub struct FlagSelection {
    pub report: Option<String>,
    pub slide: Option<String>,
    pub ppt_template: Option<String>,
    pub ppt_name: Option<String>,
    pub target: Option<PathBuf>,
    pub no_clobber: bool,
    /// Used when `target` is unset.
    pub default_target: PathBuf,
}

impl SelectionSource for FlagSelection {
    fn select(&mut self, _catalog: &TemplateCatalog) -> Result<Option<SelectionRequest>> {
        let target = self
            .target
            .clone()
            .unwrap_or_else(|| self.default_target.clone());
        let policy = if self.no_clobber {
            OverwritePolicy::Skip
        } else {
            OverwritePolicy::Replace
        };

        Ok(Some(SelectionRequest {
            report: self.report.clone(),
            slide: self.slide.clone(),
            ppt_template: self.ppt_template.clone(),
            ppt_name: self.ppt_name.clone(),
            target,
            overwrite: policy,
        }))
    }

    fn guard(&mut self) -> &mut dyn OverwriteGuard {
        self
    }
}

/// Flagged runs never ask; an overwrite they did not request is declined.
impl OverwriteGuard for FlagSelection {
    fn confirm_overwrite(&mut self, _destination: &Path) -> Result<bool> {
        Ok(false)
    }
}

/// Menu-driven selection over any line-based input and output.
pub struct InteractiveSelection<R, W> {
    input: R,
    output: W,
    default_target: PathBuf,
}

impl<R: BufRead, W: Write> InteractiveSelection<R, W> {
    pub fn new(input: R, output: W, default_target: PathBuf) -> Self {
        Self {
            input,
            output,
            default_target,
        }
    }

    /// Reads one trimmed line; `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Numbered menu with `0` meaning skip. Invalid input is re-asked up to
    /// [`MAX_ATTEMPTS`] times before the category is skipped.
    fn choose(
        &mut self,
        heading: &str,
        entries: &[TemplateEntry],
        catalog: &TemplateCatalog,
    ) -> Result<Option<String>> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", format!("[{}]", heading).bold())?;
        writeln!(self.output, "0. Skip")?;
        for (i, entry) in entries.iter().enumerate() {
            let missing = if catalog.is_present(entry) {
                String::new()
            } else {
                format!(" {}", "(not initialized)".dimmed())
            };
            writeln!(
                self.output,
                "{}. {} ({}){}",
                i + 1,
                entry.title,
                entry.key,
                missing
            )?;
        }

        let prompt = format!("Choose (0-{}): ", entries.len());
        for _ in 0..MAX_ATTEMPTS {
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match parse_choice(&answer, entries.len()) {
                Ok(0) => return Ok(None),
                Ok(n) => return Ok(Some(entries[n - 1].key.clone())),
                Err(e) => writeln!(self.output, "{}", e.to_string().yellow())?,
            }
        }

        writeln!(self.output, "Too many invalid answers, skipping {}", heading)?;
        Ok(None)
    }

    fn choose_target(&mut self) -> Result<PathBuf> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", "[Target directory]".bold())?;
        writeln!(self.output, "Default: {}", self.default_target.display())?;
        let answer = self.ask("Target (empty for default): ")?;
        Ok(match answer.as_deref() {
            None | Some("") => self.default_target.clone(),
            Some(path) => paths::absolutize(&paths::expand_home(path)),
        })
    }

    fn confirm(&mut self, question: &str, default_yes: bool) -> Result<bool> {
        let hint = if default_yes { "(Y/n)" } else { "(y/N)" };
        let Some(answer) = self.ask(&format!("{} {}: ", question, hint))? else {
            return Ok(false);
        };
        Ok(match answer.to_ascii_lowercase().as_str() {
            "" => default_yes,
            "y" | "yes" => true,
            _ => false,
        })
    }

    fn summary(&mut self, request: &SelectionRequest, catalog: &TemplateCatalog) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "Selected templates:")?;
        if let Some(report) = &request.report {
            writeln!(
                self.output,
                "  Report: {}",
                title_of(catalog, Category::Report, report)
            )?;
        }
        if let Some(slide) = &request.slide {
            let title = title_of(catalog, Category::Slide, slide);
            match &request.ppt_template {
                Some(file) => writeln!(self.output, "  Slide:  {} ({})", title, file)?,
                None => writeln!(self.output, "  Slide:  {}", title)?,
            }
        }
        writeln!(self.output, "  Target: {}", request.target.display())?;
        writeln!(self.output, "{}", RULE)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> SelectionSource for InteractiveSelection<R, W> {
    fn select(&mut self, catalog: &TemplateCatalog) -> Result<Option<SelectionRequest>> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "Template selection")?;
        writeln!(self.output, "{}", RULE)?;

        let report = self.choose("Report templates", catalog.entries(Category::Report), catalog)?;
        let mut slide = self.choose("Slide templates", catalog.entries(Category::Slide), catalog)?;

        let mut ppt_template = None;
        let picked_deck = slide
            .as_deref()
            .and_then(|name| catalog.get(Category::Slide, name))
            .is_some_and(|entry| entry.kind == EntryKind::PptDeck);
        if picked_deck {
            let decks = catalog.entries(Category::Ppt);
            if decks.is_empty() {
                writeln!(self.output, "{}", "No PPT template files found".yellow())?;
            } else {
                ppt_template = self.choose("PPT template files", decks, catalog)?;
            }
            if ppt_template.is_none() {
                slide = None;
            }
        }

        if report.is_none() && slide.is_none() {
            return Err(TemplarError::NothingSelected);
        }

        let target = self.choose_target()?;
        let request = SelectionRequest {
            report,
            slide,
            ppt_template,
            ppt_name: None,
            target,
            overwrite: OverwritePolicy::Ask,
        };

        self.summary(&request, catalog)?;
        if !self.confirm("Start copying?", true)? {
            return Ok(None);
        }
        Ok(Some(request))
    }

    fn guard(&mut self) -> &mut dyn OverwriteGuard {
        self
    }
}

impl<R: BufRead, W: Write> OverwriteGuard for InteractiveSelection<R, W> {
    fn confirm_overwrite(&mut self, destination: &Path) -> Result<bool> {
        writeln!(
            self.output,
            "Destination already exists: {}",
            destination.display()
        )?;
        self.confirm("Overwrite?", false)
    }
}

fn parse_choice(answer: &str, len: usize) -> Result<usize> {
    match answer.parse::<usize>() {
        Ok(n) if n <= len => Ok(n),
        _ => Err(TemplarError::InvalidSelection(format!(
            "'{}' is not between 0 and {}",
            answer, len
        ))),
    }
}

fn title_of(catalog: &TemplateCatalog, category: Category, key: &str) -> String {
    catalog
        .get(category, key)
        .map(|e| e.title.clone())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplarConfig;
    use std::fs;
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    fn fixture() -> (TempDir, TemplateCatalog) {
        let dir = tempdir().unwrap();
        for name in ["latex_exp", "markdown_template", "beamer", "reveal-md"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::create_dir_all(dir.path().join("PPT/templates")).unwrap();
        fs::write(dir.path().join("PPT/templates/a.pptx"), "a").unwrap();
        fs::write(dir.path().join("PPT/templates/b.pptx"), "b").unwrap();
        let catalog = TemplateCatalog::load(dir.path(), &TemplarConfig::default()).unwrap();
        (dir, catalog)
    }

    fn interactive(script: &str) -> InteractiveSelection<Cursor<Vec<u8>>, Vec<u8>> {
        InteractiveSelection::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            PathBuf::from("/tmp/default_target"),
        )
    }

    #[test]
    fn test_flags_build_request() {
        let (_dir, catalog) = fixture();
        let mut flags = FlagSelection {
            slide: Some("beamer".into()),
            target: Some(PathBuf::from("/tmp/out")),
            ..FlagSelection::default()
        };

        let req = flags.select(&catalog).unwrap().unwrap();
        assert_eq!(req.slide.as_deref(), Some("beamer"));
        assert!(req.report.is_none());
        assert_eq!(req.target, PathBuf::from("/tmp/out"));
        assert_eq!(req.overwrite, OverwritePolicy::Replace);
    }

    #[test]
    fn test_flags_default_target_and_no_clobber() {
        let (_dir, catalog) = fixture();
        let mut flags = FlagSelection {
            report: Some("latex_exp".into()),
            no_clobber: true,
            default_target: PathBuf::from("/tmp/fallback"),
            ..FlagSelection::default()
        };

        let req = flags.select(&catalog).unwrap().unwrap();
        assert_eq!(req.target, PathBuf::from("/tmp/fallback"));
        assert_eq!(req.overwrite, OverwritePolicy::Skip);
        assert!(!flags.guard().confirm_overwrite(Path::new("/x")).unwrap());
    }

    #[test]
    fn test_interactive_full_walkthrough() {
        let (_dir, catalog) = fixture();
        let mut sel = interactive("1\n2\n/tmp/picked\ny\n");

        let req = sel.select(&catalog).unwrap().unwrap();
        assert_eq!(req.report.as_deref(), Some("latex_exp"));
        assert_eq!(req.slide.as_deref(), Some("reveal-md"));
        assert_eq!(req.target, PathBuf::from("/tmp/picked"));
        assert_eq!(req.overwrite, OverwritePolicy::Ask);

        let out = String::from_utf8(sel.output).unwrap();
        assert!(out.contains("Report templates"));
        assert!(out.contains("markdown_template"));
        assert!(out.contains("Target: /tmp/picked"));
    }

    #[test]
    fn test_interactive_ppt_deck_and_default_target() {
        let (_dir, catalog) = fixture();
        let mut sel = interactive("0\n3\n2\n\n\n");

        let req = sel.select(&catalog).unwrap().unwrap();
        assert!(req.report.is_none());
        assert_eq!(req.slide.as_deref(), Some("ppt"));
        assert_eq!(req.ppt_template.as_deref(), Some("b.pptx"));
        assert_eq!(req.target, PathBuf::from("/tmp/default_target"));
    }

    #[test]
    fn test_interactive_skipping_deck_drops_slide() {
        let (_dir, catalog) = fixture();
        let mut sel = interactive("1\n3\n0\n\ny\n");

        let req = sel.select(&catalog).unwrap().unwrap();
        assert_eq!(req.report.as_deref(), Some("latex_exp"));
        assert!(req.slide.is_none());
        assert!(req.ppt_template.is_none());
    }

    #[test]
    fn test_interactive_reprompts_invalid_input() {
        let (_dir, catalog) = fixture();
        let mut sel = interactive("9\nabc\n2\n0\n\ny\n");

        let req = sel.select(&catalog).unwrap().unwrap();
        assert_eq!(req.report.as_deref(), Some("markdown_template"));
        let out = String::from_utf8(sel.output).unwrap();
        assert!(out.contains("'9' is not between 0 and 2"));
    }

    #[test]
    fn test_interactive_gives_up_after_max_attempts() {
        let (_dir, catalog) = fixture();
        let mut sel = interactive("x\nx\nx\n1\n\ny\n");

        let req = sel.select(&catalog).unwrap().unwrap();
        assert!(req.report.is_none());
        assert_eq!(req.slide.as_deref(), Some("beamer"));
    }

    #[test]
    fn test_interactive_nothing_selected() {
        let (_dir, catalog) = fixture();
        let mut sel = interactive("0\n0\n");
        assert!(matches!(
            sel.select(&catalog).unwrap_err(),
            TemplarError::NothingSelected
        ));
    }

    #[test]
    fn test_interactive_declined_confirmation() {
        let (_dir, catalog) = fixture();
        let mut sel = interactive("1\n0\n\nn\n");
        assert!(sel.select(&catalog).unwrap().is_none());
    }

    #[test]
    fn test_interactive_eof_cancels() {
        let (_dir, catalog) = fixture();
        let mut sel = interactive("1\n0\n");
        assert!(sel.select(&catalog).unwrap().is_none());
    }

    #[test]
    fn test_overwrite_prompt_defaults_to_no() {
        let mut sel = interactive("\ny\n");
        assert!(!sel.confirm_overwrite(Path::new("/tmp/x")).unwrap());
        assert!(sel.confirm_overwrite(Path::new("/tmp/x")).unwrap());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("0", 2).unwrap(), 0);
        assert_eq!(parse_choice("2", 2).unwrap(), 2);
        assert!(parse_choice("3", 2).is_err());
        assert!(parse_choice("-1", 2).is_err());
    }
}
