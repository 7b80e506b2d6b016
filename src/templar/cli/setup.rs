use clap::Parser;
use templar::model::Category;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TEMPLAR_LOG";

#[derive(Parser, Debug, Default)]
#[command(name = "templar", bin_name = "templar", version)]
#[command(
    about = "Copy report and slide templates into a new project",
    long_about = None,
    after_help = "Examples:
  templar                                            interactive
  templar --report latex_exp --slide beamer
  templar --report markdown_template --slide reveal-md --target ~/my_project
  templar --slide beamer --target ~/presentation
  templar --slide ppt --ppt-template beamer_type.pptx --target ~/presentation"
)]
pub struct Cli {
    /// Report template to copy
    #[arg(long, value_name = "NAME", help_heading = "Selection")]
    pub report: Option<String>,

    /// Slide template to copy
    #[arg(long, value_name = "NAME", help_heading = "Selection")]
    pub slide: Option<String>,

    /// PowerPoint file for `--slide ppt` (implies it when given alone)
    #[arg(long, value_name = "FILE", help_heading = "Selection")]
    pub ppt_template: Option<String>,

    /// Output name for the PowerPoint file
    #[arg(long, value_name = "FILE", help_heading = "Selection")]
    pub ppt_name: Option<String>,

    /// Destination directory [default: ~/Downloads/template_project_<timestamp>]
    #[arg(long, value_name = "PATH", help_heading = "Selection")]
    pub target: Option<String>,

    /// Keep existing destinations instead of replacing them
    #[arg(long, help_heading = "Selection")]
    pub no_clobber: bool,

    /// Template repository root
    #[arg(long, env = "TEMPLAR_ROOT", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// List available templates (optionally one category: report, slide, ppt) and exit
    #[arg(long, value_name = "CATEGORY")]
    pub list: Option<Option<Category>>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Any of these switches the run to flagged mode.
    pub fn has_selection_flags(&self) -> bool {
        self.report.is_some()
            || self.slide.is_some()
            || self.ppt_template.is_some()
            || self.ppt_name.is_some()
            || self.target.is_some()
            || self.no_clobber
    }
}

/// Logs go to stderr so they never mix with the copy report on stdout.
/// `TEMPLAR_LOG` overrides the level picked from `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "templar=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::try_parse_from(["templar"]).unwrap();
        assert!(!cli.has_selection_flags());
    }

    #[test]
    fn test_root_and_list_do_not_select() {
        let cli = Cli::try_parse_from(["templar", "--root", "/repo", "--list", "-v"]).unwrap();
        assert!(!cli.has_selection_flags());
        assert_eq!(cli.list, Some(None));
        assert!(cli.verbose);
    }

    #[test]
    fn test_list_category_parsed() {
        let cli = Cli::try_parse_from(["templar", "--list", "Slide"]).unwrap();
        assert_eq!(cli.list, Some(Some(Category::Slide)));
        assert!(Cli::try_parse_from(["templar", "--list", "deck"]).is_err());
    }

    #[test]
    fn test_selection_flags() {
        let cli = Cli::try_parse_from([
            "templar",
            "--slide",
            "ppt",
            "--ppt-template",
            "beamer_type.pptx",
            "--target",
            "~/presentation",
        ])
        .unwrap();
        assert!(cli.has_selection_flags());
        assert_eq!(cli.slide.as_deref(), Some("ppt"));
        assert_eq!(cli.ppt_template.as_deref(), Some("beamer_type.pptx"));
        assert_eq!(cli.target.as_deref(), Some("~/presentation"));
    }

    #[test]
    fn test_target_alone_is_flagged() {
        let cli = Cli::try_parse_from(["templar", "--target", "/tmp/out"]).unwrap();
        assert!(cli.has_selection_flags());
    }

    #[test]
    fn test_no_clobber_is_flagged() {
        let cli = Cli::try_parse_from(["templar", "--no-clobber"]).unwrap();
        assert!(cli.has_selection_flags());
    }
}
