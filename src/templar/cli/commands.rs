//! # CLI Layer
//!
//! The only place that knows about the terminal: it parses flags, picks the
//! selection strategy, prints results and turns them into an exit status.
//!
//! - `run()`: entry point called by `main.rs`, returns whether every
//!   requested category succeeded
//! - `handle_*()`: one per action, calling the API and printing its result

use super::print::{print_listing, print_messages, print_results};
use super::setup::{init_logging, Cli};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use templar::api::TemplarApi;
use templar::error::Result;
use templar::model::Category;
use templar::paths::{absolutize, expand_home};
use templar::selection::{FlagSelection, InteractiveSelection, SelectionSource};

pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = match &cli.root {
        Some(root) => absolutize(root),
        None => std::env::current_dir()?,
    };
    tracing::debug!(root = %root.display(), "opening template repository");
    let api = TemplarApi::open(&root)?;

    if let Some(only) = cli.list {
        handle_list(&api, only);
        return Ok(true);
    }

    let mut source: Box<dyn SelectionSource> = if cli.has_selection_flags() {
        Box::new(flag_selection(cli, api.default_target()))
    } else {
        Box::new(InteractiveSelection::new(
            io::stdin().lock(),
            io::stdout(),
            api.default_target(),
        ))
    };
    handle_materialize(&api, source.as_mut())
}

fn flag_selection(cli: Cli, default_target: PathBuf) -> FlagSelection {
    FlagSelection {
        report: cli.report,
        slide: cli.slide,
        ppt_template: cli.ppt_template,
        ppt_name: cli.ppt_name,
        target: cli.target.map(|t| absolutize(&expand_home(&t))),
        no_clobber: cli.no_clobber,
        default_target,
    }
}

fn handle_list(api: &TemplarApi, only: Option<Category>) {
    let result = api.list(only);
    print_listing(&result.listing);
    print_messages(&result.messages);
}

fn handle_materialize(api: &TemplarApi, source: &mut dyn SelectionSource) -> Result<bool> {
    let Some(request) = source.select(api.catalog())? else {
        println!("Cancelled.");
        return Ok(true);
    };

    let result = api.materialize(&request, source.guard())?;
    print_results(&result.results);
    print_messages(&result.messages);
    Ok(result.succeeded())
}
