use colored::{ColoredString, Colorize};
use templar::api::{CatalogListing, CmdMessage, MessageLevel};
use templar::model::{MaterializationResult, Outcome};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

pub(super) fn print_results(results: &[MaterializationResult]) {
    for result in results {
        println!("{}", format_result(result));
    }
}

pub(super) fn print_listing(listing: &[CatalogListing]) {
    for (i, section) in listing.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("[{}]", section.category).bold());
        if section.entries.is_empty() {
            println!("  {}", "(none)".dimmed());
        }
        for entry in &section.entries {
            let line = format!("  {:<20} {}", entry.key, entry.title);
            if entry.present {
                println!("{}", line);
            } else {
                println!("{} {}", line, "(not initialized)".dimmed());
            }
        }
    }
}

fn format_message(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.dimmed(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}

fn format_result(result: &MaterializationResult) -> String {
    let label = match &result.name {
        Some(name) => format!("{} {}", result.category, name),
        None => result.category.to_string(),
    };
    match &result.outcome {
        Outcome::Copied { destination } => {
            format!("{} {} -> {}", "✓".green(), label, destination.display())
        }
        Outcome::Skipped { reason } => {
            format!("{} {}: skipped, {}", "-".yellow(), label, reason)
        }
        Outcome::Failed { reason } => format!("{} {}: {}", "✗".red(), label, reason.red()),
    }
}
