use crate::catalog::TemplateCatalog;
use crate::commands::{CatalogListing, CmdMessage, CmdResult, ListedEntry};
use crate::model::Category;

/// Lists every category, or only `only` when given.
pub fn run(catalog: &TemplateCatalog, only: Option<Category>) -> CmdResult {
    let listing: Vec<CatalogListing> = Category::all()
        .iter()
        .filter(|&&category| only.map_or(true, |c| c == category))
        .map(|&category| CatalogListing {
            category,
            entries: catalog
                .entries(category)
                .iter()
                .map(|entry| ListedEntry {
                    key: entry.key.clone(),
                    title: entry.title.clone(),
                    present: catalog.is_present(entry),
                })
                .collect(),
        })
        .collect();

    let mut result = CmdResult::default().with_listing(listing);
    let missing = result
        .listing
        .iter()
        .flat_map(|l| &l.entries)
        .filter(|e| !e.present)
        .count();
    if missing > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} template(s) not initialized; run `git submodule update --init --recursive`",
            missing
        )));
    }
    result
}
