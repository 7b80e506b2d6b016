//! # Templar
//!
//! Templar copies document templates (LaTeX papers, Markdown, Beamer and
//! reveal-md slides, PowerPoint decks) out of a template repository into a
//! fresh project directory. The repository vendors the templates as git
//! submodules; this crate only picks and copies them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, main.rs)                                        │
//! │  flags, prompts, colored output, exit status                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)          owns catalog + config for one run    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/)  resolve, materialize, list           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/)        tree and file copies, ignore globs   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing from `api.rs` inward prints to stdout or exits the process.
//! [`selection`] is the exception that proves the rule: its interactive
//! strategy talks to whatever reader/writer pair it is handed.
//!
//! ## A run
//!
//! 1. [`catalog::TemplateCatalog`] is built from the repository root.
//! 2. A [`selection::SelectionSource`] produces a [`model::SelectionRequest`].
//! 3. [`api::TemplarApi::materialize`] copies each requested category and
//!    reports one [`model::MaterializationResult`] per category.
//!
//! Categories are independent: one failing does not stop the others and
//! nothing is rolled back.

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod selection;
pub mod store;
