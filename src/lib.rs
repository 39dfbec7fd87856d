//! Library crate for t20stats-tui.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state and update loop (`app`)
//! - Command line interface and headless commands (`cli`)
//! - Error and result types (`error`)
//! - Roster query engine: search, filter, sort, paginate (`query`)
//! - Player records, roles, and dataset loading (`roster`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `t20stats-tui` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod cli;
pub mod error;
pub mod query;
pub mod roster;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
pub use query::{Query, QueryResult};
pub use roster::{Player, Role, Roster};
