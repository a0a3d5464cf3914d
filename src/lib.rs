//! Redu: disk usage for a document tablet
//!
//! Rebuilds the folder tree of a tablet's document store from its flat
//! `.metadata` records, rolls document sizes up into every folder, and reports
//! the result largest first. Trashed documents are kept in a separate tree.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod store;
pub mod tooling;
pub mod tree;
pub mod types;
