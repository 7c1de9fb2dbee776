//! CLI module
//!
//! Command-line interface for browsing the catalog.
//!
//! # Commands
//!
//! - `endpoints` - Show the discovered endpoint map
//! - `categories` - List categories
//! - `shows --category ID` - List shows in a category
//! - `episodes --show ID` - List episodes of a show
//! - `recommended` / `latest` - List episode feeds

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{log_filter, Listing, Runner};
