//! Pagination module
//!
//! Exposes an offset/limit paginated collection with server-supplied `next`
//! links as one lazy sequence.
//!
//! # Overview
//!
//! - `Paginated` - the shared page buffer for one query
//! - `Cursor` - a forward pass over a `Paginated`, fetching pages on demand
//! - `IntegrityFault` - recorded when `total_count` and the delivered pages
//!   disagree; the sequence stops at what it has instead of erroring

mod sequence;
mod types;

pub use sequence::{Cursor, Paginated};
pub use types::{IntegrityFault, Page, PageMeta};
