//! Page wire types and integrity faults

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of one fetched page within the logical collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Index of the first object on this page
    pub offset: usize,
    /// Page size the server used
    pub limit: usize,
    /// Server-reported size of the whole collection
    pub total_count: usize,
    /// Relative or absolute location of the next page
    #[serde(default)]
    pub next: Option<String>,
}

impl PageMeta {
    /// Exclusive upper bound of the window this page covers
    pub fn window_end(&self) -> usize {
        self.offset.saturating_add(self.limit)
    }
}

/// One page response: `{ "meta": {...}, "objects": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub meta: PageMeta,
    pub objects: Vec<T>,
}

/// Disagreement between what the server promised and what it delivered
///
/// Faults end the sequence instead of failing the caller. The sequence keeps
/// whatever prefix it managed to buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityFault {
    /// `total_count` promised more items than the pages contained
    Shortfall { total_count: usize, reached: usize },
    /// More items were expected but the last page had no `next` link
    MissingContinuation { total_count: usize, reached: usize },
    /// A page started past the end of the buffered items
    OffsetGap { expected: usize, offset: usize },
}

impl fmt::Display for IntegrityFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shortfall {
                total_count,
                reached,
            } => write!(
                f,
                "API reported length of {total_count} but reached the end at {reached} items"
            ),
            Self::MissingContinuation {
                total_count,
                reached,
            } => write!(
                f,
                "API reported length of {total_count} but gave no next page after {reached} items"
            ),
            Self::OffsetGap { expected, offset } => write!(
                f,
                "page starts at offset {offset} but only {expected} items were buffered"
            ),
        }
    }
}
