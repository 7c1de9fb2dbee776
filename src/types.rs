//! Common types used throughout the wlps client
//!
//! Shared type aliases and small enums used by more than one module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Ordered string-to-string map, used for headers and query filters
pub type StringMap = BTreeMap<String, String>;

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the diagnostics sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Sort direction for an `order_by` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Server-side ordering of a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    /// Field name to order by
    pub field: &'static str,
    /// Sort direction
    pub direction: Direction,
}

impl Ordering {
    /// Ascending order on `field`
    pub const fn ascending(field: &'static str) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    /// Descending order on `field`
    pub const fn descending(field: &'static str) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }

    /// Render as the value of an `order_by` parameter (`-` prefix for descending)
    pub fn to_param(&self) -> String {
        match self.direction {
            Direction::Ascending => self.field.to_string(),
            Direction::Descending => format!("-{}", self.field),
        }
    }
}
