//! # wlps-client
//!
//! Read-only client for the welovepublicservice catalog API (categories,
//! shows and episodes), built around a lazy pagination engine.
//!
//! ## Features
//!
//! - **Endpoint discovery**: the collection map is fetched once per client
//! - **Named collections**: categories, shows by category, episodes by show,
//!   recommended and latest episodes
//! - **Lazy pagination**: pages are fetched on demand, buffered once and
//!   shared by every cursor over the same sequence
//! - **Integrity checks**: when `total_count` and the delivered pages
//!   disagree, the sequence logs the fault and stops at what it has
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wlps_client::{ApiClient, ClientConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ApiClient::from_config(&ClientConfig::default()).await?;
//!
//!     let mut episodes = client.latest_episodes()?.cursor();
//!     while let Some(episode) = episodes.next().await? {
//!         println!("{} {}", episode.id, episode.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        ApiClient                          │
//! │  connect() → EndpointMap   collection(kind) → Paginated    │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//! ┌─────────────────┬──────────┴─────────┬────────────────────┐
//! │   Pagination    │     Transport      │      Config        │
//! ├─────────────────┼────────────────────┼────────────────────┤
//! │ Paginated       │ Transport trait    │ ClientConfig       │
//! │ Cursor          │ HttpTransport      │ YAML / env / flags │
//! │ IntegrityFault  │ Rate limit         │                    │
//! └─────────────────┴────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport with optional rate limiting
pub mod http;

/// Catalog API client and records
pub mod api;

/// Lazy paginated sequences
pub mod pagination;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{ApiClient, Category, Collection, Episode, Show};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use pagination::{Cursor, IntegrityFault, Paginated};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
