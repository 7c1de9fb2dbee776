//! Catalog API module
//!
//! # Overview
//!
//! The api module provides:
//! - `ApiClient` - endpoint discovery and request building
//! - `Collection` - the named collections and their filters/ordering
//! - `EndpointMap` - the discovery document
//! - `Category`, `Show`, `Episode` - typed catalog records

mod client;
mod endpoints;
mod models;

pub use client::{ApiClient, Collection};
pub use endpoints::{EndpointDescriptor, EndpointMap, DISCOVERY_PATH};
pub use models::{Availability, Category, Episode, EpisodeKind, ResourceId, Show};
