//! Catalog records
//!
//! Only the fields callers commonly need are typed; everything else the
//! server sends is kept in `extra` and written back out unchanged.

use crate::types::JsonObject;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a catalog record; the API uses integers but strings are tolerated
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => f.pad(&id.to_string()),
            Self::Str(id) => f.pad(id),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        Self::Int(id.into())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        id.parse().map_or_else(|_| Self::Str(id.to_string()), Self::Int)
    }
}

/// A top-level category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: ResourceId,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A show within a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: ResourceId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Full episode or short clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EpisodeKind {
    Episode,
    Clip,
}

impl TryFrom<u8> for EpisodeKind {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Episode),
            2 => Ok(Self::Clip),
            other => Err(format!("unknown kind_of {other}")),
        }
    }
}

impl From<EpisodeKind> for u8 {
    fn from(kind: EpisodeKind) -> Self {
        match kind {
            EpisodeKind::Episode => 1,
            EpisodeKind::Clip => 2,
        }
    }
}

/// Geographic availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Availability {
    Worldwide,
    SwedenOnly,
}

impl TryFrom<u8> for Availability {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Worldwide),
            2 => Ok(Self::SwedenOnly),
            other => Err(format!("unknown viewable_in {other}")),
        }
    }
}

impl From<Availability> for u8 {
    fn from(availability: Availability) -> Self {
        match availability {
            Availability::Worldwide => 1,
            Availability::SwedenOnly => 2,
        }
    }
}

/// An episode or clip of a show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: ResourceId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub kind_of: Option<EpisodeKind>,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default)]
    pub viewable_in: Option<Availability>,
    /// ISO timestamp, e.g. `2012-03-01T20:00:00`
    #[serde(default)]
    pub date_broadcasted: Option<String>,
    #[serde(default)]
    pub date_available_until: Option<String>,
    /// Free-form length, e.g. `1 h 5 min`
    #[serde(default)]
    pub length: Option<String>,
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Episode {
    /// Calendar date of the broadcast
    pub fn broadcast_date(&self) -> Option<NaiveDate> {
        self.date_broadcasted.as_deref().and_then(date_part)
    }

    /// Last calendar date the episode can be watched
    pub fn available_until(&self) -> Option<NaiveDate> {
        self.date_available_until.as_deref().and_then(date_part)
    }

    pub fn is_clip(&self) -> bool {
        self.kind_of == Some(EpisodeKind::Clip)
    }
}

fn date_part(timestamp: &str) -> Option<NaiveDate> {
    let date = timestamp.split('T').next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
