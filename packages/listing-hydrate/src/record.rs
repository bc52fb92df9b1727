//! Listing records and their canonical field layout.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::identity::record_id;

/// Canonical field order. Records always serialize in this order, followed by
/// any unrecognised fields in their input order.
pub const KEY_ORDER: [&str; 17] = [
    "id",
    "name",
    "github",
    "gitlab",
    "bitbucket",
    "website",
    "license",
    "language",
    "description",
    "created_at",
    "updated_at",
    "abandoned",
    "is",
    "extensible",
    "stars",
    "forks",
    "watchers",
];

/// One project entry of a listing.
///
/// Declaration order of the fields is the canonical order; keep it in sync
/// with [`KEY_ORDER`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitbucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abandoned: Option<bool>,
    /// Free-form classification, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchers: Option<u64>,
    /// Fields outside the canonical set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListingRecord {
    /// Record with just a name and a GitHub reference.
    pub fn new(name: impl Into<String>, github: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            github: Some(github.into()),
            ..Default::default()
        }
    }

    /// Content-derived identifier over name, website and GitHub reference.
    pub fn identity(&self) -> String {
        record_id(
            self.name.as_deref(),
            self.website.as_deref(),
            self.github.as_deref(),
        )
    }

    /// GitHub reference, if set and non-empty.
    pub fn github_ref(&self) -> Option<&str> {
        self.github.as_deref().filter(|g| !g.is_empty())
    }

    pub fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Description => self.description.clone().map(FieldValue::Text),
            Field::Language => self.language.clone().map(FieldValue::Text),
            Field::License => self.license.clone().map(FieldValue::Text),
            Field::Website => self.website.clone().map(FieldValue::Text),
            Field::Stars => self.stars.map(FieldValue::Count),
            Field::Watchers => self.watchers.map(FieldValue::Count),
            Field::Forks => self.forks.map(FieldValue::Count),
            Field::CreatedAt => self.created_at.clone().map(FieldValue::Text),
            Field::UpdatedAt => self.updated_at.clone().map(FieldValue::Text),
        }
    }

    /// Set a field. Text destined for a counter is parsed and dropped if it
    /// is not a number.
    pub fn set_field(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::Description => self.description = Some(value.to_string()),
            Field::Language => self.language = Some(value.to_string()),
            Field::License => self.license = Some(value.to_string()),
            Field::Website => self.website = Some(value.to_string()),
            Field::Stars => self.stars = value.as_count(),
            Field::Watchers => self.watchers = value.as_count(),
            Field::Forks => self.forks = value.as_count(),
            Field::CreatedAt => self.created_at = Some(value.to_string()),
            Field::UpdatedAt => self.updated_at = Some(value.to_string()),
        }
    }

    pub fn clear_field(&mut self, field: Field) {
        match field {
            Field::Description => self.description = None,
            Field::Language => self.language = None,
            Field::License => self.license = None,
            Field::Website => self.website = None,
            Field::Stars => self.stars = None,
            Field::Watchers => self.watchers = None,
            Field::Forks => self.forks = None,
            Field::CreatedAt => self.created_at = None,
            Field::UpdatedAt => self.updated_at = None,
        }
    }
}

/// Fields that can be backfilled from repository metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Description,
    Language,
    License,
    Website,
    Stars,
    Watchers,
    Forks,
    CreatedAt,
    UpdatedAt,
}

impl Field {
    /// Merge order.
    pub const ALL: [Field; 9] = [
        Field::Description,
        Field::Language,
        Field::License,
        Field::Website,
        Field::Stars,
        Field::Watchers,
        Field::Forks,
        Field::CreatedAt,
        Field::UpdatedAt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Description => "description",
            Field::Language => "language",
            Field::License => "license",
            Field::Website => "website",
            Field::Stars => "stars",
            Field::Watchers => "watchers",
            Field::Forks => "forks",
            Field::CreatedAt => "created_at",
            Field::UpdatedAt => "updated_at",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Count(u64),
}

impl FieldValue {
    /// Empty text and zero counts carry no information.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Count(n) => *n == 0,
        }
    }

    /// Compare string renderings, ignoring case.
    pub fn eq_ignore_case(&self, other: &FieldValue) -> bool {
        self.to_string().to_lowercase() == other.to_string().to_lowercase()
    }

    fn as_count(&self) -> Option<u64> {
        match self {
            FieldValue::Count(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Count(n) => write!(f, "{}", n),
        }
    }
}
