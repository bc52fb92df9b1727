use std::fmt;

use crate::record::ListingRecord;

/// Correlates a local record with its remote counterpart.
///
/// Positions order before repository keys so mapping iteration is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LookupKey {
    /// Index in the input sequence, for records without a GitHub reference.
    Position(usize),
    /// Lowercased `owner/repo`.
    Repo(String),
}

impl LookupKey {
    pub fn for_record(record: &ListingRecord, index: usize) -> Self {
        match record.github_ref() {
            Some(github) => LookupKey::Repo(github.to_lowercase()),
            None => LookupKey::Position(index),
        }
    }

    pub fn for_repository(full_name: &str) -> Self {
        LookupKey::Repo(full_name.to_lowercase())
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Position(index) => write!(f, "#{}", index),
            LookupKey::Repo(repo) => f.write_str(repo),
        }
    }
}
