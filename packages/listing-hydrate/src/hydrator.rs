//! The reconciliation pass.
//!
//! Local records are keyed, given a content identifier, and merged with
//! repository metadata fetched in a single batch. Remote values only ever
//! fill gaps in the hydrated view; the raw view is only ever trimmed.

use github_client::{format_timestamp, Repository};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::error::{HydrateError, Result};
use crate::fetcher::{FetchOptions, MetadataFetcher};
use crate::key::LookupKey;
use crate::log::{EventLog, LogLevel, LogSink};
use crate::record::{Field, FieldValue, ListingRecord};
use crate::sort::sort_records;

/// Default lifetime of cached repository responses: one day.
pub const DEFAULT_CACHE: Duration = Duration::from_secs(60 * 60 * 24);

const MISSING_CREDENTIALS: &str = "environment variables GITHUB_CLIENT_ID and GITHUB_CLIENT_SECRET or GITHUB_ACCESS_TOKEN must be set";

#[derive(Clone)]
pub struct HydrateOptions {
    /// Delete raw fields that repeat the remote value.
    pub corrective: bool,
    /// Caching hint for the fetcher.
    pub cache: Duration,
    pub log: Option<LogSink>,
}

impl HydrateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corrective(mut self, corrective: bool) -> Self {
        self.corrective = corrective;
        self
    }

    pub fn with_cache(mut self, cache: Duration) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_log(mut self, log: LogSink) -> Self {
        self.log = Some(log);
        self
    }
}

impl Default for HydrateOptions {
    fn default() -> Self {
        Self {
            corrective: false,
            cache: DEFAULT_CACHE,
            log: None,
        }
    }
}

impl fmt::Debug for HydrateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HydrateOptions")
            .field("corrective", &self.corrective)
            .field("cache", &self.cache)
            .field("log", &self.log.is_some())
            .finish()
    }
}

/// Both views of a hydrated listing, each sorted by name then GitHub reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hydrated {
    pub hydrated: Vec<ListingRecord>,
    pub raw: Vec<ListingRecord>,
}

/// Raw and hydrated forms of one listing entry. Keeping them together keeps
/// the two views on one key set.
#[derive(Debug, Clone)]
struct Entry {
    raw: ListingRecord,
    hydrated: ListingRecord,
}

pub struct Hydrator<F> {
    fetcher: F,
}

impl<F: MetadataFetcher> Hydrator<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Reconcile `records` against remote repository metadata.
    pub async fn hydrate(
        &self,
        records: Vec<ListingRecord>,
        options: &HydrateOptions,
    ) -> Result<Hydrated> {
        if !self.fetcher.is_configured() {
            return Err(HydrateError::Config(MISSING_CREDENTIALS.into()));
        }
        let log = EventLog::new(options.log.as_ref());

        let (mut entries, repos) = index_records(records, &log);

        log.emit(
            LogLevel::Info,
            format!("Fetching the github information, all {} of them", repos.len()),
        );
        let fetch_options = FetchOptions {
            cache: options.cache,
        };
        let remote = self
            .fetcher
            .fetch_repositories(&repos, &fetch_options)
            .await
            .map_err(|e| HydrateError::Fetch(Box::new(e)))?;

        for repo in &remote {
            let key = LookupKey::for_repository(&repo.full_name);

            // A renamed repository comes back under its new name.
            let Some(entry) = entries.get(&key) else {
                log.emit(
                    LogLevel::Warn,
                    format!("{} is missing, likely due to rename", repo.full_name),
                );
                continue;
            };

            let merged = merge_entry(entry, repo, options.corrective, &log);
            entries.insert(key, merged);
        }

        let (mut hydrated, mut raw): (Vec<_>, Vec<_>) = entries
            .into_values()
            .map(|entry| (entry.hydrated, entry.raw))
            .unzip();
        sort_records(&mut hydrated);
        sort_records(&mut raw);

        tracing::info!(count = raw.len(), "Listing hydrated");
        Ok(Hydrated { hydrated, raw })
    }
}

/// Key every record and collect the GitHub references to fetch.
fn index_records(
    records: Vec<ListingRecord>,
    log: &EventLog<'_>,
) -> (BTreeMap<LookupKey, Entry>, Vec<String>) {
    let mut entries = BTreeMap::new();
    let mut repos = Vec::new();

    for (index, mut record) in records.into_iter().enumerate() {
        record.id = None;
        let key = LookupKey::for_record(&record, index);
        if let Some(github) = record.github_ref() {
            repos.push(github.to_string());
        }

        let hydrated = ListingRecord {
            id: Some(record.identity()),
            ..record.clone()
        };
        if entries
            .insert(key.clone(), Entry { raw: record, hydrated })
            .is_some()
        {
            log.emit(
                LogLevel::Warn,
                format!("{} is listed more than once, keeping the last entry", key),
            );
        }
    }

    (entries, repos)
}

/// Remote values worth merging. Empty strings and zero counts are dropped, as
/// is a homepage that only points back at the repository itself.
fn remote_fields(repo: &Repository) -> Vec<(Field, FieldValue)> {
    let key = repo.full_name.to_lowercase();
    let self_link = format!("github.com/{}", key);
    let text = |v: Option<&str>| v.map(|s| FieldValue::Text(s.to_string()));

    Field::ALL
        .into_iter()
        .filter_map(|field| {
            let value = match field {
                Field::Description => text(repo.description.as_deref()),
                Field::Language => text(repo.language.as_deref()),
                Field::License => text(repo.license_key()),
                Field::Website => text(
                    repo.homepage
                        .as_deref()
                        .filter(|h| !h.to_lowercase().contains(&self_link)),
                ),
                Field::Stars => repo.stargazers_count.map(FieldValue::Count),
                Field::Watchers => repo.watchers_count.map(FieldValue::Count),
                Field::Forks => repo.forks_count.map(FieldValue::Count),
                Field::CreatedAt => repo
                    .created_at
                    .as_ref()
                    .map(|ts| FieldValue::Text(format_timestamp(ts))),
                Field::UpdatedAt => repo
                    .updated_at
                    .as_ref()
                    .map(|ts| FieldValue::Text(format_timestamp(ts))),
            };
            value.filter(|v| !v.is_empty()).map(|v| (field, v))
        })
        .collect()
}

fn merge_entry(
    entry: &Entry,
    repo: &Repository,
    corrective: bool,
    log: &EventLog<'_>,
) -> Entry {
    let mut raw = entry.raw.clone();
    let mut hydrated = entry.hydrated.clone();

    for (field, value) in remote_fields(repo) {
        let redundant = raw
            .field(field)
            .is_some_and(|local| !local.is_empty() && local.eq_ignore_case(&value));
        if corrective && redundant {
            log.emit(
                LogLevel::Note,
                format!(
                    "trimming {} on {} as it is the same as the github data: {}",
                    field, repo.full_name, value
                ),
            );
            raw.clear_field(field);
        }

        if hydrated.field(field).is_none() {
            log.emit(
                LogLevel::Info,
                format!("added {} on {} from the github data", field, repo.full_name),
            );
            hydrated.set_field(field, value);
        }
    }

    Entry { raw, hydrated }
}
