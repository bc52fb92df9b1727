//! Listing hydration.
//!
//! Takes the entries of a project listing, fetches repository metadata for
//! every entry with a GitHub reference, and produces two sorted views:
//!
//! - **raw**: the listing as maintained by hand, without computed ids and,
//!   in corrective mode, without values that merely repeat GitHub's data
//! - **hydrated**: every entry with a content-derived `id` and any gaps
//!   filled from GitHub
//!
//! # Example
//!
//! ```rust,ignore
//! use github_client::GithubClient;
//! use listing_hydrate::{HydrateOptions, Hydrator, ListingRecord};
//!
//! let hydrator = Hydrator::new(GithubClient::from_env()?);
//! let records = vec![ListingRecord::new("Hugo", "gohugoio/hugo")];
//!
//! let listing = hydrator
//!     .hydrate(records, &HydrateOptions::new().with_corrective(true))
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&listing.hydrated)?);
//! ```

pub mod error;
pub mod fetcher;
pub mod hydrator;
pub mod identity;
pub mod key;
pub mod log;
pub mod record;
pub mod sort;

pub use error::{HydrateError, Result};
pub use fetcher::{FetchOptions, MetadataFetcher};
pub use hydrator::{Hydrated, HydrateOptions, Hydrator, DEFAULT_CACHE};
pub use identity::record_id;
pub use key::LookupKey;
pub use log::{LogLevel, LogSink};
pub use record::{Field, FieldValue, ListingRecord, KEY_ORDER};
pub use sort::{compare_records, natural_cmp_ignore_case, sort_records};
