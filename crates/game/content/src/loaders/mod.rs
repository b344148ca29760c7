//! Content loaders for reading negotiation data from files.
//!
//! Configuration is TOML; keyword tables, trait catalogs and hero rosters
//! are RON.

pub mod config;
pub mod factory;
pub mod heroes;
pub mod keywords;
pub mod traits;

pub use config::ConfigLoader;
pub use factory::{ContentBundle, ContentFactory};
pub use heroes::{HeroLoader, HeroRoster, HeroSpec};
pub use keywords::{KeywordCatalog, KeywordLoader};
pub use traits::{TraitCatalogFile, TraitLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
