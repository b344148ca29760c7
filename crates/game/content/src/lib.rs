//! Data-driven negotiation content and loaders.
//!
//! This crate houses authoring types and loaders for RON/TOML data files:
//! - Negotiation tunables (TOML)
//! - Trait keyword tables (RON)
//! - Trait catalogs (RON)
//! - Hero rosters (RON)
//!
//! Content is read once at startup and handed to the runtime; none of it is
//! consulted while a negotiation round is evaluated.

pub mod traits;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use traits::{TraitCatalog, TraitSpec};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentBundle, ContentFactory, HeroLoader, HeroRoster, HeroSpec, KeywordLoader,
    LoadResult, TraitLoader,
};
