//! Hero roster loader.
//!
//! Heroes are written by hand in RON and resolved against the trait catalog
//! and keyword table when loaded.

use std::collections::HashSet;
use std::path::Path;

use guild_core::{
    CoreStats, Hero, HeroId, HeroNegotiationProfile, KeywordTable, LifecycleStage,
    NegotiationConfig, StatLayout,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::traits::TraitCatalog;

/// One hero entry in the roster file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroSpec {
    pub id: u32,
    pub name: String,
    pub stats: Vec<u32>,
    #[serde(default)]
    pub lifecycle: LifecycleStage,
    #[serde(default)]
    pub greed: u8,
    #[serde(default)]
    pub trust: u8,
    /// Trait names, looked up in the catalog or authored from keywords.
    #[serde(default)]
    pub traits: Vec<String>,
}

impl HeroSpec {
    pub fn build(
        &self,
        layout: StatLayout,
        catalog: &TraitCatalog,
        table: &KeywordTable,
    ) -> LoadResult<Hero> {
        if self.stats.len() > layout.arity() {
            anyhow::bail!(
                "Hero '{}' has {} stats but the {} layout uses {}",
                self.name,
                self.stats.len(),
                layout,
                layout.arity()
            );
        }
        if self.greed > 100 || self.trust > 100 {
            anyhow::bail!(
                "Hero '{}' has greed {} / trust {}; both must be 0..=100",
                self.name,
                self.greed,
                self.trust
            );
        }

        let stats = CoreStats::from_values(&self.stats);
        let profile = HeroNegotiationProfile::new(stats, self.lifecycle)
            .with_greed(self.greed)
            .with_trust(self.trust)
            .with_traits(self.traits.iter().map(|name| catalog.resolve(name, table)))
            .map_err(|e| anyhow::anyhow!("Hero '{}': {}", self.name, e))?;

        Ok(Hero::new(HeroId(self.id), self.name.clone(), profile))
    }
}

/// Hero roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroRoster {
    pub heroes: Vec<HeroSpec>,
}

/// Loader for hero rosters from RON files.
pub struct HeroLoader;

impl HeroLoader {
    pub fn load(
        path: &Path,
        config: &NegotiationConfig,
        catalog: &TraitCatalog,
        table: &KeywordTable,
    ) -> LoadResult<Vec<Hero>> {
        let content = read_file(path)?;
        Self::parse(&content, config, catalog, table)
    }

    pub fn parse(
        content: &str,
        config: &NegotiationConfig,
        catalog: &TraitCatalog,
        table: &KeywordTable,
    ) -> LoadResult<Vec<Hero>> {
        let roster: HeroRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse hero roster RON: {}", e))?;

        let mut ids = HashSet::new();
        let mut heroes = Vec::with_capacity(roster.heroes.len());
        for spec in &roster.heroes {
            if !ids.insert(spec.id) {
                anyhow::bail!("Hero id {} is used more than once", spec.id);
            }
            heroes.push(spec.build(config.stat_layout, catalog, table)?);
        }
        Ok(heroes)
    }
}
