//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use guild_core::{Hero, KeywordTable, NegotiationConfig};

use crate::loaders::{ConfigLoader, HeroLoader, KeywordLoader, LoadResult, TraitLoader};
use crate::traits::TraitCatalog;

/// Everything a recruitment desk needs to start a campaign.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub config: NegotiationConfig,
    pub keywords: KeywordTable,
    pub traits: TraitCatalog,
    pub heroes: Vec<Hero>,
}

/// Content factory that loads negotiation content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml    (optional, defaults otherwise)
/// ├── keywords.ron   (optional, stock keyword table otherwise)
/// ├── traits.ron     (optional, keyword-only traits otherwise)
/// └── heroes.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load negotiation tunables from `config.toml`.
    pub fn load_config(&self) -> LoadResult<NegotiationConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(NegotiationConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the keyword table from `keywords.ron`.
    pub fn load_keywords(&self) -> LoadResult<KeywordTable> {
        let path = self.data_dir.join("keywords.ron");
        if !path.exists() {
            return Ok(KeywordTable::standard());
        }
        KeywordLoader::load(&path)
    }

    /// Load the trait catalog from `traits.ron`.
    pub fn load_traits(&self, table: &KeywordTable) -> LoadResult<TraitCatalog> {
        let path = self.data_dir.join("traits.ron");
        if !path.exists() {
            return Ok(TraitCatalog::new());
        }
        TraitLoader::load(&path, table)
    }

    /// Load the recruitable heroes from `heroes.ron`.
    pub fn load_heroes(
        &self,
        config: &NegotiationConfig,
        catalog: &TraitCatalog,
        table: &KeywordTable,
    ) -> LoadResult<Vec<Hero>> {
        let path = self.data_dir.join("heroes.ron");
        HeroLoader::load(&path, config, catalog, table)
    }

    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        let config = self.load_config()?;
        let keywords = self.load_keywords()?;
        let traits = self.load_traits(&keywords)?;
        let heroes = self.load_heroes(&config, &traits, &keywords)?;
        Ok(ContentBundle {
            config,
            keywords,
            traits,
            heroes,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_data() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data")
    }

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn shipped_content_loads() {
        let bundle = ContentFactory::new(shipped_data()).load_all().unwrap();
        assert_eq!(bundle.config.validate(), Ok(()));
        assert_eq!(bundle.keywords, KeywordTable::standard());
        assert!(!bundle.traits.is_empty());
        assert!(bundle.heroes.len() >= 4);
    }

    #[test]
    fn optional_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("heroes.ron"),
            r#"(heroes: [(id: 9, name: "Wren", stats: [5, 5, 5], traits: ["Calm"])])"#,
        )
        .unwrap();

        let bundle = ContentFactory::new(dir.path()).load_all().unwrap();
        assert_eq!(bundle.config, NegotiationConfig::default());
        assert!(bundle.traits.is_empty());
        assert_eq!(bundle.heroes.len(), 1);
        assert!(!bundle.heroes[0].profile.traits()[0].effects().is_empty());
    }

    #[test]
    fn missing_roster_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ContentFactory::new(dir.path()).load_all().is_err());
    }
}
