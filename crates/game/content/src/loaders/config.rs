//! Negotiation configuration loader.

use std::path::Path;

use guild_core::NegotiationConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for negotiation tunables from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config file.
    ///
    /// Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> LoadResult<NegotiationConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<NegotiationConfig> {
        let config: NegotiationConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guild_core::{LifecycleStage, Multiplier, StatLayout};

    #[test]
    fn empty_file_is_default_config() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, NegotiationConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
            stat_layout = "Five"
            lockout_turns = 6

            [lifecycle]
            veteran = 17500
            "#,
        )
        .unwrap();

        assert_eq!(config.stat_layout, StatLayout::Five);
        assert_eq!(config.lockout_turns, 6);
        assert_eq!(
            config.lifecycle.multiplier(LifecycleStage::Veteran),
            Multiplier::from_bps(17_500)
        );
        assert_eq!(
            config.lifecycle.multiplier(LifecycleStage::Prime),
            Multiplier::from_bps(12_000)
        );
        assert_eq!(config.trust_high, NegotiationConfig::DEFAULT_TRUST_HIGH);
    }

    #[test]
    fn inconsistent_values_are_rejected() {
        let err = ConfigLoader::parse("trust_low = 90").unwrap_err();
        assert!(err.to_string().contains("trust_low"), "{err}");

        let err = ConfigLoader::parse("walk_away_threshold = 0").unwrap_err();
        assert!(err.to_string().contains("walk_away_threshold"), "{err}");
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "preference_penalty = 15\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.preference_penalty, 15);

        let missing = ConfigLoader::load(&dir.path().join("nope.toml"));
        assert!(missing.is_err());
    }
}
