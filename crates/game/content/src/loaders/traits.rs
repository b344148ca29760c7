//! Trait catalog loader.

use std::collections::HashSet;
use std::path::Path;

use guild_core::KeywordTable;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::traits::{TraitCatalog, TraitSpec};

/// Trait catalog structure for RON files.
///
/// ```ron
/// (
///     traits: [
///         (name: "Greedy"),
///         (name: "Iron Will", stat_modifiers: [(stat: 2, amount: 4)], effects: [TensionBuild(9000)]),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitCatalogFile {
    pub traits: Vec<TraitSpec>,
}

/// Loader for trait catalogs from RON files.
pub struct TraitLoader;

impl TraitLoader {
    /// Load trait specs and author them against `table`.
    pub fn load(path: &Path, table: &KeywordTable) -> LoadResult<TraitCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, table)
    }

    pub fn parse(content: &str, table: &KeywordTable) -> LoadResult<TraitCatalog> {
        let file: TraitCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trait catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for spec in &file.traits {
            if spec.name.trim().is_empty() {
                anyhow::bail!("Trait catalog contains a trait without a name");
            }
            if !seen.insert(spec.name.to_lowercase()) {
                anyhow::bail!("Trait '{}' is defined more than once", spec.name);
            }
        }

        Ok(TraitCatalog::from_specs(&file.traits, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guild_core::{Multiplier, StatModifier, TraitEffect};

    #[test]
    fn parses_specs_with_optional_fields() {
        let table = KeywordTable::standard();
        let catalog = TraitLoader::parse(
            r#"(
                traits: [
                    (name: "Greedy"),
                    (
                        name: "Iron Will",
                        stat_modifiers: [(stat: 2, amount: 4)],
                        effects: [TensionBuild(9000)],
                        contract: (loot_cut_pct: 5),
                    ),
                ],
            )"#,
            &table,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let iron = catalog.get("iron will").unwrap();
        assert_eq!(iron.effects(), &[TraitEffect::TensionBuild(Multiplier::percent(90))]);
        assert_eq!(iron.stat_modifiers(), &[StatModifier { stat: 2, amount: 4 }]);
        assert_eq!(iron.contract_modifiers().loot_cut_pct, 5);
        assert_eq!(iron.contract_modifiers().salary_pct, 0);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let table = KeywordTable::standard();
        let err = TraitLoader::parse(r#"(traits: [(name: "Calm"), (name: "CALM")])"#, &table)
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
