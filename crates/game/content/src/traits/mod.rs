//! Trait authoring specs and the trait catalog.
//!
//! Content files describe traits as [`TraitSpec`]s. Authoring a spec runs the
//! keyword scan once and produces the immutable [`TraitDefinition`] that
//! heroes carry. The [`TraitCatalog`] indexes authored traits by name.

use std::collections::HashMap;

use guild_core::{ContractModifiers, KeywordTable, StatModifier, TraitDefinition, TraitEffect};

/// Authoring form of a trait as written in content files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitSpec {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_modifiers: Vec<StatModifier>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub contract: ContractModifiers,
    /// Effects attached in addition to any keyword matches.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<TraitEffect>,
    /// When false, the name is not scanned and only `effects` apply.
    #[cfg_attr(feature = "serde", serde(default = "scan_keywords_default"))]
    pub scan_keywords: bool,
}

#[cfg(feature = "serde")]
fn scan_keywords_default() -> bool {
    true
}

impl TraitSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stat_modifiers: Vec::new(),
            contract: ContractModifiers::default(),
            effects: Vec::new(),
            scan_keywords: true,
        }
    }

    /// Builds the definition: keyword effects first, then explicit effects.
    pub fn author(&self, table: &KeywordTable) -> TraitDefinition {
        let base = if self.scan_keywords {
            TraitDefinition::author(self.name.clone(), table)
        } else {
            TraitDefinition::explicit(self.name.clone(), Vec::new())
        };

        let with_effects = self
            .effects
            .iter()
            .fold(base, |definition, effect| definition.with_effect(*effect));

        self.stat_modifiers
            .iter()
            .fold(with_effects, |definition, modifier| {
                definition.with_stat_modifier(modifier.stat, modifier.amount)
            })
            .with_contract_modifiers(self.contract)
    }
}

/// Authored traits indexed by case-insensitive name.
#[derive(Clone, Debug, Default)]
pub struct TraitCatalog {
    traits: HashMap<String, TraitDefinition>,
}

impl TraitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authors every spec against `table`. Later specs replace earlier ones
    /// with the same name.
    pub fn from_specs<'s>(specs: impl IntoIterator<Item = &'s TraitSpec>, table: &KeywordTable) -> Self {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.insert(spec.author(table));
        }
        catalog
    }

    pub fn insert(&mut self, definition: TraitDefinition) {
        self.traits.insert(definition.name().to_lowercase(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&TraitDefinition> {
        self.traits.get(&name.to_lowercase())
    }

    /// Looks `name` up in the catalog, or authors it from keywords alone.
    ///
    /// Names with no catalog entry and no keyword match resolve to a trait
    /// without effects.
    pub fn resolve(&self, name: &str, table: &KeywordTable) -> TraitDefinition {
        self.get(name)
            .cloned()
            .unwrap_or_else(|| TraitDefinition::author(name, table))
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}
