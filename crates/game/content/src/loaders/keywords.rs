//! Trait keyword table loader.

use std::path::Path;

use guild_core::{KeywordRule, KeywordTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Keyword table structure for RON files. Rule order is significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCatalog {
    pub keywords: Vec<KeywordRule>,
}

/// Loader for keyword tables from RON files.
pub struct KeywordLoader;

impl KeywordLoader {
    pub fn load(path: &Path) -> LoadResult<KeywordTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<KeywordTable> {
        let catalog: KeywordCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse keyword table RON: {}", e))?;

        if let Some(rule) = catalog.keywords.iter().find(|rule| rule.keyword().trim().is_empty()) {
            anyhow::bail!("Keyword table contains an empty keyword: {:?}", rule);
        }
        Ok(KeywordTable::new(catalog.keywords))
    }
}
