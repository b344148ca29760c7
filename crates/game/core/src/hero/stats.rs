//! Core attributes - the stat line a hero's expected value is built from.

use arrayvec::ArrayVec;

use crate::config::NegotiationConfig;
use crate::traits::StatModifier;

/// How many core attributes a campaign uses.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatLayout {
    /// Might, finesse, wits.
    #[default]
    Three,
    /// Strength, agility, intellect, resolve, presence.
    Five,
}

impl StatLayout {
    pub const fn arity(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Five => 5,
        }
    }
}

/// Up to five core attribute values.
///
/// Attributes beyond the stored ones read as 0, so a three-stat hero can be
/// evaluated under a five-stat layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreStats {
    values: ArrayVec<u32, { NegotiationConfig::MAX_CORE_STATS }>,
}

impl CoreStats {
    pub fn three(first: u32, second: u32, third: u32) -> Self {
        Self::from_values(&[first, second, third])
    }

    pub fn five(first: u32, second: u32, third: u32, fourth: u32, fifth: u32) -> Self {
        Self::from_values(&[first, second, third, fourth, fifth])
    }

    /// Builds a stat line from the leading values; extras past five are ignored.
    pub fn from_values(values: &[u32]) -> Self {
        Self {
            values: values
                .iter()
                .copied()
                .take(NegotiationConfig::MAX_CORE_STATS)
                .collect(),
        }
    }

    /// Returns the attribute at `index`, or 0 if it is not present.
    #[inline]
    pub fn get(&self, index: usize) -> u32 {
        self.values.get(index).copied().unwrap_or(0)
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Sum of the attributes the layout counts.
    pub fn total(&self, layout: StatLayout) -> u64 {
        (0..layout.arity()).map(|i| u64::from(self.get(i))).sum()
    }

    /// Applies flat trait modifiers. Attributes never drop below zero.
    ///
    /// A missing attribute reads as 0, so a modifier on it starts from 0;
    /// modifiers past the fifth attribute are ignored.
    pub fn with_modifiers<'m>(&self, modifiers: impl IntoIterator<Item = &'m StatModifier>) -> Self {
        let mut adjusted = self.clone();
        for modifier in modifiers {
            if modifier.stat >= NegotiationConfig::MAX_CORE_STATS {
                continue;
            }
            while adjusted.values.len() <= modifier.stat {
                adjusted.values.push(0);
            }
            let value = &mut adjusted.values[modifier.stat];
            *value = value.saturating_add_signed(modifier.amount);
        }
        adjusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_read_as_zero() {
        let stats = CoreStats::three(20, 30, 22);
        assert_eq!(stats.get(4), 0);
        assert_eq!(stats.total(StatLayout::Three), 72);
        assert_eq!(stats.total(StatLayout::Five), 72);
    }

    #[test]
    fn three_stat_layout_ignores_extra_attributes() {
        let stats = CoreStats::five(10, 10, 10, 10, 10);
        assert_eq!(stats.total(StatLayout::Three), 30);
        assert_eq!(stats.total(StatLayout::Five), 50);
    }

    #[test]
    fn modifiers_saturate_at_zero() {
        let stats = CoreStats::three(5, 10, 10);
        let modifiers = [
            StatModifier { stat: 0, amount: -8 },
            StatModifier { stat: 1, amount: 4 },
        ];
        let adjusted = stats.with_modifiers(&modifiers);
        assert_eq!(adjusted.values(), &[0, 14, 10]);
    }

    #[test]
    fn modifiers_on_missing_attributes_start_from_zero() {
        let stats = CoreStats::three(20, 30, 22);
        let modifiers = [
            StatModifier { stat: 4, amount: 50 },
            StatModifier { stat: 3, amount: -5 },
            StatModifier { stat: 7, amount: 100 },
        ];
        let adjusted = stats.with_modifiers(&modifiers);
        assert_eq!(adjusted.values(), &[20, 30, 22, 0, 50]);
        assert_eq!(adjusted.total(StatLayout::Three), 72);
        assert_eq!(adjusted.total(StatLayout::Five), 122);
    }

    #[test]
    fn from_values_truncates_to_capacity() {
        let stats = CoreStats::from_values(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(stats.values().len(), NegotiationConfig::MAX_CORE_STATS);
    }
}
