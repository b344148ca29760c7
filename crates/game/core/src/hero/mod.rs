//! Hero data owned by the game and read by the negotiation engine.
//!
//! A [`Hero`] owns its [`HeroNegotiationProfile`] (the negotiable subset of the
//! hero) and its persistent [`HeroContract`]. Engine components never keep
//! references to heroes between calls.

mod contract;
mod state;
mod stats;

use core::fmt;

use arrayvec::ArrayVec;

pub use contract::HeroContract;
pub use state::{NegotiationState, NegotiationStatus, Tension, Turn};
pub use stats::{CoreStats, StatLayout};

use crate::config::NegotiationConfig;
use crate::error::{ErrorSeverity, NegotiationError};
use crate::traits::TraitDefinition;

/// Stable identifier of a hero across the pool and roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct HeroId(pub u32);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hero#{}", self.0)
    }
}

/// Age band of a hero.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LifecycleStage {
    Rookie,
    #[default]
    Prime,
    Veteran,
}

/// The negotiable subset of a hero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroNegotiationProfile {
    pub stats: CoreStats,
    /// 0..=100; values above 100 are treated as 100.
    pub greed: u8,
    pub lifecycle: LifecycleStage,
    /// 0..=100; seeds the starting tension.
    pub trust: u8,
    traits: ArrayVec<TraitDefinition, { NegotiationConfig::MAX_TRAITS }>,
    pub state: NegotiationState,
}

impl HeroNegotiationProfile {
    pub fn new(stats: CoreStats, lifecycle: LifecycleStage) -> Self {
        Self {
            stats,
            lifecycle,
            ..Self::default()
        }
    }

    pub fn with_greed(mut self, greed: u8) -> Self {
        self.greed = greed.min(100);
        self
    }

    pub fn with_trust(mut self, trust: u8) -> Self {
        self.trust = trust.min(100);
        self
    }

    pub fn with_traits(
        mut self,
        traits: impl IntoIterator<Item = TraitDefinition>,
    ) -> Result<Self, ProfileError> {
        for definition in traits {
            self.add_trait(definition)?;
        }
        Ok(self)
    }

    /// Appends a trait, keeping order. A trait whose name is already present
    /// is ignored.
    pub fn add_trait(&mut self, definition: TraitDefinition) -> Result<(), ProfileError> {
        if self.has_trait(definition.name()) {
            return Ok(());
        }
        self.traits
            .try_push(definition)
            .map_err(|_| ProfileError::TooManyTraits {
                max: NegotiationConfig::MAX_TRAITS,
            })
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t.is_named(name))
    }

    pub fn traits(&self) -> &[TraitDefinition] {
        &self.traits
    }

    /// Core stats with every trait's flat modifiers applied.
    pub fn effective_stats(&self) -> CoreStats {
        self.stats
            .with_modifiers(self.traits.iter().flat_map(TraitDefinition::stat_modifiers))
    }

    pub fn tension(&self) -> Tension {
        self.state.tension()
    }

    pub fn has_walked_away(&self) -> bool {
        self.state.has_walked_away()
    }

    pub fn walk_away_turn(&self) -> Option<Turn> {
        self.state.walk_away_turn()
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }
}

/// A hero as tracked by the recruitment pool and roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub profile: HeroNegotiationProfile,
    pub contract: HeroContract,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>, profile: HeroNegotiationProfile) -> Self {
        Self {
            id,
            name: name.into(),
            profile,
            contract: HeroContract::default(),
        }
    }

    pub fn is_under_contract(&self) -> bool {
        self.contract.is_active()
    }
}

/// Errors raised while assembling a hero profile.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("a hero can carry at most {max} traits")]
    TooManyTraits { max: usize },
}

impl NegotiationError for ProfileError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooManyTraits { .. } => "PROFILE_TOO_MANY_TRAITS",
        }
    }
}
