//! Deterministic hero-recruitment negotiation rules.
//!
//! `guild-core` defines the canonical negotiation model (heroes, traits,
//! offers, tension) and exposes pure APIs that the runtime and content tools
//! share. All state mutation flows through [`engine::NegotiationEngine`];
//! the components in [`negotiation`] are stateless calculators over a hero
//! plus an offer.
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod hero;
pub mod multiplier;
pub mod negotiation;
pub mod offer;
pub mod traits;
pub mod transition;

pub use config::{ConfigError, IdealOfferShares, LifecycleMultipliers, NegotiationConfig};
pub use engine::{
    ExecuteError, NegotiationEngine, NegotiationOutcome, TransitionPhase, TransitionPhaseError,
};
pub use error::{ErrorSeverity, NegotiationError};
pub use events::{EventQueue, NegotiationEvent};
pub use hero::{
    CoreStats, Hero, HeroContract, HeroId, HeroNegotiationProfile, LifecycleStage,
    NegotiationState, NegotiationStatus, ProfileError, StatLayout, Tension, Turn,
};
pub use multiplier::{Factor, Multiplier};
pub use negotiation::{
    ContractError, ContractFinalizer, FinalizedContract, PaymentPreferenceEvaluator,
    RecruitmentLockoutTracker, TensionBreakdown, TensionEngine, TensionOutcome,
    TraitEffectResolver, TraitEffects, ValueBreakdown, ValueModel,
};
pub use offer::{ContractOffer, OfferError, OfferField};
pub use traits::{
    ContractModifiers, KeywordRule, KeywordTable, PaymentPreference, StatModifier,
    TraitDefinition, TraitEffect,
};
pub use transition::{
    AcceptOffer, AcceptOfferError, AcceptOutcome, InitializeNegotiation,
    InitializeNegotiationError, NegotiationAction, NegotiationEnv, NegotiationTransition,
    ReleaseLockout, ResetWalkAway, SubmitOffer, SubmitOfferError,
};
