//! Stateless negotiation rules.
//!
//! Each component borrows the [`NegotiationConfig`](crate::config::NegotiationConfig)
//! and reads heroes passed in per call. Only the lockout tracker and the
//! contract finalizer mutate what they are given.

mod contract;
mod effects;
mod lockout;
mod preference;
mod tension;
mod value;

pub use contract::{ContractError, ContractFinalizer, FinalizedContract};
pub use effects::{TraitEffectResolver, TraitEffects};
pub use lockout::RecruitmentLockoutTracker;
pub use preference::PaymentPreferenceEvaluator;
pub use tension::{TensionBreakdown, TensionEngine, TensionOutcome};
pub use value::{ValueBreakdown, ValueModel};
