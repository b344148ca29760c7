//! State-changing negotiation actions.
//!
//! Every change to a hero's negotiation state is a transition value run
//! through `pre_validate → apply → post_validate` by
//! [`NegotiationEngine`](crate::engine::NegotiationEngine).

mod accept;
mod lockout;
mod open;
mod submit;

pub use accept::{AcceptOffer, AcceptOfferError, AcceptOutcome};
pub use lockout::{ReleaseLockout, ResetWalkAway};
pub use open::{InitializeNegotiation, InitializeNegotiationError};
pub use submit::{SubmitOffer, SubmitOfferError};

use crate::config::NegotiationConfig;
use crate::hero::{Hero, NegotiationState, Turn};
use crate::offer::ContractOffer;

/// Read-only facts a transition may consult.
#[derive(Clone, Copy, Debug)]
pub struct NegotiationEnv<'a> {
    pub config: &'a NegotiationConfig,
    pub turn: Turn,
}

impl<'a> NegotiationEnv<'a> {
    pub fn new(config: &'a NegotiationConfig, turn: Turn) -> Self {
        Self { config, turn }
    }
}

/// Defines how a negotiation action mutates a single hero.
///
/// Validation hooks must stay side-effect free; only `apply` writes.
pub trait NegotiationTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the hero **before** mutation.
    fn pre_validate(&self, _hero: &Hero, _env: &NegotiationEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action. Assumes `pre_validate` has passed.
    fn apply(&self, hero: &mut Hero, env: &NegotiationEnv<'_>) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the hero **after** mutation.
    fn post_validate(&self, _hero: &Hero, _env: &NegotiationEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// All negotiation actions the engine accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NegotiationAction {
    Initialize(InitializeNegotiation),
    SubmitOffer(SubmitOffer),
    AcceptOffer(AcceptOffer),
    ResetWalkAway(ResetWalkAway),
    ReleaseLockout(ReleaseLockout),
}

impl NegotiationAction {
    /// The offer on the table, for actions that carry one.
    pub fn offer(&self) -> Option<ContractOffer> {
        match self {
            Self::SubmitOffer(submit) => Some(submit.offer),
            Self::AcceptOffer(accept) => Some(accept.offer),
            _ => None,
        }
    }

    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Self::Initialize(_) => "initialize_negotiation",
            Self::SubmitOffer(_) => "submit_offer",
            Self::AcceptOffer(_) => "accept_offer",
            Self::ResetWalkAway(_) => "reset_walk_away",
            Self::ReleaseLockout(_) => "release_lockout",
        }
    }
}

impl From<InitializeNegotiation> for NegotiationAction {
    fn from(action: InitializeNegotiation) -> Self {
        Self::Initialize(action)
    }
}

impl From<SubmitOffer> for NegotiationAction {
    fn from(action: SubmitOffer) -> Self {
        Self::SubmitOffer(action)
    }
}

impl From<AcceptOffer> for NegotiationAction {
    fn from(action: AcceptOffer) -> Self {
        Self::AcceptOffer(action)
    }
}

impl From<ResetWalkAway> for NegotiationAction {
    fn from(action: ResetWalkAway) -> Self {
        Self::ResetWalkAway(action)
    }
}

impl From<ReleaseLockout> for NegotiationAction {
    fn from(action: ReleaseLockout) -> Self {
        Self::ReleaseLockout(action)
    }
}

/// Whether a settled negotiation state agrees with its own tension.
///
/// An open negotiation must sit below the walk-away threshold; a hero that
/// walked away is always consistent.
pub(crate) fn tension_consistent(state: &NegotiationState, config: &NegotiationConfig) -> bool {
    match state {
        NegotiationState::Negotiating { tension } | NegotiationState::Accepted { tension } => {
            tension.value() < config.walk_away_threshold
        }
        NegotiationState::Uninitialized | NegotiationState::WalkedAway { .. } => true,
    }
}
