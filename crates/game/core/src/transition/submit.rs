use crate::error::{ErrorSeverity, NegotiationError};
use crate::hero::{Hero, NegotiationState, NegotiationStatus, Tension};
use crate::negotiation::{RecruitmentLockoutTracker, TensionEngine, TensionOutcome};
use crate::offer::ContractOffer;

use super::{NegotiationEnv, NegotiationTransition};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubmitOfferError {
    #[error("no open negotiation (state is {status})")]
    NotNegotiating { status: NegotiationStatus },

    #[error("tension {tension} is inconsistent with state {status}")]
    InconsistentTension {
        tension: Tension,
        status: NegotiationStatus,
    },
}

impl NegotiationError for SubmitOfferError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotNegotiating { .. } => ErrorSeverity::Recoverable,
            Self::InconsistentTension { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotNegotiating { .. } => "OFFER_NOT_NEGOTIATING",
            Self::InconsistentTension { .. } => "OFFER_INCONSISTENT_TENSION",
        }
    }
}

/// One negotiation round: the offer is scored and the hero's tension moves.
///
/// A round that pushes tension to the walk-away threshold ends the
/// negotiation and starts the lockout at the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitOffer {
    pub offer: ContractOffer,
}

impl SubmitOffer {
    pub fn new(offer: ContractOffer) -> Self {
        Self { offer }
    }
}

impl NegotiationTransition for SubmitOffer {
    type Error = SubmitOfferError;
    type Result = TensionOutcome;

    fn pre_validate(&self, hero: &Hero, _env: &NegotiationEnv<'_>) -> Result<(), Self::Error> {
        require_negotiating(hero).map_err(|status| SubmitOfferError::NotNegotiating { status })
    }

    fn apply(&self, hero: &mut Hero, env: &NegotiationEnv<'_>) -> Result<TensionOutcome, Self::Error> {
        Ok(score_round(hero, &self.offer, env))
    }

    fn post_validate(&self, hero: &Hero, env: &NegotiationEnv<'_>) -> Result<(), Self::Error> {
        let state = &hero.profile.state;
        let settled = matches!(
            state,
            NegotiationState::Negotiating { .. } | NegotiationState::WalkedAway { .. }
        );
        if !settled || !super::tension_consistent(state, env.config) {
            return Err(SubmitOfferError::InconsistentTension {
                tension: state.tension(),
                status: state.status(),
            });
        }
        Ok(())
    }
}

pub(super) fn require_negotiating(hero: &Hero) -> Result<(), NegotiationStatus> {
    match hero.profile.state {
        NegotiationState::Negotiating { .. } => Ok(()),
        other => Err(other.status()),
    }
}

/// Scores `offer` and writes the new tension, or the walk-away, to the hero.
pub(super) fn score_round(hero: &mut Hero, offer: &ContractOffer, env: &NegotiationEnv<'_>) -> TensionOutcome {
    let outcome = TensionEngine::new(env.config).apply_offer(&hero.profile, offer);
    hero.profile.state = NegotiationState::Negotiating {
        tension: outcome.tension,
    };
    if outcome.walked_away {
        RecruitmentLockoutTracker::new(env.config).mark_walked_away(&mut hero.profile, env.turn);
    }
    outcome
}
