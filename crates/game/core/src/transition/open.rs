use crate::error::{ErrorSeverity, NegotiationError};
use crate::hero::{Hero, NegotiationState, NegotiationStatus, Tension, Turn};
use crate::negotiation::{RecruitmentLockoutTracker, TensionEngine};

use super::{NegotiationEnv, NegotiationTransition};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializeNegotiationError {
    #[error("hero is locked out of recruitment until {eligible_at}")]
    LockedOut { eligible_at: Turn },

    #[error("negotiation cannot be opened from state {status}")]
    AlreadyOpen { status: NegotiationStatus },

    #[error("hero is under contract ({turns_remaining} turns remaining)")]
    UnderContract { turns_remaining: u32 },

    #[error("negotiation opened with tension {tension} at or above the walk-away threshold")]
    StartingTensionTooHigh { tension: Tension },
}

impl NegotiationError for InitializeNegotiationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::StartingTensionTooHigh { .. } => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockedOut { .. } => "NEGOTIATION_LOCKED_OUT",
            Self::AlreadyOpen { .. } => "NEGOTIATION_ALREADY_OPEN",
            Self::UnderContract { .. } => "NEGOTIATION_UNDER_CONTRACT",
            Self::StartingTensionTooHigh { .. } => "NEGOTIATION_STARTING_TENSION",
        }
    }
}

/// Opens a negotiation, seeding tension from the hero's trust.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitializeNegotiation;

impl NegotiationTransition for InitializeNegotiation {
    type Error = InitializeNegotiationError;
    type Result = Tension;

    fn pre_validate(&self, hero: &Hero, env: &NegotiationEnv<'_>) -> Result<(), Self::Error> {
        let tracker = RecruitmentLockoutTracker::new(env.config);
        if !tracker.can_re_recruit(&hero.profile, env.turn) {
            let wait = tracker.turns_until_eligible(&hero.profile, env.turn);
            return Err(InitializeNegotiationError::LockedOut {
                eligible_at: Turn(env.turn.0.saturating_add(wait)),
            });
        }

        match hero.profile.state {
            NegotiationState::Uninitialized => {}
            // Lockout elapsed but not yet released; opening releases it.
            NegotiationState::WalkedAway { .. } => {}
            other => {
                return Err(InitializeNegotiationError::AlreadyOpen {
                    status: other.status(),
                });
            }
        }

        if hero.contract.is_active() {
            return Err(InitializeNegotiationError::UnderContract {
                turns_remaining: hero.contract.turns_remaining,
            });
        }
        Ok(())
    }

    fn apply(&self, hero: &mut Hero, env: &NegotiationEnv<'_>) -> Result<Tension, Self::Error> {
        let tension = TensionEngine::new(env.config).starting_tension(hero.profile.trust);
        hero.profile.state = NegotiationState::Negotiating { tension };
        Ok(tension)
    }

    fn post_validate(&self, hero: &Hero, env: &NegotiationEnv<'_>) -> Result<(), Self::Error> {
        let tension = hero.profile.tension();
        if !super::tension_consistent(&hero.profile.state, env.config) {
            return Err(InitializeNegotiationError::StartingTensionTooHigh { tension });
        }
        Ok(())
    }
}
