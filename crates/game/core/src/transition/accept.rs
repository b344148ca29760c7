use crate::error::{ErrorSeverity, NegotiationError};
use crate::hero::{Hero, NegotiationState, NegotiationStatus, Turn};
use crate::negotiation::{ContractError, ContractFinalizer, FinalizedContract, TensionOutcome};
use crate::offer::ContractOffer;

use super::submit::{require_negotiating, score_round};
use super::{NegotiationEnv, NegotiationTransition};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcceptOfferError {
    #[error("no open negotiation (state is {status})")]
    NotNegotiating { status: NegotiationStatus },

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("accepted hero has no active contract")]
    ContractMissing,

    #[error("hero ended in state {status} after accepting")]
    UnexpectedState { status: NegotiationStatus },
}

impl NegotiationError for AcceptOfferError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotNegotiating { .. } => ErrorSeverity::Recoverable,
            Self::Contract(err) => err.severity(),
            Self::ContractMissing | Self::UnexpectedState { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotNegotiating { .. } => "ACCEPT_NOT_NEGOTIATING",
            Self::Contract(err) => err.error_code(),
            Self::ContractMissing => "ACCEPT_CONTRACT_MISSING",
            Self::UnexpectedState { .. } => "ACCEPT_UNEXPECTED_STATE",
        }
    }
}

/// How an acceptance attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcceptOutcome {
    Signed {
        round: TensionOutcome,
        contract: FinalizedContract,
    },
    /// The final offer was bad enough to end the negotiation instead.
    WalkedAway { round: TensionOutcome, turn: Turn },
}

impl AcceptOutcome {
    pub fn round(&self) -> &TensionOutcome {
        match self {
            Self::Signed { round, .. } | Self::WalkedAway { round, .. } => round,
        }
    }

    pub fn contract(&self) -> Option<&FinalizedContract> {
        match self {
            Self::Signed { contract, .. } => Some(contract),
            Self::WalkedAway { .. } => None,
        }
    }
}

/// Closes a negotiation on `offer`.
///
/// The offer is scored like any round first. If tension stays below the
/// walk-away threshold the hero accepts and the contract is written;
/// otherwise the hero walks away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcceptOffer {
    pub offer: ContractOffer,
}

impl AcceptOffer {
    pub fn new(offer: ContractOffer) -> Self {
        Self { offer }
    }
}

impl NegotiationTransition for AcceptOffer {
    type Error = AcceptOfferError;
    type Result = AcceptOutcome;

    fn pre_validate(&self, hero: &Hero, _env: &NegotiationEnv<'_>) -> Result<(), Self::Error> {
        require_negotiating(hero).map_err(|status| AcceptOfferError::NotNegotiating { status })?;
        if hero.contract.is_active() {
            return Err(ContractError::AlreadyUnderContract {
                turns_remaining: hero.contract.turns_remaining,
            }
            .into());
        }
        Ok(())
    }

    fn apply(&self, hero: &mut Hero, env: &NegotiationEnv<'_>) -> Result<AcceptOutcome, Self::Error> {
        let round = score_round(hero, &self.offer, env);
        if round.walked_away {
            return Ok(AcceptOutcome::WalkedAway {
                round,
                turn: env.turn,
            });
        }

        let contract = ContractFinalizer::finalize(&mut hero.contract, &self.offer)?;
        hero.profile.state = NegotiationState::Accepted {
            tension: round.tension,
        };
        Ok(AcceptOutcome::Signed { round, contract })
    }

    fn post_validate(&self, hero: &Hero, env: &NegotiationEnv<'_>) -> Result<(), Self::Error> {
        match hero.profile.state {
            NegotiationState::Accepted { .. } if !hero.contract.is_active() => {
                Err(AcceptOfferError::ContractMissing)
            }
            state @ NegotiationState::Accepted { .. } if !super::tension_consistent(&state, env.config) => {
                Err(AcceptOfferError::UnexpectedState {
                    status: state.status(),
                })
            }
            NegotiationState::Accepted { .. } | NegotiationState::WalkedAway { .. } => Ok(()),
            other => Err(AcceptOfferError::UnexpectedState {
                status: other.status(),
            }),
        }
    }
}
