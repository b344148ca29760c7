//! Writing an accepted offer into a hero's contract.

use crate::error::{ErrorSeverity, NegotiationError};
use crate::hero::HeroContract;
use crate::offer::ContractOffer;

/// Terms of a freshly signed contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalizedContract {
    pub signing_bonus: u64,
    pub salary_per_turn: u64,
    pub contract_length_years: u8,
    pub total_turns: u32,
    pub total_value: u64,
}

pub struct ContractFinalizer;

impl ContractFinalizer {
    /// Copies the offer into `contract` and starts the countdown.
    ///
    /// Fails without touching `contract` while a previous contract is still
    /// running.
    pub fn finalize(
        contract: &mut HeroContract,
        offer: &ContractOffer,
    ) -> Result<FinalizedContract, ContractError> {
        if contract.is_active() {
            return Err(ContractError::AlreadyUnderContract {
                turns_remaining: contract.turns_remaining,
            });
        }

        *contract = HeroContract {
            signing_bonus: offer.signing_bonus(),
            salary_per_turn: offer.salary_per_turn(),
            contract_length_years: offer.contract_length_years(),
            turns_remaining: offer.total_turns(),
        };

        Ok(FinalizedContract {
            signing_bonus: offer.signing_bonus(),
            salary_per_turn: offer.salary_per_turn(),
            contract_length_years: offer.contract_length_years(),
            total_turns: offer.total_turns(),
            total_value: offer.value(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContractError {
    #[error("hero is already under contract ({turns_remaining} turns remaining)")]
    AlreadyUnderContract { turns_remaining: u32 },
}

impl NegotiationError for ContractError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyUnderContract { .. } => "CONTRACT_ALREADY_ACTIVE",
        }
    }
}
