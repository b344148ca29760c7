//! Contract offers proposed by the player.

use crate::config::NegotiationConfig;
use crate::error::{ErrorSeverity, NegotiationError};

/// A concrete offer: signing bonus, salary per turn and contract length.
///
/// The length is always within `1..=5` years; out-of-range requests are
/// clamped on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "OfferTerms")
)]
pub struct ContractOffer {
    signing_bonus: u64,
    salary_per_turn: u64,
    contract_length_years: u8,
}

impl ContractOffer {
    pub fn new(signing_bonus: u64, salary_per_turn: u64, contract_length_years: u32) -> Self {
        Self {
            signing_bonus,
            salary_per_turn,
            contract_length_years: clamp_years(contract_length_years),
        }
    }

    /// Validates signed integer inputs from the offer controls.
    pub fn try_new(
        signing_bonus: i64,
        salary_per_turn: i64,
        contract_length_years: i64,
    ) -> Result<Self, OfferError> {
        let signing_bonus = u64::try_from(signing_bonus).map_err(|_| OfferError::Negative {
            field: OfferField::SigningBonus,
        })?;
        let salary_per_turn = u64::try_from(salary_per_turn).map_err(|_| OfferError::Negative {
            field: OfferField::SalaryPerTurn,
        })?;
        let years = u32::try_from(contract_length_years.max(0)).unwrap_or(u32::MAX);
        Ok(Self::new(signing_bonus, salary_per_turn, years))
    }

    /// Validates raw slider values. Fractional gold is truncated.
    pub fn from_raw(
        signing_bonus: f64,
        salary_per_turn: f64,
        contract_length_years: f64,
    ) -> Result<Self, OfferError> {
        let signing_bonus = gold_from_raw(signing_bonus, OfferField::SigningBonus)?;
        let salary_per_turn = gold_from_raw(salary_per_turn, OfferField::SalaryPerTurn)?;
        if !contract_length_years.is_finite() {
            return Err(OfferError::NonFinite {
                field: OfferField::ContractLength,
            });
        }
        // `as` saturates, and the value is clamped to 1..=5 anyway.
        let years = contract_length_years.max(0.0) as u32;
        Ok(Self::new(signing_bonus, salary_per_turn, years))
    }

    #[inline]
    pub fn signing_bonus(&self) -> u64 {
        self.signing_bonus
    }

    #[inline]
    pub fn salary_per_turn(&self) -> u64 {
        self.salary_per_turn
    }

    #[inline]
    pub fn contract_length_years(&self) -> u8 {
        self.contract_length_years
    }

    /// Number of salary payments over the contract.
    pub fn total_turns(&self) -> u32 {
        u32::from(self.contract_length_years) * NegotiationConfig::TURNS_PER_YEAR
    }

    /// Total gold promised: bonus plus every salary payment.
    pub fn value(&self) -> u64 {
        self.signing_bonus
            .saturating_add(self.salary_per_turn.saturating_mul(u64::from(self.total_turns())))
    }
}

/// Unchecked offer terms as they appear in content files.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct OfferTerms {
    signing_bonus: u64,
    salary_per_turn: u64,
    contract_length_years: u32,
}

#[cfg(feature = "serde")]
impl From<OfferTerms> for ContractOffer {
    fn from(terms: OfferTerms) -> Self {
        Self::new(
            terms.signing_bonus,
            terms.salary_per_turn,
            terms.contract_length_years,
        )
    }
}

fn clamp_years(years: u32) -> u8 {
    years.clamp(
        u32::from(NegotiationConfig::MIN_CONTRACT_YEARS),
        u32::from(NegotiationConfig::MAX_CONTRACT_YEARS),
    ) as u8
}

/// Largest gold amount an f64 slider can carry without losing integer precision.
const MAX_EXACT_GOLD: f64 = 9_007_199_254_740_992.0;

fn gold_from_raw(value: f64, field: OfferField) -> Result<u64, OfferError> {
    if !value.is_finite() {
        return Err(OfferError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(OfferError::Negative { field });
    }
    if value > MAX_EXACT_GOLD {
        return Err(OfferError::OutOfRange { field });
    }
    Ok(value as u64)
}

/// Offer field names used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OfferField {
    SigningBonus,
    SalaryPerTurn,
    ContractLength,
}

/// An offer rejected before valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OfferError {
    #[error("invalid offer: {field} must not be negative")]
    Negative { field: OfferField },

    #[error("invalid offer: {field} is not a finite number")]
    NonFinite { field: OfferField },

    #[error("invalid offer: {field} is too large")]
    OutOfRange { field: OfferField },
}

impl NegotiationError for OfferError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Negative { .. } => "INVALID_OFFER_NEGATIVE",
            Self::NonFinite { .. } => "INVALID_OFFER_NON_FINITE",
            Self::OutOfRange { .. } => "INVALID_OFFER_OUT_OF_RANGE",
        }
    }
}
