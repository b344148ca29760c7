use crate::hero::{LifecycleStage, StatLayout};
use crate::multiplier::Multiplier;
use crate::traits::PaymentPreference;

/// Negotiation tunables.
///
/// Every field is a named numeric knob; none of them selects a different code
/// path. Multipliers are expressed in basis points (10 000 = ×1.0) and shares
/// and thresholds in whole percent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NegotiationConfig {
    /// Number of core attributes summed into a hero's expected value.
    pub stat_layout: StatLayout,

    pub lifecycle: LifecycleMultipliers,

    /// Trust at or above which negotiations open with zero tension.
    pub trust_high: u8,
    /// Trust at or below which negotiations open with `max_starting_tension`.
    pub trust_low: u8,
    pub max_starting_tension: u8,

    /// Mitigation granted per contract year beyond the first, in basis points.
    pub length_mitigation_step: u32,
    /// Upper bound on length mitigation, in basis points.
    pub length_mitigation_cap: u32,

    /// Minimum signing-bonus share of the offer a bonus-seeking hero accepts.
    pub signing_bonus_min_share: u8,
    /// Maximum signing-bonus share of the offer a salary-seeking hero accepts.
    pub salary_max_signing_share: u8,
    /// Tension added when an offer ignores the hero's payment preference.
    pub preference_penalty: u8,

    pub ideal_shares: IdealOfferShares,

    /// Turns a walked-away hero stays out of the recruitment pool.
    pub lockout_turns: u64,
    /// Tension at which a hero walks away.
    pub walk_away_threshold: u8,
}

impl NegotiationConfig {
    // ===== compile-time limits =====
    /// Maximum number of traits attached to a single hero.
    pub const MAX_TRAITS: usize = 8;
    /// Maximum number of core attributes a hero carries.
    pub const MAX_CORE_STATS: usize = 5;
    /// Shortest contract, in years.
    pub const MIN_CONTRACT_YEARS: u8 = 1;
    /// Longest contract, in years.
    pub const MAX_CONTRACT_YEARS: u8 = 5;
    /// Turns that make up one contract year.
    pub const TURNS_PER_YEAR: u32 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TRUST_HIGH: u8 = 75;
    pub const DEFAULT_TRUST_LOW: u8 = 25;
    pub const DEFAULT_MAX_STARTING_TENSION: u8 = 25;
    pub const DEFAULT_LENGTH_MITIGATION_STEP: u32 = 1_000;
    pub const DEFAULT_LENGTH_MITIGATION_CAP: u32 = 5_000;
    pub const DEFAULT_SIGNING_BONUS_MIN_SHARE: u8 = 30;
    pub const DEFAULT_SALARY_MAX_SIGNING_SHARE: u8 = 20;
    pub const DEFAULT_PREFERENCE_PENALTY: u8 = 10;
    pub const DEFAULT_LOCKOUT_TURNS: u64 = 4;
    pub const DEFAULT_WALK_AWAY_THRESHOLD: u8 = 100;

    pub fn new() -> Self {
        Self {
            stat_layout: StatLayout::Three,
            lifecycle: LifecycleMultipliers::default(),
            trust_high: Self::DEFAULT_TRUST_HIGH,
            trust_low: Self::DEFAULT_TRUST_LOW,
            max_starting_tension: Self::DEFAULT_MAX_STARTING_TENSION,
            length_mitigation_step: Self::DEFAULT_LENGTH_MITIGATION_STEP,
            length_mitigation_cap: Self::DEFAULT_LENGTH_MITIGATION_CAP,
            signing_bonus_min_share: Self::DEFAULT_SIGNING_BONUS_MIN_SHARE,
            salary_max_signing_share: Self::DEFAULT_SALARY_MAX_SIGNING_SHARE,
            preference_penalty: Self::DEFAULT_PREFERENCE_PENALTY,
            ideal_shares: IdealOfferShares::default(),
            lockout_turns: Self::DEFAULT_LOCKOUT_TURNS,
            walk_away_threshold: Self::DEFAULT_WALK_AWAY_THRESHOLD,
        }
    }

    pub fn with_stat_layout(mut self, stat_layout: StatLayout) -> Self {
        self.stat_layout = stat_layout;
        self
    }

    pub fn with_lockout_turns(mut self, lockout_turns: u64) -> Self {
        self.lockout_turns = lockout_turns;
        self
    }

    /// Checks that the tunables describe a usable negotiation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trust_low >= self.trust_high {
            return Err(ConfigError::TrustThresholdsInverted {
                low: self.trust_low,
                high: self.trust_high,
            });
        }
        if self.trust_high > 100 {
            return Err(ConfigError::PercentOutOfRange {
                field: "trust_high",
                value: u32::from(self.trust_high),
            });
        }
        if self.walk_away_threshold == 0 || self.walk_away_threshold > 100 {
            return Err(ConfigError::PercentOutOfRange {
                field: "walk_away_threshold",
                value: u32::from(self.walk_away_threshold),
            });
        }
        if self.max_starting_tension >= self.walk_away_threshold {
            return Err(ConfigError::StartingTensionTooHigh {
                max_starting_tension: self.max_starting_tension,
                walk_away_threshold: self.walk_away_threshold,
            });
        }
        if self.length_mitigation_cap > Multiplier::SCALE {
            return Err(ConfigError::PercentOutOfRange {
                field: "length_mitigation_cap",
                value: self.length_mitigation_cap / 100,
            });
        }
        for (field, value) in [
            ("signing_bonus_min_share", self.signing_bonus_min_share),
            ("salary_max_signing_share", self.salary_max_signing_share),
            ("ideal_shares.signing_bonus", self.ideal_shares.signing_bonus),
            ("ideal_shares.salary", self.ideal_shares.salary),
            ("ideal_shares.neutral", self.ideal_shares.neutral),
        ] {
            if value > 100 {
                return Err(ConfigError::PercentOutOfRange {
                    field,
                    value: u32::from(value),
                });
            }
        }
        Ok(())
    }
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Expected-value multiplier per lifecycle stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LifecycleMultipliers {
    pub rookie: Multiplier,
    pub prime: Multiplier,
    pub veteran: Multiplier,
}

impl LifecycleMultipliers {
    pub fn multiplier(&self, stage: LifecycleStage) -> Multiplier {
        match stage {
            LifecycleStage::Rookie => self.rookie,
            LifecycleStage::Prime => self.prime,
            LifecycleStage::Veteran => self.veteran,
        }
    }
}

impl Default for LifecycleMultipliers {
    fn default() -> Self {
        Self {
            rookie: Multiplier::from_bps(8_000),
            prime: Multiplier::from_bps(12_000),
            veteran: Multiplier::from_bps(15_000),
        }
    }
}

/// Signing-bonus share (percent) of an ideal offer, per payment preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IdealOfferShares {
    pub signing_bonus: u8,
    pub salary: u8,
    pub neutral: u8,
}

impl IdealOfferShares {
    pub fn share(&self, preference: PaymentPreference) -> u8 {
        match preference {
            PaymentPreference::PrefersSigningBonus => self.signing_bonus,
            PaymentPreference::PrefersSalary => self.salary,
            PaymentPreference::Neutral => self.neutral,
        }
    }
}

impl Default for IdealOfferShares {
    fn default() -> Self {
        Self {
            signing_bonus: 40,
            salary: 15,
            neutral: 25,
        }
    }
}

/// Inconsistent tunables rejected by [`NegotiationConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("trust_low ({low}) must be below trust_high ({high})")]
    TrustThresholdsInverted { low: u8, high: u8 },

    #[error("{field} = {value} is outside the percent range")]
    PercentOutOfRange { field: &'static str, value: u32 },

    #[error(
        "max_starting_tension ({max_starting_tension}) must be below walk_away_threshold ({walk_away_threshold})"
    )]
    StartingTensionTooHigh {
        max_starting_tension: u8,
        walk_away_threshold: u8,
    },
}

impl crate::error::NegotiationError for ConfigError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TrustThresholdsInverted { .. } => "CONFIG_TRUST_THRESHOLDS_INVERTED",
            Self::PercentOutOfRange { .. } => "CONFIG_PERCENT_OUT_OF_RANGE",
            Self::StartingTensionTooHigh { .. } => "CONFIG_STARTING_TENSION_TOO_HIGH",
        }
    }
}
