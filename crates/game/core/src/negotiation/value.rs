//! Expected value (Vexp) and offer value (Voff).
//!
//! ```text
//! core      = Σ effective stats
//! base      = core × 2
//! adjusted  = base × lifecycle
//! premium   = adjusted × greed / 100
//! Vexp      = ⌊(adjusted + premium) × trait_vexp⌋
//! Voff      = bonus + salary × 4 × years
//! ```
//!
//! Vexp is evaluated as one exact integer fraction and floored once, with the
//! trait product carried as an exact [`Factor`].

use crate::config::NegotiationConfig;
use crate::hero::HeroNegotiationProfile;
use crate::multiplier::{Factor, Multiplier};
use crate::offer::ContractOffer;

use super::effects::TraitEffectResolver;

/// Every intermediate term of the expected-value formula, floored to gold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueBreakdown {
    pub core: u64,
    pub base: u64,
    pub lifecycle: Multiplier,
    pub lifecycle_adjusted: u64,
    pub greed_premium: u64,
    pub trait_modifier: Factor,
    pub expected_value: u64,
}

pub struct ValueModel<'a> {
    config: &'a NegotiationConfig,
}

impl<'a> ValueModel<'a> {
    pub fn new(config: &'a NegotiationConfig) -> Self {
        Self { config }
    }

    pub fn breakdown(&self, profile: &HeroNegotiationProfile) -> ValueBreakdown {
        const SCALE: u128 = Multiplier::SCALE as u128;

        let core = profile.effective_stats().total(self.config.stat_layout);
        let base = core.saturating_mul(2);
        let lifecycle = self.config.lifecycle.multiplier(profile.lifecycle);
        let greed = u128::from(profile.greed.min(100));
        let trait_modifier = TraitEffectResolver::for_profile(profile).vexp;

        let adjusted_scaled = u128::from(base) * u128::from(lifecycle.bps());
        let expected = trait_modifier.floor_of(adjusted_scaled * (100 + greed), SCALE * 100);

        ValueBreakdown {
            core,
            base,
            lifecycle,
            lifecycle_adjusted: saturate(adjusted_scaled / SCALE),
            greed_premium: saturate(adjusted_scaled * greed / (SCALE * 100)),
            trait_modifier,
            expected_value: saturate(expected),
        }
    }

    pub fn expected_value(&self, profile: &HeroNegotiationProfile) -> u64 {
        self.breakdown(profile).expected_value
    }

    pub fn offer_value(offer: &ContractOffer) -> u64 {
        offer.value()
    }

    /// An offer worth at least the hero's expected value, split the way the
    /// hero likes to be paid.
    ///
    /// The rounding remainder of the per-turn salary goes to the signing
    /// bonus, so the offer is worth exactly the expected value.
    pub fn ideal_offer(&self, profile: &HeroNegotiationProfile, desired_years: u32) -> ContractOffer {
        let expected = self.expected_value(profile);
        let preference = TraitEffectResolver::for_profile(profile).preference;
        let share = u128::from(self.config.ideal_shares.share(preference).min(100));

        let target_bonus = saturate(u128::from(expected) * share / 100);
        let remaining = expected - target_bonus;

        // Clamp the length first so the split uses the same turn count the
        // offer will report.
        let turns = ContractOffer::new(0, 0, desired_years).total_turns();
        let salary = remaining / u64::from(turns);
        let remainder = remaining % u64::from(turns);

        ContractOffer::new(target_bonus + remainder, salary, desired_years)
    }
}

fn saturate(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}
