//! Tension accumulation.
//!
//! ```text
//! base      = (Vexp − Voff) / Vexp × 100        clamped to [−100, 100], 0 if Vexp = 0
//! mitigate  = min(cap, (years − 1) × step)
//! delta     = ⌊base × (1 − mitigate) × trait_tension⌋ + (violated ? penalty : 0)
//! tension'  = clamp(tension + delta, 0, 100)
//! ```
//!
//! The fractional part is carried in basis points and floored once, toward
//! negative infinity, so a smaller offer can never produce a smaller delta
//! through rounding. Relief from a surplus offer therefore rounds up in
//! magnitude (−16.4 becomes −17).

use crate::config::NegotiationConfig;
use crate::hero::{HeroNegotiationProfile, Tension};
use crate::multiplier::{Factor, Multiplier};
use crate::offer::ContractOffer;
use crate::traits::PaymentPreference;

use super::effects::TraitEffectResolver;
use super::preference::PaymentPreferenceEvaluator;
use super::value::ValueModel;

/// How a single offer moves the tension meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TensionBreakdown {
    pub expected_value: u64,
    pub offer_value: u64,
    /// Shortfall as a whole percent of Vexp (negative for surplus offers).
    pub base_delta: i64,
    pub length_mitigation: Multiplier,
    pub trait_multiplier: Factor,
    /// Shortfall after mitigation and trait scaling.
    pub trait_tension: i64,
    pub preference: PaymentPreference,
    pub preference_violated: bool,
    pub delta: i64,
}

/// Result of applying an offer to the current tension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TensionOutcome {
    pub previous: Tension,
    pub tension: Tension,
    pub breakdown: TensionBreakdown,
    pub walked_away: bool,
}

impl TensionOutcome {
    pub fn delta(&self) -> i64 {
        self.breakdown.delta
    }
}

pub struct TensionEngine<'a> {
    config: &'a NegotiationConfig,
}

impl<'a> TensionEngine<'a> {
    pub fn new(config: &'a NegotiationConfig) -> Self {
        Self { config }
    }

    /// Opening tension: none for trusting heroes, the maximum for distrustful
    /// ones, linear in between.
    pub fn starting_tension(&self, trust: u8) -> Tension {
        let trust = trust.min(100);
        let high = self.config.trust_high;
        let low = self.config.trust_low;
        let max = i64::from(self.config.max_starting_tension);

        if trust >= high {
            Tension::ZERO
        } else if trust <= low {
            Tension::clamped(max)
        } else {
            let span = i64::from(high - low);
            Tension::clamped(max * i64::from(high - trust) / span)
        }
    }

    /// Discount for longer commitments, non-decreasing in `years` and capped.
    pub fn length_mitigation(&self, years: u32) -> Multiplier {
        let extra_years = years.saturating_sub(1);
        let mitigation = extra_years
            .saturating_mul(self.config.length_mitigation_step)
            .min(self.config.length_mitigation_cap)
            .min(Multiplier::SCALE);
        Multiplier::from_bps(mitigation)
    }

    pub fn assess(&self, profile: &HeroNegotiationProfile, offer: &ContractOffer) -> TensionBreakdown {
        const SCALE: i128 = Multiplier::SCALE as i128;
        const FULL: i128 = 100 * SCALE;

        let expected_value = ValueModel::new(self.config).expected_value(profile);
        let offer_value = ValueModel::offer_value(offer);
        let effects = TraitEffectResolver::for_profile(profile);

        // Shortfall percent, in basis points of a percent.
        let base_scaled = if expected_value == 0 {
            0
        } else {
            let shortfall = i128::from(expected_value) - i128::from(offer_value);
            (shortfall * FULL)
                .div_euclid(i128::from(expected_value))
                .clamp(-FULL, FULL)
        };

        let length_mitigation = self.length_mitigation(u32::from(offer.contract_length_years()));
        let kept = SCALE - i128::from(length_mitigation.bps());
        let trait_multiplier = effects.tension;
        let trait_tension = trait_multiplier
            .floor_of_signed(base_scaled * kept, (SCALE * SCALE) as u128)
            as i64;

        let preference = effects.preference;
        let preference_violated =
            PaymentPreferenceEvaluator::new(self.config).is_violated(preference, offer);
        let penalty = if preference_violated {
            i64::from(self.config.preference_penalty)
        } else {
            0
        };

        TensionBreakdown {
            expected_value,
            offer_value,
            base_delta: base_scaled.div_euclid(SCALE) as i64,
            length_mitigation,
            trait_multiplier,
            trait_tension,
            preference,
            preference_violated,
            delta: trait_tension + penalty,
        }
    }

    pub fn tension_delta(&self, profile: &HeroNegotiationProfile, offer: &ContractOffer) -> i64 {
        self.assess(profile, offer).delta
    }

    /// Evaluates `offer` against the hero's current tension.
    ///
    /// This only computes the outcome; the `SubmitOffer` and `AcceptOffer`
    /// transitions are the only places that write it back to the hero.
    pub fn apply_offer(&self, profile: &HeroNegotiationProfile, offer: &ContractOffer) -> TensionOutcome {
        let breakdown = self.assess(profile, offer);
        let previous = profile.tension();
        let raw = i64::from(previous.value()) + breakdown.delta;

        TensionOutcome {
            previous,
            tension: Tension::clamped(raw),
            breakdown,
            walked_away: raw >= i64::from(self.config.walk_away_threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hero::{CoreStats, LifecycleStage, NegotiationState};
    use crate::traits::{KeywordTable, TraitDefinition, TraitEffect};

    fn hero(traits: &[&str]) -> HeroNegotiationProfile {
        let table = KeywordTable::standard();
        HeroNegotiationProfile::new(CoreStats::three(24, 24, 24), LifecycleStage::Prime)
            .with_greed(60)
            .with_traits(traits.iter().map(|name| TraitDefinition::author(*name, &table)))
            .unwrap()
    }

    fn negotiating(mut profile: HeroNegotiationProfile, tension: i64) -> HeroNegotiationProfile {
        profile.state = NegotiationState::Negotiating {
            tension: Tension::clamped(tension),
        };
        profile
    }

    #[test]
    fn starting_tension_from_trust() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);

        assert_eq!(engine.starting_tension(100).value(), 0);
        assert_eq!(engine.starting_tension(75).value(), 0);
        assert_eq!(engine.starting_tension(74).value(), 0);
        assert_eq!(engine.starting_tension(50).value(), 12);
        assert_eq!(engine.starting_tension(26).value(), 24);
        assert_eq!(engine.starting_tension(25).value(), 25);
        assert_eq!(engine.starting_tension(0).value(), 25);
        assert_eq!(engine.starting_tension(50), engine.starting_tension(50));
    }

    #[test]
    fn length_mitigation_is_monotone_and_capped() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);

        let values: Vec<u32> = (0..=12).map(|y| engine.length_mitigation(y).bps()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(engine.length_mitigation(1).bps(), 0);
        assert_eq!(engine.length_mitigation(2).bps(), 1_000);
        assert_eq!(engine.length_mitigation(5).bps(), 4_000);
        assert_eq!(engine.length_mitigation(6).bps(), 5_000);
        assert_eq!(engine.length_mitigation(40).bps(), 5_000);
    }

    #[test]
    fn shortfall_builds_tension() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let profile = hero(&["Greedy"]);

        // Vexp 359, Voff 300: 16.43% short, 10% mitigation
        let breakdown = engine.assess(&profile, &ContractOffer::new(100, 25, 2));
        assert_eq!(breakdown.expected_value, 359);
        assert_eq!(breakdown.offer_value, 300);
        assert_eq!(breakdown.base_delta, 16);
        assert!(!breakdown.preference_violated);
        assert_eq!(breakdown.delta, 14);
    }

    #[test]
    fn ignored_preference_adds_penalty() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let profile = hero(&["Greedy"]);

        // Voff 250, bonus share 20%: 27 from the shortfall plus 10
        let breakdown = engine.assess(&profile, &ContractOffer::new(50, 25, 2));
        assert!(breakdown.preference_violated);
        assert_eq!(breakdown.trait_tension, 27);
        assert_eq!(breakdown.delta, 37);
    }

    #[test]
    fn surplus_offers_relieve_tension_down_to_minus_100() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let profile = hero(&[]);
        let expected = ValueModel::new(&config).expected_value(&profile);

        let generous = ContractOffer::new(expected * 5, 0, 1);
        let breakdown = engine.assess(&profile, &generous);
        assert_eq!(breakdown.base_delta, -100);
        assert_eq!(breakdown.delta, -100);
    }

    #[test]
    fn stacked_tension_traits_are_floored_once() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let softening = || {
            TraitDefinition::explicit("Softening", vec![TraitEffect::TensionBuild(Multiplier::percent(85))])
        };
        let profile = HeroNegotiationProfile::new(
            CoreStats::three(100_000, 100_000, 100_000),
            LifecycleStage::Prime,
        )
        .with_traits([softening(), softening(), softening()])
        .unwrap();

        // 99.3284% short of 720 000; x0.614125 = 61.00001, x0.6141 would give 60
        let breakdown = engine.assess(&profile, &ContractOffer::new(4_835, 0, 1));
        assert_eq!(breakdown.expected_value, 720_000);
        assert_eq!(breakdown.base_delta, 99);
        assert_eq!(breakdown.trait_tension, 61);
        assert_eq!(breakdown.delta, 61);
    }

    #[test]
    fn surplus_relief_rounds_toward_negative_infinity() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let profile = hero(&["Greedy"]);

        // Vexp 359, Voff 418: 16.43% over, one year, no trait scaling
        let breakdown = engine.assess(&profile, &ContractOffer::new(218, 50, 1));
        assert_eq!(breakdown.offer_value, 418);
        assert_eq!(breakdown.base_delta, -17);
        assert_eq!(breakdown.delta, -17);
    }

    #[test]
    fn zero_expected_value_has_no_base_delta() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let profile = HeroNegotiationProfile::default();

        assert_eq!(engine.tension_delta(&profile, &ContractOffer::new(0, 0, 1)), 0);
        assert_eq!(engine.tension_delta(&profile, &ContractOffer::new(50, 10, 3)), 0);
    }

    #[test]
    fn tension_traits_scale_delta() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let offer = ContractOffer::new(90, 30, 1);

        let plain = engine.tension_delta(&hero(&[]), &offer);
        let stubborn = engine.tension_delta(&hero(&["Stubborn"]), &offer);
        let flexible = engine.tension_delta(&hero(&["Flexible"]), &offer);
        assert!(stubborn > plain);
        assert!(flexible < plain);
    }

    #[test]
    fn smaller_offers_never_reduce_delta() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let profile = hero(&["Stubborn", "Ambitious"]);

        for years in 1..=5 {
            let mut last = i64::MIN;
            for bonus in (0..=600).rev().step_by(7) {
                let delta = engine.tension_delta(&profile, &ContractOffer::new(bonus, 20, years));
                assert!(delta >= last, "bonus {bonus} years {years}: {delta} < {last}");
                last = delta;
            }

            let mut last = i64::MIN;
            for salary in (0..=150).rev() {
                let delta = engine.tension_delta(&profile, &ContractOffer::new(40, salary, years));
                assert!(delta >= last, "salary {salary} years {years}: {delta} < {last}");
                last = delta;
            }
        }
    }

    #[test]
    fn apply_offer_clamps_and_flags_walk_away() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let stingy = ContractOffer::new(0, 0, 1);

        // +100 plus the bonus-preference penalty from 90
        let outcome = engine.apply_offer(&negotiating(hero(&["Greedy"]), 90), &stingy);
        assert_eq!(outcome.previous.value(), 90);
        assert_eq!(outcome.tension, Tension::MAX);
        assert!(outcome.walked_away);

        let outcome = engine.apply_offer(&negotiating(hero(&[]), 5), &ContractOffer::new(1_000, 0, 1));
        assert_eq!(outcome.tension, Tension::ZERO);
        assert!(!outcome.walked_away);
    }

    #[test]
    fn walk_away_only_at_threshold() {
        let config = NegotiationConfig::default();
        let engine = TensionEngine::new(&config);
        let profile = hero(&[]);
        let expected = ValueModel::new(&config).expected_value(&profile);
        // Half the expected value as a one-year offer: +50 tension.
        let offer = ContractOffer::new(expected / 2, 0, 1);
        let delta = engine.tension_delta(&profile, &offer);
        assert_eq!(delta, 50);

        let below = engine.apply_offer(&negotiating(profile.clone(), 49), &offer);
        assert_eq!(below.tension.value(), 99);
        assert!(!below.walked_away);

        let exact = engine.apply_offer(&negotiating(profile, 50), &offer);
        assert_eq!(exact.tension.value(), 100);
        assert!(exact.walked_away);
    }
}
