use crate::config::NegotiationConfig;
use crate::hero::HeroNegotiationProfile;
use crate::offer::ContractOffer;
use crate::traits::PaymentPreference;

use super::effects::TraitEffectResolver;

/// Classifies a hero's payment preference and checks offers against it.
pub struct PaymentPreferenceEvaluator<'a> {
    config: &'a NegotiationConfig,
}

impl<'a> PaymentPreferenceEvaluator<'a> {
    pub fn new(config: &'a NegotiationConfig) -> Self {
        Self { config }
    }

    /// Recomputed from traits on every call; never stored.
    pub fn preference(profile: &HeroNegotiationProfile) -> PaymentPreference {
        TraitEffectResolver::for_profile(profile).preference
    }

    /// Whether `offer` ignores `preference`.
    ///
    /// The signing-bonus share is compared in whole percent without division.
    /// A worthless offer violates a bonus preference (there is no bonus) but
    /// not a salary preference (there is no salary demand to fail).
    pub fn is_violated(&self, preference: PaymentPreference, offer: &ContractOffer) -> bool {
        let value = u128::from(offer.value());
        let bonus_pct = u128::from(offer.signing_bonus()) * 100;

        match preference {
            PaymentPreference::Neutral => false,
            PaymentPreference::PrefersSigningBonus => {
                value == 0 || bonus_pct < u128::from(self.config.signing_bonus_min_share) * value
            }
            PaymentPreference::PrefersSalary => {
                value != 0 && bonus_pct > u128::from(self.config.salary_max_signing_share) * value
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bonus_seeker_threshold() {
        let config = NegotiationConfig::default();
        let evaluator = PaymentPreferenceEvaluator::new(&config);
        let bonus = PaymentPreference::PrefersSigningBonus;

        // 100 of 300 = 33%
        assert!(!evaluator.is_violated(bonus, &ContractOffer::new(100, 25, 2)));
        // 50 of 250 = 20%
        assert!(evaluator.is_violated(bonus, &ContractOffer::new(50, 25, 2)));
        // 60 of 200 is exactly 30%, which is acceptable
        assert!(!evaluator.is_violated(bonus, &ContractOffer::new(60, 35, 1)));
    }

    #[test]
    fn salary_seeker_threshold() {
        let config = NegotiationConfig::default();
        let evaluator = PaymentPreferenceEvaluator::new(&config);
        let salary = PaymentPreference::PrefersSalary;

        // 20 of 100 = 20%, not above the limit
        assert!(!evaluator.is_violated(salary, &ContractOffer::new(20, 20, 1)));
        // 21 of 101
        assert!(evaluator.is_violated(salary, &ContractOffer::new(21, 20, 1)));
    }

    #[test]
    fn zero_value_offers() {
        let config = NegotiationConfig::default();
        let evaluator = PaymentPreferenceEvaluator::new(&config);
        let nothing = ContractOffer::new(0, 0, 3);

        assert!(evaluator.is_violated(PaymentPreference::PrefersSigningBonus, &nothing));
        assert!(!evaluator.is_violated(PaymentPreference::PrefersSalary, &nothing));
        assert!(!evaluator.is_violated(PaymentPreference::Neutral, &nothing));
    }

    #[test]
    fn neutral_never_violates() {
        let config = NegotiationConfig::default();
        let evaluator = PaymentPreferenceEvaluator::new(&config);
        assert!(!evaluator.is_violated(PaymentPreference::Neutral, &ContractOffer::new(0, 50, 5)));
        assert!(!evaluator.is_violated(PaymentPreference::Neutral, &ContractOffer::new(900, 0, 1)));
    }
}
