//! Trait effect resolution.
//!
//! Folds the tagged effects of a hero's traits, in trait order:
//! multipliers compose into one exact product, the first preference wins.

use crate::hero::HeroNegotiationProfile;
use crate::multiplier::Factor;
use crate::traits::{ContractModifiers, PaymentPreference, TraitDefinition, TraitEffect};

/// Negotiation modifiers derived from a trait set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitEffects {
    pub vexp: Factor,
    pub tension: Factor,
    pub preference: PaymentPreference,
    pub contract: ContractModifiers,
}

pub struct TraitEffectResolver;

impl TraitEffectResolver {
    pub fn resolve<'t>(traits: impl IntoIterator<Item = &'t TraitDefinition>) -> TraitEffects {
        let mut vexp = Factor::ONE;
        let mut tension = Factor::ONE;
        let mut preference = None;
        let mut contract = ContractModifiers::default();

        for definition in traits {
            for effect in definition.effects() {
                match *effect {
                    TraitEffect::ExpectedValue(m) => vexp = vexp.times(m),
                    TraitEffect::TensionBuild(m) => tension = tension.times(m),
                    TraitEffect::Preference(p) => {
                        preference.get_or_insert(p);
                    }
                }
            }
            contract = contract.combine(definition.contract_modifiers());
        }

        TraitEffects {
            vexp,
            tension,
            preference: preference.unwrap_or_default(),
            contract,
        }
    }

    pub fn for_profile(profile: &HeroNegotiationProfile) -> TraitEffects {
        Self::resolve(profile.traits())
    }
}
