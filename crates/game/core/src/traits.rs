//! Hero trait definitions and their negotiation effects.
//!
//! A trait's display name is scanned against a [`KeywordTable`] exactly once,
//! when the trait is authored. The scan records an explicit list of tagged
//! [`TraitEffect`]s on the definition; evaluation only ever folds those tags.
//!
//! Keyword matching is a case-insensitive substring test, so one name can hit
//! several keywords ("Impatient" matches both `impatient` and `patient`). Hits
//! are recorded in table order and compose multiplicatively.

use crate::multiplier::Multiplier;

/// Payment structure a hero leans toward.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PaymentPreference {
    /// Wants a large upfront signing bonus.
    PrefersSigningBonus,
    /// Wants steady salary over the contract.
    PrefersSalary,
    /// No preference; never penalizes an offer.
    #[default]
    Neutral,
}

/// A single tagged negotiation effect attached to a trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraitEffect {
    /// Scales the hero's expected contract value.
    ExpectedValue(Multiplier),
    /// Scales how quickly tension builds.
    TensionBuild(Multiplier),
    /// Declares a payment preference category.
    Preference(PaymentPreference),
}

/// One row of the keyword table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordRule {
    keyword: String,
    pub vexp: Multiplier,
    pub tension: Multiplier,
    pub preference: Option<PaymentPreference>,
}

impl KeywordRule {
    pub fn new(keyword: &str, vexp: Multiplier, tension: Multiplier) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            vexp,
            tension,
            preference: None,
        }
    }

    pub fn with_preference(mut self, preference: PaymentPreference) -> Self {
        self.preference = Some(preference);
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Matches against an already lower-cased trait name.
    fn matches(&self, lowered_name: &str) -> bool {
        !self.keyword.is_empty() && lowered_name.contains(self.keyword.as_str())
    }

    /// Effects contributed by this rule; identity multipliers are omitted.
    fn effects(&self) -> impl Iterator<Item = TraitEffect> + '_ {
        let vexp = (!self.vexp.is_identity()).then_some(TraitEffect::ExpectedValue(self.vexp));
        let tension =
            (!self.tension.is_identity()).then_some(TraitEffect::TensionBuild(self.tension));
        let preference = self.preference.map(TraitEffect::Preference);
        vexp.into_iter().chain(tension).chain(preference)
    }
}

/// Ordered keyword → effect table used when authoring traits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

impl KeywordTable {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        // Keywords deserialized from content bypass `KeywordRule::new`.
        let rules = rules
            .into_iter()
            .map(|mut rule| {
                rule.keyword = rule.keyword.to_lowercase();
                rule
            })
            .collect();
        Self { rules }
    }

    /// The stock recruitment keyword table.
    pub fn standard() -> Self {
        use PaymentPreference::{PrefersSalary, PrefersSigningBonus};

        let one = Multiplier::ONE;
        let vexp = |keyword, percent| KeywordRule::new(keyword, Multiplier::percent(percent), one);
        let tension =
            |keyword, percent| KeywordRule::new(keyword, one, Multiplier::percent(percent));

        Self::new(vec![
            vexp("greedy", 130).with_preference(PrefersSigningBonus),
            vexp("impulsive", 130).with_preference(PrefersSigningBonus),
            vexp("ambitious", 120),
            vexp("frugal", 70),
            vexp("humble", 70),
            KeywordRule::new("loyal", Multiplier::percent(85), one),
            tension("hotheaded", 150),
            tension("impatient", 150).with_preference(PrefersSigningBonus),
            tension("stubborn", 130),
            tension("patient", 70).with_preference(PrefersSalary),
            tension("calm", 70).with_preference(PrefersSalary),
            tension("cautious", 70).with_preference(PrefersSalary),
            tension("steady", 70).with_preference(PrefersSalary),
            tension("flexible", 80),
        ])
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn push(&mut self, rule: KeywordRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Scans a display name and returns every matching effect, in table order.
    pub fn scan(&self, name: &str) -> Vec<TraitEffect> {
        let lowered = name.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .flat_map(KeywordRule::effects)
            .collect()
    }
}

/// Flat change to one core attribute, by attribute index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: usize,
    pub amount: i32,
}

/// Contract-percentage modifiers carried by a trait.
///
/// These are authored data for the economy collaborator; contract valuation
/// uses the three-variable model and does not read them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContractModifiers {
    pub salary_pct: i16,
    pub loot_cut_pct: i16,
}

impl ContractModifiers {
    pub fn combine(self, other: Self) -> Self {
        Self {
            salary_pct: self.salary_pct.saturating_add(other.salary_pct),
            loot_cut_pct: self.loot_cut_pct.saturating_add(other.loot_cut_pct),
        }
    }
}

/// Immutable trait definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitDefinition {
    name: String,
    effects: Vec<TraitEffect>,
    stat_modifiers: Vec<StatModifier>,
    contract: ContractModifiers,
}

impl TraitDefinition {
    /// Authors a trait, deriving its effects from keywords in `name`.
    pub fn author(name: impl Into<String>, table: &KeywordTable) -> Self {
        let name = name.into();
        let effects = table.scan(&name);
        Self::explicit(name, effects)
    }

    /// Authors a trait with an explicit effect list and no keyword scan.
    pub fn explicit(name: impl Into<String>, effects: Vec<TraitEffect>) -> Self {
        Self {
            name: name.into(),
            effects,
            stat_modifiers: Vec::new(),
            contract: ContractModifiers::default(),
        }
    }

    pub fn with_effect(mut self, effect: TraitEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_stat_modifier(mut self, stat: usize, amount: i32) -> Self {
        self.stat_modifiers.push(StatModifier { stat, amount });
        self
    }

    pub fn with_contract_modifiers(mut self, contract: ContractModifiers) -> Self {
        self.contract = contract;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effects(&self) -> &[TraitEffect] {
        &self.effects
    }

    pub fn stat_modifiers(&self) -> &[StatModifier] {
        &self.stat_modifiers
    }

    pub fn contract_modifiers(&self) -> ContractModifiers {
        self.contract
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
