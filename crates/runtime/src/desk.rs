//! The recruitment desk.
//!
//! The desk owns every hero the guild knows about and is the single place
//! where negotiation actions are executed. Heroes live in one of two maps:
//! the recruitment pool (free agents, possibly mid-negotiation or locked out)
//! and the active roster (heroes under contract). Both are ordered by id so
//! that turn processing visits heroes deterministically.

use std::collections::BTreeMap;

use guild_content::ContentBundle;
use guild_core::{
    AcceptOffer, AcceptOutcome, ContractOffer, EventQueue, FinalizedContract, Hero, HeroId,
    InitializeNegotiation, NegotiationAction, NegotiationConfig, NegotiationEngine,
    NegotiationEnv, NegotiationError, NegotiationEvent, NegotiationOutcome, NegotiationState,
    PaymentPreferenceEvaluator, RecruitmentLockoutTracker, ReleaseLockout, ResetWalkAway,
    SubmitOffer, Tension, Turn, ValueModel,
};

use crate::api::{Quote, Result, RoundReport, RuntimeError, TurnReport};

/// Builder for [`RecruitmentDesk`].
#[derive(Debug, Default)]
pub struct DeskBuilder {
    config: NegotiationConfig,
    start_turn: Turn,
    heroes: Vec<Hero>,
}

impl DeskBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Override negotiation tunables
    pub fn config(mut self, config: NegotiationConfig) -> Self {
        self.config = config;
        self
    }

    /// Turn the calendar starts on
    pub fn start_turn(mut self, turn: Turn) -> Self {
        self.start_turn = turn;
        self
    }

    pub fn hero(mut self, hero: Hero) -> Self {
        self.heroes.push(hero);
        self
    }

    pub fn heroes(mut self, heroes: impl IntoIterator<Item = Hero>) -> Self {
        self.heroes.extend(heroes);
        self
    }

    /// Build the desk, validating the configuration and hero ids.
    pub fn build(self) -> Result<RecruitmentDesk> {
        self.config.validate().map_err(RuntimeError::InvalidConfig)?;

        let mut desk = RecruitmentDesk {
            config: self.config,
            turn: self.start_turn,
            pool: BTreeMap::new(),
            roster: BTreeMap::new(),
            events: EventQueue::new(),
        };
        for hero in self.heroes {
            desk.enlist(hero)?;
        }

        tracing::info!(
            target: "runtime::desk",
            turn = %desk.turn,
            pool = desk.pool.len(),
            roster = desk.roster.len(),
            "Recruitment desk ready"
        );
        Ok(desk)
    }
}

/// Turn-synchronous recruitment service owned by the game loop.
#[derive(Debug)]
pub struct RecruitmentDesk {
    config: NegotiationConfig,
    turn: Turn,
    pool: BTreeMap<HeroId, Hero>,
    roster: BTreeMap<HeroId, Hero>,
    events: EventQueue,
}

impl RecruitmentDesk {
    pub fn builder() -> DeskBuilder {
        DeskBuilder::new()
    }

    /// Desk seeded from loaded content, starting at `start_turn`.
    pub fn from_bundle(bundle: ContentBundle, start_turn: Turn) -> Result<Self> {
        Self::builder()
            .config(bundle.config)
            .start_turn(start_turn)
            .heroes(bundle.heroes)
            .build()
    }

    pub fn config(&self) -> &NegotiationConfig {
        &self.config
    }

    /// The calendar turn, as last set by [`Self::advance_turn`].
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Free agents, ordered by id.
    pub fn pool(&self) -> impl Iterator<Item = &Hero> {
        self.pool.values()
    }

    /// Heroes under contract, ordered by id.
    pub fn roster(&self) -> impl Iterator<Item = &Hero> {
        self.roster.values()
    }

    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.pool.get(&id).or_else(|| self.roster.get(&id))
    }

    /// Adds a hero to the desk. Heroes with a running contract go straight to
    /// the roster.
    pub fn enlist(&mut self, hero: Hero) -> Result<()> {
        let id = hero.id;
        if self.hero(id).is_some() {
            return Err(RuntimeError::AlreadyEnlisted { id });
        }

        tracing::debug!(
            target: "runtime::desk",
            hero = %id,
            name = %hero.name,
            contracted = hero.is_under_contract(),
            "Enlisting hero"
        );
        if hero.is_under_contract() {
            self.roster.insert(id, hero);
        } else {
            self.pool.insert(id, hero);
        }
        Ok(())
    }

    /// Opens a negotiation with a pooled hero and returns the starting tension.
    pub fn open_negotiation(&mut self, id: HeroId, turn: Turn) -> Result<Tension> {
        self.check_turn(turn)?;
        let outcome = self.execute(id, turn, InitializeNegotiation.into())?;
        let NegotiationOutcome::Opened {
            starting_tension: tension,
        } = outcome
        else {
            return Err(RuntimeError::UnexpectedOutcome {
                id,
                action: "initialize",
            });
        };

        tracing::info!(
            target: "runtime::desk",
            hero = %id,
            turn = %turn,
            tension = %tension,
            "Negotiation opened"
        );
        Ok(tension)
    }

    /// Scores `offer` as one negotiation round.
    pub fn propose(&mut self, id: HeroId, offer: ContractOffer, turn: Turn) -> Result<RoundReport> {
        self.check_turn(turn)?;
        let outcome = self.execute(id, turn, SubmitOffer::new(offer).into())?;
        let Some(round) = outcome.round().copied() else {
            return Err(RuntimeError::UnexpectedOutcome {
                id,
                action: "submit_offer",
            });
        };

        let eligible_at = round.walked_away.then(|| self.eligible_at(turn));
        tracing::debug!(
            target: "runtime::desk",
            hero = %id,
            turn = %turn,
            expected = round.breakdown.expected_value,
            offered = round.breakdown.offer_value,
            delta = round.breakdown.delta,
            tension = %round.tension,
            "Offer evaluated"
        );
        if let Some(eligible_at) = eligible_at {
            tracing::warn!(
                target: "runtime::desk",
                hero = %id,
                turn = %turn,
                eligible_at = %eligible_at,
                "Hero walked away from the table"
            );
        }

        Ok(RoundReport {
            hero: id,
            turn,
            round,
            eligible_at,
        })
    }

    /// Closes a negotiation on `offer` and moves the hero to the roster.
    ///
    /// If the final offer pushes the hero over the walk-away threshold the
    /// hero leaves instead and [`RuntimeError::WalkedAway`] is returned; the
    /// round is still recorded in the event queue.
    pub fn accept(
        &mut self,
        id: HeroId,
        offer: ContractOffer,
        turn: Turn,
    ) -> Result<FinalizedContract> {
        self.check_turn(turn)?;
        let outcome = self.execute(id, turn, AcceptOffer::new(offer).into())?;

        match outcome {
            NegotiationOutcome::Accept(AcceptOutcome::Signed { contract, .. }) => {
                if let Some(hero) = self.pool.remove(&id) {
                    tracing::info!(
                        target: "runtime::desk",
                        hero = %id,
                        name = %hero.name,
                        turn = %turn,
                        signing_bonus = contract.signing_bonus,
                        salary = contract.salary_per_turn,
                        years = contract.contract_length_years,
                        "Contract signed"
                    );
                    self.roster.insert(id, hero);
                }
                Ok(contract)
            }
            NegotiationOutcome::Accept(AcceptOutcome::WalkedAway { round, turn: walked_on }) => {
                let eligible_at = self.eligible_at(walked_on);
                tracing::warn!(
                    target: "runtime::desk",
                    hero = %id,
                    turn = %walked_on,
                    eligible_at = %eligible_at,
                    "Hero walked away instead of signing"
                );
                Err(RuntimeError::WalkedAway {
                    id,
                    tension: round.tension,
                    eligible_at,
                })
            }
            _ => Err(RuntimeError::UnexpectedOutcome {
                id,
                action: "accept_offer",
            }),
        }
    }

    /// Moves the calendar to `turn`.
    ///
    /// Contracts count down once per elapsed turn; heroes whose contract runs
    /// out return to the pool with a fresh negotiation state. Walk-away
    /// lockouts that have elapsed by `turn` are released.
    pub fn advance_turn(&mut self, turn: Turn) -> Result<TurnReport> {
        self.check_turn(turn)?;
        let previous = std::mem::replace(&mut self.turn, turn);
        let elapsed = turn.since(previous);
        // No contract outlives its longest possible length.
        let max_ticks = u64::from(NegotiationConfig::MAX_CONTRACT_YEARS)
            * u64::from(NegotiationConfig::TURNS_PER_YEAR);

        let mut report = TurnReport {
            turn,
            ..TurnReport::default()
        };

        let mut expired = Vec::new();
        for (id, hero) in &mut self.roster {
            for step in 1..=elapsed.min(max_ticks) {
                if hero.contract.tick() {
                    expired.push((*id, Turn(previous.0 + step)));
                    break;
                }
            }
        }
        for (id, expired_on) in expired {
            if let Some(mut hero) = self.roster.remove(&id) {
                hero.profile.state = NegotiationState::Uninitialized;
                tracing::info!(
                    target: "runtime::desk",
                    hero = %id,
                    turn = %expired_on,
                    "Contract expired; hero returns to the pool"
                );
                self.events.push(NegotiationEvent::ContractExpired {
                    hero: id,
                    turn: expired_on,
                });
                self.pool.insert(id, hero);
                report.expired.push(id);
            }
        }

        let locked: Vec<HeroId> = self
            .pool
            .values()
            .filter(|hero| hero.profile.is_locked())
            .map(|hero| hero.id)
            .collect();
        for id in locked {
            if let NegotiationOutcome::LockoutReleased { released: true } =
                self.execute(id, turn, ReleaseLockout.into())?
            {
                tracing::info!(
                    target: "runtime::desk",
                    hero = %id,
                    turn = %turn,
                    "Lockout released"
                );
                report.released.push(id);
            }
        }

        tracing::debug!(
            target: "runtime::desk",
            turn = %turn,
            expired = report.expired.len(),
            released = report.released.len(),
            "Turn advanced"
        );
        Ok(report)
    }

    /// Resets every pooled hero for the new season: walk-aways are cleared
    /// regardless of lockouts and open negotiations drop to zero tension.
    ///
    /// Returns the heroes whose state changed.
    pub fn seasonal_refresh(&mut self) -> Result<Vec<HeroId>> {
        let pooled: Vec<HeroId> = self.pool.keys().copied().collect();

        let mut cleared = Vec::new();
        for id in pooled {
            if let NegotiationOutcome::WalkAwayReset { cleared: true } =
                self.execute(id, self.turn, ResetWalkAway.into())?
            {
                cleared.push(id);
            }
        }

        tracing::info!(
            target: "runtime::desk",
            turn = %self.turn,
            cleared = cleared.len(),
            "Seasonal refresh"
        );
        Ok(cleared)
    }

    /// Prices a hero without touching its negotiation state.
    pub fn quote(&self, id: HeroId) -> Result<Quote> {
        let hero = self.hero(id).ok_or(RuntimeError::UnknownHero { id })?;
        let profile = &hero.profile;
        let model = ValueModel::new(&self.config);

        let ideal_offers = (NegotiationConfig::MIN_CONTRACT_YEARS
            ..=NegotiationConfig::MAX_CONTRACT_YEARS)
            .map(|years| model.ideal_offer(profile, u32::from(years)))
            .collect();

        Ok(Quote {
            hero: id,
            name: hero.name.clone(),
            status: profile.state.status(),
            tension: profile.tension(),
            value: model.breakdown(profile),
            preference: PaymentPreferenceEvaluator::preference(profile),
            ideal_offers,
            lockout_remaining: RecruitmentLockoutTracker::new(&self.config)
                .turns_until_eligible(profile, self.turn),
        })
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<NegotiationEvent> {
        self.events.drain().collect()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn check_turn(&self, turn: Turn) -> Result<()> {
        if turn < self.turn {
            return Err(RuntimeError::TurnRewind {
                current: self.turn,
                requested: turn,
            });
        }
        Ok(())
    }

    fn eligible_at(&self, walked_on: Turn) -> Turn {
        Turn(walked_on.0.saturating_add(self.config.lockout_turns))
    }

    fn pooled(&self, id: HeroId) -> Result<&Hero> {
        if let Some(hero) = self.pool.get(&id) {
            return Ok(hero);
        }
        match self.roster.get(&id) {
            Some(hero) => Err(RuntimeError::UnderContract {
                id,
                turns_remaining: hero.contract.turns_remaining,
            }),
            None => Err(RuntimeError::UnknownHero { id }),
        }
    }

    /// Runs one action against a pooled hero through the negotiation engine.
    fn execute(
        &mut self,
        id: HeroId,
        turn: Turn,
        action: NegotiationAction,
    ) -> Result<NegotiationOutcome> {
        self.pooled(id)?;
        let Some(hero) = self.pool.get_mut(&id) else {
            return Err(RuntimeError::UnknownHero { id });
        };

        let env = NegotiationEnv::new(&self.config, turn);
        NegotiationEngine::new(hero, &mut self.events)
            .execute(env, &action)
            .map_err(|error| {
                tracing::warn!(
                    target: "runtime::desk",
                    hero = %id,
                    action = action.as_snake_case(),
                    code = error.error_code(),
                    phase = error.phase().as_str(),
                    "Negotiation action rejected: {}",
                    error
                );
                RuntimeError::from(error)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guild_core::{
        CoreStats, HeroContract, HeroNegotiationProfile, KeywordTable, LifecycleStage,
        NegotiationStatus, TraitDefinition,
    };

    fn hero(id: u32, trust: u8, traits: &[&str]) -> Hero {
        let table = KeywordTable::standard();
        let profile = HeroNegotiationProfile::new(CoreStats::three(24, 24, 24), LifecycleStage::Prime)
            .with_greed(60)
            .with_trust(trust)
            .with_traits(traits.iter().map(|name| TraitDefinition::author(*name, &table)))
            .unwrap();
        Hero::new(HeroId(id), format!("Hero {id}"), profile)
    }

    fn desk(heroes: Vec<Hero>) -> RecruitmentDesk {
        RecruitmentDesk::builder().heroes(heroes).build().unwrap()
    }

    #[test]
    fn builder_rejects_bad_config_and_duplicates() {
        let mut config = NegotiationConfig::default();
        config.trust_low = 90;
        let err = RecruitmentDesk::builder().config(config).build().unwrap_err();
        assert!(matches!(err, RuntimeError::InvalidConfig(_)));

        let err = RecruitmentDesk::builder()
            .hero(hero(1, 50, &[]))
            .hero(hero(1, 50, &[]))
            .build()
            .unwrap_err();
        assert_eq!(err, RuntimeError::AlreadyEnlisted { id: HeroId(1) });
    }

    #[test]
    fn contracted_heroes_start_on_the_roster() {
        let mut veteran = hero(2, 50, &[]);
        veteran.contract = HeroContract {
            turns_remaining: 3,
            ..HeroContract::default()
        };
        let desk = desk(vec![hero(1, 50, &[]), veteran]);

        assert_eq!(desk.pool().map(|h| h.id).collect::<Vec<_>>(), vec![HeroId(1)]);
        assert_eq!(desk.roster().map(|h| h.id).collect::<Vec<_>>(), vec![HeroId(2)]);
    }

    #[test]
    fn unknown_and_contracted_heroes_are_reported() {
        let mut veteran = hero(2, 50, &[]);
        veteran.contract.turns_remaining = 3;
        let mut desk = desk(vec![veteran]);

        assert_eq!(
            desk.open_negotiation(HeroId(9), Turn(1)).unwrap_err(),
            RuntimeError::UnknownHero { id: HeroId(9) }
        );
        assert_eq!(
            desk.open_negotiation(HeroId(2), Turn(1)).unwrap_err(),
            RuntimeError::UnderContract {
                id: HeroId(2),
                turns_remaining: 3
            }
        );
    }

    #[test]
    fn turns_cannot_rewind() {
        let mut desk = desk(vec![hero(1, 50, &[])]);
        desk.advance_turn(Turn(5)).unwrap();
        assert_eq!(
            desk.open_negotiation(HeroId(1), Turn(4)).unwrap_err(),
            RuntimeError::TurnRewind {
                current: Turn(5),
                requested: Turn(4)
            }
        );
    }

    #[test]
    fn quote_lists_ideal_offers_for_every_length() {
        let desk = desk(vec![hero(1, 50, &["Greedy"])]);
        let quote = desk.quote(HeroId(1)).unwrap();

        assert_eq!(quote.expected_value(), 359);
        assert_eq!(quote.ideal_offers.len(), 5);
        assert_eq!(quote.status, NegotiationStatus::Uninitialized);
        for offer in &quote.ideal_offers {
            assert!(offer.value() >= quote.expected_value());
        }
    }

    #[test]
    fn rejected_actions_queue_nothing() {
        let mut desk = desk(vec![hero(1, 50, &[])]);
        let err = desk
            .propose(HeroId(1), ContractOffer::new(100, 10, 2), Turn(1))
            .unwrap_err();
        assert_eq!(err.error_code(), "OFFER_NOT_NEGOTIATING");
        assert_eq!(desk.pending_events(), 0);
    }

    #[test]
    fn signing_moves_hero_to_roster_and_expiry_brings_it_back() {
        let mut desk = RecruitmentDesk::builder()
            .start_turn(Turn(1))
            .hero(hero(1, 80, &[]))
            .build()
            .unwrap();
        desk.open_negotiation(HeroId(1), Turn(1)).unwrap();

        let contract = desk
            .accept(HeroId(1), ContractOffer::new(300, 50, 1), Turn(1))
            .unwrap();
        assert_eq!(contract.total_turns, 4);
        assert!(desk.pool().next().is_none());

        let report = desk.advance_turn(Turn(4)).unwrap();
        assert!(report.expired.is_empty());
        let report = desk.advance_turn(Turn(5)).unwrap();
        assert_eq!(report.expired, vec![HeroId(1)]);

        let hero = desk.hero(HeroId(1)).unwrap();
        assert_eq!(hero.profile.state, NegotiationState::Uninitialized);
        assert!(desk.roster().next().is_none());
        assert!(desk.drain_events().contains(&NegotiationEvent::ContractExpired {
            hero: HeroId(1),
            turn: Turn(5),
        }));
    }
}
