use std::path::{Path, PathBuf};

use guild_content::ContentFactory;
use guild_core::{
    ContractOffer, HeroId, NegotiationError, NegotiationEvent, NegotiationStatus, Tension, Turn,
};
use guild_runtime::{RecruitmentDesk, RuntimeError};

const BRAKKA: HeroId = HeroId(1);
const YSOLDE: HeroId = HeroId(4);

fn shipped_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data")
}

fn shipped_desk(start: u64) -> RecruitmentDesk {
    let bundle = ContentFactory::new(shipped_data())
        .load_all()
        .expect("shipped content should load");
    RecruitmentDesk::from_bundle(bundle, Turn(start)).expect("shipped config should validate")
}

#[test]
fn ideal_offer_signs_a_greedy_hero() {
    let mut desk = shipped_desk(1);

    let quote = desk.quote(BRAKKA).unwrap();
    assert_eq!(quote.expected_value(), 359);
    assert_eq!(quote.status, NegotiationStatus::Uninitialized);

    let ideal = quote.ideal_offers[1];
    assert_eq!(ideal.contract_length_years(), 2);
    assert_eq!(ideal, ContractOffer::new(143, 27, 2));

    assert_eq!(desk.open_negotiation(BRAKKA, Turn(1)).unwrap(), Tension::clamped(12));

    // An offer worth exactly the expectation, split the way Brakka likes,
    // leaves tension where it was.
    let report = desk.propose(BRAKKA, ideal, Turn(1)).unwrap();
    assert_eq!(report.round.delta(), 0);
    assert_eq!(report.tension(), Tension::clamped(12));
    assert!(!report.walked_away());

    let contract = desk.accept(BRAKKA, ideal, Turn(2)).unwrap();
    assert_eq!(contract.total_turns, 8);
    assert_eq!(contract.total_value, 359);
    assert!(desk.roster().any(|hero| hero.id == BRAKKA));
    assert!(desk.pool().all(|hero| hero.id != BRAKKA));

    let events = desk.drain_events();
    let kinds: Vec<_> = events.iter().map(NegotiationEvent::as_snake_case).collect();
    assert_eq!(
        kinds,
        vec![
            "negotiation_opened",
            "offer_evaluated",
            "offer_evaluated",
            "contract_signed"
        ]
    );
    assert!(events.iter().all(|event| event.hero() == BRAKKA));
    assert_eq!(desk.pending_events(), 0);
}

#[test]
fn lowball_offer_locks_hero_out_until_lockout_elapses() {
    let mut desk = shipped_desk(1);

    // Ysolde distrusts the guild and opens at the maximum.
    assert_eq!(desk.open_negotiation(YSOLDE, Turn(1)).unwrap(), Tension::clamped(25));

    let report = desk.propose(YSOLDE, ContractOffer::new(0, 5, 1), Turn(1)).unwrap();
    assert!(report.walked_away());
    assert_eq!(report.tension(), Tension::MAX);
    assert_eq!(report.eligible_at, Some(Turn(5)));

    let events = desk.drain_events();
    assert!(events.contains(&NegotiationEvent::HeroWalkedAway {
        hero: YSOLDE,
        turn: Turn(1),
        eligible_at: Turn(5),
    }));

    // Still locked one turn before the lockout ends.
    desk.advance_turn(Turn(4)).unwrap();
    let err = desk.open_negotiation(YSOLDE, Turn(4)).unwrap_err();
    assert_eq!(err.error_code(), "NEGOTIATION_LOCKED_OUT");
    assert_eq!(desk.quote(YSOLDE).unwrap().lockout_remaining, 1);

    let report = desk.advance_turn(Turn(5)).unwrap();
    assert_eq!(report.released, vec![YSOLDE]);
    assert_eq!(
        desk.drain_events(),
        vec![NegotiationEvent::LockoutReleased {
            hero: YSOLDE,
            turn: Turn(5),
        }]
    );
    assert_eq!(desk.quote(YSOLDE).unwrap().status, NegotiationStatus::Uninitialized);
    assert!(desk.open_negotiation(YSOLDE, Turn(5)).is_ok());
}

#[test]
fn accepting_an_insulting_offer_ends_the_negotiation() {
    let mut desk = shipped_desk(1);
    desk.open_negotiation(YSOLDE, Turn(1)).unwrap();

    let err = desk.accept(YSOLDE, ContractOffer::new(0, 0, 1), Turn(2)).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::WalkedAway {
            id: YSOLDE,
            tension: Tension::MAX,
            eligible_at: Turn(6),
        }
    );
    assert!(desk.roster().next().is_none());
    assert_eq!(desk.quote(YSOLDE).unwrap().status, NegotiationStatus::WalkedAway);
}

#[test]
fn seasonal_refresh_clears_walk_aways_early() {
    let mut desk = shipped_desk(1);
    desk.open_negotiation(YSOLDE, Turn(1)).unwrap();
    desk.propose(YSOLDE, ContractOffer::new(0, 0, 1), Turn(1)).unwrap();

    assert_eq!(desk.seasonal_refresh().unwrap(), vec![YSOLDE]);
    assert!(desk.drain_events().contains(&NegotiationEvent::WalkAwayReset { hero: YSOLDE }));
    assert_eq!(desk.open_negotiation(YSOLDE, Turn(1)).unwrap(), Tension::clamped(25));

    // Nothing left to clear.
    assert!(desk.seasonal_refresh().unwrap().is_empty());
}

#[test]
fn seasonal_refresh_calms_open_negotiations() {
    let mut desk = shipped_desk(1);
    desk.open_negotiation(BRAKKA, Turn(1)).unwrap();
    let report = desk.propose(BRAKKA, ContractOffer::new(100, 25, 2), Turn(1)).unwrap();
    assert!(report.tension() > Tension::clamped(12));

    assert_eq!(desk.seasonal_refresh().unwrap(), vec![BRAKKA]);
    let quote = desk.quote(BRAKKA).unwrap();
    assert_eq!(quote.status, NegotiationStatus::Negotiating);
    assert_eq!(quote.tension, Tension::ZERO);
}

#[test]
fn contracts_expire_back_into_the_pool() {
    let mut desk = shipped_desk(1);
    desk.open_negotiation(BRAKKA, Turn(1)).unwrap();
    let offer = ContractOffer::new(400, 50, 1);
    desk.accept(BRAKKA, offer, Turn(1)).unwrap();
    desk.drain_events();

    // Skipping several turns at once still expires the contract on the
    // right turn.
    let report = desk.advance_turn(Turn(9)).unwrap();
    assert_eq!(report.expired, vec![BRAKKA]);
    assert_eq!(
        desk.drain_events(),
        vec![NegotiationEvent::ContractExpired {
            hero: BRAKKA,
            turn: Turn(5),
        }]
    );

    let hero = desk.hero(BRAKKA).unwrap();
    assert!(!hero.is_under_contract());
    assert_eq!(hero.contract.signing_bonus, 400);
    assert_eq!(hero.profile.state.status(), NegotiationStatus::Uninitialized);
    assert!(desk.open_negotiation(BRAKKA, Turn(9)).is_ok());
}

#[test]
fn desk_loads_a_scratch_roster() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("heroes.ron"),
        r#"(heroes: [
            (id: 10, name: "Tamsin", stats: [10, 10, 10], trust: 100, traits: ["Patient"]),
            (id: 11, name: "Corvo", stats: [30, 30, 30], lifecycle: Veteran, greed: 90),
        ])"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("config.toml"), "lockout_turns = 2\n").unwrap();

    let bundle = ContentFactory::new(dir.path()).load_all().unwrap();
    let mut desk = RecruitmentDesk::from_bundle(bundle, Turn(3)).unwrap();
    assert_eq!(desk.config().lockout_turns, 2);
    assert_eq!(desk.pool().count(), 2);

    assert_eq!(desk.open_negotiation(HeroId(10), Turn(3)).unwrap(), Tension::ZERO);
    let err = desk.open_negotiation(HeroId(12), Turn(3)).unwrap_err();
    assert_eq!(err, RuntimeError::UnknownHero { id: HeroId(12) });

    let report = desk.propose(HeroId(11), ContractOffer::new(1, 1, 1), Turn(3));
    assert_eq!(report.unwrap_err().error_code(), "OFFER_NOT_NEGOTIATING");
}
