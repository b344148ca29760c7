//! Plain-text rendering of desk state, reports and events.

use guild_core::{FinalizedContract, Hero, NegotiationEvent};
use guild_runtime::{Quote, RoundReport, TurnReport};

pub fn hero_line(hero: &Hero) -> String {
    let profile = &hero.profile;
    let mut line = format!(
        "#{:<3} {:<20} {:<8} tension {:>3}  {}",
        hero.id.0,
        hero.name,
        profile.lifecycle,
        profile.tension(),
        profile.state.status()
    );
    if hero.is_under_contract() {
        line.push_str(&format!(
            "  ({} turns left at {}/turn)",
            hero.contract.turns_remaining, hero.contract.salary_per_turn
        ));
    }
    line
}

pub fn quote_lines(quote: &Quote) -> Vec<String> {
    let value = &quote.value;
    let mut lines = vec![
        format!("#{} {} ({})", quote.hero.0, quote.name, quote.status),
        format!(
            "  expected value {}  (base {} x lifecycle {} = {}, greed +{}, traits {})",
            value.expected_value,
            value.base,
            value.lifecycle,
            value.lifecycle_adjusted,
            value.greed_premium,
            value.trait_modifier
        ),
        format!("  prefers {}  tension {}", quote.preference, quote.tension),
    ];
    if quote.lockout_remaining > 0 {
        lines.push(format!("  locked out for {} more turns", quote.lockout_remaining));
    }
    for offer in &quote.ideal_offers {
        lines.push(format!(
            "  {}y ideal: bonus {} + {}/turn = {}",
            offer.contract_length_years(),
            offer.signing_bonus(),
            offer.salary_per_turn(),
            offer.value()
        ));
    }
    lines
}

pub fn round_line(report: &RoundReport) -> String {
    let round = &report.round;
    let breakdown = &round.breakdown;
    let mut line = format!(
        "#{} tension {} -> {} ({:+}; offer {} vs expected {}",
        report.hero.0,
        round.previous,
        round.tension,
        breakdown.delta,
        breakdown.offer_value,
        breakdown.expected_value
    );
    if breakdown.preference_violated {
        line.push_str(&format!(", ignores {}", breakdown.preference));
    }
    line.push(')');
    if let Some(eligible_at) = report.eligible_at {
        line.push_str(&format!(" -- walked away, back on {eligible_at}"));
    }
    line
}

pub fn contract_line(hero: &Hero, contract: &FinalizedContract) -> String {
    format!(
        "{} signed: bonus {} + {}/turn for {} years ({} turns, {} total)",
        hero.name,
        contract.signing_bonus,
        contract.salary_per_turn,
        contract.contract_length_years,
        contract.total_turns,
        contract.total_value
    )
}

pub fn turn_line(report: &TurnReport) -> String {
    format!(
        "{}: {} contract(s) expired, {} lockout(s) released",
        report.turn,
        report.expired.len(),
        report.released.len()
    )
}

pub fn event_line(event: &NegotiationEvent) -> String {
    match event {
        NegotiationEvent::NegotiationOpened {
            hero,
            turn,
            starting_tension,
        } => format!("[{turn}] #{} opened at tension {starting_tension}", hero.0),
        NegotiationEvent::OfferEvaluated {
            hero,
            turn,
            delta,
            tension,
            ..
        } => format!("[{turn}] #{} offer scored {delta:+}, tension {tension}", hero.0),
        NegotiationEvent::HeroWalkedAway {
            hero,
            turn,
            eligible_at,
        } => format!("[{turn}] #{} walked away until {eligible_at}", hero.0),
        NegotiationEvent::ContractSigned {
            hero,
            turn,
            contract,
        } => format!(
            "[{turn}] #{} signed for {} years, bonus {} due",
            hero.0, contract.contract_length_years, contract.signing_bonus
        ),
        NegotiationEvent::WalkAwayReset { hero } => format!("#{} reset for the new season", hero.0),
        NegotiationEvent::LockoutReleased { hero, turn } => {
            format!("[{turn}] #{} lockout released", hero.0)
        }
        NegotiationEvent::ContractExpired { hero, turn } => {
            format!("[{turn}] #{} contract expired", hero.0)
        }
    }
}
