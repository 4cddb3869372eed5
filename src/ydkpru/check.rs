// ============================================================
// check
// ------------------------------------------------------------
//! Audit a whole deck before it is registered for a duel.
//!
//! Same precedence as placement: the tournament list's bans
//! first, then the standard list unless genesys mode is on.
// ============================================================

use std::collections::BTreeMap;

use crate::ygopro::constants::Restriction;
use crate::ygopro::constants::Zone;
use crate::ygopro::constants::MAIN_MIN;
use crate::ygopro::data::DeckList;
use crate::ydkpru::validator::PlacementContext;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("Main deck has {0} cards, at least 40 needed")]
    MainTooSmall(usize),
    #[error("{0} deck has {1} cards, over its capacity")]
    ZoneOverflow(Zone, usize),
    #[error("Card {0} doesn't belong in {1} deck")]
    Misplaced(u32, Zone),
    #[error("Card {0} is banned")]
    Banned(u32),
    #[error("Card {0} is banned by the tournament list")]
    CustomBanned(u32),
    #[error("Card {0} has {1} copies, only {2} allowed")]
    OverLimit(u32, usize, usize),
}

pub fn check_deck(deck: &DeckList, context: &PlacementContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    if deck.main.len() < MAIN_MIN {
        violations.push(Violation::MainTooSmall(deck.main.len()));
    }
    for zone in [Zone::Main, Zone::Extra, Zone::Side] {
        let cards = deck.zone(zone);
        if cards.len() > zone.capacity() {
            violations.push(Violation::ZoneOverflow(zone, cards.len()));
        }
        if zone == Zone::Side { continue }
        for card in cards.iter().filter(|card| card.zone() != zone) {
            violations.push(Violation::Misplaced(card.id, zone));
        }
    }

    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for card in deck.iter() {
        *counts.entry(card.id).or_insert(0) += 1;
    }
    for (&id, &count) in counts.iter() {
        if context.is_custom_banned(id) {
            violations.push(Violation::CustomBanned(id));
            continue;
        }
        if context.genesys_mode { continue }
        let restriction = context.restriction(id);
        if restriction == Restriction::Banned {
            violations.push(Violation::Banned(id));
        }
        else if count > restriction.limit() {
            violations.push(Violation::OverLimit(id, count, restriction.limit()));
        }
    }
    violations
}
