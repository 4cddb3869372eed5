// ============================================================
// import
// ------------------------------------------------------------
//! Turn decoded ids into a [`DeckList`] and back.
//!
//! Ids the resolver doesn't know are left out of the deck and
//! listed in [`ImportReport::dropped`] so the caller can tell
//! the user about them. [`sort_deck`] keeps them instead.
// ============================================================

use std::collections::HashMap;

use crate::ygopro::codec;
use crate::ygopro::codec::FormatError;
use crate::ygopro::constants::Zone;
use crate::ygopro::data::CardRecord;
use crate::ygopro::data::Deck;
use crate::ygopro::data::DeckList;
use crate::ydkpru::resolver::CardResolver;
use crate::ydkpru::sort::sort_cards;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub deck: DeckList,
    /// One entry per dropped copy, in file order.
    pub dropped: Vec<u32>,
    /// Cards moved between main and extra to match their type.
    pub rerouted: usize,
}

fn resolve_all<R: CardResolver + ?Sized>(deck: &Deck, resolver: &R) -> HashMap<u32, CardRecord> {
    let mut ids: Vec<u32> = deck.main.iter().chain(deck.extra.iter()).chain(deck.side.iter()).copied().collect();
    ids.sort_unstable();
    ids.dedup();
    resolver.resolve_cards_by_ids(&ids).into_iter().map(|card| (card.id, card)).collect()
}

pub fn import_deck<R: CardResolver + ?Sized>(deck: &Deck, resolver: &R) -> ImportReport {
    let cards = resolve_all(deck, resolver);
    let mut report = ImportReport::default();
    for zone in [Zone::Main, Zone::Extra, Zone::Side] {
        for id in deck.zone(zone) {
            let card = match cards.get(id) {
                Some(card) => card,
                None => {
                    report.dropped.push(*id);
                    continue
                }
            };
            let target = if zone == Zone::Side { Zone::Side } else { card.zone() };
            if target != zone {
                report.rerouted += 1;
            }
            report.deck.zone_mut(target).push(card.clone());
        }
    }
    if !report.dropped.is_empty() {
        warn!("Dropped {} unknown cards on import: {:?}", report.dropped.len(), report.dropped);
    }
    if report.rerouted > 0 {
        debug!("Moved {} cards between main and extra on import", report.rerouted);
    }
    report
}

pub fn import_ydke<R: CardResolver + ?Sized>(uri: &str, resolver: &R) -> Result<ImportReport, FormatError> {
    Ok(import_deck(&codec::decode_deck(uri)?, resolver))
}

pub fn import_ydk<R: CardResolver + ?Sized>(text: &str, resolver: &R) -> ImportReport {
    import_deck(&codec::decode_ydk(text), resolver)
}

/// Sorts every zone of `deck` in place, without moving cards between zones.
///
/// Ids `resolver` doesn't know follow the sorted cards of their zone in
/// file order. They are also returned, one entry per copy.
pub fn sort_deck<R: CardResolver + ?Sized>(deck: &Deck, resolver: &R) -> (Deck, Vec<u32>) {
    let cards = resolve_all(deck, resolver);
    let mut sorted = Deck::default();
    let mut unknown = Vec::new();
    for zone in [Zone::Main, Zone::Extra, Zone::Side] {
        let mut known = Vec::new();
        let mut missing = Vec::new();
        for id in deck.zone(zone) {
            match cards.get(id) {
                Some(card) => known.push(card.clone()),
                None => missing.push(*id),
            }
        }
        let ids = sorted.zone_mut(zone);
        ids.extend(sort_cards(&known).iter().map(|card| card.id));
        ids.extend(missing.iter().copied());
        unknown.extend(missing);
    }
    if !unknown.is_empty() {
        warn!("Kept {} unknown cards unsorted: {:?}", unknown.len(), unknown);
    }
    (sorted, unknown)
}

fn export_ids(deck: &DeckList, sorted: bool) -> Deck {
    if !sorted { return deck.to_deck() }
    DeckList {
        main: sort_cards(&deck.main),
        extra: sort_cards(&deck.extra),
        side: sort_cards(&deck.side),
    }.to_deck()
}

pub fn export_ydke(deck: &DeckList, sorted: bool) -> String {
    codec::encode_deck(&export_ids(deck, sorted))
}

pub fn export_ydk(deck: &DeckList, sorted: bool) -> String {
    codec::encode_ydk(&export_ids(deck, sorted))
}
