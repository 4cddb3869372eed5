use crate::ygopro::data::CardRecord;

const EXTRA_RANK: u32 = 100;
const UNKNOWN_RANK: u32 = 99;

fn is_extra_deck_monster(card: &CardRecord) -> bool {
    ["Fusion", "Synchro", "XYZ", "Xyz", "Link"].iter().any(|marker| card.card_type.contains(marker))
}

/// Display bucket of a card. Extra deck monsters share one bucket at the end.
pub fn rank(card: &CardRecord) -> u32 {
    let card_type = card.card_type.as_str();
    if is_extra_deck_monster(card) { return EXTRA_RANK }
    if card.is_monster() {
        return if card_type.contains("Pendulum") { 3 }
        else if card_type.contains("Ritual") { 2 }
        else if card_type.contains("Normal") { 0 }
        else if card_type.contains("Effect") || card_type.contains("Flip") || card_type.contains("Tuner") { 1 }
        else { 4 }
    }
    if card.is_spell() {
        return match card.race.as_str() {
            "Normal" => 5,
            "Quick-Play" => 6,
            "Continuous" => 7,
            _ => 8,
        }
    }
    if card.is_trap() {
        return match card.race.as_str() {
            "Normal" => 9,
            "Counter" => 10,
            "Continuous" => 11,
            _ => 12,
        }
    }
    UNKNOWN_RANK
}

/// Level-less monsters sort after leveled ones of the same rank.
fn level_key(card: &CardRecord) -> (bool, u32) {
    if !card.is_monster() { return (false, 0) }
    match card.level {
        Some(level) => (false, level),
        None => (true, 0),
    }
}

/// Bucket, then level, then id compared as text, then name.
pub fn sort_key(card: &CardRecord) -> (u32, (bool, u32), String, String) {
    (rank(card), level_key(card), card.id.to_string(), card.name.clone())
}

pub fn sort_cards(cards: &[CardRecord]) -> Vec<CardRecord> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_cached_key(sort_key);
    sorted
}
