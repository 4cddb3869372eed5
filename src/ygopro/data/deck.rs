use serde::Serialize;
use serde::Deserialize;

use crate::ygopro::constants::Zone;
use super::CardRecord;

/// Deck as bare card ids, the form both interchange formats carry.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Deck {
    pub main: Vec<u32>,
    pub extra: Vec<u32>,
    pub side: Vec<u32>,
}

impl Deck {
    pub fn new(main: Vec<u32>, extra: Vec<u32>, side: Vec<u32>) -> Deck {
        Deck { main, extra, side }
    }

    pub fn zone(&self, zone: Zone) -> &Vec<u32> {
        match zone {
            Zone::Main => &self.main,
            Zone::Extra => &self.extra,
            Zone::Side => &self.side,
        }
    }

    pub fn zone_mut(&mut self, zone: Zone) -> &mut Vec<u32> {
        match zone {
            Zone::Main => &mut self.main,
            Zone::Extra => &mut self.extra,
            Zone::Side => &mut self.side,
        }
    }

    pub fn len(&self) -> usize {
        self.main.len() + self.extra.len() + self.side.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolved deck.
///
/// Treated as a value: updates hand back a new list and leave the old one
/// untouched, so a placement check always sees the list it was given.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct DeckList {
    pub main: Vec<CardRecord>,
    pub extra: Vec<CardRecord>,
    pub side: Vec<CardRecord>,
}

impl DeckList {
    pub fn new() -> DeckList {
        DeckList::default()
    }

    pub fn zone(&self, zone: Zone) -> &Vec<CardRecord> {
        match zone {
            Zone::Main => &self.main,
            Zone::Extra => &self.extra,
            Zone::Side => &self.side,
        }
    }

    pub(crate) fn zone_mut(&mut self, zone: Zone) -> &mut Vec<CardRecord> {
        match zone {
            Zone::Main => &mut self.main,
            Zone::Extra => &mut self.extra,
            Zone::Side => &mut self.side,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.main.iter().chain(self.extra.iter()).chain(self.side.iter())
    }

    /// Copies of `id` over main, extra and side, counted from the lists as they are now.
    pub fn count_copies(&self, id: u32) -> usize {
        self.iter().filter(|card| card.id == id).count()
    }

    /// Appends `card` to `zone` as-is. Legality is [`can_add`](crate::ydkpru::validator::can_add)'s job.
    pub fn with_card_added(&self, card: &CardRecord, zone: Zone) -> DeckList {
        let mut deck = self.clone();
        deck.zone_mut(zone).push(card.clone());
        deck
    }

    /// Drops the last copy of `id` found in `zone`.
    pub fn with_card_removed(&self, id: u32, zone: Zone) -> DeckList {
        let mut deck = self.clone();
        let cards = deck.zone_mut(zone);
        if let Some(index) = cards.iter().rposition(|card| card.id == id) {
            cards.remove(index);
        }
        deck
    }

    pub fn to_deck(&self) -> Deck {
        Deck {
            main: self.main.iter().map(|card| card.id).collect(),
            extra: self.extra.iter().map(|card| card.id).collect(),
            side: self.side.iter().map(|card| card.id).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    #![allow(unused_imports)]

    use crate::ygopro::constants::Zone;
    use crate::ygopro::data::CardRecord;
    use super::DeckList;

    #[test]
    fn test_copy_on_write() {
        let card = CardRecord::new(14558127, "Ash Blossom & Joyous Spring", "Tuner Effect Monster");
        let empty = DeckList::new();
        let one = empty.with_card_added(&card, Zone::Main);
        let two = one.with_card_added(&card, Zone::Side);
        assert_eq!(empty.count_copies(card.id), 0);
        assert_eq!(one.count_copies(card.id), 1);
        assert_eq!(two.count_copies(card.id), 2);

        let back = two.with_card_removed(card.id, Zone::Side);
        assert_eq!(back, one);
        assert_eq!(two.side.len(), 1);
    }

    #[test]
    fn test_remove_missing_card() {
        let card = CardRecord::new(1, "A", "Normal Monster");
        let deck = DeckList::new().with_card_added(&card, Zone::Main);
        assert_eq!(deck.with_card_removed(1, Zone::Extra), deck);
        assert_eq!(deck.with_card_removed(2, Zone::Main), deck);
    }

    #[test]
    fn test_remove_takes_last_copy() {
        let a = CardRecord::new(1, "A", "Normal Monster");
        let b = CardRecord::new(2, "B", "Normal Monster");
        let deck = DeckList::new()
            .with_card_added(&a, Zone::Main)
            .with_card_added(&b, Zone::Main)
            .with_card_added(&a, Zone::Main);
        let removed = deck.with_card_removed(1, Zone::Main);
        assert_eq!(removed.to_deck().main, vec![1, 2]);
    }
}
