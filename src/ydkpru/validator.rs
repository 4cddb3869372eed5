// ============================================================
// validator
// ------------------------------------------------------------
//! Decide whether one more copy of a card may go into a deck.
//!
//! Everything the decision depends on comes in through the
//! arguments. Copy counts are taken from the deck handed in,
//! every call.
// ============================================================

use crate::ygopro::constants::Restriction;
use crate::ygopro::constants::Zone;
use crate::ygopro::data::CardRecord;
use crate::ygopro::data::DeckList;
use crate::ygopro::data::RestrictionLookup;

#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Rejection {
    #[error("banned")]
    Banned,
    #[error("custom_banned")]
    CustomBanned,
    #[error("limit_reached")]
    LimitReached,
    #[error("zone_full")]
    ZoneFull,
}

/// Ban lists in force for a placement.
#[derive(Clone, Copy, Default)]
pub struct PlacementContext<'a> {
    /// Standard forbidden & limited list. `None` lets every card in 3 times.
    pub ban_list: Option<&'a dyn RestrictionLookup>,
    /// Tournament list. Only its bans are applied, and they apply in genesys mode too.
    pub custom_ban_list: Option<&'a dyn RestrictionLookup>,
    pub genesys_mode: bool,
}

impl<'a> PlacementContext<'a> {
    pub fn new(ban_list: Option<&'a dyn RestrictionLookup>) -> Self {
        PlacementContext { ban_list, custom_ban_list: None, genesys_mode: false }
    }

    pub fn with_custom_ban_list(mut self, custom_ban_list: &'a dyn RestrictionLookup) -> Self {
        self.custom_ban_list = Some(custom_ban_list);
        self
    }

    pub fn genesys(mut self, genesys_mode: bool) -> Self {
        self.genesys_mode = genesys_mode;
        self
    }

    pub fn restriction(&self, card_id: u32) -> Restriction {
        self.ban_list.map(|ban_list| ban_list.restriction(card_id)).unwrap_or_default()
    }

    pub fn is_custom_banned(&self, card_id: u32) -> bool {
        self.custom_ban_list.map_or(false, |ban_list| ban_list.restriction(card_id) == Restriction::Banned)
    }
}

/// Main and extra requests land where the card belongs; side stays side.
pub fn resolve_zone(card: &CardRecord, target: Zone) -> Zone {
    match target {
        Zone::Side => Zone::Side,
        _ => card.zone(),
    }
}

/// Returns the zone the card should be appended to.
pub fn can_add(card: &CardRecord, deck: &DeckList, target: Zone, context: &PlacementContext) -> Result<Zone, Rejection> {
    let zone = resolve_zone(card, target);
    if zone != target {
        debug!("Card {} requested for {} goes to {}", card.id, target, zone);
    }
    if context.is_custom_banned(card.id) {
        return Err(Rejection::CustomBanned);
    }
    if !context.genesys_mode {
        let restriction = context.restriction(card.id);
        if restriction == Restriction::Banned {
            return Err(Rejection::Banned);
        }
        if deck.count_copies(card.id) >= restriction.limit() {
            return Err(Rejection::LimitReached);
        }
    }
    if deck.zone(zone).len() >= zone.capacity() {
        return Err(Rejection::ZoneFull);
    }
    Ok(zone)
}

impl DeckList {
    pub fn try_add(&self, card: &CardRecord, target: Zone, context: &PlacementContext) -> Result<DeckList, Rejection> {
        let zone = can_add(card, self, target, context)?;
        Ok(self.with_card_added(card, zone))
    }
}

#[cfg(test)]
mod test {
    #![allow(unused_imports)]

    use crate::ygopro::constants::Restriction;
    use crate::ygopro::constants::Zone;
    use crate::ygopro::data::CardRecord;
    use crate::ygopro::data::DeckList;
    use crate::ygopro::data::LFList;
    use super::can_add;
    use super::PlacementContext;
    use super::Rejection;

    fn ban_list() -> LFList {
        let mut lflist = LFList::new("test".to_string());
        lflist.set(1, Restriction::Limited);
        lflist.set(2, Restriction::SemiLimited);
        lflist.set(3, Restriction::Banned);
        lflist
    }

    fn monster(id: u32) -> CardRecord { CardRecord::new(id, "Monster", "Effect Monster") }

    #[test]
    fn test_limited_second_copy() {
        let lflist = ban_list();
        let context = PlacementContext::new(Some(&lflist));
        let card = monster(1);
        let deck = DeckList::new().try_add(&card, Zone::Main, &context).unwrap();
        assert_eq!(can_add(&card, &deck, Zone::Main, &context), Err(Rejection::LimitReached));
        assert_eq!(can_add(&card, &deck, Zone::Side, &context), Err(Rejection::LimitReached));
    }

    #[test]
    fn test_semi_limited() {
        let lflist = ban_list();
        let context = PlacementContext::new(Some(&lflist));
        let card = monster(2);
        let deck = DeckList::new()
            .try_add(&card, Zone::Main, &context).unwrap()
            .try_add(&card, Zone::Side, &context).unwrap();
        assert_eq!(deck.try_add(&card, Zone::Main, &context), Err(Rejection::LimitReached));
    }

    #[test]
    fn test_unlimited_fourth_copy() {
        let lflist = ban_list();
        let context = PlacementContext::new(Some(&lflist));
        let card = monster(10);
        let deck = DeckList::new()
            .with_card_added(&card, Zone::Main)
            .with_card_added(&card, Zone::Main)
            .with_card_added(&card, Zone::Side);
        assert_eq!(can_add(&card, &deck, Zone::Main, &context), Err(Rejection::LimitReached));
    }

    #[test]
    fn test_banned() {
        let lflist = ban_list();
        let context = PlacementContext::new(Some(&lflist));
        assert_eq!(can_add(&monster(3), &DeckList::new(), Zone::Main, &context), Err(Rejection::Banned));
    }

    #[test]
    fn test_genesys_ignores_ban_list() {
        let lflist = ban_list();
        let context = PlacementContext::new(Some(&lflist)).genesys(true);
        let card = monster(3);
        let mut deck = DeckList::new();
        for _ in 0..4 {
            deck = deck.try_add(&card, Zone::Main, &context).unwrap();
        }
        assert_eq!(deck.count_copies(3), 4);
    }

    #[test]
    fn test_custom_ban_list_beats_genesys() {
        let lflist = ban_list();
        let mut custom = LFList::new("tournament".to_string());
        custom.set(3, Restriction::Banned);
        custom.set(10, Restriction::Limited);
        let context = PlacementContext::new(Some(&lflist)).with_custom_ban_list(&custom).genesys(true);
        assert_eq!(can_add(&monster(3), &DeckList::new(), Zone::Main, &context), Err(Rejection::CustomBanned));

        // Only bans are taken from the tournament list.
        let card = monster(10);
        let deck = DeckList::new().with_card_added(&card, Zone::Main);
        assert_eq!(can_add(&card, &deck, Zone::Main, &context), Ok(Zone::Main));

        let context = PlacementContext::new(Some(&lflist)).with_custom_ban_list(&custom);
        assert_eq!(can_add(&monster(3), &DeckList::new(), Zone::Main, &context), Err(Rejection::CustomBanned));
    }

    #[test]
    fn test_main_zone_full() {
        let context = PlacementContext::default();
        let mut deck = DeckList::new();
        for id in 0..60 {
            deck = deck.try_add(&monster(100 + id), Zone::Main, &context).unwrap();
        }
        assert_eq!(deck.main.len(), 60);
        assert_eq!(can_add(&monster(999), &deck, Zone::Main, &context), Err(Rejection::ZoneFull));
        assert_eq!(can_add(&monster(999), &deck, Zone::Side, &context), Ok(Zone::Side));
    }

    #[test]
    fn test_zone_full_after_genesys() {
        let context = PlacementContext::default().genesys(true);
        let card = CardRecord::new(7, "Fusion", "Fusion Monster");
        let mut deck = DeckList::new();
        for _ in 0..15 {
            deck = deck.with_card_added(&card, Zone::Extra);
        }
        assert_eq!(can_add(&card, &deck, Zone::Extra, &context), Err(Rejection::ZoneFull));
    }

    #[test]
    fn test_routing() {
        let context = PlacementContext::default();
        let fusion = CardRecord::new(5, "Fusion", "Fusion Monster");
        let spell = CardRecord::new(6, "Spell", "Spell Card");
        let deck = DeckList::new();
        assert_eq!(can_add(&fusion, &deck, Zone::Main, &context), Ok(Zone::Extra));
        assert_eq!(can_add(&spell, &deck, Zone::Extra, &context), Ok(Zone::Main));
        assert_eq!(can_add(&fusion, &deck, Zone::Side, &context), Ok(Zone::Side));
        let deck = deck.try_add(&fusion, Zone::Main, &context).unwrap();
        assert_eq!(deck.extra.len(), 1);
        assert!(deck.main.is_empty());
    }

    #[test]
    fn test_counts_follow_removals() {
        let lflist = ban_list();
        let context = PlacementContext::new(Some(&lflist));
        let card = monster(1);
        let deck = DeckList::new().try_add(&card, Zone::Main, &context).unwrap();
        let removed = deck.with_card_removed(1, Zone::Main);
        assert!(removed.try_add(&card, Zone::Side, &context).is_ok());
        // The older value still holds its copy.
        assert_eq!(can_add(&card, &deck, Zone::Side, &context), Err(Rejection::LimitReached));
    }
}
