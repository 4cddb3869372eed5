use serde::Serialize;
use serde::Deserialize;

use crate::ygopro::constants::Zone;
use crate::ygopro::constants::EXTRA_MARKERS;

/// One catalog card, as the resolver hands it out.
///
/// The record carries no ban status: that depends on which list is active
/// and is asked from a [`RestrictionLookup`](super::RestrictionLookup) instead.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct CardRecord {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub card_type: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub level: Option<u32>,
}

impl CardRecord {
    pub fn new(id: u32, name: &str, card_type: &str) -> Self {
        CardRecord {
            id,
            name: name.to_string(),
            card_type: card_type.to_string(),
            race: String::new(),
            level: None,
        }
    }

    pub fn with_race(mut self, race: &str) -> Self {
        self.race = race.to_string();
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn is_monster(&self) -> bool { self.card_type.contains("Monster") }
    pub fn is_spell(&self)   -> bool { self.card_type.contains("Spell") }
    pub fn is_trap(&self)    -> bool { self.card_type.contains("Trap") }

    /// Deck zone this card lives in. Never [`Zone::Side`].
    pub fn zone(&self) -> Zone {
        classify(self)
    }
}

pub fn classify(card: &CardRecord) -> Zone {
    if EXTRA_MARKERS.iter().any(|marker| card.card_type.contains(marker)) { Zone::Extra }
    else { Zone::Main }
}

#[cfg(test)]
mod test {
    #![allow(unused_imports)]

    use crate::ygopro::constants::Zone;
    use super::CardRecord;
    use super::classify;

    #[test]
    fn test_classify() {
        assert_eq!(classify(&CardRecord::new(1, "", "Synchro Tuner Monster")), Zone::Extra);
        assert_eq!(classify(&CardRecord::new(2, "", "Normal Monster")), Zone::Main);
        assert_eq!(classify(&CardRecord::new(3, "", "XYZ Monster")), Zone::Extra);
        assert_eq!(classify(&CardRecord::new(4, "", "Link Monster")), Zone::Extra);
        assert_eq!(classify(&CardRecord::new(5, "", "Pendulum Effect Monster")), Zone::Extra);
        assert_eq!(classify(&CardRecord::new(6, "", "Spell Card")), Zone::Main);
        assert_eq!(classify(&CardRecord::new(7, "", "")), Zone::Main);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify(&CardRecord::new(1, "", "fusion monster")), Zone::Main);
    }

    #[test]
    fn test_deserialize_record() {
        let card: CardRecord = serde_json::from_str(r#"{"id": 89631139, "name": "Blue-Eyes White Dragon", "type": "Normal Monster", "race": "Dragon", "level": 8}"#).unwrap();
        assert_eq!(card.card_type, "Normal Monster");
        assert_eq!(card.level, Some(8));
        assert!(card.is_monster());
        let spell: CardRecord = serde_json::from_str(r#"{"id": 55144522, "name": "Pot of Greed", "type": "Spell Card", "race": "Normal"}"#).unwrap();
        assert_eq!(spell.level, None);
        assert!(spell.is_spell());
    }
}
