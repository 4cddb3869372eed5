// ============================================================
// ydk
// ------------------------------------------------------------
//! `.ydk` deck files: one card id per line under `#main`,
//! `#extra` and `!side`.
//!
//! Reading never fails. Anything that is not an id under a
//! known section is skipped.
// ============================================================

use std::str::FromStr;

use crate::ygopro::constants::Zone;
use crate::ygopro::data::Deck;

pub const MAIN_MARKER: &str = "#main";
pub const EXTRA_MARKER: &str = "#extra";
pub const SIDE_MARKER: &str = "!side";

pub fn encode_ydk(deck: &Deck) -> String {
    let mut text = String::new();
    for (marker, ids) in [(MAIN_MARKER, &deck.main), (EXTRA_MARKER, &deck.extra), (SIDE_MARKER, &deck.side)] {
        text.push_str(marker);
        text.push('\n');
        for id in ids {
            text.push_str(&id.to_string());
            text.push('\n');
        }
    }
    text
}

pub fn decode_ydk(text: &str) -> Deck {
    let mut deck = Deck::default();
    let mut section: Option<Zone> = None;
    for line in text.lines() {
        let line = line.trim();
        match line {
            MAIN_MARKER => section = Some(Zone::Main),
            EXTRA_MARKER => section = Some(Zone::Extra),
            SIDE_MARKER => section = Some(Zone::Side),
            "" => continue,
            _ if line.starts_with('#') || line.starts_with('!') => continue,
            _ => {
                let zone = match section {
                    Some(zone) => zone,
                    None => {
                        trace!("Drop ydk line before any section: {}", line);
                        continue
                    }
                };
                match u32::from_str(line) {
                    Ok(id) => deck.zone_mut(zone).push(id),
                    Err(_) => debug!("Drop unreadable ydk line: {}", line),
                }
            }
        }
    }
    deck
}

#[cfg(test)]
mod test {
    #![allow(unused_imports)]

    use crate::ygopro::data::Deck;
    use super::decode_ydk;
    use super::encode_ydk;

    #[test]
    fn test_encode_ydk() {
        let deck = Deck::new(vec![123, 123], vec![456], vec![]);
        assert_eq!(encode_ydk(&deck), "#main\n123\n123\n#extra\n456\n!side\n");
    }

    #[test]
    fn test_decode_ydk() {
        let deck = decode_ydk("#main\n123\n\n#extra\n456\n!side\n789\n");
        assert_eq!(deck, Deck::new(vec![123], vec![456], vec![789]));
    }

    #[test]
    fn test_decode_drops_leading_lines() {
        let deck = decode_ydk("42\nhello\n#main\n123\n");
        assert_eq!(deck, Deck::new(vec![123], vec![], vec![]));
    }

    #[test]
    fn test_decode_tolerates_noise() {
        let text = "#created by someone\r\n#main\r\n89631139\r\n89631139\r\n#comment\r\nnot-an-id\r\n!unknown\r\n#extra\r\n\r\n!side\r\n14558127\r\n#main\r\n1\r\n";
        let deck = decode_ydk(text);
        assert_eq!(deck, Deck::new(vec![89631139, 89631139, 1], vec![], vec![14558127]));
    }

    #[test]
    fn test_decode_encoded() {
        let deck = Deck::new(vec![1, 2, 2], vec![3], vec![4, 5]);
        assert_eq!(decode_ydk(&encode_ydk(&deck)), deck);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_ydk(""), Deck::default());
    }
}
