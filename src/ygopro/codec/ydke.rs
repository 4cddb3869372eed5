// ============================================================
// ydke
// ------------------------------------------------------------
//! `ydke://` deck strings, the clipboard format deck builders
//! exchange.
//!
//! Each zone is its card ids as little-endian u32, base64'd.
//! Zones are joined by `!` in the order main, extra, side.
// ============================================================

use std::io::Cursor;

use crate::ygopro::data::Deck;
use crate::ygopro::utils::reader::read_u32_to_end;
use crate::ygopro::utils::writer::u32_array_to_bytes;

use super::FormatError;

pub const YDKE_PREFIX: &str = "ydke://";

pub fn encode_segment(ids: &[u32]) -> String {
    if ids.is_empty() { return String::new() }
    base64::encode(&u32_array_to_bytes(ids))
}

pub fn decode_segment(b64: &str) -> Result<Vec<u32>, FormatError> {
    let buffer = base64::decode(b64)?;
    if buffer.len() % 4 != 0 {
        return Err(FormatError::Misaligned(buffer.len()));
    }
    Ok(read_u32_to_end(&mut Cursor::new(&buffer), buffer.len())?)
}

pub fn encode_deck(deck: &Deck) -> String {
    format!("{}{}!{}!{}", YDKE_PREFIX, encode_segment(&deck.main), encode_segment(&deck.extra), encode_segment(&deck.side))
}

pub fn decode_deck(uri: &str) -> Result<Deck, FormatError> {
    let body = uri.strip_prefix(YDKE_PREFIX).ok_or(FormatError::MissingPrefix)?;
    let segments = body.split('!').collect::<Vec<&str>>();
    if segments.len() != 3 {
        return Err(FormatError::SegmentCount(segments.len()));
    }
    Ok(Deck {
        main: decode_segment(segments[0])?,
        extra: decode_segment(segments[1])?,
        side: decode_segment(segments[2])?,
    })
}
