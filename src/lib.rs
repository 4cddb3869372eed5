//! Deck codec and validation engine for ygopro decks.
//!
//! * [`ygopro`]: card and deck data, `ydke://` and `.ydk` codecs, lflist.
//! * [`ydkpru`]: placement rules, deck order, import/export and deck check.

#[macro_use] extern crate anyhow;
#[macro_use] extern crate log;

pub mod ygopro;
pub mod ydkpru;
