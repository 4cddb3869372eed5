pub mod card;
pub mod deck;
pub mod lflist;

pub use card::CardRecord;
pub use card::classify;
pub use deck::Deck;
pub use deck::DeckList;
pub use lflist::LFList;
pub use lflist::RestrictionLookup;
