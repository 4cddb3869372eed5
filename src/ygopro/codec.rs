pub mod error;
pub mod ydke;
pub mod ydk;

pub use error::FormatError;
pub use ydke::encode_segment;
pub use ydke::decode_segment;
pub use ydke::encode_deck;
pub use ydke::decode_deck;
pub use ydk::encode_ydk;
pub use ydk::decode_ydk;
