pub mod constants;
pub mod utils;
pub mod data;
pub mod codec;

pub use constants::Zone;
pub use constants::Restriction;
