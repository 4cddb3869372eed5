use serde::Serialize;
use serde::Deserialize;
use num_enum::IntoPrimitive;
use num_enum::TryFromPrimitive;

pub const MAIN_MIN: usize = 40;
pub const MAIN_MAX: usize = 60;
pub const EXTRA_MAX: usize = 15;
pub const SIDE_MAX: usize = 15;

/// Type markers that send a card to the extra deck.
pub const EXTRA_MARKERS: [&str; 6] = ["Fusion", "Synchro", "XYZ", "Xyz", "Link", "Pendulum"];

#[derive(Serialize, Deserialize, Copy, Clone, Eq, PartialEq, Debug, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Main,
    Extra,
    Side,
}

impl Zone {
    pub fn capacity(&self) -> usize {
        match self {
            Zone::Main => MAIN_MAX,
            Zone::Extra => EXTRA_MAX,
            Zone::Side => SIDE_MAX,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Zone::Main => "main",
            Zone::Extra => "extra",
            Zone::Side => "side",
        })
    }
}

/// Numbers are the ones lflist.conf uses.
#[derive(Copy, Clone, Eq, PartialEq, TryFromPrimitive, IntoPrimitive, Debug, Hash)]
#[repr(u8)]
pub enum Restriction {
    Banned = 0,
    Limited = 1,
    SemiLimited = 2,
    Unlimited = 3,
}

impl Restriction {
    /// Copies allowed across main, extra and side together.
    pub fn limit(&self) -> usize {
        u8::from(*self) as usize
    }
}

impl std::default::Default for Restriction {
    fn default() -> Self {
        return Restriction::Unlimited;
    }
}
