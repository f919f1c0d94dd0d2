mod address;
mod config;
mod estimate;
mod ordering;
mod round_trip;

use h3syl::{Config, SyllableSystem};

/// The configuration used by most scenarios: 15 consonants, 5 vowels,
/// 8 syllables per address.
pub fn scenario_system() -> SyllableSystem {
    let config = Config::bundled("ascii-dnqqwn").expect("bundled config");
    SyllableSystem::new(config).expect("system")
}
