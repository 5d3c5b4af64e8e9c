//! Game rule constants (defines).
//!
//! Sentinels and defaults shared by the catalog and the rules engine.
//! Values match the standard ruleset.

/// Hull constants
pub mod hull {
    /// Space dock capacity meaning "no limit on hull size"
    pub const UNLIMITED_SPACE_DOCK: i32 = -1;

    /// Scan range meaning "this part has no scanner"
    pub const NO_SCANNER: i32 = -1;
}

/// Stargate constants
pub mod gate {
    /// Gate range/mass meaning "not a stargate"
    pub const NO_GATE: i32 = -1;

    /// Gate range/mass meaning "unlimited"
    pub const INFINITE_GATE: i32 = i32::MAX;
}

/// Tech provenance constants
pub mod origin {
    /// Origin tag for parts only obtainable from the Mystery Trader
    pub const ORIGIN_MYSTERY_TRADER: &str = "MysteryTrader";

    /// Name of the planet-resetting planetary tech
    pub const GENESIS_DEVICE: &str = "Genesis Device";
}

/// Planetary defense constants
pub mod defense {
    /// Defense counts above this saturate the coverage curve
    pub const MAX_DEFENSES: i32 = 100;

    /// Effectiveness of defenses against smart bombs
    pub const DEFAULT_SMART_DEFENSE_FACTOR: f64 = 0.5;
}

/// Engine constants
pub mod engine {
    /// Fuel tables carry one entry per warp level 0..=10
    pub const FUEL_USAGE_WARP_LEVELS: usize = 11;
}

pub use defense::{DEFAULT_SMART_DEFENSE_FACTOR, MAX_DEFENSES};
pub use engine::FUEL_USAGE_WARP_LEVELS;
pub use gate::{INFINITE_GATE, NO_GATE};
pub use hull::{NO_SCANNER, UNLIMITED_SPACE_DOCK};
pub use origin::{GENESIS_DEVICE, ORIGIN_MYSTERY_TRADER};
