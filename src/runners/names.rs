//! Street-handle generation for runners.

use rand::Rng;

/// Generates a two-part street handle, e.g. "Chrome Viper".
pub fn generate_runner_name(rng: &mut impl Rng) -> String {
    let callsigns = [
        "Chrome", "Neon", "Static", "Null", "Ember", "Razor", "Hex", "Vapor", "Flint", "Echo",
    ];
    let monikers = [
        "Viper", "Wraith", "Jackal", "Cipher", "Halo", "Drift", "Saint", "Marrow", "Spark",
        "Lynx",
    ];

    let callsign = callsigns[rng.gen_range(0..callsigns.len())];
    let moniker = monikers[rng.gen_range(0..monikers.len())];

    format!("{} {}", callsign, moniker)
}
