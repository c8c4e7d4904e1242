// Prevention: 2 points of Grit prevent 1 Damage, 2 points of Veil prevent 1 Risk
pub const GRIT_PER_DAMAGE_PREVENTED: f64 = 2.0;
pub const VEIL_PER_RISK_PREVENTED: f64 = 2.0;

// Hiring
pub const RUNNER_HIRE_COST: i64 = 500;
pub const MAX_TEAM_SIZE: usize = 4;
pub const STARTING_MONEY: i64 = 2_000;

// Progression
pub const PLAYER_LEVELS_PER_CONTRACT: u32 = 1;

// Contract trees
pub const MAX_EFFECTS_PER_NODE: usize = 2;

// Pacing of resolution playback. Presentation only: drivers sleep this long
// between resolver steps; the resolver itself never sees it.
pub const RESOLUTION_STEP_DELAY_MS: u64 = 600;

// Runner stat rolls at generation time
pub const PRIMARY_STAT_MIN: u32 = 3;
pub const PRIMARY_STAT_MAX: u32 = 6;
pub const SECONDARY_STAT_MIN: u32 = 0;
pub const SECONDARY_STAT_MAX: u32 = 2;
