/// Roster engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of slots on a team's front line.
pub const MAX_FRONT_LINE: usize = 4;

/// Maximum number of slots on a team's back line.
pub const MAX_BACK_LINE: usize = 4;

/// Maximum total team size (front + back).
pub const MAX_TEAM_SIZE: usize = MAX_FRONT_LINE + MAX_BACK_LINE;

/// Lowest and highest character rarity accepted at load time.
pub const MIN_RARITY: u8 = 3;
pub const MAX_RARITY: u8 = 5;

/// Tolerance used when checking that stored vectors are unit length.
pub const UNIT_NORM_TOLERANCE: f32 = 1e-4;
