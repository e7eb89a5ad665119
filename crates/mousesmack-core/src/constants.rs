//! Round constants and default tuning parameters.

/// Host game loop tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Timer ---

/// Round length in seconds.
pub const DEFAULT_STARTING_TIME_SECS: f64 = 60.0;

/// Seconds removed from the clock on a missed tap.
pub const DEFAULT_TIME_PENALTY_SECS: f64 = 2.0;

/// Points removed on a missed tap (only when the time penalty is zero).
pub const DEFAULT_SCORE_PENALTY: u32 = 0;

// --- Targets ---

/// Slowest target speed (world units per second).
pub const DEFAULT_MIN_SPEED: f64 = 2.0;

/// Fastest target speed (world units per second).
pub const DEFAULT_MAX_SPEED: f64 = 4.0;

/// Points awarded for smacking the default archetype.
pub const DEFAULT_POINTS_PER_HIT: u32 = 10;

/// Hit radius of the default archetype (world units).
pub const DEFAULT_HIT_RADIUS: f64 = 0.5;

/// Name of the default archetype.
pub const DEFAULT_ARCHETYPE_NAME: &str = "mouse";

/// A target within this distance of its end position has arrived.
pub const ARRIVAL_EPSILON: f64 = 1e-3;

/// How far outside the top/bottom edge a path starts and ends.
pub const SPAWN_EDGE_MARGIN: f64 = 1.0;

// --- Playfield ---

/// Half-height of the visible area (orthographic camera size).
pub const PLAYFIELD_HALF_HEIGHT: f64 = 5.0;

/// Half-width of the visible area at 16:9.
pub const PLAYFIELD_HALF_WIDTH: f64 = PLAYFIELD_HALF_HEIGHT * 16.0 / 9.0;

// --- Determinism ---

/// RNG seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;
