//! Centralized constants for the haunt behavior core.
//!
//! Shared lifecycle numbers live here. Per-variant tuning (speed, detection
//! range, light-kill time) lives in `monster::tuning::MonsterTuning` defaults
//! so that a config file can override it at construction time.
//!
//! All durations are milliseconds, all distances are world units.

// =====================================================
// Light exposure
// =====================================================

/// Max distance at which an active flashlight counts as lighting a monster
pub const FLASHLIGHT_RANGE: f32 = 120.0;

/// Half-period of the white exposure flash
pub const EXPOSURE_FLASH_HALF_PERIOD_MS: f32 = 100.0;

/// Exposure recovers at this fraction of delta while unlit
pub const EXPOSURE_RECOVERY_RATE: f32 = 0.5;

// =====================================================
// Monster lifecycle
// =====================================================

/// Duration of the fade/scale-out after death
pub const DEATH_FADE_MS: f32 = 500.0;

/// Scale multiplier reached at the end of the death fade
pub const DEATH_SCALE_GROWTH: f32 = 1.5;

/// Sprite scale applied to every monster
pub const BASE_SPRITE_SCALE: f32 = 2.0;

/// Distance under which a waypoint (or last known position) counts as reached
pub const ARRIVAL_RADIUS: f32 = 16.0;

/// Default melee reach shared by all variants
pub const DEFAULT_ATTACK_RANGE: f32 = 32.0;

/// Damage a monster deals to the player on contact
pub const CONTACT_DAMAGE: u32 = 1;

// =====================================================
// Ghost
// =====================================================

pub const GHOST_PATROL_HALF_EXTENT: f32 = 100.0;
pub const GHOST_PAUSE_DWELL_MS: f32 = 3000.0;
pub const GHOST_PAUSE_CHANCE: f32 = 0.1;
pub const GHOST_IDLE_MS: f32 = 1000.0;
/// Float phase speed in radians per second
pub const GHOST_FLOAT_SPEED: f32 = 2.0;
pub const GHOST_FLOAT_AMPLITUDE: f32 = 8.0;
pub const GHOST_FRAME_MS: f32 = 800.0;
pub const GHOST_FRAMES: u8 = 3;

// =====================================================
// Shadow
// =====================================================

pub const SHADOW_CHASE_SPEED: f32 = 100.0;
/// Chase is abandoned beyond detection_range * this factor
pub const SHADOW_LEASH_FACTOR: f32 = 1.5;
pub const SHADOW_HIGH_ALERT_DISTANCE: f32 = 60.0;
pub const SHADOW_ALERT_DECAY_MS: f32 = 2000.0;
pub const SHADOW_MAX_ALERT: u8 = 2;

// =====================================================
// Wraith
// =====================================================

pub const WRAITH_PATROL_HALF_EXTENT: f32 = 150.0;
pub const WRAITH_MAX_PURSUIT_MS: f32 = 8000.0;
pub const WRAITH_ATTACK_MS: f32 = 500.0;
/// Speed factor while heading for the last known player position
pub const WRAITH_RETRACE_SPEED_FACTOR: f32 = 0.7;
/// Speed factor while circling the last known player position
pub const WRAITH_SEARCH_SPEED_FACTOR: f32 = 0.5;
pub const WRAITH_SEARCH_BASE_RADIUS: f32 = 50.0;
/// Search radius growth in units per second
pub const WRAITH_SEARCH_GROWTH: f32 = 10.0;
/// Search angle advances one radian per this many ms. Slow enough that the
/// sweep point at the base radius moves no faster than the search speed.
pub const WRAITH_SEARCH_ANGLE_MS: f32 = 1000.0;
pub const WRAITH_PATROL_FRAME_MS: f32 = 600.0;
pub const WRAITH_CHASE_FRAME_MS: f32 = 300.0;
pub const WRAITH_ATTACK_FRAME_MS: f32 = 200.0;
pub const WRAITH_FRAMES: u8 = 4;

// =====================================================
// Poltergeist
// =====================================================

pub const POLTERGEIST_MAX_ENERGY: f32 = 4.0;
pub const POLTERGEIST_PATROL_ENERGY_FLOOR: f32 = 1.0;
pub const POLTERGEIST_LOST_ENERGY: f32 = 2.0;
/// Energy lost per second while patrolling
pub const POLTERGEIST_ENERGY_DECAY: f32 = 0.6;
/// Energy gained per second while chasing
pub const POLTERGEIST_ENERGY_GAIN: f32 = 1.2;
pub const POLTERGEIST_ATTACK_MS: f32 = 1500.0;
/// Attack starts within attack_range * this factor
pub const POLTERGEIST_ATTACK_REACH_FACTOR: f32 = 2.0;
pub const POLTERGEIST_SPIN_SPEED: f32 = 200.0;
pub const POLTERGEIST_SPIN_ANGLE_MS: f32 = 100.0;
pub const POLTERGEIST_DIRECTION_MIN_MS: f32 = 500.0;
pub const POLTERGEIST_DIRECTION_SPREAD_MS: f32 = 2000.0;
/// Chase heading deviates by up to +/-90 degrees times this factor
pub const POLTERGEIST_CHASE_CHAOS: f32 = 0.3;
pub const POLTERGEIST_JITTER_SCALE: f32 = 50.0;
pub const POLTERGEIST_THROW_RANGE: f32 = 150.0;
pub const POLTERGEIST_THROW_COOLDOWN_MIN_MS: f32 = 2000.0;
pub const POLTERGEIST_THROW_COOLDOWN_SPREAD_MS: f32 = 3000.0;
pub const POLTERGEIST_THROW_FLIGHT_MS: f32 = 1000.0;
/// Throw targets land within +/- half of this around the player
pub const POLTERGEIST_THROW_SCATTER: f32 = 64.0;
pub const POLTERGEIST_PROP_COUNT: usize = 3;
pub const POLTERGEIST_ORBIT_RADIUS: f32 = 30.0;
pub const POLTERGEIST_ORBIT_WOBBLE: f32 = 10.0;
pub const POLTERGEIST_ORBIT_PERIOD_MS: f32 = 500.0;
pub const POLTERGEIST_WOBBLE_PERIOD_MS: f32 = 200.0;
pub const POLTERGEIST_BASE_FRAME_MS: f32 = 800.0;
pub const POLTERGEIST_FRAME_MS_PER_ENERGY: f32 = 150.0;
pub const POLTERGEIST_FRAMES: u8 = 4;

// =====================================================
// Player (reference implementation)
// =====================================================

pub const PLAYER_MAX_HEALTH: u32 = 3;
/// Units per second
pub const PLAYER_MOVE_SPEED: f32 = 160.0;
pub const PLAYER_MAX_BATTERY: f32 = 100.0;
/// Battery drained per second while the flashlight is on
pub const PLAYER_BATTERY_DRAIN: f32 = 20.0;
pub const PLAYER_RECHARGE_AMOUNT: f32 = 25.0;
pub const PLAYER_INVULNERABLE_MS: f32 = 1500.0;
pub const PLAYER_WALK_FRAME_MS: f32 = 200.0;
pub const PLAYER_WALK_FRAMES: u8 = 4;
