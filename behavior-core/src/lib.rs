//! Haunt - Monster Behavior Core
//!
//! Real-time monster AI for a top-down survival-horror game:
//! - Four monster variants (Ghost, Shadow, Wraith, Poltergeist) on a shared
//!   Idle/Patrol/Chase/Attack/Death skeleton
//! - Flashlight exposure as a universal weakness
//! - Collision hook that routes contact damage to the player
//! - Reference player (movement, battery, invulnerability window)
//! - Headless world driver and a Bevy plugin around it
//! - Deterministic replay (seeded per-monster RNG, SHA3 digests)
//!
//! Rendering, physics broad-phase, input polling and asset loading live
//! outside this crate.

pub mod clock;
pub mod collision;
pub mod constants;
pub mod engine;
pub mod error;
pub mod logging;
pub mod monster;
pub mod player;
pub mod replay;
pub mod rng;
pub mod sensor;

pub use collision::{resolve_contact, ContactOutcome};
pub use engine::{EnginePlugin, HauntConfig, HauntWorld};
pub use error::{HauntError, HauntResult};
pub use monster::intent::{MonsterEvent, RenderIntent, TickReport};
pub use monster::{Monster, MonsterId, MonsterKind, MonsterState};
pub use player::{Player, PlayerInput};
pub use sensor::{PlayerActuator, PlayerSensor, PlayerSnapshot};
