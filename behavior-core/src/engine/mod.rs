//! World driver and Bevy integration.
//!
//! Architecture:
//!   frame driver (Bevy `Update`) -> HauntWorld::tick -> Monster::update
//!   physics pass -> MonsterContactEvent -> HauntWorld::contact -> Player
//!
//! `HauntWorld` is plain Rust and can be stepped headless; `EnginePlugin`
//! wraps it in a shared resource and translates to and from Bevy events.

pub mod config;
pub mod plugin;
pub mod world;

pub use config::{Bestiary, HauntConfig};
pub use plugin::{
    EnginePlugin, EngineResource, MonsterContactEvent, MonsterEventMsg, PendingInput,
    PlayerHitEvent, SpawnMonsterEvent,
};
pub use world::{HauntWorld, MonsterView, PlayerView, TickSummary, WorldSnapshot};

// =====================================================
// Tests
// =====================================================
