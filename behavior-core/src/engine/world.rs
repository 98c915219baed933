use std::collections::BTreeMap;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collision::{resolve_contact, ContactOutcome};
use crate::engine::config::HauntConfig;
use crate::monster::intent::{RenderIntent, TickReport};
use crate::monster::{Monster, MonsterId, MonsterKind, MonsterState};
use crate::player::{Player, PlayerInput};
use crate::rng::monster_seed;
use crate::sensor::PlayerSensor;

/// Result of one `HauntWorld::tick`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSummary {
    pub tick: u64,
    pub reports: Vec<TickReport>,
    /// Monsters whose death fade finished and were dropped this tick
    pub despawned: Vec<MonsterId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterView {
    pub id: MonsterId,
    pub kind: MonsterKind,
    pub state: MonsterState,
    pub health: u32,
    pub position: Vec2,
    pub exposure_ms: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub health: u32,
    pub battery: f32,
    pub flashlight_on: bool,
}

/// Serializable picture of the whole world at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub clock_ms: f64,
    pub player: PlayerView,
    pub monsters: Vec<MonsterView>,
}

/// Owns the player and the live monster set and steps them in order:
/// player first, then every monster against the same player snapshot, then
/// integration, then removal of faded monsters.
pub struct HauntWorld {
    config: HauntConfig,
    player: Player,
    monsters: BTreeMap<MonsterId, Monster>,
    next_id: u32,
    clock_ms: f64,
    tick: u64,
}

impl HauntWorld {
    pub fn new(config: HauntConfig) -> Self {
        Self::with_player(config, Player::default())
    }

    pub fn with_player(config: HauntConfig, player: Player) -> Self {
        Self {
            config,
            player,
            monsters: BTreeMap::new(),
            next_id: 1,
            clock_ms: 0.0,
            tick: 0,
        }
    }

    pub fn spawn(&mut self, kind: MonsterKind, position: Vec2) -> MonsterId {
        let id = MonsterId(self.next_id);
        self.next_id += 1;
        let monster = Monster::spawn(
            id,
            kind,
            position,
            self.clock_ms,
            self.config.bestiary.tuning(kind),
            monster_seed(self.config.seed, id.0),
        );
        self.monsters.insert(id, monster);
        id
    }

    /// Advance everything by `delta` milliseconds.
    pub fn tick(&mut self, delta: f32, input: &PlayerInput) -> TickSummary {
        self.tick += 1;
        self.clock_ms += delta as f64;

        self.player.update(delta, input);
        let snapshot = self.player.snapshot();

        let mut reports = Vec::with_capacity(self.monsters.len());
        for monster in self.monsters.values_mut() {
            reports.push(monster.update(self.clock_ms, delta, &snapshot));
        }

        self.player.integrate(delta);
        for monster in self.monsters.values_mut() {
            monster.integrate(delta);
        }

        let despawned: Vec<MonsterId> = self
            .monsters
            .iter()
            .filter(|(_, m)| m.ready_for_removal())
            .map(|(id, _)| *id)
            .collect();
        for id in &despawned {
            self.monsters.remove(id);
            debug!(%id, "removed from live set");
        }

        TickSummary {
            tick: self.tick,
            reports,
            despawned,
        }
    }

    /// Collision hook. Unknown or already removed monsters are ignored.
    pub fn contact(&mut self, id: MonsterId) -> Option<ContactOutcome> {
        let monster = self.monsters.get_mut(&id)?;
        Some(resolve_contact(monster, &mut self.player))
    }

    pub fn render_intents(&self) -> Vec<(MonsterId, RenderIntent)> {
        self.monsters
            .iter()
            .map(|(id, m)| (*id, m.render_intent()))
            .collect()
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            clock_ms: self.clock_ms,
            player: PlayerView {
                position: self.player.position(),
                health: self.player.health(),
                battery: self.player.battery(),
                flashlight_on: self.player.is_flashlight_active(),
            },
            monsters: self
                .monsters
                .values()
                .map(|m| MonsterView {
                    id: m.id(),
                    kind: m.kind(),
                    state: m.state(),
                    health: m.health(),
                    position: m.position(),
                    exposure_ms: m.exposure_time(),
                })
                .collect(),
        }
    }

    pub fn config(&self) -> &HauntConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(&id)
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.get_mut(&id)
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Monster> {
        self.monsters.values()
    }

    pub fn monster_count(&self) -> usize {
        self.monsters.len()
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }
}
