//! Deterministic replay of haunt sessions.
//!
//! Workflow:
//! 1. `ReplayRecorder::new(config)` wraps a fresh world
//! 2. Drive it through the recorder: spawns, ticks and contacts are logged in order
//! 3. `finish()` seals a `ReplayRecording` with the final world digest
//! 4. `verify()` rebuilds the world from the config and replays every step;
//!    identical seed + steps must land on the identical digest

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use tracing::{info, warn};

use crate::collision::ContactOutcome;
use crate::engine::{HauntConfig, HauntWorld, TickSummary};
use crate::error::HauntResult;
use crate::logging::operation_span;
use crate::monster::{MonsterId, MonsterKind};
use crate::player::PlayerInput;

pub const REPLAY_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReplayStep {
    Spawn { kind: MonsterKind, position: Vec2 },
    Tick { delta: f32, input: PlayerInput },
    Contact { monster: MonsterId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayRecording {
    pub version: u32,
    pub config: HauntConfig,
    pub steps: Vec<ReplayStep>,
    pub final_digest: u64,
    pub recording_hash: u64,
}

impl ReplayRecording {
    fn compute_hash(config: &HauntConfig, steps: &[ReplayStep], final_digest: u64) -> u64 {
        let mut hasher = Sha3_256::new();
        hasher.update(config.seed.to_le_bytes());
        hasher.update(final_digest.to_le_bytes());
        for step in steps {
            // Step encoding cannot fail: plain data, string keys only
            if let Ok(bytes) = serde_json::to_vec(step) {
                hasher.update(&bytes);
            }
        }
        first_u64(&hasher.finalize())
    }

    /// The recording has not been edited since it was sealed
    pub fn verify_integrity(&self) -> bool {
        self.recording_hash == Self::compute_hash(&self.config, &self.steps, self.final_digest)
    }

    /// Re-run every step on a fresh world and compare digests.
    pub fn verify(&self) -> bool {
        if !self.verify_integrity() {
            warn!("replay integrity hash mismatch");
            return false;
        }
        let _span = operation_span("replay_verify");
        let world = self.replay();
        let digest = world_digest(&world);
        if digest != self.final_digest {
            warn!(expected = self.final_digest, actual = digest, "replay diverged");
            return false;
        }
        true
    }

    /// Rebuild the recorded session
    pub fn replay(&self) -> HauntWorld {
        let mut world = HauntWorld::new(self.config.clone());
        for step in &self.steps {
            apply_step(&mut world, step);
        }
        world
    }

    pub fn tick_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, ReplayStep::Tick { .. }))
            .count()
    }

    pub fn to_json(&self) -> HauntResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> HauntResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn apply_step(world: &mut HauntWorld, step: &ReplayStep) {
    match step {
        ReplayStep::Spawn { kind, position } => {
            world.spawn(*kind, *position);
        }
        ReplayStep::Tick { delta, input } => {
            world.tick(*delta, input);
        }
        ReplayStep::Contact { monster } => {
            world.contact(*monster);
        }
    }
}

fn first_u64(digest: &[u8]) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}

/// SHA3 digest of the world snapshot
pub fn world_digest(world: &HauntWorld) -> u64 {
    let mut hasher = Sha3_256::new();
    if let Ok(bytes) = serde_json::to_vec(&world.snapshot()) {
        hasher.update(&bytes);
    }
    first_u64(&hasher.finalize())
}

/// Drives a world and records everything done to it.
pub struct ReplayRecorder {
    world: HauntWorld,
    config: HauntConfig,
    steps: Vec<ReplayStep>,
}

impl ReplayRecorder {
    pub fn new(config: HauntConfig) -> Self {
        Self {
            world: HauntWorld::new(config.clone()),
            config,
            steps: Vec::new(),
        }
    }

    pub fn spawn(&mut self, kind: MonsterKind, position: Vec2) -> MonsterId {
        self.steps.push(ReplayStep::Spawn { kind, position });
        self.world.spawn(kind, position)
    }

    pub fn tick(&mut self, delta: f32, input: PlayerInput) -> TickSummary {
        self.steps.push(ReplayStep::Tick { delta, input });
        self.world.tick(delta, &input)
    }

    pub fn contact(&mut self, monster: MonsterId) -> Option<ContactOutcome> {
        self.steps.push(ReplayStep::Contact { monster });
        self.world.contact(monster)
    }

    pub fn world(&self) -> &HauntWorld {
        &self.world
    }

    pub fn finish(self) -> ReplayRecording {
        let final_digest = world_digest(&self.world);
        let recording_hash =
            ReplayRecording::compute_hash(&self.config, &self.steps, final_digest);
        info!(
            steps = self.steps.len(),
            digest = final_digest,
            "replay recording sealed"
        );
        ReplayRecording {
            version: REPLAY_VERSION,
            config: self.config,
            steps: self.steps,
            final_digest,
            recording_hash,
        }
    }
}
