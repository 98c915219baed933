//! Ghost: slow square patrol, occasional pauses, never chases.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use super::body::MonsterBody;
use super::intent::TextureId;
use super::patrol::PatrolRoute;
use super::MonsterState;
use crate::constants::{
    GHOST_FLOAT_AMPLITUDE, GHOST_FLOAT_SPEED, GHOST_FRAME_MS, GHOST_IDLE_MS, GHOST_PATROL_HALF_EXTENT,
    GHOST_PAUSE_CHANCE, GHOST_PAUSE_DWELL_MS,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ghost {
    float_phase: f32,
    float_offset: f32,
}

impl Ghost {
    pub(super) fn setup(body: &mut MonsterBody) -> Self {
        let origin = body.position;
        let h = GHOST_PATROL_HALF_EXTENT;
        body.patrol = PatrolRoute::new(vec![
            origin + Vec2::new(-h, -h),
            origin + Vec2::new(h, -h),
            origin + Vec2::new(h, h),
            origin + Vec2::new(-h, h),
        ]);
        body.state = MonsterState::Patrol;
        Self::default()
    }

    pub(super) fn update_behavior(&mut self, body: &mut MonsterBody, delta: f32) {
        match body.state {
            MonsterState::Patrol => {
                body.move_along_patrol();
                if body.state_timer.ms() > GHOST_PAUSE_DWELL_MS
                    && body.rng.chance(GHOST_PAUSE_CHANCE)
                {
                    body.set_state(MonsterState::Idle);
                    body.velocity = Vec2::ZERO;
                }
            }
            MonsterState::Idle => {
                if body.state_timer.ms() > GHOST_IDLE_MS {
                    body.set_state(MonsterState::Patrol);
                }
            }
            _ => {}
        }

        self.float_phase += GHOST_FLOAT_SPEED * (delta / 1000.0);
        self.float_offset = self.float_phase.sin() * GHOST_FLOAT_AMPLITUDE;
    }

    pub(super) fn update_animations(&mut self, body: &mut MonsterBody, delta: f32) {
        body.frames.advance(delta, GHOST_FRAME_MS);
    }

    pub(super) fn texture(&self, body: &MonsterBody) -> TextureId {
        TextureId::GhostFloat(body.frames.frame())
    }

    /// Vertical bob, drawn on top of the simulated position
    pub fn float_offset(&self) -> f32 {
        self.float_offset
    }
}
