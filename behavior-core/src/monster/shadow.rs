//! Shadow: stationary guard with a three-level alert indicator.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use super::body::MonsterBody;
use super::intent::TextureId;
use super::MonsterState;
use crate::clock::Elapsed;
use crate::constants::{
    ARRIVAL_RADIUS, SHADOW_ALERT_DECAY_MS, SHADOW_CHASE_SPEED, SHADOW_HIGH_ALERT_DISTANCE,
    SHADOW_LEASH_FACTOR, SHADOW_MAX_ALERT,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    guard: Vec2,
    alert_level: u8,
    alert_timer: Elapsed,
}

impl Shadow {
    pub(super) fn setup(body: &mut MonsterBody) -> Self {
        body.state = MonsterState::Idle;
        Self {
            guard: body.position,
            alert_level: 0,
            alert_timer: Elapsed::default(),
        }
    }

    pub(super) fn update_behavior(&mut self, body: &mut MonsterBody, delta: f32) {
        self.alert_timer.advance(delta);

        let distance = body.distance_to_player();
        let detected = distance <= body.tuning.detection_range;

        match body.state {
            MonsterState::Idle => self.guard_post(body, detected),
            MonsterState::Chase => {
                if distance > body.tuning.detection_range * SHADOW_LEASH_FACTOR {
                    body.set_state(MonsterState::Idle);
                    self.alert_level = 0;
                    return;
                }
                let target = body.player.position;
                body.move_towards(target, SHADOW_CHASE_SPEED);
            }
            _ => {}
        }

        self.update_alert(detected, distance, body.tuning.detection_range);
    }

    fn guard_post(&mut self, body: &mut MonsterBody, detected: bool) {
        if detected {
            body.set_state(MonsterState::Chase);
            self.alert_level = SHADOW_MAX_ALERT;
            body.velocity = Vec2::ZERO;
            return;
        }
        // Drift back after a chase ended away from the post
        if body.position.distance(self.guard) > ARRIVAL_RADIUS {
            body.move_towards(self.guard, SHADOW_CHASE_SPEED);
        } else {
            body.velocity = Vec2::ZERO;
        }
    }

    fn update_alert(&mut self, detected: bool, distance: f32, detection_range: f32) {
        if detected {
            if distance < SHADOW_HIGH_ALERT_DISTANCE {
                self.alert_level = SHADOW_MAX_ALERT;
            } else if distance < detection_range {
                self.alert_level = 1;
            }
            self.alert_timer.reset();
        } else if self.alert_timer.ms() > SHADOW_ALERT_DECAY_MS {
            self.alert_level = self.alert_level.saturating_sub(1);
            self.alert_timer.reset();
        }
    }

    pub(super) fn texture(&self) -> TextureId {
        if self.alert_level == 0 {
            TextureId::ShadowIdle
        } else {
            TextureId::ShadowAlert
        }
    }

    pub(super) fn set_guard_target(&mut self, body: &mut MonsterBody, position: Vec2) {
        self.guard = position;
        body.position = position;
    }

    pub fn alert_level(&self) -> u8 {
        self.alert_level
    }

    pub fn guard_position(&self) -> Vec2 {
        self.guard
    }
}
