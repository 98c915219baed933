//! Wraith: aggressive pursuer with a capped chase and a search pattern
//! around the last sighting.

use std::f32::consts::TAU;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use super::body::MonsterBody;
use super::intent::TextureId;
use super::patrol::PatrolRoute;
use super::MonsterState;
use crate::clock::Elapsed;
use crate::constants::{
    ARRIVAL_RADIUS, WRAITH_ATTACK_FRAME_MS, WRAITH_ATTACK_MS, WRAITH_CHASE_FRAME_MS,
    WRAITH_MAX_PURSUIT_MS, WRAITH_PATROL_FRAME_MS, WRAITH_PATROL_HALF_EXTENT,
    WRAITH_RETRACE_SPEED_FACTOR, WRAITH_SEARCH_ANGLE_MS, WRAITH_SEARCH_BASE_RADIUS,
    WRAITH_SEARCH_GROWTH, WRAITH_SEARCH_SPEED_FACTOR,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wraith {
    pursuit: Elapsed,
    last_known: Vec2,
    search: Elapsed,
    /// Reached the last sighting; circle it instead of homing back in
    searching: bool,
}

impl Wraith {
    pub(super) fn setup(body: &mut MonsterBody) -> Self {
        let origin = body.position;
        let d = WRAITH_PATROL_HALF_EXTENT;
        body.patrol = PatrolRoute::new(vec![
            origin + Vec2::new(-d, 0.0),
            origin + Vec2::new(d, 0.0),
            origin + Vec2::new(0.0, -d),
            origin + Vec2::new(0.0, d),
        ]);
        body.state = MonsterState::Patrol;
        Self {
            last_known: origin,
            ..Self::default()
        }
    }

    pub(super) fn update_behavior(&mut self, body: &mut MonsterBody, delta: f32) {
        if matches!(body.state, MonsterState::Chase | MonsterState::Attack) {
            self.pursuit.advance(delta);
        }

        let can_see = body.can_see_player();
        match body.state {
            MonsterState::Patrol => {
                if can_see {
                    body.set_state(MonsterState::Chase);
                    self.begin_pursuit(body.player.position);
                } else {
                    body.move_along_patrol();
                }
            }
            MonsterState::Chase => self.chase(body, can_see, delta),
            MonsterState::Attack => {
                if body.state_timer.ms() > WRAITH_ATTACK_MS {
                    body.set_state(MonsterState::Chase);
                }
                body.velocity = Vec2::ZERO;
            }
            _ => {}
        }
    }

    fn begin_pursuit(&mut self, sighting: Vec2) {
        self.pursuit.reset();
        self.search.reset();
        self.searching = false;
        self.last_known = sighting;
    }

    fn chase(&mut self, body: &mut MonsterBody, can_see: bool, delta: f32) {
        if can_see {
            self.last_known = body.player.position;
            self.search.reset();
            self.searching = false;
            if body.distance_to_player() <= body.tuning.attack_range {
                body.set_state(MonsterState::Attack);
            } else {
                let target = body.player.position;
                body.move_towards(target, body.tuning.speed);
            }
        } else if !self.searching && body.position.distance(self.last_known) > ARRIVAL_RADIUS {
            body.move_towards(self.last_known, body.tuning.speed * WRAITH_RETRACE_SPEED_FACTOR);
        } else {
            self.searching = true;
            self.search.advance(delta);
            let target = self.last_known + Vec2::from_angle(self.search_angle()) * self.search_radius(body);
            body.move_towards(target, body.tuning.speed * WRAITH_SEARCH_SPEED_FACTOR);
        }

        if self.pursuit.ms() > WRAITH_MAX_PURSUIT_MS {
            body.set_state(MonsterState::Patrol);
        }
    }

    fn search_angle(&self) -> f32 {
        (self.search.ms() / WRAITH_SEARCH_ANGLE_MS) % TAU
    }

    /// Grows with time spent searching, never past the current detection range
    fn search_radius(&self, body: &MonsterBody) -> f32 {
        let grown = WRAITH_SEARCH_BASE_RADIUS + WRAITH_SEARCH_GROWTH * self.search.ms() / 1000.0;
        grown.min(body.tuning.detection_range)
    }

    pub(super) fn on_contact(&mut self, body: &mut MonsterBody) {
        if body.state == MonsterState::Attack {
            return;
        }
        if body.state == MonsterState::Patrol {
            self.begin_pursuit(body.player.position);
        }
        body.set_state(MonsterState::Attack);
    }

    pub(super) fn update_animations(&mut self, body: &mut MonsterBody, delta: f32) {
        let period = match body.state {
            MonsterState::Chase => WRAITH_CHASE_FRAME_MS,
            MonsterState::Attack => WRAITH_ATTACK_FRAME_MS,
            _ => WRAITH_PATROL_FRAME_MS,
        };
        body.frames.advance(delta, period);
    }

    pub(super) fn texture(&self, body: &MonsterBody) -> TextureId {
        if body.state == MonsterState::Attack {
            TextureId::WraithAttack
        } else {
            TextureId::WraithMove(body.frames.frame())
        }
    }

    pub fn pursuit_ms(&self) -> f32 {
        self.pursuit.ms()
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn last_known_position(&self) -> Vec2 {
        self.last_known
    }
}
