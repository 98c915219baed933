//! Poltergeist: erratic mover with an energy level, orbiting props and
//! thrown objects.
//!
//! Energy rises with aggression and is always kept within
//! `[0, POLTERGEIST_MAX_ENERGY]`. It drives both the animation cadence and the
//! opacity of the orbiting props.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::body::MonsterBody;
use super::intent::{MonsterEvent, PropIntent, TextureId};
use super::MonsterState;
use crate::clock::{Cooldown, Elapsed};
use crate::constants::{
    POLTERGEIST_ATTACK_MS, POLTERGEIST_ATTACK_REACH_FACTOR, POLTERGEIST_BASE_FRAME_MS,
    POLTERGEIST_CHASE_CHAOS, POLTERGEIST_DIRECTION_MIN_MS, POLTERGEIST_DIRECTION_SPREAD_MS,
    POLTERGEIST_ENERGY_DECAY, POLTERGEIST_ENERGY_GAIN, POLTERGEIST_FRAME_MS_PER_ENERGY,
    POLTERGEIST_JITTER_SCALE, POLTERGEIST_LOST_ENERGY, POLTERGEIST_MAX_ENERGY,
    POLTERGEIST_ORBIT_PERIOD_MS, POLTERGEIST_ORBIT_RADIUS, POLTERGEIST_ORBIT_WOBBLE,
    POLTERGEIST_PATROL_ENERGY_FLOOR, POLTERGEIST_PROP_COUNT, POLTERGEIST_SPIN_ANGLE_MS,
    POLTERGEIST_SPIN_SPEED, POLTERGEIST_THROW_COOLDOWN_MIN_MS,
    POLTERGEIST_THROW_COOLDOWN_SPREAD_MS, POLTERGEIST_THROW_FLIGHT_MS, POLTERGEIST_THROW_RANGE,
    POLTERGEIST_THROW_SCATTER, POLTERGEIST_WOBBLE_PERIOD_MS,
};

/// A prop travelling toward the player. It rejoins the orbit on landing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropFlight {
    pub from: Vec2,
    pub target: Vec2,
    elapsed: Elapsed,
}

impl PropFlight {
    fn position(&self) -> Vec2 {
        let t = (self.elapsed.ms() / POLTERGEIST_THROW_FLIGHT_MS).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        self.from.lerp(self.target, eased)
    }

    fn has_landed(&self) -> bool {
        self.elapsed.ms() >= POLTERGEIST_THROW_FLIGHT_MS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poltergeist {
    direction: Vec2,
    chaos_timer: Elapsed,
    next_direction_change: f32,
    throw_cooldown: Cooldown,
    energy: f32,
    orbit_clock: Elapsed,
    props: [Option<PropFlight>; POLTERGEIST_PROP_COUNT],
}

impl Poltergeist {
    pub(super) fn setup(body: &mut MonsterBody) -> Self {
        body.state = MonsterState::Patrol;
        Self {
            direction: Vec2::from_angle(body.rng.angle()),
            chaos_timer: Elapsed::default(),
            next_direction_change: 0.0,
            throw_cooldown: Cooldown::default(),
            energy: POLTERGEIST_MAX_ENERGY,
            orbit_clock: Elapsed::default(),
            props: [None; POLTERGEIST_PROP_COUNT],
        }
    }

    pub(super) fn update_behavior(&mut self, body: &mut MonsterBody, delta: f32) {
        self.chaos_timer.advance(delta);
        self.orbit_clock.advance(delta);
        self.throw_cooldown.tick(delta);

        let distance = body.distance_to_player();
        let can_see = body.can_see_player();

        match body.state {
            MonsterState::Patrol => {
                if can_see {
                    body.set_state(MonsterState::Chase);
                    self.energy = POLTERGEIST_MAX_ENERGY;
                }
                self.drift(body);
            }
            MonsterState::Chase => self.chase(body, can_see, distance),
            MonsterState::Attack => {
                self.energy = POLTERGEIST_MAX_ENERGY;
                if body.state_timer.ms() > POLTERGEIST_ATTACK_MS {
                    if distance <= body.tuning.detection_range {
                        body.set_state(MonsterState::Chase);
                    } else {
                        body.set_state(MonsterState::Patrol);
                    }
                }
                let angle = (body.state_timer.ms() / POLTERGEIST_SPIN_ANGLE_MS) % TAU;
                body.velocity = Vec2::from_angle(angle) * POLTERGEIST_SPIN_SPEED;
            }
            _ => {}
        }

        self.update_direction(body);
        self.update_props(delta);

        if can_see && self.throw_cooldown.is_ready() && distance < POLTERGEIST_THROW_RANGE {
            self.throw_prop(body);
            let cooldown = body.rng.spread(
                POLTERGEIST_THROW_COOLDOWN_MIN_MS,
                POLTERGEIST_THROW_COOLDOWN_SPREAD_MS,
            );
            self.throw_cooldown.start(cooldown);
        }
    }

    fn drift(&mut self, body: &mut MonsterBody) {
        let jitter = body.rng.roll() * 0.5 - 0.25;
        body.velocity =
            self.direction * body.tuning.speed + Vec2::splat(jitter * POLTERGEIST_JITTER_SCALE);
    }

    fn chase(&mut self, body: &mut MonsterBody, can_see: bool, distance: f32) {
        if !can_see && distance > body.tuning.detection_range {
            body.set_state(MonsterState::Patrol);
            self.energy = POLTERGEIST_LOST_ENERGY;
            return;
        }
        if distance <= body.tuning.attack_range * POLTERGEIST_ATTACK_REACH_FACTOR {
            body.set_state(MonsterState::Attack);
        } else {
            let chaos = body.rng.roll() * PI - FRAC_PI_2;
            let heading = body.angle_to_player() + chaos * POLTERGEIST_CHASE_CHAOS;
            body.velocity = Vec2::from_angle(heading) * body.tuning.speed;
        }
    }

    fn update_direction(&mut self, body: &mut MonsterBody) {
        if self.chaos_timer.ms() >= self.next_direction_change {
            self.direction = Vec2::from_angle(body.rng.angle());
            self.next_direction_change = body
                .rng
                .spread(POLTERGEIST_DIRECTION_MIN_MS, POLTERGEIST_DIRECTION_SPREAD_MS);
            self.chaos_timer.reset();
        }
    }

    fn update_props(&mut self, delta: f32) {
        for slot in self.props.iter_mut() {
            let landed = match slot {
                Some(flight) => {
                    flight.elapsed.advance(delta);
                    flight.has_landed()
                }
                None => false,
            };
            if landed {
                *slot = None;
            }
        }
    }

    /// Launch the first orbiting prop. Does nothing if every prop is airborne.
    fn throw_prop(&mut self, body: &mut MonsterBody) {
        let Some(slot) = self.props.iter().position(Option::is_none) else {
            return;
        };
        let from = self.orbit_position(body.position, slot);
        let scatter = Vec2::new(body.rng.roll() - 0.5, body.rng.roll() - 0.5);
        let target = body.player.position + scatter * POLTERGEIST_THROW_SCATTER;
        self.props[slot] = Some(PropFlight {
            from,
            target,
            elapsed: Elapsed::default(),
        });
        debug!(id = %body.id, slot, ?target, "prop thrown");
        body.events
            .push(MonsterEvent::PropThrown { slot, from, target });
    }

    fn orbit_position(&self, center: Vec2, slot: usize) -> Vec2 {
        let clock = self.orbit_clock.ms();
        let i = slot as f32;
        let angle =
            (clock / POLTERGEIST_ORBIT_PERIOD_MS + i * TAU / POLTERGEIST_PROP_COUNT as f32) % TAU;
        let radius = POLTERGEIST_ORBIT_RADIUS
            + (clock / POLTERGEIST_WOBBLE_PERIOD_MS + i).sin() * POLTERGEIST_ORBIT_WOBBLE;
        center + Vec2::from_angle(angle) * radius
    }

    pub(super) fn on_contact(&mut self, body: &mut MonsterBody) {
        body.set_state(MonsterState::Attack);
        self.energy = POLTERGEIST_MAX_ENERGY;
    }

    pub(super) fn update_animations(&mut self, body: &mut MonsterBody, delta: f32) {
        let seconds = delta / 1000.0;
        self.energy = match body.state {
            MonsterState::Patrol => {
                (self.energy - POLTERGEIST_ENERGY_DECAY * seconds).max(POLTERGEIST_PATROL_ENERGY_FLOOR)
            }
            MonsterState::Chase => {
                (self.energy + POLTERGEIST_ENERGY_GAIN * seconds).min(POLTERGEIST_MAX_ENERGY)
            }
            MonsterState::Attack => POLTERGEIST_MAX_ENERGY,
            _ => self.energy,
        }
        .clamp(0.0, POLTERGEIST_MAX_ENERGY);

        let period = POLTERGEIST_BASE_FRAME_MS - self.energy * POLTERGEIST_FRAME_MS_PER_ENERGY;
        body.frames.advance(delta, period);
    }

    pub(super) fn texture(&self, body: &MonsterBody) -> TextureId {
        if body.state == MonsterState::Attack {
            TextureId::PoltergeistThrow
        } else {
            TextureId::PoltergeistEnergy(body.frames.frame())
        }
    }

    pub(super) fn prop_intents(&self, center: Vec2) -> Vec<PropIntent> {
        let alpha = self.prop_alpha();
        self.props
            .iter()
            .enumerate()
            .map(|(slot, flight)| match flight {
                Some(flight) => PropIntent {
                    position: flight.position(),
                    alpha,
                    in_flight: true,
                },
                None => PropIntent {
                    position: self.orbit_position(center, slot),
                    alpha,
                    in_flight: false,
                },
            })
            .collect()
    }

    fn prop_alpha(&self) -> f32 {
        0.3 + (self.energy / POLTERGEIST_MAX_ENERGY) * 0.5
    }

    pub fn energy_level(&self) -> f32 {
        self.energy
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn props_in_flight(&self) -> usize {
        self.props.iter().filter(|p| p.is_some()).count()
    }

    pub fn throw_cooldown_ms(&self) -> f32 {
        self.throw_cooldown.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::tuning::MonsterTuning;
    use crate::monster::{MonsterId, MonsterKind};
    use crate::rng::MonsterRng;
    use crate::sensor::PlayerSnapshot;

    fn body_facing_player() -> MonsterBody {
        let kind = MonsterKind::Poltergeist;
        let mut body = MonsterBody::new(
            MonsterId(4),
            kind,
            Vec2::ZERO,
            0.0,
            MonsterTuning::for_kind(kind),
            MonsterRng::from_seed(11),
            4,
        );
        body.player = PlayerSnapshot::new(Vec2::new(100.0, 0.0), false);
        body
    }

    fn all_airborne(polter: &mut Poltergeist) {
        for (i, slot) in polter.props.iter_mut().enumerate() {
            *slot = Some(PropFlight {
                from: Vec2::new(i as f32, 0.0),
                target: Vec2::new(100.0, i as f32),
                elapsed: Elapsed::default(),
            });
        }
    }

    fn thrown(body: &MonsterBody) -> usize {
        body.events
            .iter()
            .filter(|e| matches!(e, MonsterEvent::PropThrown { .. }))
            .count()
    }

    #[test]
    fn test_throw_uses_first_free_slot() {
        let mut body = body_facing_player();
        let mut polter = Poltergeist::setup(&mut body);
        polter.throw_prop(&mut body);
        assert_eq!(thrown(&body), 1);
        assert!(polter.props[0].is_some());
        assert_eq!(polter.props_in_flight(), 1);
    }

    #[test]
    fn test_throw_without_orbiting_prop_is_skipped() {
        let mut body = body_facing_player();
        let mut polter = Poltergeist::setup(&mut body);
        all_airborne(&mut polter);
        let before = polter.props;

        polter.throw_prop(&mut body);
        assert_eq!(thrown(&body), 0);
        assert_eq!(polter.props, before);
    }

    #[test]
    fn test_skipped_throw_still_restarts_cooldown() {
        let mut body = body_facing_player();
        let mut polter = Poltergeist::setup(&mut body);
        all_airborne(&mut polter);
        assert_eq!(polter.throw_cooldown_ms(), 0.0);

        polter.update_behavior(&mut body, 16.0);
        assert_eq!(thrown(&body), 0);
        assert_eq!(polter.props_in_flight(), POLTERGEIST_PROP_COUNT);
        assert!(polter.throw_cooldown_ms() >= POLTERGEIST_THROW_COOLDOWN_MIN_MS);
    }

    #[test]
    fn test_landed_prop_rejoins_orbit() {
        let mut body = body_facing_player();
        let mut polter = Poltergeist::setup(&mut body);
        polter.throw_prop(&mut body);
        polter.update_props(POLTERGEIST_THROW_FLIGHT_MS);
        assert_eq!(polter.props_in_flight(), 0);
    }
}
