//! Monsters: one shared body plus a closed set of behaviour variants.
//!
//! Monster = MonsterBody x Behavior
//! The body owns health, the state machine skeleton, light exposure, patrol
//! and the death fade. The variant owns its own timers and decides what the
//! body does each tick.

use std::fmt;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod body;
pub mod exposure;
pub mod ghost;
pub mod intent;
pub mod patrol;
pub mod poltergeist;
pub mod shadow;
pub mod tuning;
pub mod wraith;

use crate::constants::{CONTACT_DAMAGE, GHOST_FRAMES, POLTERGEIST_FRAMES, WRAITH_FRAMES};
use crate::rng::MonsterRng;
use crate::sensor::PlayerSnapshot;
use body::MonsterBody;
use ghost::Ghost;
use intent::{DeathCause, PlayerHit, RenderIntent, Tint, TickReport};
use poltergeist::Poltergeist;
use shadow::Shadow;
use tuning::MonsterTuning;
use wraith::Wraith;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "monster#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Ghost,       // slow patrol, never chases
    Shadow,      // stationary guard
    Wraith,      // fast pursuer
    Poltergeist, // erratic, throws things
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 4] = [
        MonsterKind::Ghost,
        MonsterKind::Shadow,
        MonsterKind::Wraith,
        MonsterKind::Poltergeist,
    ];

    /// Whether this variant's state machine uses `state`. `Death` is shared
    /// by all of them but only reachable through damage.
    pub fn declares(self, state: MonsterState) -> bool {
        use MonsterState::*;
        match self {
            MonsterKind::Ghost => matches!(state, Patrol | Idle | Death),
            MonsterKind::Shadow => matches!(state, Idle | Chase | Death),
            MonsterKind::Wraith | MonsterKind::Poltergeist => {
                matches!(state, Patrol | Chase | Attack | Death)
            }
        }
    }

    fn animation_frames(self) -> u8 {
        match self {
            MonsterKind::Ghost => GHOST_FRAMES,
            MonsterKind::Shadow => 1,
            MonsterKind::Wraith => WRAITH_FRAMES,
            MonsterKind::Poltergeist => POLTERGEIST_FRAMES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterState {
    Idle,
    Patrol,
    Chase,
    Attack,
    Death,
}

/// Variant payload, selected by tag
#[derive(Debug, Clone)]
pub enum Behavior {
    Ghost(Ghost),
    Shadow(Shadow),
    Wraith(Wraith),
    Poltergeist(Poltergeist),
}

#[derive(Debug, Clone)]
pub struct Monster {
    body: MonsterBody,
    behavior: Behavior,
}

impl Monster {
    /// Construct and run variant setup (patrol route, facing, initial state).
    pub fn spawn(
        id: MonsterId,
        kind: MonsterKind,
        position: Vec2,
        time: f64,
        tuning: MonsterTuning,
        seed: u64,
    ) -> Self {
        let mut body = MonsterBody::new(
            id,
            kind,
            position,
            time,
            tuning,
            MonsterRng::from_seed(seed),
            kind.animation_frames(),
        );
        let behavior = match kind {
            MonsterKind::Ghost => Behavior::Ghost(Ghost::setup(&mut body)),
            MonsterKind::Shadow => Behavior::Shadow(Shadow::setup(&mut body)),
            MonsterKind::Wraith => Behavior::Wraith(Wraith::setup(&mut body)),
            MonsterKind::Poltergeist => Behavior::Poltergeist(Poltergeist::setup(&mut body)),
        };
        info!(%id, ?kind, x = position.x, y = position.y, "monster spawned");
        Self { body, behavior }
    }

    /// Advance one tick. While dying only the death fade runs.
    pub fn update(&mut self, time: f64, delta: f32, player: &PlayerSnapshot) -> TickReport {
        let body = &mut self.body;
        body.now = time;
        body.player = *player;

        if body.dying {
            body.resolve_death(delta);
        } else {
            body.exposure.check(body.position, player);
            body.state_timer.advance(delta);

            match &mut self.behavior {
                Behavior::Ghost(v) => v.update_behavior(body, delta),
                Behavior::Shadow(v) => v.update_behavior(body, delta),
                Behavior::Wraith(v) => v.update_behavior(body, delta),
                Behavior::Poltergeist(v) => v.update_behavior(body, delta),
            }

            match &mut self.behavior {
                Behavior::Ghost(v) => v.update_animations(body, delta),
                Behavior::Shadow(_) => {}
                Behavior::Wraith(v) => v.update_animations(body, delta),
                Behavior::Poltergeist(v) => v.update_animations(body, delta),
            }

            if body.exposure.accrue(delta, body.tuning.flashlight_death_time) {
                let lethal = body.health;
                body.take_damage(lethal, DeathCause::Light);
            }
        }

        TickReport {
            id: body.id,
            velocity: body.velocity,
            events: std::mem::take(&mut body.events),
        }
    }

    /// Euler step of the owned position, `delta` in milliseconds
    pub fn integrate(&mut self, delta: f32) {
        if self.body.removed {
            return;
        }
        self.body.position += self.body.velocity * (delta / 1000.0);
    }

    /// Returns true iff this call killed the monster.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.body.take_damage(amount, DeathCause::Damage)
    }

    /// Contact with the player. Returns the hit to apply, or `None` once the
    /// monster is dying.
    pub fn collide_with_player(&mut self) -> Option<PlayerHit> {
        if self.body.dying || self.body.state == MonsterState::Death {
            return None;
        }
        let hit = PlayerHit {
            source: self.body.id,
            amount: CONTACT_DAMAGE,
        };
        match &mut self.behavior {
            Behavior::Wraith(v) => v.on_contact(&mut self.body),
            Behavior::Poltergeist(v) => v.on_contact(&mut self.body),
            Behavior::Ghost(_) | Behavior::Shadow(_) => {}
        }
        Some(hit)
    }

    /// Request a transition. Same-state requests keep the timer running;
    /// undeclared states, `Death` and requests after death are refused.
    pub fn set_state(&mut self, state: MonsterState) -> bool {
        self.body.set_state(state)
    }

    /// Moves a shadow's guard post (and the shadow). False for other variants.
    pub fn set_guard_target(&mut self, position: Vec2) -> bool {
        match &mut self.behavior {
            Behavior::Shadow(shadow) => {
                shadow.set_guard_target(&mut self.body, position);
                true
            }
            _ => false,
        }
    }

    pub fn render_intent(&self) -> RenderIntent {
        let body = &self.body;
        let (texture, offset, props) = match &self.behavior {
            Behavior::Ghost(v) => (v.texture(body), Vec2::new(0.0, v.float_offset()), Vec::new()),
            Behavior::Shadow(v) => (v.texture(), Vec2::ZERO, Vec::new()),
            Behavior::Wraith(v) => (v.texture(body), Vec2::ZERO, Vec::new()),
            Behavior::Poltergeist(v) => {
                (v.texture(body), Vec2::ZERO, v.prop_intents(body.position))
            }
        };
        let (alpha, scale) = body.alpha_and_scale();
        RenderIntent {
            texture,
            position: body.position,
            offset,
            tint: body.exposure.is_flashing().then_some(Tint::White),
            alpha,
            scale,
            props,
        }
    }

    // ============================================================================
    // Queries
    // ============================================================================

    pub fn id(&self) -> MonsterId {
        self.body.id
    }

    pub fn kind(&self) -> MonsterKind {
        self.body.kind
    }

    pub fn state(&self) -> MonsterState {
        self.body.state
    }

    pub fn health(&self) -> u32 {
        self.body.health
    }

    pub fn max_health(&self) -> u32 {
        self.body.max_health
    }

    pub fn is_dying(&self) -> bool {
        self.body.dying
    }

    pub fn is_dead(&self) -> bool {
        self.body.dying || self.body.health == 0
    }

    /// Death fade finished; the driver should drop this monster
    pub fn ready_for_removal(&self) -> bool {
        self.body.removed
    }

    pub fn state_timer(&self) -> f32 {
        self.body.state_timer.ms()
    }

    pub fn last_state_change(&self) -> f64 {
        self.body.last_state_change
    }

    pub fn exposure_time(&self) -> f32 {
        self.body.exposure.time()
    }

    pub fn is_exposed_to_flashlight(&self) -> bool {
        self.body.exposure.is_lit()
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn tuning(&self) -> &MonsterTuning {
        &self.body.tuning
    }

    pub fn current_frame(&self) -> u8 {
        self.body.frames.frame()
    }

    pub fn patrol_points(&self) -> &[Vec2] {
        self.body.patrol.points()
    }

    pub fn patrol_index(&self) -> usize {
        self.body.patrol.index()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn alert_level(&self) -> Option<u8> {
        match &self.behavior {
            Behavior::Shadow(v) => Some(v.alert_level()),
            _ => None,
        }
    }

    pub fn energy_level(&self) -> Option<f32> {
        match &self.behavior {
            Behavior::Poltergeist(v) => Some(v.energy_level()),
            _ => None,
        }
    }

    /// Test and tooling hook: place the monster without running behaviour.
    pub fn teleport(&mut self, position: Vec2) {
        self.body.position = position;
    }
}
