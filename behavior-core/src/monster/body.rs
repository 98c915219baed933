//! State shared by every monster variant: health, the state machine skeleton,
//! light exposure, patrol route, animation cadence and the death fade.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::exposure::LightExposure;
use super::intent::{DeathCause, MonsterEvent};
use super::patrol::PatrolRoute;
use super::tuning::MonsterTuning;
use super::{MonsterId, MonsterKind, MonsterState};
use crate::clock::{Elapsed, FrameClock};
use crate::constants::{ARRIVAL_RADIUS, BASE_SPRITE_SCALE, DEATH_FADE_MS, DEATH_SCALE_GROWTH};
use crate::rng::MonsterRng;
use crate::sensor::PlayerSnapshot;

/// Fixed-length fade/scale-out that runs once death has begun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeathFade {
    elapsed: Elapsed,
}

impl DeathFade {
    pub fn advance(&mut self, delta: f32) {
        self.elapsed.advance(delta);
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed.ms() >= DEATH_FADE_MS
    }

    /// Eased progress in [0, 1] (cubic ease-out).
    pub fn progress(&self) -> f32 {
        let t = (self.elapsed.ms() / DEATH_FADE_MS).clamp(0.0, 1.0);
        1.0 - (1.0 - t).powi(3)
    }

    pub fn alpha(&self) -> f32 {
        1.0 - self.progress()
    }

    pub fn scale(&self) -> f32 {
        BASE_SPRITE_SCALE * (1.0 + (DEATH_SCALE_GROWTH - 1.0) * self.progress())
    }
}

#[derive(Debug, Clone)]
pub struct MonsterBody {
    pub(super) id: MonsterId,
    pub(super) kind: MonsterKind,
    pub(super) position: Vec2,
    pub(super) velocity: Vec2,
    pub(super) health: u32,
    pub(super) max_health: u32,
    pub(super) dying: bool,
    pub(super) state: MonsterState,
    pub(super) state_timer: Elapsed,
    pub(super) last_state_change: f64,
    pub(super) now: f64,
    pub(super) tuning: MonsterTuning,
    pub(super) exposure: LightExposure,
    pub(super) patrol: PatrolRoute,
    pub(super) frames: FrameClock,
    pub(super) fade: Option<DeathFade>,
    pub(super) removed: bool,
    pub(super) player: PlayerSnapshot,
    pub(super) rng: MonsterRng,
    pub(super) events: Vec<MonsterEvent>,
}

impl MonsterBody {
    pub(super) fn new(
        id: MonsterId,
        kind: MonsterKind,
        position: Vec2,
        time: f64,
        tuning: MonsterTuning,
        rng: MonsterRng,
        frames: u8,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            velocity: Vec2::ZERO,
            health: tuning.max_health,
            max_health: tuning.max_health,
            dying: false,
            state: MonsterState::Idle,
            state_timer: Elapsed::default(),
            last_state_change: time,
            now: time,
            tuning,
            exposure: LightExposure::default(),
            patrol: PatrolRoute::default(),
            frames: FrameClock::new(frames),
            fade: None,
            removed: false,
            player: PlayerSnapshot::default(),
            rng,
            events: Vec::new(),
        }
    }

    // ============================================================================
    // Perception
    // ============================================================================

    pub fn distance_to_player(&self) -> f32 {
        self.position.distance(self.player.position)
    }

    /// Heading to the player in radians, measured from +x
    pub fn angle_to_player(&self) -> f32 {
        let d = self.player.position - self.position;
        d.y.atan2(d.x)
    }

    /// Distance check against the current detection range
    pub fn can_see_player(&self) -> bool {
        self.distance_to_player() <= self.tuning.detection_range
    }

    // ============================================================================
    // Movement
    // ============================================================================

    /// Point the velocity at `target` with magnitude `speed`.
    /// Standing on the target leaves the monster still.
    pub fn move_towards(&mut self, target: Vec2, speed: f32) {
        self.velocity = (target - self.position).normalize_or_zero() * speed;
    }

    pub fn move_along_patrol(&mut self) {
        let Some(target) = self.patrol.target() else {
            return;
        };
        if self.position.distance(target) < ARRIVAL_RADIUS {
            self.patrol.advance();
        } else {
            self.move_towards(target, self.tuning.speed);
        }
    }

    // ============================================================================
    // State machine
    // ============================================================================

    /// Transition to `next`. Same-state requests keep the running timer.
    /// Returns false for undeclared states, `Death`, and anything after death.
    pub fn set_state(&mut self, next: MonsterState) -> bool {
        if self.dying || next == MonsterState::Death || !self.kind.declares(next) {
            trace!(id = %self.id, kind = ?self.kind, ?next, "rejected state request");
            return false;
        }
        if self.state == next {
            return false;
        }
        let from = self.state;
        self.state = next;
        self.state_timer.reset();
        self.last_state_change = self.now;
        debug!(id = %self.id, kind = ?self.kind, ?from, to = ?next, "state transition");
        self.events.push(MonsterEvent::StateChanged { from, to: next });
        true
    }

    // ============================================================================
    // Health and death
    // ============================================================================

    pub fn take_damage(&mut self, amount: u32, cause: DeathCause) -> bool {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 && !self.dying {
            self.start_death(cause);
            return true;
        }
        false
    }

    fn start_death(&mut self, cause: DeathCause) {
        let from = self.state;
        self.dying = true;
        self.state = MonsterState::Death;
        self.velocity = Vec2::ZERO;
        self.fade = Some(DeathFade::default());
        info!(id = %self.id, kind = ?self.kind, ?cause, "monster died");
        if from != MonsterState::Death {
            self.events.push(MonsterEvent::StateChanged {
                from,
                to: MonsterState::Death,
            });
        }
        self.events.push(MonsterEvent::Died { cause });
    }

    /// Run the fade. Emits `Despawn` exactly once when it completes.
    pub(super) fn resolve_death(&mut self, delta: f32) {
        self.velocity = Vec2::ZERO;
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        fade.advance(delta);
        if fade.is_complete() && !self.removed {
            self.removed = true;
            info!(id = %self.id, kind = ?self.kind, "monster despawned");
            self.events.push(MonsterEvent::Despawn);
        }
    }

    /// Sprite alpha and scale for the current frame
    pub fn alpha_and_scale(&self) -> (f32, f32) {
        match &self.fade {
            Some(fade) => (fade.alpha(), fade.scale()),
            None => (1.0, BASE_SPRITE_SCALE),
        }
    }
}
