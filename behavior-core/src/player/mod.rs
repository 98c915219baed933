//! Reference player: movement, flashlight battery, health with a short
//! invulnerability window after each non-lethal hit.
//!
//! Input polling is external. The driver hands a [`PlayerInput`] to
//! [`Player::update`] once per tick, before any monster runs.

use bevy::math::Vec2;
use bevy::prelude::Component;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::{Cooldown, Elapsed, FrameClock};
use crate::constants::{
    PLAYER_BATTERY_DRAIN, PLAYER_INVULNERABLE_MS, PLAYER_MAX_BATTERY, PLAYER_MAX_HEALTH,
    PLAYER_MOVE_SPEED, PLAYER_RECHARGE_AMOUNT, PLAYER_WALK_FRAMES, PLAYER_WALK_FRAME_MS,
};
use crate::sensor::{PlayerActuator, PlayerSensor};

/// One tick of player intent (input abstraction layer)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerInput {
    /// Raw stick/WASD direction; normalised before use
    pub direction: Vec2,
    /// Edge-triggered flashlight toggle
    pub toggle_flashlight: bool,
}

impl PlayerInput {
    pub fn moving(direction: Vec2) -> Self {
        Self {
            direction,
            toggle_flashlight: false,
        }
    }

    pub fn toggle() -> Self {
        Self {
            direction: Vec2::ZERO,
            toggle_flashlight: true,
        }
    }
}

#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    position: Vec2,
    velocity: Vec2,
    health: u32,
    max_health: u32,
    battery: f32,
    max_battery: f32,
    flashlight_on: bool,
    invulnerable: Cooldown,
    flicker: Elapsed,
    walk: FrameClock,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
            battery: PLAYER_MAX_BATTERY,
            max_battery: PLAYER_MAX_BATTERY,
            flashlight_on: false,
            invulnerable: Cooldown::default(),
            flicker: Elapsed::default(),
            walk: FrameClock::new(PLAYER_WALK_FRAMES),
        }
    }

    /// Apply input, drain the battery and run down the invulnerability
    /// window. Sets velocity only; the caller integrates.
    pub fn update(&mut self, delta: f32, input: &PlayerInput) {
        let mut dir = input.direction;
        if dir.length_squared() > 0.01 {
            dir = dir.normalize();
        } else {
            dir = Vec2::ZERO;
        }
        self.velocity = dir * PLAYER_MOVE_SPEED;

        if self.velocity != Vec2::ZERO {
            self.walk.advance(delta, PLAYER_WALK_FRAME_MS);
        } else {
            self.walk = FrameClock::new(PLAYER_WALK_FRAMES);
        }

        if input.toggle_flashlight && self.battery > 0.0 {
            self.flashlight_on = !self.flashlight_on;
            debug!(on = self.flashlight_on, battery = self.battery, "flashlight toggled");
        }

        if self.flashlight_on && self.battery > 0.0 {
            self.battery = (self.battery - PLAYER_BATTERY_DRAIN * delta / 1000.0).max(0.0);
            if self.battery <= 0.0 {
                self.flashlight_on = false;
                info!("flashlight battery depleted");
            }
        }

        self.invulnerable.tick(delta);
        if self.invulnerable.is_ready() {
            self.flicker.reset();
        } else {
            self.flicker.advance(delta);
        }
    }

    /// Euler step, `delta` in milliseconds
    pub fn integrate(&mut self, delta: f32) {
        self.position += self.velocity * (delta / 1000.0);
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn recharge_battery(&mut self, amount: f32) {
        self.battery = (self.battery + amount.max(0.0)).min(self.max_battery);
    }

    pub fn recharge_battery_default(&mut self) {
        self.recharge_battery(PLAYER_RECHARGE_AMOUNT);
    }

    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn battery(&self) -> f32 {
        self.battery
    }

    pub fn max_battery(&self) -> f32 {
        self.max_battery
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Sprite alpha: flickers while invulnerable
    pub fn render_alpha(&self) -> f32 {
        if self.is_invulnerable() {
            (self.flicker.ms() * 0.01).sin() * 0.3 + 0.7
        } else {
            1.0
        }
    }

    pub fn texture_key(&self) -> String {
        if self.flashlight_on {
            "gas_huffer_flashlight".to_string()
        } else if self.velocity != Vec2::ZERO {
            format!("gas_huffer_walk_{}", self.walk.frame())
        } else {
            "gas_huffer_idle".to_string()
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl PlayerSensor for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_flashlight_active(&self) -> bool {
        self.flashlight_on
    }
}

impl PlayerActuator for Player {
    fn take_damage(&mut self, amount: u32) -> bool {
        if self.is_invulnerable() {
            return false;
        }
        let was_alive = self.health > 0;
        self.health = self.health.saturating_sub(amount);
        if self.health > 0 {
            self.invulnerable.start(PLAYER_INVULNERABLE_MS);
            self.flicker.reset();
        }
        was_alive && self.health == 0
    }

    fn is_invulnerable(&self) -> bool {
        !self.invulnerable.is_ready()
    }
}
