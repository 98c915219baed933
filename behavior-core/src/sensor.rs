//! What the monsters are allowed to know about (and do to) the player.
//!
//! Monster updates only ever see a [`PlayerSnapshot`]. Damage flows back
//! through [`PlayerActuator`] from the collision hook, never from inside an
//! update.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Read-only view of the player for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub flashlight_active: bool,
}

impl PlayerSnapshot {
    pub fn new(position: Vec2, flashlight_active: bool) -> Self {
        Self {
            position,
            flashlight_active,
        }
    }
}

pub trait PlayerSensor {
    fn position(&self) -> Vec2;

    fn is_flashlight_active(&self) -> bool;

    fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot::new(self.position(), self.is_flashlight_active())
    }
}

pub trait PlayerActuator: PlayerSensor {
    /// Apply damage. Returns true iff this call brought health to zero.
    /// Hits landing while `is_invulnerable` must not change health.
    fn take_damage(&mut self, amount: u32) -> bool;

    /// True while hits are absorbed. Contact resolution reports absorbed
    /// hits as zero damage.
    fn is_invulnerable(&self) -> bool;
}

impl PlayerSensor for PlayerSnapshot {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn is_flashlight_active(&self) -> bool {
        self.flashlight_active
    }

    fn snapshot(&self) -> PlayerSnapshot {
        *self
    }
}
