//! What a monster asks the outside world to do.
//!
//! Movement goes to the physics sink as a velocity, presentation goes to the
//! renderer as a [`RenderIntent`], and everything else is a [`MonsterEvent`]
//! in the tick report.

use std::fmt;

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use super::{MonsterId, MonsterState};

/// Texture to display. `Display` yields the asset key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    GhostFloat(u8),
    ShadowIdle,
    ShadowAlert,
    WraithMove(u8),
    WraithAttack,
    PoltergeistEnergy(u8),
    PoltergeistThrow,
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureId::GhostFloat(frame) => write!(f, "ghost_float_{frame}"),
            TextureId::ShadowIdle => f.write_str("shadow_idle"),
            TextureId::ShadowAlert => f.write_str("shadow_alert"),
            TextureId::WraithMove(frame) => write!(f, "wraith_move_{frame}"),
            TextureId::WraithAttack => f.write_str("wraith_attack"),
            TextureId::PoltergeistEnergy(frame) => write!(f, "poltergeist_energy_{frame}"),
            TextureId::PoltergeistThrow => f.write_str("poltergeist_throw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    /// Exposure flash
    White,
}

/// A decorative object carried by the monster (poltergeist props)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropIntent {
    pub position: Vec2,
    pub alpha: f32,
    pub in_flight: bool,
}

/// Everything the renderer needs for one monster this frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderIntent {
    pub texture: TextureId,
    pub position: Vec2,
    /// Presentation-only offset added to `position` (ghost float)
    pub offset: Vec2,
    pub tint: Option<Tint>,
    pub alpha: f32,
    pub scale: f32,
    pub props: Vec<PropIntent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Light,
    Damage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MonsterEvent {
    StateChanged {
        from: MonsterState,
        to: MonsterState,
    },
    Died {
        cause: DeathCause,
    },
    PropThrown {
        slot: usize,
        from: Vec2,
        target: Vec2,
    },
    /// Death fade finished; remove the monster from the live set
    Despawn,
}

/// Result of one `Monster::update`
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub id: MonsterId,
    pub velocity: Vec2,
    pub events: Vec<MonsterEvent>,
}

/// Damage a monster wants to deal to the player on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHit {
    pub source: MonsterId,
    pub amount: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_keys() {
        assert_eq!(TextureId::GhostFloat(2).to_string(), "ghost_float_2");
        assert_eq!(TextureId::ShadowAlert.to_string(), "shadow_alert");
        assert_eq!(TextureId::WraithMove(0).to_string(), "wraith_move_0");
        assert_eq!(TextureId::WraithAttack.to_string(), "wraith_attack");
        assert_eq!(
            TextureId::PoltergeistEnergy(3).to_string(),
            "poltergeist_energy_3"
        );
        assert_eq!(TextureId::PoltergeistThrow.to_string(), "poltergeist_throw");
    }
}
