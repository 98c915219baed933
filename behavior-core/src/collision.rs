//! Contact between a monster and the player.
//!
//! The physics pass decides *that* they touched; this decides what happens.
//! The monster reacts (state change, energy burst) and the hit lands on the
//! player through [`PlayerActuator`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::monster::{Monster, MonsterId};
use crate::sensor::PlayerActuator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactOutcome {
    pub monster: MonsterId,
    /// Damage that reached the player (0 if the monster was dying or the
    /// player was invulnerable)
    pub damage: u32,
    /// This contact took the player's health to zero
    pub player_killed: bool,
}

impl ContactOutcome {
    pub fn ignored(monster: MonsterId) -> Self {
        Self {
            monster,
            damage: 0,
            player_killed: false,
        }
    }
}

pub fn resolve_contact<P: PlayerActuator>(monster: &mut Monster, player: &mut P) -> ContactOutcome {
    let Some(hit) = monster.collide_with_player() else {
        return ContactOutcome::ignored(monster.id());
    };
    let absorbed = player.is_invulnerable();
    let player_killed = player.take_damage(hit.amount);
    let damage = if absorbed { 0 } else { hit.amount };
    debug!(
        id = %hit.source,
        kind = ?monster.kind(),
        damage,
        absorbed,
        "monster touched player"
    );
    if player_killed {
        warn!(id = %hit.source, kind = ?monster.kind(), "player died");
    }
    ContactOutcome {
        monster: hit.source,
        damage,
        player_killed,
    }
}
