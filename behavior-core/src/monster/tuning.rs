//! Per-variant perception and vulnerability tuning.
//!
//! A monster copies its tuning at construction and never changes it
//! afterwards. The defaults are the shipped bestiary.

use serde::{Deserialize, Serialize};

use super::MonsterKind;
use crate::constants::DEFAULT_ATTACK_RANGE;
use crate::error::{HauntError, HauntResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonsterTuning {
    /// Base movement speed in units per second
    pub speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    /// Continuous flashlight exposure (ms) that kills the monster
    pub flashlight_death_time: f32,
    pub max_health: u32,
}

impl MonsterTuning {
    pub fn for_kind(kind: MonsterKind) -> Self {
        match kind {
            // Slow and predictable, never chases
            MonsterKind::Ghost => Self {
                speed: 60.0,
                detection_range: 80.0,
                attack_range: DEFAULT_ATTACK_RANGE,
                flashlight_death_time: 2000.0,
                max_health: 1,
            },
            // Stationary guard, weakest to light
            MonsterKind::Shadow => Self {
                speed: 0.0,
                detection_range: 120.0,
                attack_range: DEFAULT_ATTACK_RANGE,
                flashlight_death_time: 1000.0,
                max_health: 1,
            },
            MonsterKind::Wraith => Self {
                speed: 120.0,
                detection_range: 150.0,
                attack_range: DEFAULT_ATTACK_RANGE,
                flashlight_death_time: 3000.0,
                max_health: 1,
            },
            // Sees furthest, most resistant, takes two hits
            MonsterKind::Poltergeist => Self {
                speed: 90.0,
                detection_range: 200.0,
                attack_range: DEFAULT_ATTACK_RANGE,
                flashlight_death_time: 4000.0,
                max_health: 2,
            },
        }
    }

    pub fn validate(&self, kind: MonsterKind) -> HauntResult<()> {
        let fields = [
            ("speed", self.speed),
            ("detection_range", self.detection_range),
            ("attack_range", self.attack_range),
            ("flashlight_death_time", self.flashlight_death_time),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(HauntError::InvalidTuning { kind, field, value });
            }
        }
        if self.max_health == 0 {
            return Err(HauntError::InvalidTuning {
                kind,
                field: "max_health",
                value: 0.0,
            });
        }
        Ok(())
    }
}
