//! Flashlight exposure bookkeeping.
//!
//! Exposure accrues at the full delta rate while lit and recovers at half rate
//! while unlit. The lit test is omnidirectional: any monster within range of
//! an active flashlight counts, with no cone or occlusion check.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{EXPOSURE_FLASH_HALF_PERIOD_MS, EXPOSURE_RECOVERY_RATE, FLASHLIGHT_RANGE};
use crate::sensor::PlayerSnapshot;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LightExposure {
    time: f32,
    lit: bool,
    flash: bool,
}

impl LightExposure {
    /// Recompute whether the monster is lit this tick.
    pub fn check(&mut self, position: Vec2, player: &PlayerSnapshot) {
        self.lit =
            player.flashlight_active && position.distance(player.position) <= FLASHLIGHT_RANGE;
    }

    /// Accrue or recover. Returns true when accumulated exposure has reached
    /// `death_time`.
    pub fn accrue(&mut self, delta: f32, death_time: f32) -> bool {
        if self.lit {
            self.time += delta;
            self.flash = (self.time / EXPOSURE_FLASH_HALF_PERIOD_MS).floor() as u64 % 2 == 0;
            self.time >= death_time
        } else {
            self.time = (self.time - delta * EXPOSURE_RECOVERY_RATE).max(0.0);
            self.flash = false;
            false
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }

    pub fn is_flashing(&self) -> bool {
        self.flash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_player(at: Vec2) -> PlayerSnapshot {
        PlayerSnapshot::new(at, true)
    }

    #[test]
    fn test_range_boundary_is_inclusive() {
        let mut exposure = LightExposure::default();
        exposure.check(Vec2::ZERO, &lit_player(Vec2::new(FLASHLIGHT_RANGE, 0.0)));
        assert!(exposure.is_lit());
        exposure.check(Vec2::ZERO, &lit_player(Vec2::new(FLASHLIGHT_RANGE + 0.5, 0.0)));
        assert!(!exposure.is_lit());
    }

    #[test]
    fn test_flashlight_off_never_lights() {
        let mut exposure = LightExposure::default();
        exposure.check(Vec2::ZERO, &PlayerSnapshot::new(Vec2::ZERO, false));
        assert!(!exposure.is_lit());
    }

    #[test]
    fn test_recovery_is_half_rate() {
        let mut exposure = LightExposure::default();
        exposure.check(Vec2::ZERO, &lit_player(Vec2::ZERO));
        exposure.accrue(400.0, 10_000.0);
        exposure.check(Vec2::ZERO, &PlayerSnapshot::new(Vec2::ZERO, false));
        exposure.accrue(400.0, 10_000.0);
        assert!((exposure.time() - 200.0).abs() < 1e-3);
        exposure.accrue(10_000.0, 10_000.0);
        assert_eq!(exposure.time(), 0.0);
    }

    #[test]
    fn test_flash_alternates_every_half_period() {
        let mut exposure = LightExposure::default();
        exposure.check(Vec2::ZERO, &lit_player(Vec2::ZERO));
        exposure.accrue(50.0, 10_000.0);
        assert!(exposure.is_flashing());
        exposure.accrue(100.0, 10_000.0);
        assert!(!exposure.is_flashing());
        exposure.accrue(100.0, 10_000.0);
        assert!(exposure.is_flashing());
    }

    #[test]
    fn test_threshold_reports_lethal() {
        let mut exposure = LightExposure::default();
        exposure.check(Vec2::ZERO, &lit_player(Vec2::ZERO));
        assert!(!exposure.accrue(999.0, 1000.0));
        assert!(exposure.accrue(1.0, 1000.0));
    }
}
