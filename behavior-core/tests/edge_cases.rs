//! Edge case & boundary tests
//!
//! Behavior at the seams of the core:
//! - Zero and oversized deltas
//! - Damage and state requests after death
//! - Degenerate tuning (zero speed, zero ranges)
//! - Unknown ids and wrong-variant operations
//! - Player battery and health limits

use bevy::math::Vec2;
use haunt_core::monster::intent::MonsterEvent;
use haunt_core::monster::tuning::MonsterTuning;
use haunt_core::{
    HauntConfig, HauntWorld, Monster, MonsterId, MonsterKind, MonsterState, Player, PlayerActuator,
    PlayerInput, PlayerSensor, PlayerSnapshot,
};

// ============================================================
// Helpers
// ============================================================

fn spawn(kind: MonsterKind) -> Monster {
    Monster::spawn(MonsterId(7), kind, Vec2::ZERO, 0.0, MonsterTuning::for_kind(kind), 77)
}

fn nobody() -> PlayerSnapshot {
    PlayerSnapshot::new(Vec2::new(10_000.0, 10_000.0), false)
}

// ============================================================
// Deltas
// ============================================================

#[test]
fn zero_delta_changes_nothing_observable() {
    for kind in MonsterKind::ALL {
        let mut monster = spawn(kind);
        let before = (monster.state(), monster.position(), monster.state_timer());
        let report = monster.update(0.0, 0.0, &nobody());
        monster.integrate(0.0);
        assert_eq!(before, (monster.state(), monster.position(), monster.state_timer()));
        assert!(report.events.is_empty(), "{kind:?} emitted {:?}", report.events);
    }
}

#[test]
fn huge_delta_stays_finite() {
    for kind in MonsterKind::ALL {
        let mut monster = spawn(kind);
        let player = PlayerSnapshot::new(Vec2::new(40.0, 0.0), false);
        for _ in 0..5 {
            monster.update(0.0, 60_000.0, &player);
            monster.integrate(60_000.0);
        }
        assert!(monster.position().is_finite(), "{kind:?} at {:?}", monster.position());
        assert!(monster.velocity().is_finite());
    }
}

#[test]
fn single_long_lit_tick_is_lethal() {
    let mut shadow = spawn(MonsterKind::Shadow);
    let lit = PlayerSnapshot::new(Vec2::new(10.0, 0.0), true);
    let report = shadow.update(0.0, 5_000.0, &lit);
    assert!(shadow.is_dying());
    assert!(report.events.iter().any(|e| matches!(e, MonsterEvent::Died { .. })));
}

// ============================================================
// Death
// ============================================================

#[test]
fn damage_after_death_is_ignored() {
    let mut wraith = spawn(MonsterKind::Wraith);
    assert!(wraith.take_damage(5));
    assert_eq!(wraith.health(), 0);
    assert!(!wraith.take_damage(1));
    assert!(!wraith.take_damage(0));
    assert_eq!(wraith.state(), MonsterState::Death);
}

#[test]
fn zero_damage_never_kills() {
    let mut ghost = spawn(MonsterKind::Ghost);
    assert!(!ghost.take_damage(0));
    assert_eq!(ghost.health(), 1);
    assert!(!ghost.is_dying());
}

#[test]
fn dying_monster_refuses_state_requests() {
    let mut polter = spawn(MonsterKind::Poltergeist);
    polter.take_damage(2);
    assert!(!polter.set_state(MonsterState::Chase));
    assert!(!polter.set_state(MonsterState::Patrol));
    assert_eq!(polter.state(), MonsterState::Death);
}

#[test]
fn death_cannot_be_requested_directly() {
    let mut ghost = spawn(MonsterKind::Ghost);
    assert!(!ghost.set_state(MonsterState::Death));
    assert!(!ghost.is_dying());
}

#[test]
fn despawned_monster_does_not_move() {
    let mut wraith = spawn(MonsterKind::Wraith);
    wraith.take_damage(1);
    for _ in 0..40 {
        wraith.update(0.0, 16.0, &nobody());
    }
    assert!(wraith.ready_for_removal());
    wraith.teleport(Vec2::new(5.0, 5.0));
    wraith.integrate(1000.0);
    assert_eq!(wraith.position(), Vec2::new(5.0, 5.0));
    assert_eq!(wraith.velocity(), Vec2::ZERO);
}

#[test]
fn fade_grows_and_vanishes() {
    let mut ghost = spawn(MonsterKind::Ghost);
    let start = ghost.render_intent();
    assert_eq!((start.alpha, start.scale), (1.0, 2.0));
    ghost.take_damage(1);
    for _ in 0..40 {
        ghost.update(0.0, 16.0, &nobody());
    }
    let end = ghost.render_intent();
    assert!(end.alpha.abs() < 1e-4);
    assert!((end.scale - 3.0).abs() < 1e-4);
}

// ============================================================
// Degenerate tuning
// ============================================================

#[test]
fn zero_detection_range_sees_only_overlap() {
    let tuning = MonsterTuning {
        detection_range: 0.0,
        ..MonsterTuning::for_kind(MonsterKind::Wraith)
    };
    let mut wraith = Monster::spawn(MonsterId(1), MonsterKind::Wraith, Vec2::ZERO, 0.0, tuning, 1);
    wraith.update(16.0, 16.0, &PlayerSnapshot::new(Vec2::new(1.0, 0.0), false));
    assert_eq!(wraith.state(), MonsterState::Patrol);
}

#[test]
fn zero_speed_ghost_stays_put() {
    let tuning = MonsterTuning {
        speed: 0.0,
        ..MonsterTuning::for_kind(MonsterKind::Ghost)
    };
    let mut ghost = Monster::spawn(MonsterId(1), MonsterKind::Ghost, Vec2::ONE, 0.0, tuning, 1);
    for _ in 0..100 {
        ghost.update(0.0, 16.0, &nobody());
        ghost.integrate(16.0);
    }
    assert_eq!(ghost.position(), Vec2::ONE);
}

// ============================================================
// Wrong variant / unknown ids
// ============================================================

#[test]
fn guard_target_only_for_shadows() {
    assert!(!spawn(MonsterKind::Ghost).set_guard_target(Vec2::ONE));
    assert!(!spawn(MonsterKind::Wraith).set_guard_target(Vec2::ONE));
    let mut shadow = spawn(MonsterKind::Shadow);
    assert!(shadow.set_guard_target(Vec2::new(50.0, 50.0)));
    assert_eq!(shadow.position(), Vec2::new(50.0, 50.0));
}

#[test]
fn variant_only_accessors_return_none() {
    assert_eq!(spawn(MonsterKind::Ghost).alert_level(), None);
    assert_eq!(spawn(MonsterKind::Shadow).energy_level(), None);
    assert_eq!(spawn(MonsterKind::Poltergeist).energy_level(), Some(4.0));
}

#[test]
fn shadow_has_no_patrol_route() {
    let shadow = spawn(MonsterKind::Shadow);
    assert!(shadow.patrol_points().is_empty());
    assert_eq!(shadow.patrol_index(), 0);
}

#[test]
fn world_ignores_unknown_monster() {
    let mut world = HauntWorld::new(HauntConfig::default());
    assert!(world.contact(MonsterId(404)).is_none());
    assert!(world.monster(MonsterId(404)).is_none());
    assert!(world.monster_mut(MonsterId(404)).is_none());
    assert!(world.render_intents().is_empty());
}

// ============================================================
// Player limits
// ============================================================

#[test]
fn empty_battery_cannot_switch_on() {
    let mut player = Player::default();
    player.update(16.0, &PlayerInput::toggle());
    assert!(player.is_flashlight_active());
    // 100 battery at 20/s
    player.update(5_000.0, &PlayerInput::default());
    assert!(!player.is_flashlight_active());
    assert_eq!(player.battery(), 0.0);
    player.update(16.0, &PlayerInput::toggle());
    assert!(!player.is_flashlight_active());

    player.recharge_battery_default();
    player.update(16.0, &PlayerInput::toggle());
    assert!(player.is_flashlight_active());
}

#[test]
fn recharge_caps_at_max() {
    let mut player = Player::default();
    player.recharge_battery(1_000.0);
    assert_eq!(player.battery(), player.max_battery());
}

#[test]
fn dead_player_stays_dead() {
    let mut player = Player::default();
    let mut killed = 0;
    for _ in 0..6 {
        if player.take_damage(1) {
            killed += 1;
        }
        player.update(2_000.0, &PlayerInput::default());
    }
    assert_eq!(killed, 1);
    assert_eq!(player.health(), 0);
    assert!(!player.is_alive());
}

#[test]
fn tiny_stick_input_is_ignored() {
    let mut player = Player::default();
    player.update(1_000.0, &PlayerInput::moving(Vec2::new(0.05, 0.05)));
    assert_eq!(player.velocity(), Vec2::ZERO);
}
