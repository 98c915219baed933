use std::time::Duration;

use anyhow::Context;
use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::prelude::*;
use tracing::info;

use haunt_core::engine::{
    EngineResource, MonsterContactEvent, MonsterEventMsg, PendingInput, PlayerHitEvent,
    SpawnMonsterEvent,
};
use haunt_core::logging::LoggingPlugin;
use haunt_core::{EnginePlugin, HauntConfig, MonsterKind, PlayerInput, PlayerSensor};

/// Frames to run before the demo exits
const DEMO_FRAMES: u32 = 900;
/// Stand-in for the physics overlap test
const CONTACT_RADIUS: f32 = 16.0;

#[derive(Resource, Default)]
struct DemoClock {
    frames: u32,
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::var_os("HAUNT_CONFIG") {
        Some(path) => HauntConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.to_string_lossy()))?,
        None => HauntConfig::default(),
    };
    let frame = Duration::from_secs_f64(1.0 / config.tick_rate as f64);

    let exit = App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(frame)))
        .add_plugins(LoggingPlugin {
            config: config.logging.clone(),
        })
        .add_plugins(EnginePlugin { config })
        .init_resource::<DemoClock>()
        .add_systems(Startup, spawn_encounter)
        .add_systems(
            Update,
            (drive_player, detect_contacts, log_monster_events, log_player_hits, stop_demo),
        )
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("demo exited with code {code}"),
    }
}

fn spawn_encounter(mut spawns: EventWriter<SpawnMonsterEvent>) {
    let layout = [
        (MonsterKind::Ghost, Vec2::new(200.0, 120.0)),
        (MonsterKind::Shadow, Vec2::new(320.0, 0.0)),
        (MonsterKind::Wraith, Vec2::new(-260.0, 40.0)),
        (MonsterKind::Poltergeist, Vec2::new(80.0, -220.0)),
    ];
    for (kind, position) in layout {
        spawns.send(SpawnMonsterEvent { kind, position });
    }
    info!("demo encounter spawned");
}

/// Walk east, flicking the flashlight every few seconds
fn drive_player(clock: Res<DemoClock>, mut input: ResMut<PendingInput>) {
    input.0 = PlayerInput {
        direction: Vec2::new(1.0, (clock.frames as f32 / 120.0).sin() * 0.5),
        toggle_flashlight: clock.frames % 180 == 0,
    };
}

fn detect_contacts(engine: Res<EngineResource>, mut contacts: EventWriter<MonsterContactEvent>) {
    let world = engine.read();
    let player = world.player().position();
    for monster in world.monsters() {
        if !monster.is_dying() && monster.position().distance(player) < CONTACT_RADIUS {
            contacts.send(MonsterContactEvent {
                monster: monster.id(),
            });
        }
    }
}

fn log_monster_events(mut events: EventReader<MonsterEventMsg>) {
    for msg in events.read() {
        info!(monster = %msg.monster, event = ?msg.event, "monster event");
    }
}

fn log_player_hits(mut hits: EventReader<PlayerHitEvent>) {
    for hit in hits.read() {
        info!(
            monster = %hit.outcome.monster,
            damage = hit.outcome.damage,
            killed = hit.outcome.player_killed,
            "player hit"
        );
    }
}

fn stop_demo(
    mut clock: ResMut<DemoClock>,
    engine: Res<EngineResource>,
    mut exit: EventWriter<AppExit>,
) {
    clock.frames += 1;
    let player_dead = !engine.read().player().is_alive();
    if clock.frames >= DEMO_FRAMES || player_dead {
        info!(frames = clock.frames, player_dead, "demo finished");
        exit.send(AppExit::Success);
    }
}
