use bevy::prelude::*;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

use crate::collision::ContactOutcome;
use crate::engine::config::HauntConfig;
use crate::engine::world::HauntWorld;
use crate::monster::intent::MonsterEvent;
use crate::monster::{MonsterId, MonsterKind};
use crate::player::PlayerInput;

#[derive(Default)]
pub struct EnginePlugin {
    pub config: HauntConfig,
}

impl Plugin for EnginePlugin {
    fn build(&self, app: &mut App) {
        let world = HauntWorld::new(self.config.clone());

        app.insert_resource(EngineResource(Arc::new(RwLock::new(world))))
            .init_resource::<PendingInput>()
            .add_event::<SpawnMonsterEvent>()
            .add_event::<MonsterContactEvent>()
            .add_event::<MonsterEventMsg>()
            .add_event::<PlayerHitEvent>()
            .add_systems(
                Update,
                (process_spawn_requests, engine_tick_system, process_contacts).chain(),
            );
    }
}

/// Shared handle so physics callbacks outside the schedule can reach the
/// world. Every contact is resolved under the write lock.
#[derive(Resource, Clone)]
pub struct EngineResource(pub Arc<RwLock<HauntWorld>>);

impl EngineResource {
    /// Read access. A lock poisoned by a panicking holder is recovered.
    pub fn read(&self) -> RwLockReadGuard<'_, HauntWorld> {
        self.0.read().unwrap_or_else(|poisoned| {
            warn!("engine lock poisoned, recovering for read");
            poisoned.into_inner()
        })
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, HauntWorld> {
        self.0.write().unwrap_or_else(|poisoned| {
            warn!("engine lock poisoned, recovering for write");
            poisoned.into_inner()
        })
    }
}

/// Player intent for the next tick. The toggle is consumed once ticked.
#[derive(Resource, Debug, Default)]
pub struct PendingInput(pub PlayerInput);

#[derive(Event, Debug, Clone, Copy)]
pub struct SpawnMonsterEvent {
    pub kind: MonsterKind,
    pub position: Vec2,
}

/// Delivered by the physics pass when a monster overlaps the player
#[derive(Event, Debug, Clone, Copy)]
pub struct MonsterContactEvent {
    pub monster: MonsterId,
}

#[derive(Event, Debug, Clone)]
pub struct MonsterEventMsg {
    pub monster: MonsterId,
    pub event: MonsterEvent,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerHitEvent {
    pub outcome: ContactOutcome,
}

fn process_spawn_requests(
    mut requests: EventReader<SpawnMonsterEvent>,
    engine_res: Res<EngineResource>,
) {
    if requests.is_empty() {
        return;
    }
    let mut world = engine_res.write();
    for request in requests.read() {
        world.spawn(request.kind, request.position);
    }
}

fn engine_tick_system(
    time: Res<Time>,
    engine_res: Res<EngineResource>,
    mut input: ResMut<PendingInput>,
    mut out: EventWriter<MonsterEventMsg>,
) {
    let delta_ms = time.delta_secs() * 1000.0;
    let summary = engine_res.write().tick(delta_ms, &input.0);
    input.0.toggle_flashlight = false;

    for report in summary.reports {
        for event in report.events {
            out.send(MonsterEventMsg {
                monster: report.id,
                event,
            });
        }
    }
}

fn process_contacts(
    mut contacts: EventReader<MonsterContactEvent>,
    engine_res: Res<EngineResource>,
    mut hits: EventWriter<PlayerHitEvent>,
) {
    if contacts.is_empty() {
        return;
    }
    let mut world = engine_res.write();
    for contact in contacts.read() {
        if let Some(outcome) = world.contact(contact.monster) {
            if outcome.damage > 0 {
                hits.send(PlayerHitEvent { outcome });
            }
        }
    }
}
