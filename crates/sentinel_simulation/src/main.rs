//! Headless симуляция Sentinel
//!
//! Один враг патрулирует квадрат, игрок стоит за стеной и потом выходит на
//! открытое место. Печатаем смены состояний.

use bevy::prelude::*;
use sentinel_simulation::{
    create_headless_app, log_info, Collider, DeterministicRng, EnemyConfig, EnemyState,
    EnemyStateChanged, NavAgent, PatrolRoute, Player, SimulationPlugin, SIMULATION_HZ,
};

/// Тиков в демо-прогоне (60 сек)
const TICKS: usize = 3600;

/// Скорость патруля/преследования (m/s)
const ENEMY_SPEED: f32 = 4.0;

/// Момент, когда игрок выходит из-за стены
const PLAYER_STEPS_OUT_AT: usize = 1200;

fn main() {
    let mut app = create_headless_app(42);
    let seed = app.world().resource::<DeterministicRng>().seed;
    log_info(&format!("Starting Sentinel headless simulation (seed: {})", seed));

    app.add_plugins(SimulationPlugin);
    app.add_systems(Update, report_state_changes);

    let world = app.world_mut();

    world.spawn((
        Transform::from_translation(Vec3::new(0.0, 0.0, 0.0)),
        EnemyConfig::default(),
        PatrolRoute::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(15.0, 0.0, 0.0),
            Vec3::new(15.0, 0.0, 15.0),
            Vec3::new(0.0, 0.0, 15.0),
        ]),
        NavAgent::with_speed(ENEMY_SPEED),
        Collider::new(Vec3::new(0.4, 0.9, 0.4), "Enemy"),
    ));

    // Стена между маршрутом и укрытием игрока
    world.spawn((
        Transform::from_translation(Vec3::new(25.0, 0.0, 7.5)),
        Collider::new(Vec3::new(0.5, 3.0, 10.0), "Wall"),
    ));

    let player = world
        .spawn((
            Transform::from_translation(Vec3::new(30.0, 0.0, 7.5)),
            Player,
            Collider::player(),
        ))
        .id();

    for tick in 0..TICKS {
        if tick == PLAYER_STEPS_OUT_AT {
            if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
                transform.translation = Vec3::new(8.0, 0.0, 7.5);
            }
            log_info("Player stepped out from behind the wall");
        }

        app.update();
    }

    log_info(&format!(
        "Simulation complete: {} ticks ({:.0} sec)",
        TICKS,
        TICKS as f64 / SIMULATION_HZ
    ));
}

fn report_state_changes(mut events: EventReader<EnemyStateChanged>) {
    for event in events.read() {
        if event.to == EnemyState::Attacking {
            continue;
        }
        log_info(&format!(
            "{:?}: {} → {}",
            event.enemy,
            event.from.as_str(),
            event.to.as_str()
        ));
    }
}
