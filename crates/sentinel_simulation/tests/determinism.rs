//! Тесты детерминизма
//!
//! Одинаковый seed → идентичный мир (включая случайные точки поиска).

use bevy::prelude::*;
use sentinel_simulation::*;

/// Сценарий с поиском: враг видит игрока, игрок исчезает, враг бродит
/// вокруг last known position (каждая точка — из DeterministicRng).
fn run_search_scenario(seed: u64, ticks: usize) -> (Vec<u8>, Vec<u8>) {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let player = app
        .world_mut()
        .spawn((
            Transform::from_translation(Vec3::new(0.0, 0.0, -10.0)),
            Player,
            Collider::player(),
        ))
        .id();

    for x in [-10.0, 10.0] {
        app.world_mut().spawn((
            Transform::from_translation(Vec3::new(x, 0.0, 0.0)),
            EnemyConfig::default(),
            PatrolRoute::new(vec![Vec3::new(x, 0.0, 0.0), Vec3::new(x, 0.0, 10.0)]),
            NavAgent::default(),
        ));
    }

    for tick in 0..ticks {
        if tick == 30 {
            if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
                transform.translation = Vec3::new(48.0, 0.0, 48.0);
            }
        }
        app.update();
    }

    let world = app.world_mut();
    (
        world_snapshot::<Transform>(world),
        world_snapshot::<BehaviorController>(world),
    )
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICKS: usize = 600;

    let first = run_search_scenario(SEED, TICKS);
    let second = run_search_scenario(SEED, TICKS);

    assert_eq!(
        first, second,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICKS: usize = 300;

    let snapshots: Vec<_> = (0..3).map(|_| run_search_scenario(SEED, TICKS)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    let a = run_search_scenario(1, 600);
    let b = run_search_scenario(2, 600);

    // Случайные точки поиска разные → позиции врагов расходятся
    assert_ne!(a.0, b.0);
}

#[test]
fn test_simulation_plugin_keeps_app_seed() {
    let mut app = create_headless_app(777);
    app.add_plugins(SimulationPlugin);

    assert_eq!(app.world().resource::<DeterministicRng>().seed, 777);
}
