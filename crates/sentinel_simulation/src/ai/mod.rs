//! AI decision-making module
//!
//! FSM одного врага: патруль по маршруту, обнаружение игрока (range + FOV + LOS),
//! преследование, поиск по last known position, атака вблизи.
//!
//! Ядро (`controller`, `perception`) — чистый Rust без ECS, коллабораторы
//! (navigation, terrain, raycast) передаются через traits из `navigation`.

use bevy::prelude::*;

pub mod components;
pub mod controller;
pub mod events;
pub mod navigation;
pub mod perception;
pub mod systems;


// Re-export основных типов
pub use components::{BehaviorDisabled, EnemyConfig, EnemyState, PatrolRoute};
pub use controller::{BehaviorController, TickContext};
pub use events::{EnemyAttacked, EnemyStateChanged};
pub use navigation::{EventSink, NavigationAgent, TargetLocator, TerrainProjection};
pub use perception::{can_perceive_target, LineOfSight, RaycastHit, VisionParams, PLAYER_TAG};

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. init_enemy_behavior — создание BehaviorController для новых врагов
/// 2. advance_enemy_behavior — один тик FSM
/// 3. drive_nav_agents — headless исполнение navigation (движение к destination)
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<EnemyAttacked>()
            .add_event::<EnemyStateChanged>()
            .register_type::<EnemyConfig>()
            .register_type::<PatrolRoute>()
            .register_type::<BehaviorController>();

        app.add_systems(
            FixedUpdate,
            (
                systems::init_enemy_behavior,
                systems::advance_enemy_behavior,
                crate::physics::drive_nav_agents,
            )
                .chain(), // Последовательное выполнение для детерминизма
        );
    }
}
