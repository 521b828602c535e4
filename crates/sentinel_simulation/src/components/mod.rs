//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - movement: navigation agent (destination, remaining distance, speed)
//! - player: маркер игрока (target для AI)
//! - world: коллайдеры для line-of-sight raycast'ов
//!
//! AI компоненты (EnemyConfig, PatrolRoute, BehaviorController) живут в crate::ai.

pub mod movement;
pub mod player;
pub mod world;

// Re-exports для удобного импорта
pub use movement::*;
pub use player::*;
pub use world::*;
