//! AI Events — уведомления для animation/damage/audio слоёв

use bevy::prelude::*;

use super::components::EnemyState;

/// Враг выполнил атаку (one-shot, один event на вход в Attacking)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemyAttacked {
    /// Кто атакует
    pub enemy: Entity,
    /// Кого атакуют
    pub target: Entity,
}

/// Смена состояния FSM (для анимаций и debug overlay)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct EnemyStateChanged {
    pub enemy: Entity,
    pub from: EnemyState,
    pub to: EnemyState,
}
