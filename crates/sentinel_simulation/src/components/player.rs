//! Player marker component
//!
//! Единственный entity с тегом "Player" — цель, которую ищет и преследует AI.

use bevy::prelude::Component;

/// Marker component для игрока (AI target)
///
/// AI находит его один раз при инициализации через `With<Player>`.
/// Должен быть ровно один.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
