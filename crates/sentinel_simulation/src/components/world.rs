//! World компоненты: коллайдеры для line-of-sight

use bevy::prelude::*;

/// Axis-aligned box коллайдер с тегом (стены, ящики, сам игрок)
///
/// Центр — Transform.translation entity. Rotation/scale не учитываются.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Collider {
    pub half_extents: Vec3,
    pub tag: String,
}

impl Collider {
    pub fn new(half_extents: Vec3, tag: impl Into<String>) -> Self {
        Self {
            half_extents,
            tag: tag.into(),
        }
    }

    /// Капсула игрока, аппроксимированная box'ом 0.8 × 1.8 × 0.8
    pub fn player() -> Self {
        Self::new(Vec3::new(0.4, 0.9, 0.4), crate::ai::PLAYER_TAG)
    }
}
