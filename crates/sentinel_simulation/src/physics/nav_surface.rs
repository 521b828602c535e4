//! Плоская навигируемая поверхность (headless NavMesh)

use bevy::prelude::*;

use crate::ai::TerrainProjection;

/// Прямоугольник на высоте `height`, ограниченный `min`/`max` по XZ
#[derive(Resource, Debug, Clone, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct NavSurface {
    pub min: Vec2,
    pub max: Vec2,
    pub height: f32,
}

impl Default for NavSurface {
    fn default() -> Self {
        Self {
            min: Vec2::splat(-50.0),
            max: Vec2::splat(50.0),
            height: 0.0,
        }
    }
}

impl NavSurface {
    /// Ближайшая точка поверхности
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            self.height,
            point.z.clamp(self.min.y, self.max.y),
        )
    }
}

impl TerrainProjection for NavSurface {
    fn project_onto_navigable_surface(&self, point: Vec3, max_snap_distance: f32) -> Option<Vec3> {
        let snapped = self.closest_point(point);
        (snapped.distance(point) <= max_snap_distance).then_some(snapped)
    }
}
