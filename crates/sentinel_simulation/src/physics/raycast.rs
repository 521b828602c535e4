//! Line-of-sight raycast по AABB коллайдерам сцены

use bevy::prelude::*;

use crate::ai::{LineOfSight, RaycastHit};
use crate::components::Collider;

/// Снапшот коллайдеров сцены на один тик
#[derive(Debug, Clone, Default)]
pub struct SceneRaycast {
    boxes: Vec<(Vec3, Collider)>,
}

impl SceneRaycast {
    /// `(center, collider)` пары
    pub fn from_colliders(colliders: impl IntoIterator<Item = (Vec3, Collider)>) -> Self {
        Self {
            boxes: colliders.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl LineOfSight for SceneRaycast {
    /// Ближайший коллайдер на луче
    ///
    /// Коллайдеры, внутри которых находится origin, игнорируются (свой
    /// собственный коллайдер агента не заслоняет ему обзор).
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RaycastHit> {
        if direction == Vec3::ZERO {
            return None;
        }

        self.boxes
            .iter()
            .filter_map(|(center, collider)| {
                ray_aabb_entry(origin, direction, *center, collider.half_extents)
                    .filter(|distance| *distance <= max_distance)
                    .map(|distance| (distance, collider))
            })
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, collider)| RaycastHit::new(collider.tag.clone()))
    }
}

/// Slab test: дистанция входа луча в box, None если мимо или origin внутри
fn ray_aabb_entry(origin: Vec3, direction: Vec3, center: Vec3, half_extents: Vec3) -> Option<f32> {
    let min = center - half_extents;
    let max = center + half_extents;

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;

    for axis in 0..3 {
        let o = origin[axis];
        let d = direction[axis];

        if d.abs() < f32::EPSILON {
            // Параллельно slab'у: либо внутри по этой оси, либо промах
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let t1 = (min[axis] - o) / d;
        let t2 = (max[axis] - o) / d;
        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));
    }

    if t_enter > t_exit || t_exit < 0.0 || t_enter < 0.0 {
        return None;
    }

    Some(t_enter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::PLAYER_TAG;

    fn wall_and_player() -> SceneRaycast {
        SceneRaycast::from_colliders([
            (Vec3::new(5.0, 0.0, 0.0), Collider::new(Vec3::new(0.5, 2.0, 2.0), "Wall")),
            (Vec3::new(10.0, 0.0, 0.0), Collider::player()),
        ])
    }

    #[test]
    fn test_wall_blocks_before_player() {
        let scene = wall_and_player();
        let hit = scene.raycast(Vec3::ZERO, Vec3::X, 10.0);
        assert_eq!(hit, Some(RaycastHit::new("Wall")));
    }

    #[test]
    fn test_player_hit_when_path_is_clear() {
        let scene = wall_and_player();
        // Обходим стену по z
        let origin = Vec3::new(0.0, 0.0, 5.0);
        let direction = (Vec3::new(10.0, 0.0, 0.0) - origin).normalize();

        // Луч проходит мимо стены (z в точке x=5 равен 2.5 > 2.0)
        let hit = scene.raycast(origin, direction, 20.0);
        assert_eq!(hit, Some(RaycastHit::new(PLAYER_TAG)));
    }

    #[test]
    fn test_max_distance_limits_hits() {
        let scene = wall_and_player();
        assert_eq!(scene.raycast(Vec3::ZERO, Vec3::X, 4.0), None);
    }

    #[test]
    fn test_origin_inside_collider_is_ignored() {
        let scene = SceneRaycast::from_colliders([(Vec3::ZERO, Collider::new(Vec3::ONE, "Enemy"))]);
        assert_eq!(scene.raycast(Vec3::ZERO, Vec3::X, 10.0), None);
    }

    #[test]
    fn test_empty_scene_and_zero_direction() {
        assert_eq!(SceneRaycast::default().raycast(Vec3::ZERO, Vec3::X, 10.0), None);
        assert_eq!(wall_and_player().raycast(Vec3::ZERO, Vec3::ZERO, 10.0), None);
    }
}
