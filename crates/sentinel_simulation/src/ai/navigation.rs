//! Внешние коллабораторы BehaviorController
//!
//! Pathfinding, физика и поиск entity живут вне AI (в движке или headless
//! заглушках из `crate::physics`). Здесь — только контракты.

use bevy::prelude::*;
use rand::Rng;

use super::components::EnemyState;

/// Navigation agent (NavMeshAgent / NavigationAgent3D на стороне движка)
///
/// Оба вызова синхронные и неблокирующие с точки зрения AI. Новый destination
/// просто замещает предыдущий.
pub trait NavigationAgent {
    fn set_destination(&mut self, destination: Vec3);

    /// Оставшаяся дистанция до destination (метры)
    ///
    /// Пока путь не посчитан или destination нет — `f32::INFINITY`.
    fn remaining_distance(&self) -> f32;
}

/// Проекция точки на walkable поверхность (NavMesh sample position)
pub trait TerrainProjection {
    /// `None` если в радиусе `max_snap_distance` нет навигируемой поверхности
    fn project_onto_navigable_surface(&self, point: Vec3, max_snap_distance: f32) -> Option<Vec3>;
}

/// Поиск entity по тегу (вызывается один раз при инициализации)
pub trait TargetLocator {
    fn find_tagged(&self, tag: &str) -> Vec<Entity>;
}

/// Получатель уведомлений AI (логи, анимации, damage hooks)
pub trait EventSink {
    /// Враг выполнил атаку по target
    fn attack(&mut self, target: Entity);

    fn state_changed(&mut self, _from: EnemyState, _to: EnemyState) {}
}

/// Равномерная точка внутри шара радиуса `radius` вокруг `center`
///
/// Rejection sampling по кубу [-1, 1]³ (в среднем ~1.9 попытки).
pub fn random_point_in_sphere<R: Rng + ?Sized>(rng: &mut R, center: Vec3, radius: f32) -> Vec3 {
    loop {
        let candidate = Vec3::new(
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
            rng.gen_range(-1.0..=1.0),
        );

        if candidate.length_squared() <= 1.0 {
            return center + candidate * radius;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_point_stays_inside_sphere() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = Vec3::new(3.0, 1.0, -4.0);

        for _ in 0..1000 {
            let point = random_point_in_sphere(&mut rng, center, 10.0);
            assert!(point.distance(center) <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn test_random_point_is_seed_deterministic() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..32 {
            assert_eq!(
                random_point_in_sphere(&mut rng1, Vec3::ZERO, 10.0),
                random_point_in_sphere(&mut rng2, Vec3::ZERO, 10.0)
            );
        }
    }

    #[test]
    fn test_zero_radius_returns_center() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let center = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(random_point_in_sphere(&mut rng, center, 0.0), center);
    }
}
