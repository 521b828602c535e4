//! Headless исполнитель навигации
//!
//! Двигает агентов по прямой к destination (без pathfinding и коллизий).
//! В игре эту работу делает Godot NavigationAgent3D.

use bevy::prelude::*;

use crate::components::NavAgent;

/// Система: движение NavAgent → Transform
///
/// Работает в FixedUpdate после AI (destination этого тика уже выставлен).
/// Обновляет `remaining_distance` и разворачивает агента по направлению движения.
pub fn drive_nav_agents(mut agents: Query<(&mut NavAgent, &mut Transform)>, time: Res<Time<Fixed>>) {
    let delta = time.delta_secs();

    for (mut agent, mut transform) in agents.iter_mut() {
        let Some(destination) = agent.destination else {
            continue;
        };

        let to_destination = destination - transform.translation;
        let distance = to_destination.length();
        let step = agent.speed * delta;

        if distance <= step {
            transform.translation = destination;
            agent.remaining_distance = 0.0;
            continue;
        }

        let direction = to_destination / distance;
        transform.translation += direction * step;
        agent.remaining_distance = distance - step;

        // Смотрим туда, куда идём (только горизонталь)
        let heading = Vec3::new(direction.x, 0.0, direction.z);
        if heading.length_squared() > 1e-6 {
            transform.look_to(heading, Vec3::Y);
        }
    }
}
