//! Movement компоненты: navigation agent

use bevy::prelude::*;

use crate::ai::NavigationAgent;

/// Navigation agent актора
///
/// Архитектура:
/// - AI пишет destination через `NavigationAgent::set_destination`
/// - Исполнитель (Godot NavigationAgent3D или headless `drive_nav_agents`)
///   двигает актора и обновляет `remaining_distance`
///
/// После смены destination путь считается «pending» до следующего
/// обновления исполнителем: `remaining_distance = INFINITY`. Иначе AI
/// увидел бы устаревшее «прибыли» от предыдущей точки.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    /// Текущая цель (None — агент стоит)
    pub destination: Option<Vec3>,
    /// Оставшаяся дистанция до destination (метры)
    pub remaining_distance: f32,
    /// Скорость движения (m/s)
    pub speed: f32,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            remaining_distance: f32::INFINITY,
            speed: 3.5,
        }
    }
}

impl NavAgent {
    pub fn with_speed(speed: f32) -> Self {
        Self {
            speed,
            ..Default::default()
        }
    }
}

impl NavigationAgent for NavAgent {
    fn set_destination(&mut self, destination: Vec3) {
        if self.destination != Some(destination) {
            self.destination = Some(destination);
            self.remaining_distance = f32::INFINITY;
        }
    }

    fn remaining_distance(&self) -> f32 {
        self.remaining_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_agent_without_destination_never_arrives() {
        let agent = NavAgent::default();
        assert!(agent.destination.is_none());
        assert_eq!(agent.remaining_distance(), f32::INFINITY);
    }

    #[test]
    fn test_new_destination_marks_path_pending() {
        let mut agent = NavAgent::default();
        agent.set_destination(Vec3::X);
        agent.remaining_distance = 0.2;

        // Тот же destination — прогресс не сбрасываем
        agent.set_destination(Vec3::X);
        assert_eq!(agent.remaining_distance(), 0.2);

        agent.set_destination(Vec3::Z);
        assert_eq!(agent.destination, Some(Vec3::Z));
        assert_eq!(agent.remaining_distance(), f32::INFINITY);
    }

    #[test]
    fn test_with_speed_keeps_idle_defaults() {
        let agent = NavAgent::with_speed(6.0);
        assert_eq!(agent.speed, 6.0);
        assert!(agent.destination.is_none());
        assert_eq!(agent.remaining_distance(), f32::INFINITY);
    }
}
