//! Tests for FSM AI components.

#[cfg(test)]
mod tests {
    use super::super::fsm::{EnemyConfig, EnemyState, PatrolRoute};
    use crate::error::ConfigError;
    use bevy::prelude::*;

    #[test]
    fn test_enemy_state_default() {
        assert_eq!(EnemyState::default(), EnemyState::Patrolling);
    }

    #[test]
    fn test_enemy_config_default() {
        let config = EnemyConfig::default();
        assert_eq!(config.vision_range, 20.0);
        assert_eq!(config.vision_angle, 120.0);
        assert_eq!(config.wait_duration, 5.0);
        assert_eq!(config.search_duration, 15.0);
        assert_eq!(config.search_radius, 10.0);
        assert_eq!(config.attack_range, 2.0);
        assert_eq!(config.arrival_threshold, 0.5);
        assert_eq!(config.search_sample_radius, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_negative_values() {
        let config = EnemyConfig {
            attack_range: -1.0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { field: "attack_range", .. })
        ));
    }

    #[test]
    fn test_config_rejects_nan() {
        let config = EnemyConfig {
            vision_range: f32::NAN,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "vision_range" })
        ));
    }

    #[test]
    fn test_config_rejects_wide_vision_angle() {
        let config = EnemyConfig {
            vision_angle: 400.0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::VisionAngleOutOfRange(_))
        ));
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config = EnemyConfig::from_json(r#"{ "vision_range": 35.0, "wait_duration": 2.5 }"#)
            .expect("valid config");

        assert_eq!(config.vision_range, 35.0);
        assert_eq!(config.wait_duration, 2.5);
        assert_eq!(config.search_duration, 15.0);
    }

    #[test]
    fn test_config_from_json_errors() {
        assert!(matches!(
            EnemyConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EnemyConfig::from_json(r#"{ "search_radius": -3.0 }"#),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn test_patrol_route_wraps() {
        let route = PatrolRoute::new(vec![Vec3::ZERO, Vec3::X, Vec3::Z]);
        assert_eq!(route.next_index(0), Some(1));
        assert_eq!(route.next_index(2), Some(0));
        assert_eq!(route.get(1), Some(Vec3::X));

        let empty = PatrolRoute::default();
        assert!(empty.is_empty());
        assert_eq!(empty.next_index(0), None);
        assert_eq!(empty.get(0), None);
    }
}
