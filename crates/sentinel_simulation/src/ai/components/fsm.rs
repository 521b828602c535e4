//! FSM AI components (state, config, patrol route).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Состояния врага
///
/// Набор закрыт: контроллер всегда находится ровно в одном из них.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum EnemyState {
    /// Идём к текущей точке патруля
    #[default]
    Patrolling,

    /// Стоим на точке патруля `wait_duration` секунд
    Waiting,

    /// Преследуем видимого игрока
    Chasing,

    /// Потеряли игрока — бродим вокруг last known position
    Searching,

    /// One-shot атака, на следующем тике всегда обратно в Chasing
    Attacking,
}

impl EnemyState {
    pub const ALL: [EnemyState; 5] = [
        EnemyState::Patrolling,
        EnemyState::Waiting,
        EnemyState::Chasing,
        EnemyState::Searching,
        EnemyState::Attacking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnemyState::Patrolling => "Patrolling",
            EnemyState::Waiting => "Waiting",
            EnemyState::Chasing => "Chasing",
            EnemyState::Searching => "Searching",
            EnemyState::Attacking => "Attacking",
        }
    }
}

/// Параметры врага
///
/// Задаются один раз при спавне, во время работы не меняются.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[serde(default)]
pub struct EnemyConfig {
    /// Дальность зрения (метры)
    pub vision_range: f32,
    /// Полная ширина конуса зрения (градусы)
    pub vision_angle: f32,
    /// Время ожидания на точке патруля (секунды)
    pub wait_duration: f32,
    /// Сколько ищем потерянного игрока до возврата к патрулю (секунды)
    pub search_duration: f32,
    /// Радиус разброса точек поиска вокруг last known position
    pub search_radius: f32,
    /// Дистанция атаки (строго меньше — атакуем)
    pub attack_range: f32,
    /// remaining_distance ниже порога = прибыли
    pub arrival_threshold: f32,
    /// Максимальный snap случайной точки на NavMesh
    pub search_sample_radius: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            vision_range: 20.0,
            vision_angle: 120.0,
            wait_duration: 5.0,
            search_duration: 15.0,
            search_radius: 10.0,
            attack_range: 2.0,
            arrival_threshold: 0.5,
            search_sample_radius: 4.0,
        }
    }
}

impl EnemyConfig {
    /// Проверка: все значения конечные и неотрицательные, угол в [0, 360]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("vision_range", self.vision_range),
            ("vision_angle", self.vision_angle),
            ("wait_duration", self.wait_duration),
            ("search_duration", self.search_duration),
            ("search_radius", self.search_radius),
            ("attack_range", self.attack_range),
            ("arrival_threshold", self.arrival_threshold),
            ("search_sample_radius", self.search_sample_radius),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.vision_angle > 360.0 {
            return Err(ConfigError::VisionAngleOutOfRange(self.vision_angle));
        }

        Ok(())
    }

    /// Загрузка из JSON (отсутствующие поля берутся из Default)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Маршрут патруля (может быть пустым — тогда враг просто стоит)
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct PatrolRoute {
    pub waypoints: Vec<Vec3>,
}

impl PatrolRoute {
    pub fn new(waypoints: impl Into<Vec<Vec3>>) -> Self {
        Self {
            waypoints: waypoints.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.waypoints.get(index).copied()
    }

    /// Следующий индекс с wrap-around (для пустого маршрута — None)
    pub fn next_index(&self, current: usize) -> Option<usize> {
        if self.waypoints.is_empty() {
            None
        } else {
            Some((current + 1) % self.waypoints.len())
        }
    }
}

/// Маркер: инициализация AI провалилась, повторно не пытаемся
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct BehaviorDisabled;
