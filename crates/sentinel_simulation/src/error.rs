//! Ошибки конфигурации и инициализации AI
//!
//! Все ошибки фатальны только на старте (BehaviorController::new).
//! Во время тика ошибок нет — state set закрыт, переходы тотальны.

use thiserror::Error;

/// Ошибка валидации `EnemyConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Значение параметра отрицательное
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        field: &'static str,
        value: f32,
    },

    /// NaN или бесконечность
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    /// Угол обзора вне [0, 360] градусов
    #[error("vision angle must be within [0, 360] degrees, got {0}")]
    VisionAngleOutOfRange(f32),

    /// Не удалось разобрать JSON документ конфигурации
    #[error("failed to parse enemy config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ошибка создания `BehaviorController`
#[derive(Debug, Error)]
pub enum AiError {
    /// Target entity с нужным тегом не найден
    #[error("no entity tagged \"{tag}\" found")]
    TargetNotFound { tag: &'static str },

    /// Тег должен быть уникальным, а entity несколько
    #[error("expected a unique entity tagged \"{tag}\", found {count}")]
    AmbiguousTarget { tag: &'static str, count: usize },

    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}
