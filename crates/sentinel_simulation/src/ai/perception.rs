//! Perception — «видит ли враг игрока прямо сейчас»
//!
//! Порядок проверок (short-circuit):
//! 1. Sticky memory: target стоит ровно там, где его видели последний раз → видим
//! 2. Дистанция > vision range → не видим
//! 3. Угол между forward и направлением на target > половины конуса → не видим
//! 4. Raycast: попали в "Player" → видим (+ обновляем last known), попали во что-то
//!    другое → заслонён, ничего не задели → видим
//!
//! NOTE: правило (1) срабатывает и на дефолтном нулевом last known position,
//! т.е. игрок ровно в (0,0,0) «виден» с любой дистанции. Поведение сохранено как есть.

use bevy::prelude::*;

/// Тег entity, которого ищет и преследует AI
pub const PLAYER_TAG: &str = "Player";

/// Результат raycast'а: тег первого задетого коллайдера
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaycastHit {
    pub tag: String,
}

impl RaycastHit {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

/// Line-of-sight запросы к физическому миру
///
/// `direction` нормализован, луч проверяется на отрезке `[0, max_distance]`.
/// `None` = ничего не задели.
pub trait LineOfSight {
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RaycastHit>;
}

/// Параметры зрения
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisionParams {
    /// Дальность (метры)
    pub range: f32,
    /// Полная ширина конуса (градусы), половина — в каждую сторону от forward
    pub angle: f32,
}

/// Исход одной проверки восприятия
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sighting {
    /// Target не двигался с последнего подтверждённого контакта
    Remembered,
    /// Raycast упёрся прямо в target — last known position нужно обновить
    Confirmed,
    /// Raycast ничего не задел
    Unobstructed,
    OutOfRange,
    OutsideCone,
    /// Между агентом и target препятствие
    Occluded,
}

impl Sighting {
    pub fn is_perceived(self) -> bool {
        matches!(
            self,
            Sighting::Remembered | Sighting::Confirmed | Sighting::Unobstructed
        )
    }
}

/// Угол между векторами в градусах, [0, 180]
///
/// Для вырожденных (нулевых) векторов возвращает 0.
pub fn angle_between_degrees(from: Vec3, to: Vec3) -> f32 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator <= f32::EPSILON * f32::EPSILON {
        return 0.0;
    }

    let cos = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Чистая проверка восприятия без side effects
pub fn perceive(
    agent_position: Vec3,
    agent_forward: Vec3,
    target_position: Vec3,
    last_known_position: Vec3,
    vision: VisionParams,
    line_of_sight: &dyn LineOfSight,
) -> Sighting {
    if target_position == last_known_position {
        return Sighting::Remembered;
    }

    let to_target = target_position - agent_position;
    let distance = to_target.length();

    if distance > vision.range {
        return Sighting::OutOfRange;
    }

    if angle_between_degrees(agent_forward, to_target) > vision.angle * 0.5 {
        return Sighting::OutsideCone;
    }

    match line_of_sight.raycast(agent_position, to_target.normalize_or_zero(), distance) {
        Some(hit) if hit.tag == PLAYER_TAG => Sighting::Confirmed,
        Some(_) => Sighting::Occluded,
        None => Sighting::Unobstructed,
    }
}

/// Видит ли агент target
///
/// При прямом попадании луча в target записывает его позицию в `last_known_position`.
pub fn can_perceive_target(
    agent_position: Vec3,
    agent_forward: Vec3,
    target_position: Vec3,
    last_known_position: &mut Vec3,
    vision: VisionParams,
    line_of_sight: &dyn LineOfSight,
) -> bool {
    let sighting = perceive(
        agent_position,
        agent_forward,
        target_position,
        *last_known_position,
        vision,
        line_of_sight,
    );

    if sighting == Sighting::Confirmed {
        *last_known_position = target_position;
    }

    sighting.is_perceived()
}
