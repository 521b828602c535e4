//! BehaviorController — FSM одного врага
//!
//! Patrolling → Waiting → Patrolling …, при контакте Chasing ⇄ Attacking,
//! при потере контакта Searching → (таймаут) Patrolling.
//!
//! Хост вызывает `advance(dt)` раз в тик; внутри ровно один handler текущего
//! состояния. Handlers только решают, куда перейти. Сброс таймеров и смена
//! точки патруля происходят в одном месте — `apply_transition`.

use bevy::prelude::*;
use rand::RngCore;

use super::components::{EnemyConfig, EnemyState, PatrolRoute};
use super::navigation::{
    random_point_in_sphere, EventSink, NavigationAgent, TargetLocator, TerrainProjection,
};
use super::perception::{can_perceive_target, LineOfSight, VisionParams, PLAYER_TAG};
use crate::error::AiError;

/// Входные данные одного тика
///
/// Поза агента и позиция target читаются хостом перед каждым вызовом.
pub struct TickContext<'a> {
    pub position: Vec3,
    pub forward: Vec3,
    pub target_position: Vec3,
    pub navigation: &'a mut dyn NavigationAgent,
    pub terrain: &'a dyn TerrainProjection,
    pub line_of_sight: &'a dyn LineOfSight,
    pub events: &'a mut dyn EventSink,
    pub rng: &'a mut dyn RngCore,
}

#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct BehaviorController {
    state: EnemyState,
    config: EnemyConfig,
    route: PatrolRoute,
    /// Индекс точки, выданной navigation агенту последней
    patrol_index: usize,
    last_known_target_position: Vec3,
    wait_timer: f32,
    search_timer: f32,
    target: Entity,
}

impl BehaviorController {
    /// Создать контроллер: валидация конфига, поиск target, первая точка патруля
    pub fn new(
        config: EnemyConfig,
        route: PatrolRoute,
        locator: &dyn TargetLocator,
        navigation: &mut dyn NavigationAgent,
    ) -> Result<Self, AiError> {
        config.validate()?;
        let target = locate_target(locator)?;

        let controller = Self {
            state: EnemyState::Patrolling,
            config,
            route,
            patrol_index: 0,
            last_known_target_position: Vec3::ZERO,
            wait_timer: 0.0,
            search_timer: 0.0,
            target,
        };

        controller.issue_patrol_destination(navigation);

        Ok(controller)
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn route(&self) -> &PatrolRoute {
        &self.route
    }

    pub fn patrol_index(&self) -> usize {
        self.patrol_index
    }

    pub fn wait_timer(&self) -> f32 {
        self.wait_timer
    }

    pub fn search_timer(&self) -> f32 {
        self.search_timer
    }

    pub fn last_known_target_position(&self) -> Vec3 {
        self.last_known_target_position
    }

    pub fn target(&self) -> Entity {
        self.target
    }

    /// Один тик FSM, возвращает состояние после тика
    ///
    /// Отрицательный `dt` трактуется как 0.
    pub fn advance(&mut self, dt: f32, ctx: &mut TickContext) -> EnemyState {
        let dt = dt.max(0.0);
        let from = self.state;

        let to = match from {
            EnemyState::Patrolling => self.patrol(ctx),
            EnemyState::Waiting => self.wait(dt),
            EnemyState::Chasing => self.chase(ctx),
            EnemyState::Searching => self.search(dt, ctx),
            EnemyState::Attacking => self.attack(ctx),
        };

        if from != to {
            self.apply_transition(from, to, ctx.navigation);
            ctx.events.state_changed(from, to);
        }

        self.state = to;
        to
    }

    fn patrol(&mut self, ctx: &mut TickContext) -> EnemyState {
        if self.perceives_target(ctx) {
            return EnemyState::Chasing;
        }

        if self.has_arrived(ctx) {
            EnemyState::Waiting
        } else {
            EnemyState::Patrolling
        }
    }

    fn wait(&mut self, dt: f32) -> EnemyState {
        self.wait_timer += dt;

        if self.wait_timer >= self.config.wait_duration {
            EnemyState::Patrolling
        } else {
            EnemyState::Waiting
        }
    }

    fn chase(&mut self, ctx: &mut TickContext) -> EnemyState {
        if !self.perceives_target(ctx) {
            return EnemyState::Searching;
        }

        if ctx.position.distance(ctx.target_position) < self.config.attack_range {
            EnemyState::Attacking
        } else {
            // Всегда свежая позиция, без предсказания
            ctx.navigation.set_destination(ctx.target_position);
            EnemyState::Chasing
        }
    }

    fn search(&mut self, dt: f32, ctx: &mut TickContext) -> EnemyState {
        if self.perceives_target(ctx) {
            return EnemyState::Chasing;
        }

        // Таймер копится между эпизодами поиска, обнуляется только по таймауту
        self.search_timer += dt;

        if self.search_timer >= self.config.search_duration {
            return EnemyState::Patrolling;
        }

        if self.has_arrived(ctx) {
            self.pick_search_destination(ctx);
        }

        EnemyState::Searching
    }

    fn attack(&self, ctx: &mut TickContext) -> EnemyState {
        ctx.events.attack(self.target);
        EnemyState::Chasing
    }

    /// Entry/exit действия переходов
    fn apply_transition(
        &mut self,
        from: EnemyState,
        to: EnemyState,
        navigation: &mut dyn NavigationAgent,
    ) {
        match (from, to) {
            (_, EnemyState::Waiting) => {
                self.wait_timer = 0.0;
            }
            (EnemyState::Waiting, EnemyState::Patrolling) => {
                if let Some(next) = self.route.next_index(self.patrol_index) {
                    self.patrol_index = next;
                }
                self.issue_patrol_destination(navigation);
            }
            // Таймаут поиска. Destination не переназначаем: остаётся последняя точка поиска
            (EnemyState::Searching, EnemyState::Patrolling) => {
                self.search_timer = 0.0;
            }
            _ => {}
        }
    }

    fn issue_patrol_destination(&self, navigation: &mut dyn NavigationAgent) {
        if let Some(waypoint) = self.route.get(self.patrol_index) {
            navigation.set_destination(waypoint);
        }
    }

    /// Одна попытка за тик; при неудачной проекции destination не меняется
    fn pick_search_destination(&self, ctx: &mut TickContext) {
        let sample = random_point_in_sphere(
            &mut *ctx.rng,
            self.last_known_target_position,
            self.config.search_radius,
        );

        match ctx
            .terrain
            .project_onto_navigable_surface(sample, self.config.search_sample_radius)
        {
            Some(point) => ctx.navigation.set_destination(point),
            None => crate::logger::log(&format!(
                "AI: search sample {:?} has no navigable surface within {}m, skipping",
                sample, self.config.search_sample_radius
            )),
        }
    }

    /// Прямое попадание луча обновляет last known position
    fn perceives_target(&mut self, ctx: &TickContext) -> bool {
        let vision = self.vision();
        can_perceive_target(
            ctx.position,
            ctx.forward,
            ctx.target_position,
            &mut self.last_known_target_position,
            vision,
            ctx.line_of_sight,
        )
    }

    fn has_arrived(&self, ctx: &TickContext) -> bool {
        ctx.navigation.remaining_distance() < self.config.arrival_threshold
    }

    fn vision(&self) -> VisionParams {
        VisionParams {
            range: self.config.vision_range,
            angle: self.config.vision_angle,
        }
    }
}

fn locate_target(locator: &dyn TargetLocator) -> Result<Entity, AiError> {
    match locator.find_tagged(PLAYER_TAG).as_slice() {
        [] => Err(AiError::TargetNotFound { tag: PLAYER_TAG }),
        [target] => Ok(*target),
        many => Err(AiError::AmbiguousTarget {
            tag: PLAYER_TAG,
            count: many.len(),
        }),
    }
}
