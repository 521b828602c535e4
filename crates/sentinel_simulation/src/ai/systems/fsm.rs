//! FSM AI systems: инициализация контроллеров и тик FSM.

use bevy::prelude::*;

use crate::ai::components::{BehaviorDisabled, EnemyConfig, EnemyState, PatrolRoute};
use crate::ai::controller::{BehaviorController, TickContext};
use crate::ai::events::{EnemyAttacked, EnemyStateChanged};
use crate::ai::navigation::{EventSink, TargetLocator};
use crate::ai::perception::PLAYER_TAG;
use crate::components::{Collider, NavAgent, Player};
use crate::physics::{NavSurface, SceneRaycast};
use crate::DeterministicRng;

/// TargetLocator поверх снапшота `With<Player>` entities
struct PlayerLocator {
    players: Vec<Entity>,
}

impl TargetLocator for PlayerLocator {
    fn find_tagged(&self, tag: &str) -> Vec<Entity> {
        if tag == PLAYER_TAG {
            self.players.clone()
        } else {
            Vec::new()
        }
    }
}

/// Буфер событий одного врага за тик (пишем в EventWriter после advance)
struct TickEvents {
    enemy: Entity,
    attacks: Vec<EnemyAttacked>,
    transitions: Vec<EnemyStateChanged>,
}

impl TickEvents {
    fn new(enemy: Entity) -> Self {
        Self {
            enemy,
            attacks: Vec::new(),
            transitions: Vec::new(),
        }
    }
}

impl EventSink for TickEvents {
    fn attack(&mut self, target: Entity) {
        crate::log_info(&format!("⚔️ AI: {:?} is attacking {:?}", self.enemy, target));
        self.attacks.push(EnemyAttacked {
            enemy: self.enemy,
            target,
        });
    }

    fn state_changed(&mut self, from: EnemyState, to: EnemyState) {
        crate::log(&format!(
            "AI: {:?} {} → {}",
            self.enemy,
            from.as_str(),
            to.as_str()
        ));
        self.transitions.push(EnemyStateChanged {
            enemy: self.enemy,
            from,
            to,
        });
    }
}

/// Система: создание BehaviorController для новых врагов
///
/// Target ищется один раз. Ошибка (нет игрока, конфиг невалиден) логируется
/// и помечает врага `BehaviorDisabled` — повторных попыток нет.
pub fn init_enemy_behavior(
    mut commands: Commands,
    mut pending: Query<
        (Entity, &EnemyConfig, &PatrolRoute, &mut NavAgent),
        (Without<BehaviorController>, Without<BehaviorDisabled>),
    >,
    players: Query<Entity, With<Player>>,
) {
    if pending.is_empty() {
        return;
    }

    let locator = PlayerLocator {
        players: players.iter().collect(),
    };

    for (entity, config, route, mut nav_agent) in pending.iter_mut() {
        match BehaviorController::new(config.clone(), route.clone(), &locator, &mut *nav_agent) {
            Ok(controller) => {
                crate::log(&format!(
                    "AI: {:?} initialised (target {:?}, {} waypoints)",
                    entity,
                    controller.target(),
                    route.len()
                ));
                commands.entity(entity).insert(controller);
            }
            Err(error) => {
                crate::log_error(&format!("AI: {:?} disabled: {}", entity, error));
                commands.entity(entity).insert(BehaviorDisabled);
            }
        }
    }
}

/// Система: один тик FSM для каждого врага
///
/// Поза врага — из Transform (forward = -Z), позиция target — live Transform игрока.
pub fn advance_enemy_behavior(
    mut enemies: Query<(Entity, &Transform, &mut BehaviorController, &mut NavAgent)>,
    targets: Query<&Transform, With<Player>>,
    colliders: Query<(&Transform, &Collider)>,
    nav_surface: Res<NavSurface>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
    mut attacked: EventWriter<EnemyAttacked>,
    mut state_changed: EventWriter<EnemyStateChanged>,
) {
    let delta = time.delta_secs();

    if enemies.is_empty() {
        return;
    }

    let scene = SceneRaycast::from_colliders(
        colliders
            .iter()
            .map(|(transform, collider)| (transform.translation, collider.clone())),
    );

    for (entity, transform, mut controller, mut nav_agent) in enemies.iter_mut() {
        let Ok(target_transform) = targets.get(controller.target()) else {
            crate::log_warning(&format!(
                "AI: {:?} target {:?} is gone, skipping tick",
                entity,
                controller.target()
            ));
            continue;
        };

        let mut events = TickEvents::new(entity);
        let mut ctx = TickContext {
            position: transform.translation,
            forward: transform.forward().as_vec3(),
            target_position: target_transform.translation,
            navigation: &mut *nav_agent,
            terrain: &*nav_surface,
            line_of_sight: &scene,
            events: &mut events,
            rng: &mut rng.rng,
        };

        controller.advance(delta, &mut ctx);

        for event in events.transitions {
            state_changed.write(event);
        }
        for event in events.attacks {
            attacked.write(event);
        }
    }
}
