//! Headless физика и навигация
//!
//! Заглушки внешних коллабораторов AI для симуляции без движка:
//! raycast по box коллайдерам, плоская NavMesh поверхность, движение агентов
//! к destination. В игре их заменяет Godot (PhysicsDirectSpaceState3D,
//! NavigationServer3D).

pub mod movement;
pub mod nav_surface;
pub mod raycast;

// Re-export основных типов
pub use movement::drive_nav_agents;
pub use nav_surface::NavSurface;
pub use raycast::SceneRaycast;
