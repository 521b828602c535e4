//! AI systems (ECS glue вокруг BehaviorController)

pub mod fsm;

pub use fsm::*;
