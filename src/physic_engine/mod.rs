pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{Explosion, Hsla, Trail, TrailPoint, UpdateResult};

pub mod rocket;
pub use self::rocket::Rocket;

pub mod particle;
pub use self::particle::Particle;

pub mod explosion_shape;
pub use self::explosion_shape::ExplosionShape;

pub mod config;
pub use self::config::PhysicConfig;

pub mod physic_engine_fireworks;
pub use self::physic_engine_fireworks::PhysicEngineFireworks;
