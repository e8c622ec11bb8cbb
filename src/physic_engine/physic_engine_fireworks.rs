use glam::Vec2;
use itertools::Itertools;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::physic_engine::{
    config::PhysicConfig,
    explosion_shape::ExplosionShape,
    particle::Particle,
    rocket::Rocket,
    types::{Explosion, UpdateResult},
    PhysicEngine,
};

#[derive(Debug)]
pub struct PhysicEngineFireworks {
    rockets: Vec<Rocket>,
    particles: Vec<Particle>,
    // réutilisé d'un pas à l'autre
    triggered_explosions: Vec<Explosion>,

    width: f32,
    height: f32,
    next_rocket_id: u64,
    rng: StdRng,

    config: PhysicConfig,
}

impl PhysicEngineFireworks {
    pub fn new(config: &PhysicConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, StdRng::from_os_rng())
    }

    /// Constructeur déterministe (tests, replays).
    pub fn with_seed(config: &PhysicConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &PhysicConfig, width: f32, height: f32, rng: StdRng) -> Self {
        Self {
            rockets: Vec::new(),
            particles: Vec::new(),
            triggered_explosions: Vec::new(),
            width,
            height,
            next_rocket_id: 0,
            rng,
            config: config.clone(),
        }
    }

    /// Bornes inclusives du nombre de particules de coquille, remises dans l'ordre.
    fn burst_range(&self) -> (usize, usize) {
        [
            self.config.burst_min_particles,
            self.config.burst_max_particles,
        ]
        .iter()
        .copied()
        .minmax()
        .into_option()
        .unwrap_or((0, 0))
    }

    fn update(&mut self) -> UpdateResult<'_> {
        self.triggered_explosions.clear();

        // 1) Fusées : compaction par `retain_mut` (pas de suppression en avançant)
        let config = &self.config;
        let explosions = &mut self.triggered_explosions;
        self.rockets.retain_mut(|rocket| {
            let reached_target = rocket.update(config);
            if reached_target {
                explosions.push(Explosion {
                    pos: rocket.pos,
                    hue: rocket.hue,
                });
            }
            !reached_target
        });

        // 2) Explosions déclenchées pendant ce pas
        for i in 0..self.triggered_explosions.len() {
            let e = self.triggered_explosions[i];
            self.explode(e.pos.x, e.pos.y, e.hue);
        }

        // 3) Particules (y compris celles qu'on vient de créer)
        let drag = self.config.particle_drag;
        let before = self.particles.len();
        self.particles.retain_mut(|p| p.update(drag));

        UpdateResult {
            triggered_explosions: &self.triggered_explosions,
            expired_particles: before - self.particles.len(),
        }
    }
}

impl PhysicEngine for PhysicEngineFireworks {
    fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn launch_rocket(&mut self) {
        let rocket = Rocket::launch(
            self.next_rocket_id,
            &self.config,
            &mut self.rng,
            self.width,
            self.height,
        );
        self.next_rocket_id += 1;
        debug!(
            "🚀 Rocket {} launched at x={:.1} (target y={:.1}, hue={:.1})",
            rocket.id, rocket.pos.x, rocket.target_y, rocket.hue
        );
        self.rockets.push(rocket);
    }

    fn explode(&mut self, x: f32, y: f32, hue: f32) {
        let origin = Vec2::new(x, y);
        let (min_count, max_count) = self.burst_range();
        let count = self.rng.random_range(min_count..=max_count);
        let shape = ExplosionShape::random(&mut self.rng);
        let glitter_count = self.config.glitter_particles;

        self.particles.reserve(count + glitter_count);
        for i in 0..count {
            let (angle, speed) = shape.launch_vector(i, count, &mut self.rng);
            self.particles.push(Particle::shell(
                origin,
                angle,
                speed,
                hue,
                &self.config,
                &mut self.rng,
            ));
        }
        for _ in 0..glitter_count {
            self.particles
                .push(Particle::glitter(origin, hue, &self.config, &mut self.rng));
        }

        debug!(
            "💥 Explosion '{}' at ({:.1}, {:.1}): {} + {} glitter",
            shape.name(),
            x,
            y,
            count,
            glitter_count
        );
    }

    fn advance(&mut self) -> UpdateResult<'_> {
        self.update()
    }

    fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn close(&mut self) {
        self.rockets.clear();
        self.particles.clear();
        self.triggered_explosions.clear();
        debug!("PhysicEngineFireworks closed and reset.");
    }

    fn reload_config(&mut self, config: &PhysicConfig) {
        info!("🔄 Physic config reloaded");
        self.config = config.clone();
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    fn push_rocket(&mut self, rocket: Rocket);
    fn particles_mut(&mut self) -> &mut Vec<Particle>;
}

#[cfg(any(test, feature = "test_helpers"))]
impl PhysicEngineTestHelpers for PhysicEngineFireworks {
    fn push_rocket(&mut self, rocket: Rocket) {
        self.rockets.push(rocket);
    }

    fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}
