use glam::Vec2;
use rand::Rng;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{random_between, Hsla, Trail};

/// Étincelle issue d'une explosion.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Vie restante dans (0, 1], décroît de `decay` à chaque pas
    pub life: f32,
    pub decay: f32,
    /// Couleur (la variance de teinte est déjà appliquée)
    pub color: Hsla,
    pub size: f32,
    pub gravity: f32,
    pub trail: Trail,
    pub sparkle: bool,
    pub glitter: bool,
}

impl Particle {
    /// Particule de "coquille" : suit la forme de l'explosion.
    pub fn shell(
        origin: Vec2,
        angle: f32,
        speed: f32,
        hue: f32,
        config: &PhysicConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let hue_variance = random_between(rng, -config.shell_hue_variance, config.shell_hue_variance);
        let lightness = random_between(rng, config.shell_lightness_min, config.shell_lightness_max);
        Self {
            pos: origin,
            vel: Vec2::from_angle(angle) * speed,
            life: 1.0,
            decay: random_between(rng, config.shell_decay_min, config.shell_decay_max),
            color: Hsla::hsl(hue + hue_variance, 100.0, lightness),
            size: random_between(rng, config.shell_size_min, config.shell_size_max),
            gravity: random_between(rng, config.shell_gravity_min, config.shell_gravity_max),
            trail: Trail::new(config.particle_trail_len),
            sparkle: rng.random_bool(config.shell_sparkle_chance.clamp(0.0, 1.0)),
            glitter: false,
        }
    }

    /// Paillette : pâle, lente, scintille toujours.
    pub fn glitter(origin: Vec2, hue: f32, config: &PhysicConfig, rng: &mut impl Rng) -> Self {
        let angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = random_between(rng, 0.0, config.glitter_speed_max);
        Self {
            pos: origin,
            vel: Vec2::from_angle(angle) * speed,
            life: 1.0,
            decay: random_between(rng, config.glitter_decay_min, config.glitter_decay_max),
            color: Hsla::hsl(hue, config.glitter_saturation, config.glitter_lightness),
            size: random_between(rng, config.glitter_size_min, config.glitter_size_max),
            gravity: config.glitter_gravity,
            trail: Trail::new(config.particle_trail_len),
            sparkle: true,
            glitter: true,
        }
    }

    /// Un pas de simulation. Retourne `false` quand la particule est morte.
    pub fn update(&mut self, drag: f32) -> bool {
        self.trail.push(self.pos, self.life);

        self.vel *= drag;
        self.vel.y += self.gravity;
        self.pos += self.vel;
        self.life -= self.decay;

        self.is_alive()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Les paillettes scintillantes voient leur taille tirée à chaque frame.
    #[inline]
    pub fn twinkles(&self) -> bool {
        self.sparkle && self.glitter
    }
}
