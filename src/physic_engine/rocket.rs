use glam::Vec2;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{random_between, Trail};

/// Teinte de repli si la palette de la config est vide.
const FALLBACK_HUE: f32 = 330.0;

/// Représentation d'une fusée en montée
#[derive(Debug, Clone, PartialEq)]
pub struct Rocket {
    /// ID unique (par moteur) de la fusée
    pub id: u64,

    /// Position courante, en pixels absolus (y vers le bas)
    pub pos: Vec2,
    /// Hauteur à laquelle la fusée explose
    pub target_y: f32,
    /// Vitesse de montée (pixels / frame)
    pub speed: f32,
    /// Teinte en degrés
    pub hue: f32,

    pub trail: Trail,
}

impl Rocket {
    /// Crée une fusée au bas de l'écran avec des paramètres tirés au hasard.
    pub fn launch(id: u64, config: &PhysicConfig, rng: &mut impl Rng, width: f32, height: f32) -> Self {
        let x = random_between(rng, 0.0, width);
        let target_y =
            height * random_between(rng, config.rocket_target_min, config.rocket_target_max);
        let speed = random_between(rng, config.rocket_min_speed, config.rocket_max_speed);
        let base_hue = config
            .rocket_hues
            .choose(rng)
            .copied()
            .unwrap_or(FALLBACK_HUE);
        let hue = base_hue
            + random_between(
                rng,
                config.rocket_hue_jitter_min,
                config.rocket_hue_jitter_max,
            );

        Self::new(id, Vec2::new(x, height), target_y, speed, hue, config.rocket_trail_len)
    }

    pub fn new(id: u64, pos: Vec2, target_y: f32, speed: f32, hue: f32, trail_len: usize) -> Self {
        Self {
            id,
            pos,
            target_y,
            speed,
            hue,
            trail: Trail::new(trail_len),
        }
    }

    /// Un pas de simulation.
    ///
    /// Retourne `true` si la fusée a atteint sa hauteur cible pendant ce pas :
    /// l'appelant doit alors déclencher l'explosion et la retirer.
    pub fn update(&mut self, config: &PhysicConfig) -> bool {
        self.trail.push(self.pos, 1.0);
        self.trail.fade(config.rocket_trail_fade);

        self.pos.y -= self.speed;
        // ondulation horizontale
        self.pos.x += (self.pos.y * config.rocket_wobble_freq).sin() * config.rocket_wobble_amp;

        self.pos.y <= self.target_y
    }
}
