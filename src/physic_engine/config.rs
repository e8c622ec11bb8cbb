use serde::{Deserialize, Serialize};

/// Teintes rose / magenta / rouge-rose utilisées pour les fusées.
pub const PINK_HUES: [f32; 11] = [
    310.0, 320.0, 330.0, 340.0, 345.0, 350.0, 355.0, 0.0, 5.0, 10.0, 15.0,
];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicConfig {
    // Fusées
    pub rocket_trail_len: usize,
    pub rocket_trail_fade: f32,
    pub rocket_min_speed: f32,
    pub rocket_max_speed: f32,
    /// Hauteur d'explosion en fraction de la hauteur de l'écran : [min, max)
    pub rocket_target_min: f32,
    pub rocket_target_max: f32,
    pub rocket_wobble_freq: f32,
    pub rocket_wobble_amp: f32,
    pub rocket_hues: Vec<f32>,
    pub rocket_hue_jitter_min: f32,
    pub rocket_hue_jitter_max: f32,

    // Explosions (bornes inclusives)
    pub burst_min_particles: usize,
    pub burst_max_particles: usize,
    pub glitter_particles: usize,

    // Particules
    pub particle_trail_len: usize,
    pub particle_drag: f32,

    // Coquille (intervalles [min, max))
    pub shell_decay_min: f32,
    pub shell_decay_max: f32,
    pub shell_size_min: f32,
    pub shell_size_max: f32,
    pub shell_gravity_min: f32,
    pub shell_gravity_max: f32,
    pub shell_lightness_min: f32,
    pub shell_lightness_max: f32,
    /// Écart de teinte tiré dans [-variance, variance)
    pub shell_hue_variance: f32,
    /// Probabilité qu'une particule de coquille scintille
    pub shell_sparkle_chance: f64,

    // Paillettes
    pub glitter_decay_min: f32,
    pub glitter_decay_max: f32,
    pub glitter_size_min: f32,
    pub glitter_size_max: f32,
    pub glitter_speed_max: f32,
    pub glitter_gravity: f32,
    pub glitter_saturation: f32,
    pub glitter_lightness: f32,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            rocket_trail_len: 12,
            rocket_trail_fade: 0.88,
            rocket_min_speed: 4.0,
            rocket_max_speed: 7.0,
            rocket_target_min: 0.08,
            rocket_target_max: 0.43,
            rocket_wobble_freq: 0.02,
            rocket_wobble_amp: 0.5,
            rocket_hues: PINK_HUES.to_vec(),
            rocket_hue_jitter_min: -7.0,
            rocket_hue_jitter_max: 8.0,
            burst_min_particles: 90,
            burst_max_particles: 159,
            glitter_particles: 35,
            particle_trail_len: 6,
            particle_drag: 0.99,
            shell_decay_min: 0.006,
            shell_decay_max: 0.018,
            shell_size_min: 2.0,
            shell_size_max: 4.5,
            shell_gravity_min: 0.025,
            shell_gravity_max: 0.045,
            shell_lightness_min: 50.0,
            shell_lightness_max: 80.0,
            shell_hue_variance: 20.0,
            shell_sparkle_chance: 0.6,
            glitter_decay_min: 0.004,
            glitter_decay_max: 0.012,
            glitter_size_min: 1.0,
            glitter_size_max: 2.0,
            glitter_speed_max: 2.0,
            glitter_gravity: 0.008,
            glitter_saturation: 80.0,
            glitter_lightness: 90.0,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
