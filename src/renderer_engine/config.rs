use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Prune sombre du voile de persistance
    pub background_rgb: [u8; 3],
    /// Opacité du voile peint à chaque frame (traînées)
    pub fade_alpha: f32,

    pub rocket_trail_radius: f32,
    pub rocket_trail_lightness: f32,
    pub rocket_head_radius: f32,
    pub rocket_head_lightness: f32,

    /// Rayon des points de traînée = size * scale * alpha
    pub particle_trail_scale: f32,
    pub particle_trail_alpha: f32,

    /// Halo dessiné si alpha > seuil
    pub halo_threshold: f32,
    pub halo_scale: f32,
    pub halo_alpha: f32,

    /// Facteur de scintillement des paillettes [min, max)
    pub twinkle_min: f32,
    pub twinkle_max: f32,

    pub ambient_enabled: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            background_rgb: [45, 27, 51],
            fade_alpha: 0.14,
            rocket_trail_radius: 2.0,
            rocket_trail_lightness: 75.0,
            rocket_head_radius: 3.0,
            rocket_head_lightness: 92.0,
            particle_trail_scale: 0.4,
            particle_trail_alpha: 0.25,
            halo_threshold: 0.4,
            halo_scale: 2.5,
            halo_alpha: 0.1,
            twinkle_min: 0.5,
            twinkle_max: 2.0,
            ambient_enabled: true,
        }
    }
}

impl RendererConfig {
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
