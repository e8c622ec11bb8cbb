use anyhow::Result;
use glam::{Vec2, Vec4};
use std::path::Path;

use crate::ambient_engine::AmbientLayer;
use crate::physic_engine::PhysicEngine;
use crate::renderer_engine::config::RendererConfig;
use crate::renderer_engine::types::CompositeMode;

/// Surface raster 2D minimale dont le rendu a besoin.
///
/// Les coordonnées sont en pixels, origine en haut à gauche, y vers le bas.
/// Un dessin hors surface ou dégénéré (rayon nul, NaN) ne produit rien.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Change les dimensions. Le contenu est effacé.
    fn resize(&mut self, width: u32, height: u32);

    fn set_composite(&mut self, mode: CompositeMode);
    fn set_fill(&mut self, color: Vec4);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
}

pub trait RendererEngine {
    /// Dessine l'état courant. Ne modifie jamais la simulation.
    /// Retourne le nombre de primitives dessinées.
    fn render_frame<P: PhysicEngine>(
        &mut self,
        physic: &P,
        ambient: &[&AmbientLayer],
        now_ms: u64,
    ) -> usize;

    fn set_window_size(&mut self, width: i32, height: i32);

    fn reload_config(&mut self, config: &RendererConfig);

    /// Exporte la dernière image en PNG.
    fn save_screenshot(&self, path: &Path) -> Result<()>;

    fn close(&mut self);
}
