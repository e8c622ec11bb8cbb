use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use crate::ambient_engine::AmbientLayer;
use crate::physic_engine::PhysicEngine;
use crate::renderer_engine::{
    ambient_painter::AmbientPainter, config::RendererConfig, fireworks_painter::FireworksPainter,
    gl_presenter::GlPresenter, r#trait::Surface, raster_surface::RasterSurface, RendererEngine,
};
use crate::utils::HumanBytes;

/// Rendu logiciel des feux d'artifice et des éléments décoratifs.
///
/// Deux surfaces :
/// - `trails` garde l'image d'une frame à l'autre (le voile de persistance
///   y dessine les traînées), seuls les feux d'artifice y sont peints ;
/// - `frame` est recopiée depuis `trails` à chaque frame puis reçoit les
///   éléments décoratifs, qui ne laissent donc pas de traînée.
///
/// Sans présentateur OpenGL (`headless`) le rendu reste entièrement en mémoire.
pub struct Renderer {
    trails: RasterSurface,
    frame: RasterSurface,
    fireworks: FireworksPainter,
    ambient: AmbientPainter,
    presenter: Option<GlPresenter>,
    config: RendererConfig,

    window_size: (i32, i32),
    frames: u64,
}

impl Renderer {
    /// Renderer affichant dans le contexte OpenGL courant.
    ///
    /// Le contexte doit avoir été créé (et les pointeurs GL chargés) par le
    /// moteur de fenêtre.
    pub fn new(width: i32, height: i32, config: &RendererConfig) -> Result<Self> {
        let mut renderer = Self::headless(width, height, config);
        // SAFETY: contexte créé et rendu courant par le WindowEngine
        renderer.presenter = Some(unsafe { GlPresenter::new(width.max(0) as u32, height.max(0) as u32) });
        info!(
            "🎨 Renderer ready: {} x {}, surface buffers {}",
            width,
            height,
            (2 * renderer.trails.byte_size()).human_bytes()
        );
        Ok(renderer)
    }

    /// Renderer sans fenêtre (tests, captures).
    pub fn headless(width: i32, height: i32, config: &RendererConfig) -> Self {
        let (w, h) = (width.max(0) as u32, height.max(0) as u32);
        Self {
            trails: RasterSurface::new(w, h),
            frame: RasterSurface::new(w, h),
            fireworks: FireworksPainter::new(),
            ambient: AmbientPainter,
            presenter: None,
            config: config.clone(),
            window_size: (width, height),
            frames: 0,
        }
    }

    /// Rend le scintillement reproductible.
    pub fn with_twinkle_seed(mut self, seed: u64) -> Self {
        self.fireworks = FireworksPainter::with_seed(seed);
        self
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn window_size(&self) -> (i32, i32) {
        self.window_size
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Dernière image composée.
    pub fn frame(&self) -> &RasterSurface {
        &self.frame
    }
}

impl RendererEngine for Renderer {
    fn render_frame<P: PhysicEngine>(
        &mut self,
        physic: &P,
        ambient: &[&AmbientLayer],
        now_ms: u64,
    ) -> usize {
        let mut draws = self.fireworks.paint(&mut self.trails, physic, &self.config);

        self.frame.copy_from(&self.trails);
        if self.config.ambient_enabled {
            draws += self.ambient.paint(&mut self.frame, ambient, now_ms);
        }

        if let Some(presenter) = self.presenter.as_mut() {
            let image = self.frame.to_rgba8();
            // SAFETY: le presenter n'existe qu'avec un contexte GL courant
            unsafe { presenter.present(&image, self.window_size) };
        }

        self.frames += 1;
        draws
    }

    fn set_window_size(&mut self, width: i32, height: i32) {
        if (width, height) == self.window_size {
            return;
        }
        self.window_size = (width, height);
        let (w, h) = (width.max(0) as u32, height.max(0) as u32);
        self.trails.resize(w, h);
        self.frame.resize(w, h);
        debug!("🖥️ Renderer surface resized: {} x {}", w, h);
    }

    fn reload_config(&mut self, config: &RendererConfig) {
        self.config = config.clone();
        info!("🎨 Renderer config reloaded");
    }

    fn save_screenshot(&self, path: &Path) -> Result<()> {
        self.frame.save_png(path)?;
        info!("📸 Screenshot saved to {}", path.display());
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut presenter) = self.presenter.take() {
            // SAFETY: le contexte GL est encore vivant tant que la fenêtre l'est
            unsafe { presenter.close() };
        }
        debug!("🎨 Renderer closed after {} frames", self.frames);
    }
}
