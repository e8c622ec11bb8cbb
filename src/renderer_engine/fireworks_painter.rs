use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physic_engine::types::random_between;
use crate::physic_engine::{Hsla, Particle, PhysicEngine, Rocket};
use crate::renderer_engine::config::RendererConfig;
use crate::renderer_engine::r#trait::Surface;
use crate::renderer_engine::types::{rgb8, CompositeMode};

/// Dessine fusées et particules sur une [`Surface`].
///
/// Ordre d'une frame :
/// 1. voile de persistance (composition normale)
/// 2. passage en composition additive
/// 3. fusées : traînée puis tête
/// 4. particules : traînée, disque, halo
///
/// Le scintillement des paillettes utilise le RNG propre au painter :
/// dessiner ne touche jamais à l'état de la simulation.
#[derive(Debug)]
pub struct FireworksPainter {
    rng: StdRng,
}

impl Default for FireworksPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl FireworksPainter {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Peint une frame complète. Retourne le nombre de primitives dessinées.
    pub fn paint<S: Surface, P: PhysicEngine>(
        &mut self,
        surface: &mut S,
        physic: &P,
        config: &RendererConfig,
    ) -> usize {
        let mut draws = 0;

        surface.set_composite(CompositeMode::SourceOver);
        surface.set_fill(rgb8(config.background_rgb, config.fade_alpha));
        surface.fill_rect(0.0, 0.0, surface.width() as f32, surface.height() as f32);
        draws += 1;

        surface.set_composite(CompositeMode::Lighter);

        for rocket in physic.rockets() {
            draws += Self::paint_rocket(surface, rocket, config);
        }
        for particle in physic.particles() {
            draws += self.paint_particle(surface, particle, config);
        }

        draws
    }

    fn paint_rocket<S: Surface>(surface: &mut S, rocket: &Rocket, config: &RendererConfig) -> usize {
        for point in rocket.trail.iter() {
            let color = Hsla::new(rocket.hue, 100.0, config.rocket_trail_lightness, point.alpha);
            surface.set_fill(color.to_rgba());
            surface.fill_circle(point.pos, config.rocket_trail_radius);
        }

        let head = Hsla::hsl(rocket.hue, 100.0, config.rocket_head_lightness);
        surface.set_fill(head.to_rgba());
        surface.fill_circle(rocket.pos, config.rocket_head_radius);

        rocket.trail.len() + 1
    }

    fn paint_particle<S: Surface>(
        &mut self,
        surface: &mut S,
        particle: &Particle,
        config: &RendererConfig,
    ) -> usize {
        let mut draws = 0;

        for point in particle.trail.iter() {
            let color = particle
                .color
                .with_alpha(point.alpha * config.particle_trail_alpha);
            surface.set_fill(color.to_rgba());
            surface.fill_circle(
                point.pos,
                particle.size * config.particle_trail_scale * point.alpha,
            );
            draws += 1;
        }

        let alpha = particle.life;
        let mut size = particle.size * particle.life;
        if particle.twinkles() {
            // tiré à chaque frame, même à vie constante
            size *= random_between(&mut self.rng, config.twinkle_min, config.twinkle_max);
        }

        surface.set_fill(particle.color.with_alpha(alpha).to_rgba());
        surface.fill_circle(particle.pos, size);
        draws += 1;

        if alpha > config.halo_threshold {
            surface.set_fill(particle.color.with_alpha(alpha * config.halo_alpha).to_rgba());
            surface.fill_circle(particle.pos, size * config.halo_scale);
            draws += 1;
        }

        draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic_engine::physic_engine_fireworks::PhysicEngineTestHelpers;
    use crate::physic_engine::{PhysicConfig, PhysicEngineFireworks};
    use crate::renderer_engine::raster_surface::RasterSurface;
    use glam::{Vec2, Vec4};

    /// Particule de coquille immobile, sans traînée.
    fn particle(pos: Vec2, size: f32, life: f32, twinkle: bool) -> Particle {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::shell(pos, 0.0, 0.0, 330.0, &PhysicConfig::default(), &mut rng);
        p.size = size;
        p.life = life;
        p.sparkle = twinkle;
        p.glitter = twinkle;
        p
    }

    fn scene(particles: Vec<Particle>) -> PhysicEngineFireworks {
        let mut physic = PhysicEngineFireworks::with_seed(&PhysicConfig::default(), 64.0, 64.0, 1);
        *physic.particles_mut() = particles;
        physic
    }

    /// Sans voile : seuls les dessins de la scène laissent une trace.
    fn no_veil() -> RendererConfig {
        RendererConfig {
            fade_alpha: 0.0,
            ..RendererConfig::default()
        }
    }

    fn snapshot(surface: &RasterSurface) -> Vec<Vec4> {
        (0..surface.height())
            .flat_map(|y| (0..surface.width()).map(move |x| (x, y)))
            .filter_map(|(x, y)| surface.pixel(x, y))
            .collect()
    }

    fn alpha_at(surface: &RasterSurface, x: u32, y: u32) -> f32 {
        surface.pixel(x, y).map_or(0.0, |p| p.w)
    }

    #[test]
    fn test_empty_scene_only_paints_veil() {
        let physic = PhysicEngineFireworks::with_seed(&PhysicConfig::default(), 8.0, 8.0, 1);
        let mut surface = RasterSurface::new(8, 8);
        let mut painter = FireworksPainter::with_seed(1);

        let draws = painter.paint(&mut surface, &physic, &RendererConfig::default());

        assert_eq!(draws, 1);
        assert_eq!(surface.composite(), CompositeMode::Lighter);
        let p = surface.pixel(3, 3).unwrap();
        assert!((p.w - 0.14).abs() < 1e-5);
    }

    #[test]
    fn test_rocket_draws_trail_and_head() {
        let mut physic = PhysicEngineFireworks::with_seed(&PhysicConfig::default(), 64.0, 64.0, 1);
        let mut rocket = Rocket::new(0, Vec2::new(32.0, 32.0), 0.0, 5.0, 330.0, 12);
        rocket.trail.push(Vec2::new(32.0, 40.0), 1.0);
        rocket.trail.push(Vec2::new(32.0, 36.0), 1.0);
        physic.push_rocket(rocket);
        let mut surface = RasterSurface::new(64, 64);
        let mut painter = FireworksPainter::with_seed(1);

        let draws = painter.paint(&mut surface, &physic, &RendererConfig::default());

        assert_eq!(draws, 1 + 2 + 1);
        let head = surface.pixel(32, 32).unwrap();
        let corner = surface.pixel(0, 0).unwrap();
        assert!(head.x > corner.x);
    }

    #[test]
    fn test_halo_only_above_threshold() {
        let mut bright = particle(Vec2::new(16.5, 16.5), 4.0, 0.5, false);
        bright.trail.push(Vec2::new(16.5, 20.5), 0.5);
        bright.trail.push(Vec2::new(16.5, 18.5), 0.5);
        let mut dim = particle(Vec2::new(48.5, 48.5), 4.0, 0.3, false);
        dim.trail.push(Vec2::new(48.5, 52.5), 0.3);
        dim.trail.push(Vec2::new(48.5, 50.5), 0.3);
        let physic = scene(vec![bright, dim]);
        let mut surface = RasterSurface::new(64, 64);
        let mut painter = FireworksPainter::with_seed(1);

        let draws = painter.paint(&mut surface, &physic, &RendererConfig::default());

        // voile + (traînée, disque, halo) + (traînée, disque)
        assert_eq!(draws, 1 + (2 + 1 + 1) + (2 + 1));
    }

    #[test]
    fn test_halo_radius_and_alpha() {
        let config = no_veil();
        let mut painter = FireworksPainter::with_seed(1);

        // vie 0.5 : disque de rayon 2, halo de rayon 5 à alpha 0.05
        let mut surface = RasterSurface::new(64, 64);
        painter.paint(&mut surface, &scene(vec![particle(Vec2::new(32.5, 32.5), 4.0, 0.5, false)]), &config);
        assert!((alpha_at(&surface, 36, 32) - 0.05).abs() < 1e-5);
        assert_eq!(alpha_at(&surface, 38, 32), 0.0);

        // vie 0.3 : pas de halo
        let mut surface = RasterSurface::new(64, 64);
        painter.paint(&mut surface, &scene(vec![particle(Vec2::new(32.5, 32.5), 4.0, 0.3, false)]), &config);
        assert_eq!(alpha_at(&surface, 36, 32), 0.0);
    }

    #[test]
    fn test_disc_radius_follows_size_times_life() {
        // taille 10, vie 0.4 : rayon 4, pas de halo (seuil strict)
        let physic = scene(vec![particle(Vec2::new(32.5, 32.5), 10.0, 0.4, false)]);
        let mut surface = RasterSurface::new(64, 64);
        let mut painter = FireworksPainter::with_seed(1);

        let draws = painter.paint(&mut surface, &physic, &no_veil());

        assert_eq!(draws, 1 + 1);
        assert!((alpha_at(&surface, 32, 32) - 0.4).abs() < 1e-5);
        assert!((alpha_at(&surface, 35, 32) - 0.4).abs() < 1e-5);
        // bord du disque : demi-couverture
        assert!((alpha_at(&surface, 36, 32) - 0.2).abs() < 1e-5);
        assert_eq!(alpha_at(&surface, 37, 32), 0.0);
        assert_eq!(alpha_at(&surface, 32, 37), 0.0);
    }

    #[test]
    fn test_trail_dots_scale_with_point_alpha() {
        let mut p = particle(Vec2::new(10.5, 10.5), 10.0, 0.3, false);
        p.trail.push(Vec2::new(40.5, 40.5), 1.0);
        p.trail.push(Vec2::new(40.5, 20.5), 0.5);
        let physic = scene(vec![p]);
        let mut surface = RasterSurface::new(64, 64);
        let mut painter = FireworksPainter::with_seed(1);

        painter.paint(&mut surface, &physic, &no_veil());

        // alpha 1 : rayon 10 x 0.4 = 4, opacité 0.25
        assert!((alpha_at(&surface, 43, 40) - 0.25).abs() < 1e-5);
        assert_eq!(alpha_at(&surface, 45, 40), 0.0);
        // alpha 0.5 : rayon 2, opacité 0.125
        assert!((alpha_at(&surface, 41, 20) - 0.125).abs() < 1e-5);
        assert_eq!(alpha_at(&surface, 43, 20), 0.0);
    }

    #[test]
    fn test_glitter_twinkles_at_constant_life() {
        let physic = scene(vec![particle(Vec2::new(32.5, 32.5), 2.0, 1.0, true)]);
        let mut painter = FireworksPainter::with_seed(3);
        let config = no_veil();

        let frames: Vec<Vec<Vec4>> = (0..5)
            .map(|_| {
                let mut surface = RasterSurface::new(64, 64);
                painter.paint(&mut surface, &physic, &config);
                snapshot(&surface)
            })
            .collect();

        assert!(frames[1..].iter().any(|f| *f != frames[0]));
        assert!(physic.particles().iter().all(|p| p.life == 1.0));
    }

    #[test]
    fn test_plain_particle_is_stable_between_frames() {
        let physic = scene(vec![particle(Vec2::new(32.5, 32.5), 2.0, 1.0, false)]);
        let mut painter = FireworksPainter::with_seed(3);
        let config = no_veil();

        let mut first = RasterSurface::new(64, 64);
        painter.paint(&mut first, &physic, &config);
        let mut second = RasterSurface::new(64, 64);
        painter.paint(&mut second, &physic, &config);

        assert_eq!(snapshot(&first), snapshot(&second));
    }
}
