use glam::Vec2;

use crate::ambient_engine::{AmbientKind, AmbientLayer, AmbientNode, PETAL_COLOR};
use crate::renderer_engine::r#trait::Surface;
use crate::renderer_engine::types::{rgb8, CompositeMode};

/// Amplitude (px) du balancement des pétales.
const PETAL_SWAY_PX: f32 = 40.0;
/// Nombre d'allers-retours d'un pétale pendant sa chute.
const PETAL_SWAY_TURNS: f32 = 2.0;
/// Hauteur (px) parcourue par un cœur avant de disparaître.
const HEART_RISE_PX: f32 = 300.0;

/// Apparition sur les 10 premiers %, disparition sur les 20 derniers %.
#[inline]
pub fn fade_envelope(progress: f32) -> f32 {
    (progress * 10.0).min(1.0) * ((1.0 - progress) * 5.0).min(1.0)
}

/// Position d'un élément décoratif à l'instant `now_ms`, `None` tant qu'il
/// n'a pas démarré ou une fois son animation terminée.
pub fn node_position(node: &AmbientNode, now_ms: u64, width: f32, height: f32) -> Option<(Vec2, f32)> {
    let p = node.progress(now_ms)?;
    if p >= 1.0 {
        return None;
    }
    let x = node.x_percent / 100.0 * width;
    let pos = match node.kind {
        AmbientKind::Sparkle { .. } => Vec2::new(x, -10.0 + p * (height + 20.0)),
        AmbientKind::Petal => {
            let sway = (p * PETAL_SWAY_TURNS * std::f32::consts::TAU).sin() * PETAL_SWAY_PX;
            Vec2::new(x + sway, -20.0 + p * (height + 40.0))
        }
        AmbientKind::Heart { .. } => Vec2::new(x, height - p * HEART_RISE_PX.min(height)),
    };
    Some((pos, fade_envelope(p)))
}

/// Dessine les conteneurs décoratifs visibles par-dessus les feux d'artifice.
#[derive(Debug, Default)]
pub struct AmbientPainter;

impl AmbientPainter {
    pub fn paint<S: Surface>(&self, surface: &mut S, layers: &[&AmbientLayer], now_ms: u64) -> usize {
        let (width, height) = (surface.width() as f32, surface.height() as f32);
        surface.set_composite(CompositeMode::SourceOver);

        let mut draws = 0;
        for layer in layers.iter().filter(|l| l.is_visible()) {
            for node in layer.nodes() {
                let Some((pos, fade)) = node_position(node, now_ms, width, height) else {
                    continue;
                };
                if fade <= 0.0 {
                    continue;
                }
                draws += Self::paint_node(surface, node, pos, fade);
            }
        }
        draws
    }

    fn paint_node<S: Surface>(surface: &mut S, node: &AmbientNode, pos: Vec2, fade: f32) -> usize {
        match node.kind {
            AmbientKind::Sparkle { color, glow } => {
                surface.set_fill(rgb8(color, 0.25 * fade));
                surface.fill_circle(pos, node.size / 2.0 + glow / 2.0);
                surface.set_fill(rgb8(color, fade));
                surface.fill_circle(pos, node.size / 2.0);
                2
            }
            AmbientKind::Petal => {
                surface.set_fill(rgb8(PETAL_COLOR, 0.8 * fade));
                surface.fill_circle(pos, node.size * 1.05 / 2.0);
                1
            }
            AmbientKind::Heart { color, .. } => {
                surface.set_fill(rgb8(color, fade));
                surface.fill_circle(pos, node.size / 2.0);
                1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sparkle(spawned_at_ms: u64) -> AmbientNode {
        AmbientNode {
            kind: AmbientKind::Sparkle {
                color: [255, 105, 180],
                glow: 6.0,
            },
            x_percent: 50.0,
            size: 4.0,
            duration_ms: 1_000.0,
            delay_ms: 0.0,
            spawned_at_ms,
            lifetime_ms: 12_000,
        }
    }

    #[test]
    fn test_fade_envelope_bounds() {
        assert_eq!(fade_envelope(0.0), 0.0);
        assert_eq!(fade_envelope(0.5), 1.0);
        assert!(fade_envelope(1.0).abs() < 1e-6);
        assert!((fade_envelope(0.05) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sparkle_falls_through_the_screen() {
        let node = sparkle(0);
        let (start, _) = node_position(&node, 0, 200.0, 100.0).unwrap();
        let (mid, _) = node_position(&node, 500, 200.0, 100.0).unwrap();
        assert_eq!(start, Vec2::new(100.0, -10.0));
        assert_eq!(mid, Vec2::new(100.0, 50.0));
        assert!(node_position(&node, 1_000, 200.0, 100.0).is_none());
    }
}
