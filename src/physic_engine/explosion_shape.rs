//! Formes d'explosion des feux d'artifice.
//!
//! La forme est tirée **une seule fois** par explosion, puis chaque particule
//! de coquille obtient sa direction et sa vitesse via [`ExplosionShape::launch_vector`].

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Facteur appliqué à la norme de la courbe du cœur pour obtenir une vitesse.
pub const HEART_SPEED_SCALE: f32 = 0.22;

/// Vitesses des deux anneaux concentriques (indices pairs / impairs).
pub const DOUBLE_RING_SPEEDS: (f32, f32) = (3.0, 5.5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplosionShape {
    /// Angles réguliers, vitesse aléatoire [2, 6)
    Circle,
    /// Angles et vitesses aléatoires (éclatement irrégulier)
    StarBurst,
    /// Courbe paramétrique du cœur
    Heart,
    /// Deux anneaux concentriques
    DoubleRing,
    /// Angles réguliers, vitesse aléatoire [1.5, 6.5)
    Chrysanthemum,
}

impl ExplosionShape {
    pub const ALL: [ExplosionShape; 5] = [
        ExplosionShape::Circle,
        ExplosionShape::StarBurst,
        ExplosionShape::Heart,
        ExplosionShape::DoubleRing,
        ExplosionShape::Chrysanthemum,
    ];

    /// Tirage uniforme parmi les 5 formes.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExplosionShape::Circle => "circle",
            ExplosionShape::StarBurst => "star burst",
            ExplosionShape::Heart => "heart",
            ExplosionShape::DoubleRing => "double ring",
            ExplosionShape::Chrysanthemum => "chrysanthemum",
        }
    }

    /// Retourne `(angle, vitesse)` pour la particule `index` parmi `count`.
    pub fn launch_vector(&self, index: usize, count: usize, rng: &mut impl Rng) -> (f32, f32) {
        let even_angle = evenly_spaced(index, count);
        match self {
            ExplosionShape::Circle => (even_angle, rng.random_range(2.0..6.0)),
            ExplosionShape::StarBurst => (rng.random_range(0.0..TAU), rng.random_range(1.0..7.0)),
            ExplosionShape::Heart => {
                let h = heart_curve(even_angle);
                (h.y.atan2(h.x), h.length() * HEART_SPEED_SCALE)
            }
            ExplosionShape::DoubleRing => {
                let speed = if index % 2 == 0 {
                    DOUBLE_RING_SPEEDS.0
                } else {
                    DOUBLE_RING_SPEEDS.1
                };
                (even_angle, speed)
            }
            ExplosionShape::Chrysanthemum => (even_angle, rng.random_range(1.5..6.5)),
        }
    }
}

/// Angle `2π / count * index` (0 si `count == 0`).
#[inline]
fn evenly_spaced(index: usize, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        TAU / count as f32 * index as f32
    }
}

/// Courbe paramétrique du cœur, y vers le bas (pointe en bas à l'écran).
///
/// ```text
/// hx = 16 sin³(t)
/// hy = -(13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)
/// ```
pub fn heart_curve(t: f32) -> Vec2 {
    let hx = 16.0 * t.sin().powi(3);
    let hy = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Vec2::new(hx, hy)
}
