use glam::{Vec2, Vec4};
use rand::Rng;
use std::collections::VecDeque;

/// Couleur structurée HSL + alpha.
///
/// - `h` : teinte en degrés (peut sortir de [0, 360), elle est repliée à la conversion)
/// - `s` : saturation en pourcentage [0, 100]
/// - `l` : luminosité en pourcentage [0, 100]
/// - `a` : opacité [0, 1]
///
/// La conversion vers RGBA n'a lieu qu'au moment du dessin (`to_rgba`),
/// on ne manipule jamais de chaînes de couleur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Couleur opaque.
    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Self::new(h, s, l, 1.0)
    }

    /// Même couleur, alpha remplacé.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Conversion HSL -> RGB (espace sRGB, composantes dans [0, 1]).
    ///
    /// Formule CSS : `f(n) = l - a * max(-1, min(k - 3, 9 - k, 1))`
    /// avec `k = (n + h / 30) mod 12` et `a = s * min(l, 1 - l)`.
    pub fn to_rgba(self) -> Vec4 {
        let h = self.h.rem_euclid(360.0);
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);
        let amp = s * l.min(1.0 - l);

        let channel = |n: f32| {
            let k = (n + h / 30.0) % 12.0;
            l - amp * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
        };

        let alpha = if self.a.is_finite() {
            self.a.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Vec4::new(channel(0.0), channel(8.0), channel(4.0), alpha)
    }
}

/// Point d'une traînée : position passée + alpha associé.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Historique borné des positions récentes (le plus ancien est évincé).
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, pos: Vec2, alpha: f32) {
        self.points.push_back(TrailPoint { pos, alpha });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Multiplie l'alpha de tous les points existants.
    pub fn fade(&mut self, factor: f32) {
        for p in self.points.iter_mut() {
            p.alpha *= factor;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Explosion déclenchée pendant un `advance()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Explosion {
    pub pos: Vec2,
    pub hue: f32,
}

// ------------------------
// UpdateResult
// ------------------------
pub struct UpdateResult<'a> {
    /// Explosions déclenchées par les fusées arrivées à leur hauteur cible
    pub triggered_explosions: &'a [Explosion],
    /// Particules supprimées (vie épuisée) pendant ce pas
    pub expired_particles: usize,
}

/// Tirage uniforme dans `[min, max)` qui tolère un intervalle vide ou inversé
/// (valeurs venant de la config) : retourne `min` au lieu de paniquer.
pub fn random_between(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
