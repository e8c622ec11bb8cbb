use generational_arena::Index;

/// Identifiant d'un élément décoratif dans son conteneur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmbientId(pub(crate) Index);

/// Conteneur d'appartenance (deux conteneurs distincts, comme deux `div`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    /// Étincelles et pétales, visibles en permanence
    Sky,
    /// Cœurs flottants de la section lettre
    Letter,
}

/// Couleurs des étincelles.
pub const SPARKLE_COLORS: [[u8; 3]; 8] = [
    [0xff, 0x69, 0xb4],
    [0xff, 0xb6, 0xc1],
    [0xff, 0x85, 0xa2],
    [0xff, 0xc0, 0xcb],
    [0xff, 0x14, 0x93],
    [0xfd, 0x79, 0xa8],
    [0xff, 0xd1, 0xdc],
    [0xff, 0x9e, 0xb5],
];

/// Rose pâle des pétales de cerisier.
pub const PETAL_COLOR: [u8; 3] = [0xff, 0xb7, 0xc5];

/// Glyphes des cœurs flottants, avec la couleur utilisée pour les dessiner.
pub const HEART_ITEMS: [(&str, [u8; 3]); 9] = [
    ("❤️", [0xe6, 0x1e, 0x3c]),
    ("💕", [0xff, 0x69, 0xb4]),
    ("💗", [0xff, 0x4f, 0x9a]),
    ("💖", [0xff, 0x85, 0xc8]),
    ("💝", [0xff, 0x3e, 0x7f]),
    ("🌸", [0xff, 0xb7, 0xc5]),
    ("🥰", [0xff, 0xc8, 0x3d]),
    ("✨", [0xff, 0xf0, 0x9e]),
    ("💋", [0xd8, 0x1b, 0x60]),
];

#[derive(Debug, Clone, PartialEq)]
pub enum AmbientKind {
    /// Petit point lumineux qui tombe du haut de l'écran
    Sparkle { color: [u8; 3], glow: f32 },
    /// Pétale qui tombe en se balançant
    Petal,
    /// Emoji qui remonte depuis le bas du conteneur
    Heart {
        glyph: &'static str,
        color: [u8; 3],
        font_rem: f32,
    },
}

/// Élément décoratif de courte durée.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientNode {
    pub kind: AmbientKind,
    /// Position horizontale en pourcentage de la largeur [0, 100)
    pub x_percent: f32,
    /// Taille en pixels (largeur ; hauteur des pétales = 1.1 x)
    pub size: f32,
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub spawned_at_ms: u64,
    /// Délai de retrait, toujours supérieur à l'animation visible
    pub lifetime_ms: u64,
}

impl AmbientNode {
    /// Avancement de l'animation dans [0, 1] à l'instant `now_ms`.
    /// `None` pendant le délai de départ.
    pub fn progress(&self, now_ms: u64) -> Option<f32> {
        let elapsed = now_ms.saturating_sub(self.spawned_at_ms) as f32 - self.delay_ms;
        if elapsed < 0.0 {
            return None;
        }
        if self.duration_ms <= 0.0 {
            return Some(1.0);
        }
        Some((elapsed / self.duration_ms).min(1.0))
    }
}
