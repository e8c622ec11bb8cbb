use glam::Vec4;

/// Mode de composition des prochains dessins (équivalent `globalCompositeOperation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// "source-over" : mélange alpha classique
    #[default]
    SourceOver,
    /// "lighter" : addition des couleurs (saturée à 1)
    Lighter,
}

/// Couleur 8 bits + alpha -> RGBA flottant.
pub fn rgb8(rgb: [u8; 3], alpha: f32) -> Vec4 {
    Vec4::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
        alpha,
    )
}
