pub mod types;
pub use self::types::{
    AmbientId, AmbientKind, AmbientNode, LayerId, HEART_ITEMS, PETAL_COLOR, SPARKLE_COLORS,
};

pub mod ambient_layer;
pub use self::ambient_layer::AmbientLayer;
