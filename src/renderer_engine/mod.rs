pub mod r#trait;
pub use r#trait::{RendererEngine, Surface};

pub mod types;
pub use self::types::{rgb8, CompositeMode};

pub mod config;
pub use self::config::RendererConfig;

pub mod raster_surface;
pub use self::raster_surface::RasterSurface;

pub mod fireworks_painter;
pub use self::fireworks_painter::FireworksPainter;

pub mod ambient_painter;
pub use self::ambient_painter::AmbientPainter;

pub mod gl_presenter;
pub use self::gl_presenter::GlPresenter;

pub mod renderer;
pub use self::renderer::Renderer;

pub mod tools;
pub use self::tools::show_opengl_context_info;

pub mod utils;
