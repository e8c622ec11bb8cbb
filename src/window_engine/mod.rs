pub mod r#trait;
pub use self::r#trait::{InputEvent, WindowEngine};

pub mod glfw_window_engine;
pub use self::glfw_window_engine::GlfwWindowEngine;
