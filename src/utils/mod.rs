pub mod human_bytes;
pub mod tools;

pub use self::human_bytes::HumanBytes;
pub use self::tools::show_rust_core_dependencies;

pub mod glfw_window;
pub use self::glfw_window::{CenterWindow, Fullscreen};
