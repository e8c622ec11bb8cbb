pub mod timer_service;
pub use self::timer_service::{TimerHandle, TimerService};

pub mod task;
pub use self::task::Task;

pub mod settings;
pub use self::settings::{LaunchSettings, LaunchSettingsBuilder};

pub mod launch_controller;
pub use self::launch_controller::{LaunchController, LaunchMode};
