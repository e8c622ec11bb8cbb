use glfw::{Monitor, Window, WindowMode};
use log::{info, warn};
use std::mem::discriminant;

pub trait CenterWindow {
    fn center_on_primary_monitor(&mut self);
}

impl CenterWindow for Window {
    fn center_on_primary_monitor(&mut self) {
        let mut glfw = self.glfw.clone();
        glfw.with_primary_monitor(|_, primary_monitor| {
            let Some(monitor) = primary_monitor else {
                return;
            };
            if let Some(mode) = monitor.get_video_mode() {
                let (monitor_x, monitor_y) = monitor.get_pos();
                let (window_w, window_h) = self.get_size();
                self.set_pos(
                    monitor_x + (mode.width as i32 - window_w) / 2,
                    monitor_y + (mode.height as i32 - window_h) / 2,
                );
            }
        });
    }
}

/// Position et taille de la fenêtre avant le passage en plein écran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedGeometry {
    pub pos: (i32, i32),
    pub size: (i32, i32),
}

pub trait Fullscreen {
    fn is_fullscreen(&self) -> bool;
    fn set_fullscreen(&mut self, monitor: &Monitor) -> bool;

    /// Bascule plein écran / fenêtré. Retourne la géométrie fenêtrée à
    /// mémoriser au passage en plein écran.
    fn toggle_fullscreen(&mut self, restore: Option<WindowedGeometry>) -> Option<WindowedGeometry>;
}

impl Fullscreen for Window {
    fn is_fullscreen(&self) -> bool {
        self.with_window_mode(|mode| discriminant(&mode) != discriminant(&WindowMode::Windowed))
    }

    fn set_fullscreen(&mut self, monitor: &Monitor) -> bool {
        let Some(mode) = monitor.get_video_mode() else {
            return false;
        };
        self.set_monitor(
            WindowMode::FullScreen(monitor),
            0,
            0,
            mode.width,
            mode.height,
            Some(mode.refresh_rate),
        );
        info!("🖥️ Fullscreen: {} x {}", mode.width, mode.height);
        true
    }

    fn toggle_fullscreen(&mut self, restore: Option<WindowedGeometry>) -> Option<WindowedGeometry> {
        if self.is_fullscreen() {
            let geometry = restore.unwrap_or(WindowedGeometry {
                pos: (0, 0),
                size: self.get_size(),
            });
            self.set_monitor(
                WindowMode::Windowed,
                geometry.pos.0,
                geometry.pos.1,
                geometry.size.0.max(1) as u32,
                geometry.size.1.max(1) as u32,
                None,
            );
            info!("🖥️ Windowed: {} x {}", geometry.size.0, geometry.size.1);
            return None;
        }

        let geometry = WindowedGeometry {
            pos: self.get_pos(),
            size: self.get_size(),
        };
        let mut glfw = self.glfw.clone();
        let switched = glfw.with_primary_monitor(|_, primary_monitor| {
            primary_monitor.is_some_and(|monitor| self.set_fullscreen(monitor))
        });
        if !switched {
            warn!("⚠️ Could not get monitor video mode, staying windowed");
            return None;
        }
        Some(geometry)
    }
}
