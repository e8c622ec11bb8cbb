use anyhow::{anyhow, Context as _, Result};
use glfw::{Action, Context, Key, WindowEvent};
use log::info;

use super::r#trait::{InputEvent, WindowEngine};
use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};
use crate::utils::glfw_window::{CenterWindow, Fullscreen, WindowedGeometry};

pub type WindowEvents = glfw::GlfwReceiver<(f64, WindowEvent)>;

pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
    windowed: Option<WindowedGeometry>,
}

/// Traduit un événement GLFW. `None` pour ce qui ne concerne pas l'application.
pub fn translate_event(event: &WindowEvent) -> Option<InputEvent> {
    match *event {
        WindowEvent::FramebufferSize(w, h) => Some(InputEvent::Resized(w, h)),
        WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
            Some(InputEvent::CloseRequested)
        }
        WindowEvent::Key(Key::Enter | Key::KpEnter | Key::Space, _, Action::Press, _) => {
            Some(InputEvent::OpenLetter)
        }
        WindowEvent::Key(Key::R, _, Action::Press, _) => Some(InputEvent::ReloadConfig),
        WindowEvent::Key(Key::F12, _, Action::Press, _) => Some(InputEvent::Screenshot),
        WindowEvent::Key(Key::F11, _, Action::Press, _) => Some(InputEvent::ToggleFullscreen),
        _ => None,
    }
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| anyhow!("Impossible d'initialiser GLFW: {e:?}"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .create_window(
                width.max(1) as u32,
                height.max(1) as u32,
                title,
                glfw::WindowMode::Windowed,
            )
            .context("Erreur création fenêtre GLFW")?;

        window.make_current();
        window.set_key_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);
        window.center_on_primary_monitor();

        // cadence calée sur le rafraîchissement de l'écran
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s) as *const _);

        unsafe {
            show_opengl_context_info();
            setup_opengl_debug();
        }

        Ok(Self {
            glfw,
            window,
            events,
            windowed: None,
        })
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.glfw.poll_events();
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(&event))
            .collect()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn toggle_fullscreen(&mut self) {
        self.windowed = self.window.toggle_fullscreen(self.windowed);
    }
}
