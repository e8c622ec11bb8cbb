use chrono::{DateTime, Local};
use pink_fireworks::countdown::parse_target_date;
use pink_fireworks::physic_engine::{PhysicConfig, PhysicEngineFireworks};
use pink_fireworks::renderer_engine::{Renderer, RendererConfig};
use pink_fireworks::window_engine::{InputEvent, WindowEngine};
use pink_fireworks::{AppConfig, Simulator};
use std::collections::VecDeque;

/// Fenêtre factice : rejoue des événements, compte les swaps.
#[derive(Debug, Default)]
pub struct DummyWindow {
    pub size: (i32, i32),
    pub title: String,
    pub should_close: bool,
    pub swaps: usize,
    pub fullscreen: bool,
    /// Un lot d'événements par appel à `poll_events`
    pub queued: VecDeque<Vec<InputEvent>>,
}

#[allow(dead_code)]
impl DummyWindow {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }

    pub fn queue(&mut self, events: Vec<InputEvent>) {
        self.queued.push_back(events);
    }
}

impl WindowEngine for DummyWindow {
    fn init(width: i32, height: i32, title: &str) -> anyhow::Result<Self> {
        let mut window = Self::new(width, height);
        window.title = title.to_string();
        Ok(window)
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        let events = self.queued.pop_front().unwrap_or_default();
        for event in &events {
            if let InputEvent::Resized(w, h) = *event {
                self.size = (w, h);
            }
        }
        events
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn get_size(&self) -> (i32, i32) {
        self.size
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }
}

pub type HeadlessSimulator = Simulator<Renderer, PhysicEngineFireworks, DummyWindow>;

/// Date cible déjà passée : le compte à rebours est prêt dès le départ.
pub const PAST_TARGET: &str = "2000-01-01T00:00:00";
/// Date cible lointaine : le bouton reste verrouillé.
pub const FUTURE_TARGET: &str = "2999-01-01T00:00:00";

#[allow(dead_code)]
pub fn wall(text: &str) -> DateTime<Local> {
    parse_target_date(text).unwrap()
}

/// Simulateur sans fenêtre ni OpenGL, entièrement déterministe.
#[allow(dead_code)]
pub fn headless_simulator(target_date: &str) -> HeadlessSimulator {
    let _ = env_logger::builder().is_test(true).try_init();

    let (width, height) = (320, 240);
    let app_config = AppConfig {
        target_date: target_date.to_string(),
        ..AppConfig::default()
    };
    let renderer =
        Renderer::headless(width, height, &RendererConfig::default()).with_twinkle_seed(7);
    let physic =
        PhysicEngineFireworks::with_seed(&PhysicConfig::default(), width as f32, height as f32, 7);
    let window = DummyWindow::new(width, height);

    Simulator::new(renderer, physic, window, app_config)
        .unwrap()
        .with_rng_seed(7)
}
