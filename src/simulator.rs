use anyhow::Result;
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::ambient_engine::{AmbientLayer, LayerId};
use crate::app_config::AppConfig;
use crate::countdown::{parse_target_date, CountdownController};
use crate::physic_engine::{config::PhysicConfig, PhysicEngine};
use crate::renderer_engine::{RendererConfig, RendererEngine};
use crate::scheduler::{LaunchController, LaunchSettings, Task, TimerHandle, TimerService};
use crate::window_engine::{InputEvent, WindowEngine};
use crate::{log_metrics_and_fps, profiler::Profiler};

const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Boucle principale : timers, physique, rendu, présentation.
///
/// Tout s'exécute sur un seul thread. Une frame :
/// 1. événements fenêtre
/// 2. tâches dues (tirs, apparitions, compte à rebours, révélation)
/// 3. `advance()` de la physique
/// 4. rendu puis échange des buffers (vsync)
pub struct Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngine,
    W: WindowEngine,
{
    renderer_engine: R,
    physic_engine: P,
    window_engine: W,

    app_config: AppConfig,
    config_dir: PathBuf,

    timers: TimerService<Task>,
    launcher: LaunchController,
    countdown: CountdownController,
    sky: AmbientLayer,
    letter: AmbientLayer,
    heart_stream: Option<TimerHandle>,
    rng: StdRng,

    // Loop state
    clock_origin: Instant,
    started: bool,
    title: String,
    profiler: Profiler,
    last_log: Instant,
    first_frame: bool,
}

impl<R, P, W> Simulator<R, P, W>
where
    R: RendererEngine,
    P: PhysicEngine,
    W: WindowEngine,
{
    pub fn new(
        renderer_engine: R,
        mut physic_engine: P,
        window_engine: W,
        app_config: AppConfig,
    ) -> Result<Self> {
        let target = parse_target_date(&app_config.target_date).or_else(|e| {
            warn!("⚠️ {e:#}, falling back to the default target date");
            parse_target_date(&AppConfig::default().target_date)
        })?;
        info!("⏳ Countdown target: {}", target);

        let (w, h) = window_engine.get_size();
        physic_engine.resize(w as f32, h as f32);

        Ok(Self {
            renderer_engine,
            physic_engine,
            window_engine,
            countdown: CountdownController::new(target, app_config.countdown_texts()),
            app_config,
            config_dir: PathBuf::from("assets/config"),
            timers: TimerService::new(),
            launcher: LaunchController::new(LaunchSettings::default()),
            sky: AmbientLayer::new(LayerId::Sky, true),
            letter: AmbientLayer::new(LayerId::Letter, false),
            heart_stream: None,
            rng: StdRng::from_os_rng(),
            clock_origin: Instant::now(),
            started: false,
            title: String::new(),
            profiler: Profiler::new(300),
            last_log: Instant::now(),
            first_frame: true,
        })
    }

    /// Répertoire des fichiers `physic.toml` / `renderer.toml` relus par `R`.
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    pub fn with_launch_settings(mut self, settings: LaunchSettings) -> Self {
        self.launcher = LaunchController::new(settings);
        self
    }

    /// Rend les tirages aléatoires de l'orchestration reproductibles.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Arme les flux périodiques : tir automatique, étincelles, pétales,
    /// compte à rebours. Idempotent.
    pub fn start(&mut self, now: DateTime<Local>) {
        if self.started {
            return;
        }
        self.started = true;

        self.launcher.start_auto_launch(&mut self.timers);
        self.timers
            .schedule_repeating(self.app_config.sparkle_period_ms, Task::SpawnSparkle);
        self.timers
            .schedule_repeating(self.app_config.petal_period_ms, Task::SpawnPetal);
        self.countdown
            .start(now, self.app_config.countdown_period_ms, &mut self.timers);
        self.update_title();

        info!("🚀 Simulation started");
    }

    /// `run_continuous` : une frame par rafraîchissement écran jusqu'à la
    /// fermeture de la fenêtre. Aucune compensation de cadence.
    pub fn run_continuous(&mut self) -> Result<()> {
        self.start(Local::now());
        while self.step() {}
        Ok(())
    }

    /// Une frame à l'instant réel.
    pub fn step(&mut self) -> bool {
        let now_ms = self.clock_origin.elapsed().as_millis() as u64;
        self.step_at(now_ms, Local::now())
    }

    /// Une frame à l'instant `now_ms` (horloge des timers) et `wall` (date
    /// locale, pour le compte à rebours).
    pub fn step_at(&mut self, now_ms: u64, wall: DateTime<Local>) -> bool {
        if self.window_engine.should_close() {
            return false;
        }
        self.profiler.begin_frame();

        for event in self.window_engine.poll_events() {
            self.handle_event(event);
        }

        self.run_due_tasks(now_ms, wall);

        let (explosions, expired) = self.profiler.profile_block("physic - advance", || {
            let result = self.physic_engine.advance();
            (result.triggered_explosions.len(), result.expired_particles)
        });
        if explosions > 0 {
            debug!("💥 {} explosion(s), {} particle(s) expired", explosions, expired);
        }

        let draws = self.profiler.profile_block("render frame", || {
            self.renderer_engine.render_frame(
                &self.physic_engine,
                &[&self.sky, &self.letter],
                now_ms,
            )
        });
        self.profiler.record_metric("primitives drawn", draws);
        self.profiler
            .record_metric("particles", self.physic_engine.particles().len());
        self.profiler
            .record_metric("ambient nodes", self.sky.len() + self.letter.len());

        self.update_title();
        self.window_engine.swap_buffers();
        self.profiler.end_frame();

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }
        if self.last_log.elapsed() >= LOG_INTERVAL {
            log_metrics_and_fps!(&self.profiler);
            self.last_log = Instant::now();
        }

        true
    }

    /// Exécute, dans l'ordre chronologique, toutes les tâches dues jusqu'à
    /// `now_ms`, y compris celles armées pendant le traitement.
    pub fn run_due_tasks(&mut self, now_ms: u64, wall: DateTime<Local>) -> usize {
        let mut fired = 0;
        while let Some((_, task)) = self.timers.next_due(now_ms) {
            self.dispatch(task, wall);
            fired += 1;
        }
        self.timers.advance_to(now_ms);
        fired
    }

    fn dispatch(&mut self, task: Task, wall: DateTime<Local>) {
        match task {
            Task::LaunchRockets(count) => {
                for _ in 0..count {
                    self.physic_engine.launch_rocket();
                }
            }
            Task::AutoLaunchTick => {
                self.launcher.on_auto_tick(&mut self.timers, &mut self.rng);
            }
            Task::DenseLaunchTick => {
                self.launcher.on_dense_tick(&mut self.timers, &mut self.rng);
            }
            Task::CountdownTick => {
                self.countdown.tick(wall, &mut self.timers);
            }
            Task::SpawnSparkle => {
                self.sky.spawn_sparkle(&mut self.rng, &mut self.timers);
            }
            Task::SpawnPetal => {
                self.sky.spawn_petal(&mut self.rng, &mut self.timers);
            }
            Task::SpawnHeart => {
                self.letter.spawn_heart(&mut self.rng, &mut self.timers);
            }
            Task::RemoveAmbient(layer, id) => {
                self.layer_mut(layer).remove(id);
            }
            Task::RevealLetter => {
                self.countdown.reveal_letter();
                self.letter.set_visible(true);
                self.timers
                    .schedule_once(self.app_config.hearts_delay_ms, Task::StartFloatingHearts);
            }
            Task::StartFloatingHearts => {
                let stream = self
                    .timers
                    .schedule_repeating(self.app_config.heart_period_ms, Task::SpawnHeart);
                if let Some(previous) = self.heart_stream.replace(stream) {
                    self.timers.cancel(previous);
                }
                info!("💕 Floating hearts started");
            }
        }
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resized(w, h) => {
                self.renderer_engine.set_window_size(w, h);
                self.physic_engine.resize(w as f32, h as f32);
                info!("🖥️ Window resized: {} x {}", w, h);
            }
            InputEvent::CloseRequested => self.window_engine.set_should_close(true),
            InputEvent::OpenLetter => {
                self.open_letter();
            }
            InputEvent::ReloadConfig => self.reload_config(),
            InputEvent::Screenshot => {
                let path = PathBuf::from(&self.app_config.screenshot_path);
                if let Err(e) = self.save_screenshot(&path) {
                    warn!("⚠️ Screenshot failed: {e:#}");
                }
            }
            InputEvent::ToggleFullscreen => self.window_engine.toggle_fullscreen(),
        }
    }

    /// Bouton "ouvrir la lettre" : rafale de feux d'artifice puis révélation.
    /// Sans effet avant la fin du compte à rebours ou après une première ouverture.
    pub fn open_letter(&mut self) -> bool {
        if !self.countdown.open_letter() {
            debug!("🔒 Letter is not ready to be opened");
            return false;
        }
        self.launcher.enter_burst_mode(&mut self.timers);
        self.timers
            .schedule_once(self.app_config.reveal_delay_ms, Task::RevealLetter);
        true
    }

    /// Relit `physic.toml` et `renderer.toml`. Un fichier illisible laisse la
    /// configuration courante en place.
    pub fn reload_config(&mut self) {
        let physic_path = self.config_dir.join("physic.toml");
        match PhysicConfig::from_file(&physic_path.to_string_lossy()) {
            Ok(config) => {
                self.physic_engine.reload_config(&config);
                info!("🔄 Physic config reloaded from {}", physic_path.display());
            }
            Err(e) => warn!("⚠️ Keeping physic config, {}: {e:#}", physic_path.display()),
        }

        let renderer_path = self.config_dir.join("renderer.toml");
        match RendererConfig::from_file(&renderer_path.to_string_lossy()) {
            Ok(config) => self.renderer_engine.reload_config(&config),
            Err(e) => warn!("⚠️ Keeping renderer config, {}: {e:#}", renderer_path.display()),
        }
    }

    pub fn save_screenshot(&self, path: &Path) -> Result<()> {
        self.renderer_engine.save_screenshot(path)
    }

    fn update_title(&mut self) {
        let title = format!("{} - {}", self.app_config.window_title, self.countdown.headline());
        if title != self.title {
            self.window_engine.set_title(&title);
            self.title = title;
        }
    }

    fn layer_mut(&mut self, id: LayerId) -> &mut AmbientLayer {
        match id {
            LayerId::Sky => &mut self.sky,
            LayerId::Letter => &mut self.letter,
        }
    }

    pub fn close(&mut self) {
        self.renderer_engine.close();
        self.physic_engine.close();
        info!("👋 Simulator closed");
    }

    pub fn renderer_engine(&self) -> &R {
        &self.renderer_engine
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }

    pub fn window_engine_mut(&mut self) -> &mut W {
        &mut self.window_engine
    }

    pub fn timers(&self) -> &TimerService<Task> {
        &self.timers
    }

    pub fn launcher(&self) -> &LaunchController {
        &self.launcher
    }

    pub fn countdown(&self) -> &CountdownController {
        &self.countdown
    }

    pub fn sky(&self) -> &AmbientLayer {
        &self.sky
    }

    pub fn letter(&self) -> &AmbientLayer {
        &self.letter
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
