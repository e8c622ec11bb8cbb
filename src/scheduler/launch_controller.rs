use log::{debug, info};
use rand::Rng;

use crate::scheduler::{LaunchSettings, Task, TimerHandle, TimerService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    #[default]
    Idle,
    Auto,
    Burst,
}

/// Pilote la cadence des tirs.
///
/// Possède l'unique emplacement "flux de tir répétitif courant" : remplacer le
/// flux annule toujours l'ancien timer avant d'armer le nouveau, il n'y a donc
/// jamais deux flux de tir répétitifs actifs en même temps.
#[derive(Debug, Default)]
pub struct LaunchController {
    settings: LaunchSettings,
    current: Option<TimerHandle>,
    mode: LaunchMode,
}

impl LaunchController {
    pub fn new(settings: LaunchSettings) -> Self {
        Self {
            settings,
            current: None,
            mode: LaunchMode::Idle,
        }
    }

    pub fn settings(&self) -> &LaunchSettings {
        &self.settings
    }

    pub fn mode(&self) -> LaunchMode {
        self.mode
    }

    /// Timer du flux de tir répétitif courant.
    pub fn current_stream(&self) -> Option<TimerHandle> {
        self.current
    }

    fn replace_stream(&mut self, timers: &mut TimerService<Task>, stream: TimerHandle) {
        if let Some(previous) = self.current.replace(stream) {
            timers.cancel(previous);
        }
    }

    /// Tir automatique : un tick toutes les `auto_period_ms`.
    pub fn start_auto_launch(&mut self, timers: &mut TimerService<Task>) {
        let stream = timers.schedule_repeating(self.settings.auto_period_ms, Task::AutoLaunchTick);
        self.replace_stream(timers, stream);
        self.mode = LaunchMode::Auto;
        info!(
            "🎆 Auto launch started (every {} ms)",
            self.settings.auto_period_ms
        );
    }

    /// Mode rafale : annule le flux courant, programme la rafale puis un tir
    /// dense qui démarre après `dense_delay_ms`.
    pub fn enter_burst_mode(&mut self, timers: &mut TimerService<Task>) {
        if let Some(previous) = self.current.take() {
            timers.cancel(previous);
        }

        let s = &self.settings;
        for i in 0..s.burst_ticks {
            timers.schedule_once(
                i as u64 * s.burst_tick_ms,
                Task::LaunchRockets(s.burst_rockets_per_tick),
            );
        }

        // "après dense_delay_ms, un intervalle de dense_period_ms" :
        // le premier tick tombe à dense_delay_ms + dense_period_ms.
        let stream = timers.schedule_repeating_after(
            s.dense_delay_ms + s.dense_period_ms,
            s.dense_period_ms,
            Task::DenseLaunchTick,
        );
        self.replace_stream(timers, stream);
        self.mode = LaunchMode::Burst;

        info!(
            "💥 Burst mode: {} rockets over {} ms, dense launch in {} ms",
            self.settings.burst_ticks * self.settings.burst_rockets_per_tick,
            self.settings.burst_ticks as u64 * self.settings.burst_tick_ms,
            self.settings.dense_delay_ms
        );
    }

    /// Tick automatique : 1 à `auto_max_rockets` fusées étalées.
    pub fn on_auto_tick(&self, timers: &mut TimerService<Task>, rng: &mut impl Rng) -> usize {
        Self::schedule_staggered(
            timers,
            rng,
            self.settings.auto_max_rockets,
            self.settings.auto_stagger_ms,
        )
    }

    /// Tick dense : 1 à `dense_max_rockets` fusées étalées.
    pub fn on_dense_tick(&self, timers: &mut TimerService<Task>, rng: &mut impl Rng) -> usize {
        Self::schedule_staggered(
            timers,
            rng,
            self.settings.dense_max_rockets,
            self.settings.dense_stagger_ms,
        )
    }

    fn schedule_staggered(
        timers: &mut TimerService<Task>,
        rng: &mut impl Rng,
        max_rockets: usize,
        stagger_ms: u64,
    ) -> usize {
        let count = rng.random_range(1..=max_rockets.max(1));
        for i in 0..count {
            timers.schedule_once(i as u64 * stagger_ms, Task::LaunchRockets(1));
        }
        debug!("🎇 {} launch(es) scheduled, {} ms apart", count, stagger_ms);
        count
    }
}
