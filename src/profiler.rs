use log::info;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

/// Valeur de métrique typée
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Usize(usize),
    F32(f32),
}

impl From<usize> for MetricValue {
    fn from(v: usize) -> Self {
        MetricValue::Usize(v)
    }
}
impl From<f32> for MetricValue {
    fn from(v: f32) -> Self {
        MetricValue::F32(v)
    }
}

impl MetricValue {
    fn as_f32(self) -> f32 {
        match self {
            MetricValue::Usize(u) => u as f32,
            MetricValue::F32(f) => f,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Usize(u) => write!(f, "{}", u),
            MetricValue::F32(v) => write!(f, "{:.2}", v),
        }
    }
}

/// (moyenne, min, max)
pub type Summary = (f32, f32, f32);

/// Fenêtre glissante de `max_samples` valeurs.
#[derive(Debug, Clone)]
struct Series {
    values: VecDeque<f32>,
    max_samples: usize,
}

impl Series {
    fn new(max_samples: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(max_samples),
            max_samples,
        }
    }

    fn push(&mut self, v: f32) {
        if self.values.len() >= self.max_samples {
            self.values.pop_front();
        }
        self.values.push_back(v);
    }

    fn summary(&self) -> Option<Summary> {
        if self.values.is_empty() {
            return None;
        }
        let avg = self.values.iter().sum::<f32>() / self.values.len() as f32;
        let min = self.values.iter().copied().fold(f32::MAX, f32::min);
        let max = self.values.iter().copied().fold(f32::MIN, f32::max);
        Some((avg, min, max))
    }
}

/// Profiler de la boucle de rendu (mono-thread).
///
/// Trois familles de mesures, toutes sur une fenêtre glissante :
/// - durées de blocs labellisés (`profile_block`), en ms
/// - métriques scalaires (`record_metric`)
/// - durée totale des frames (`begin_frame` / `end_frame`), pour le FPS
#[derive(Debug, Clone)]
pub struct Profiler {
    max_samples: usize,
    blocks: BTreeMap<String, Series>,
    metrics: BTreeMap<String, Series>,
    frame_times: Series,
    frame_start: Option<Instant>,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            max_samples,
            blocks: BTreeMap::new(),
            metrics: BTreeMap::new(),
            frame_times: Series::new(max_samples),
            frame_start: None,
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame_start = Some(Instant::now());
    }

    pub fn end_frame(&mut self) {
        if let Some(start) = self.frame_start.take() {
            self.record_frame_time(start.elapsed());
        }
    }

    pub fn record_frame_time(&mut self, dt: Duration) {
        self.frame_times.push(dt.as_secs_f32() * 1000.0);
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&mut self, label: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;

        let max_samples = self.max_samples;
        self.blocks
            .entry(label.to_string())
            .or_insert_with(|| Series::new(max_samples))
            .push(dt);

        result
    }

    /// Enregistre une métrique scalaire typée
    pub fn record_metric<T: Into<MetricValue>>(&mut self, label: &str, value: T) {
        let max_samples = self.max_samples;
        self.metrics
            .entry(label.to_string())
            .or_insert_with(|| Series::new(max_samples))
            .push(value.into().as_f32());
    }

    /// FPS moyen sur la fenêtre
    pub fn fps(&self) -> f32 {
        match self.frame_times.summary() {
            Some((avg, _, _)) if avg > 0.0 => 1000.0 / avg,
            _ => 0.0,
        }
    }

    pub fn total_frames(&self) -> usize {
        self.frame_times.values.len()
    }

    pub fn block_summary(&self, label: &str) -> Option<Summary> {
        self.blocks.get(label).and_then(Series::summary)
    }

    pub fn metric_summary(&self, label: &str) -> Option<Summary> {
        self.metrics.get(label).and_then(Series::summary)
    }

    /// Log toutes les mesures vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        for (label, series) in &self.blocks {
            if let Some((avg, min, max)) = series.summary() {
                info!(
                    target: target,
                    "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                    label, avg, min, max
                );
            }
        }
        for (label, series) in &self.metrics {
            if let Some((avg, min, max)) = series.summary() {
                info!(target: target, "{label}: avg={avg:.1}, min={min:.0}, max={max:.0}");
            }
        }
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), false);
    };
}

#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}
