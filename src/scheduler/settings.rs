// =========================
// Launch schedule configuration
// =========================

use derive_builder::Builder;

/// Cadence des tirs de fusées (tir automatique, rafale, tir dense).
///
/// Toutes les durées sont en millisecondes.
#[derive(Clone, Builder, Debug, PartialEq)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct LaunchSettings {
    /// Période du tir automatique
    #[builder(default = "1400")]
    pub auto_period_ms: u64,

    /// Nombre max de fusées par tick automatique (min 1)
    #[builder(default = "2")]
    pub auto_max_rockets: usize,

    /// Décalage entre deux fusées d'un même tick automatique
    #[builder(default = "350")]
    pub auto_stagger_ms: u64,

    /// Nombre de ticks de la rafale
    #[builder(default = "10")]
    pub burst_ticks: usize,

    /// Intervalle entre deux ticks de rafale
    #[builder(default = "180")]
    pub burst_tick_ms: u64,

    /// Fusées lancées par tick de rafale
    #[builder(default = "2")]
    pub burst_rockets_per_tick: usize,

    /// Délai avant la reprise d'un tir dense
    #[builder(default = "3500")]
    pub dense_delay_ms: u64,

    /// Période du tir dense
    #[builder(default = "700")]
    pub dense_period_ms: u64,

    /// Nombre max de fusées par tick dense (min 1)
    #[builder(default = "3")]
    pub dense_max_rockets: usize,

    /// Décalage entre deux fusées d'un même tick dense
    #[builder(default = "200")]
    pub dense_stagger_ms: u64,
}

/// Keep `.default()` available
impl Default for LaunchSettings {
    fn default() -> Self {
        LaunchSettingsBuilder::default()
            .build()
            .expect("every LaunchSettings field has a default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_single_field() {
        let settings = LaunchSettingsBuilder::default()
            .auto_period_ms(500)
            .build()
            .unwrap();
        assert_eq!(settings.auto_period_ms, 500);
        assert_eq!(settings.dense_period_ms, 700);
    }
}
