use serde::{Deserialize, Serialize};

use crate::countdown::CountdownTexts;

/// Configuration de l'application (`assets/config/app.toml`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub window_title: String,

    /// Date cible locale, format `AAAA-MM-JJTHH:MM:SS`
    pub target_date: String,
    pub countdown_period_ms: u64,

    pub sparkle_period_ms: u64,
    pub petal_period_ms: u64,
    pub heart_period_ms: u64,

    /// Délai entre l'ouverture de la lettre et son affichage (fondu de sortie)
    pub reveal_delay_ms: u64,
    /// Délai entre l'affichage de la lettre et les premiers cœurs
    pub hearts_delay_ms: u64,

    pub notice_ready: String,
    pub subtitle_ready: String,

    pub screenshot_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1024,
            window_height: 768,
            window_title: "Pink Fireworks".to_string(),
            target_date: "2026-02-17T00:00:00".to_string(),
            countdown_period_ms: 1000,
            sparkle_period_ms: 400,
            petal_period_ms: 1200,
            heart_period_ms: 900,
            reveal_delay_ms: 900,
            hearts_delay_ms: 2000,
            notice_ready: "✨ Đã đến lúc rồi! Nhấn nút để mở thư yêu thương nhé~ 🥰 ✨".to_string(),
            subtitle_ready: "Khoảnh khắc giao thừa đã đến rồi~ 🌸💕".to_string(),
            screenshot_path: "screenshot.png".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn countdown_texts(&self) -> CountdownTexts {
        CountdownTexts {
            notice_ready: self.notice_ready.clone(),
            subtitle_ready: self.subtitle_ready.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.toml");
        std::fs::write(&path, "target_date = \"2030-01-01T00:00:00\"\n").unwrap();

        let cfg = AppConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.target_date, "2030-01-01T00:00:00");
        assert_eq!(cfg.sparkle_period_ms, 400);
        assert_eq!(cfg.heart_period_ms, 900);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::from_file("does/not/exist.toml").is_err());
    }
}
