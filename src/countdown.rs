use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use log::info;
use std::fmt;

use crate::scheduler::{Task, TimerHandle, TimerService};

pub const TARGET_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Parse une date locale `AAAA-MM-JJTHH:MM:SS`.
pub fn parse_target_date(text: &str) -> Result<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), TARGET_DATE_FORMAT)
        .with_context(|| format!("invalid target date '{}'", text))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| anyhow!("target date '{}' does not exist in local time", text))
}

/// Chiffres affichés du compte à rebours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownDigits {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownDigits {
    pub const ZERO: CountdownDigits = CountdownDigits {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Découpe une durée restante (ms, > 0).
    pub fn from_millis(diff_ms: i64) -> Self {
        Self {
            days: diff_ms / MS_PER_DAY,
            hours: (diff_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (diff_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (diff_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Les quatre champs, complétés à deux chiffres.
    pub fn padded(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl fmt::Display for CountdownDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [d, h, m, s] = self.padded();
        write!(f, "{}:{}:{}:{}", d, h, m, s)
    }
}

/// État du bouton "ouvrir la lettre".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Désactivé tant que la date cible n'est pas atteinte
    #[default]
    Locked,
    Ready,
    Opened,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterState {
    #[default]
    Hidden,
    /// La section compte à rebours s'efface
    Revealing,
    Revealed,
}

/// Textes affichés une fois la date atteinte.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownTexts {
    pub notice_ready: String,
    pub subtitle_ready: String,
}

/// Compte à rebours + machine d'état du bouton et de la lettre.
#[derive(Debug)]
pub struct CountdownController {
    target: DateTime<Local>,
    digits: CountdownDigits,
    button: ButtonState,
    letter: LetterState,
    texts: CountdownTexts,
    notice: Option<String>,
    subtitle: Option<String>,
    tick_timer: Option<TimerHandle>,
}

impl CountdownController {
    pub fn new(target: DateTime<Local>, texts: CountdownTexts) -> Self {
        Self {
            target,
            digits: CountdownDigits::default(),
            button: ButtonState::Locked,
            letter: LetterState::Hidden,
            texts,
            notice: None,
            subtitle: None,
            tick_timer: None,
        }
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    pub fn digits(&self) -> CountdownDigits {
        self.digits
    }

    pub fn button(&self) -> ButtonState {
        self.button
    }

    pub fn letter(&self) -> LetterState {
        self.letter
    }

    pub fn is_ready(&self) -> bool {
        self.button != ButtonState::Locked
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn tick_timer(&self) -> Option<TimerHandle> {
        self.tick_timer
    }

    /// Arme le tick périodique et met l'affichage à jour immédiatement.
    pub fn start(&mut self, now: DateTime<Local>, period_ms: u64, timers: &mut TimerService<Task>) {
        if let Some(previous) = self.tick_timer.take() {
            timers.cancel(previous);
        }
        self.tick_timer = Some(timers.schedule_repeating(period_ms, Task::CountdownTick));
        self.tick(now, timers);
    }

    /// Recalcule les chiffres. Au passage à zéro : bouton prêt, textes
    /// changés, tick annulé.
    pub fn tick(&mut self, now: DateTime<Local>, timers: &mut TimerService<Task>) -> CountdownDigits {
        if self.is_ready() {
            return self.digits;
        }

        let diff_ms = (self.target - now).num_milliseconds();
        if diff_ms > 0 {
            self.digits = CountdownDigits::from_millis(diff_ms);
            return self.digits;
        }

        self.digits = CountdownDigits::ZERO;
        self.button = ButtonState::Ready;
        self.notice = Some(self.texts.notice_ready.clone());
        self.subtitle = Some(self.texts.subtitle_ready.clone());
        if let Some(handle) = self.tick_timer.take() {
            timers.cancel(handle);
        }
        info!("⏰ Countdown reached zero, letter can be opened");
        self.digits
    }

    /// Activation du bouton. Ignorée tant que le compte à rebours n'est pas
    /// terminé ou si la lettre a déjà été ouverte.
    pub fn open_letter(&mut self) -> bool {
        if self.button != ButtonState::Ready {
            return false;
        }
        self.button = ButtonState::Opened;
        self.letter = LetterState::Revealing;
        info!("💌 Opening the letter");
        true
    }

    /// Fin du fondu : la section lettre devient visible.
    pub fn reveal_letter(&mut self) {
        if self.letter == LetterState::Revealing {
            self.letter = LetterState::Revealed;
            info!("💌 Letter revealed");
        }
    }

    /// Ligne d'état courte (titre de fenêtre).
    pub fn headline(&self) -> String {
        match (self.button, self.letter) {
            (ButtonState::Locked, _) => self.digits.to_string(),
            (ButtonState::Ready, _) => self.notice.clone().unwrap_or_default(),
            (ButtonState::Opened, LetterState::Revealed) => "💌".to_string(),
            (ButtonState::Opened, _) => self.subtitle.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_splits_units() {
        let ms = 3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6 * MS_PER_SECOND + 999;
        let d = CountdownDigits::from_millis(ms);
        assert_eq!(d.to_string(), "03:04:05:06");
    }

    #[test]
    fn test_large_day_count_is_not_truncated() {
        let d = CountdownDigits::from_millis(123 * MS_PER_DAY);
        assert_eq!(d.padded()[0], "123");
    }

    #[test]
    fn test_parse_target_date() {
        let date = parse_target_date("2026-02-17T00:00:00").unwrap();
        assert_eq!(date.format(TARGET_DATE_FORMAT).to_string(), "2026-02-17T00:00:00");
        assert!(parse_target_date("17/02/2026").is_err());
    }
}
