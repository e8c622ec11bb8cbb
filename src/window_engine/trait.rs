use anyhow::Result;

/// Événement fenêtre, traduit depuis le backend de fenêtrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Nouvelle taille du framebuffer, en pixels
    Resized(i32, i32),
    CloseRequested,
    /// Activation du bouton "ouvrir la lettre" (Entrée / Espace)
    OpenLetter,
    /// Relecture des fichiers de configuration (R)
    ReloadConfig,
    /// Capture de l'image courante (F12)
    Screenshot,
    /// Bascule plein écran (F11)
    ToggleFullscreen,
}

pub trait WindowEngine {
    fn init(width: i32, height: i32, title: &str) -> Result<Self>
    where
        Self: Sized;

    /// Traite les événements en attente et les retourne dans l'ordre.
    fn poll_events(&mut self) -> Vec<InputEvent>;
    fn swap_buffers(&mut self);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    /// Taille du framebuffer, en pixels
    fn get_size(&self) -> (i32, i32);
    fn set_title(&mut self, title: &str);
    fn toggle_fullscreen(&mut self);
}
