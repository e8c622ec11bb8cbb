// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::{info, warn};
use std::env;

use pink_fireworks::physic_engine::{PhysicConfig, PhysicEngineFireworks};
use pink_fireworks::renderer_engine::{Renderer, RendererConfig};
use pink_fireworks::utils::show_rust_core_dependencies;
use pink_fireworks::window_engine::{GlfwWindowEngine, WindowEngine};
use pink_fireworks::{AppConfig, Simulator};

const CONFIG_DIR: &str = "assets/config";

/// Charge une config TOML, valeurs par défaut si le fichier manque ou est invalide.
fn load_or_default<T: Default>(name: &str, load: impl FnOnce(&str) -> Result<T>) -> T {
    let path = format!("{}/{}", CONFIG_DIR, name);
    load(&path).unwrap_or_else(|e| {
        warn!("⚠️ {}: {e:#}, using defaults", path);
        T::default()
    })
}

/// Main entry point for the Pink Fireworks application.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Pink Fireworks...");

    show_rust_core_dependencies();

    let mut app_config: AppConfig = load_or_default("app.toml", AppConfig::from_file);
    let physic_config: PhysicConfig = load_or_default("physic.toml", PhysicConfig::from_file);
    let renderer_config: RendererConfig =
        load_or_default("renderer.toml", RendererConfig::from_file);

    // La date cible peut être surchargée en ligne de commande ou par variable d'environnement
    if let Some(target) = env::args()
        .nth(1)
        .or_else(|| env::var("PINK_FIREWORKS_TARGET").ok())
    {
        info!("Target date overridden: {}", target);
        app_config.target_date = target;
    }
    info!("App config loaded:\n{:#?}", app_config);

    // 1. Init Window & Context
    let window_engine = GlfwWindowEngine::init(
        app_config.window_width,
        app_config.window_height,
        &app_config.window_title,
    )?;
    let (width, height) = window_engine.get_size();

    // 2. Init Renderer (now that GL context is ready)
    let renderer_engine = Renderer::new(width, height, &renderer_config)?;

    let physic_engine = PhysicEngineFireworks::new(&physic_config, width as f32, height as f32);

    // 3. Init Simulator
    let mut simulator =
        Simulator::new(renderer_engine, physic_engine, window_engine, app_config)?
            .with_config_dir(CONFIG_DIR);

    let result = simulator.run_continuous();
    simulator.close();

    result
}
