use log::info;

/// Versions des dépendances principales, renseignées par `build.rs`.
pub fn core_dependency_versions() -> [(&'static str, &'static str); 4] {
    [
        ("GL", option_env!("DEP_VERSION_GL").unwrap_or("Unknown")),
        ("GLFW", option_env!("DEP_VERSION_GLFW").unwrap_or("Unknown")),
        ("IMAGE", option_env!("DEP_VERSION_IMAGE").unwrap_or("Unknown")),
        ("CHRONO", option_env!("DEP_VERSION_CHRONO").unwrap_or("Unknown")),
    ]
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    for (name, version) in core_dependency_versions() {
        info!("  {:<6} version: {}", name, version);
    }
}
