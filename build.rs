// build.rs
use cargo_metadata::MetadataCommand;
use std::collections::HashSet;

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-changed=Cargo.lock");

    // Récupère la metadata du projet
    let metadata = match MetadataCommand::new().exec() {
        Ok(metadata) => metadata,
        Err(e) => {
            println!("cargo:warning=⚠️ cargo metadata failed, dependency versions unavailable: {e}");
            return;
        }
    };

    // Ensemble des crates dont on affiche la version au démarrage
    let tracked = HashSet::from(["glfw", "gl", "image", "chrono"]);

    for package in &metadata.packages {
        if tracked.contains(package.name.as_str()) {
            println!(
                "cargo:rustc-env=DEP_VERSION_{}={}",
                package.name.to_uppercase(),
                package.version
            );
        }
    }
}
