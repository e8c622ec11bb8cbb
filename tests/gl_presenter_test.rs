#![cfg(feature = "interactive_tests")]

use pink_fireworks::physic_engine::{PhysicConfig, PhysicEngine, PhysicEngineFireworks};
use pink_fireworks::renderer_engine::{Renderer, RendererConfig, RendererEngine};
use pink_fireworks::window_engine::{GlfwWindowEngine, WindowEngine};

#[test]
#[ignore] // nécessite un serveur d'affichage
fn test_present_frames_through_opengl() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Init Window
    let mut window = GlfwWindowEngine::init(800, 600, "Test Presenter")?;
    let (width, height) = window.get_size();

    // 2. Create Renderer
    let mut renderer = Renderer::new(width, height, &RendererConfig::default())?;
    let mut physic =
        PhysicEngineFireworks::with_seed(&PhysicConfig::default(), width as f32, height as f32, 1);
    physic.explode(width as f32 / 2.0, height as f32 / 3.0, 330.0);

    for frame in 0..30 {
        physic.advance();
        renderer.render_frame(&physic, &[], frame * 16);
        window.swap_buffers();
        window.poll_events();
    }
    assert_eq!(renderer.frames(), 30);

    // Vérifie qu'on peut fermer correctement
    renderer.close();
    Ok(())
}
