use pink_fireworks::ambient_engine::{AmbientLayer, LayerId};
use pink_fireworks::physic_engine::{PhysicConfig, PhysicEngine, PhysicEngineFireworks};
use pink_fireworks::renderer_engine::{Renderer, RendererConfig, RendererEngine, Surface};
use pink_fireworks::scheduler::TimerService;
use rand::SeedableRng;

fn busy_physic() -> PhysicEngineFireworks {
    let mut physic = PhysicEngineFireworks::with_seed(&PhysicConfig::default(), 200.0, 150.0, 17);
    for _ in 0..4 {
        physic.launch_rocket();
    }
    physic.explode(100.0, 60.0, 330.0);
    for _ in 0..10 {
        physic.advance();
    }
    physic
}

fn is_uniform(renderer: &Renderer) -> bool {
    let frame = renderer.frame();
    let first = frame.pixel(0, 0);
    (0..frame.height()).all(|y| (0..frame.width()).all(|x| frame.pixel(x, y) == first))
}

#[test]
fn test_render_does_not_mutate_simulation() {
    let physic = busy_physic();
    let rockets = physic.rockets().to_vec();
    let particles = physic.particles().to_vec();

    let mut renderer = Renderer::headless(200, 150, &RendererConfig::default()).with_twinkle_seed(1);
    for now_ms in 0..5 {
        let draws = renderer.render_frame(&physic, &[], now_ms * 16);
        assert!(draws > 1);
    }

    assert_eq!(physic.rockets(), rockets.as_slice());
    assert_eq!(physic.particles(), particles.as_slice());
    assert_eq!(renderer.frames(), 5);
}

#[test]
fn test_empty_scene_converges_to_background() {
    let physic = PhysicEngineFireworks::with_seed(&PhysicConfig::default(), 64.0, 48.0, 1);
    let config = RendererConfig::default();
    let mut renderer = Renderer::headless(64, 48, &config);

    for _ in 0..200 {
        assert_eq!(renderer.render_frame(&physic, &[], 0), 1);
    }
    assert!(is_uniform(&renderer));

    let px = renderer.frame().pixel(10, 10).unwrap();
    let [r, g, b] = config.background_rgb;
    assert!((px.x - r as f32 / 255.0).abs() < 0.01);
    assert!((px.y - g as f32 / 255.0).abs() < 0.01);
    assert!((px.z - b as f32 / 255.0).abs() < 0.01);
}

#[test]
fn test_ambient_nodes_leave_no_trails() {
    let physic = PhysicEngineFireworks::with_seed(&PhysicConfig::default(), 200.0, 150.0, 2);
    let mut renderer = Renderer::headless(200, 150, &RendererConfig::default());

    let mut rng = rand::rngs::StdRng::seed_from_u64(2);
    let mut timers = TimerService::new();
    let mut sky = AmbientLayer::new(LayerId::Sky, true);
    for _ in 0..10 {
        sky.spawn_sparkle(&mut rng, &mut timers);
    }

    // à 3 s toutes les étincelles sont à l'écran, en pleine opacité
    let draws = renderer.render_frame(&physic, &[&sky], 3_000);
    assert_eq!(draws, 1 + 10 * 2);
    assert!(!is_uniform(&renderer));

    renderer.render_frame(&physic, &[], 3_016);
    assert!(is_uniform(&renderer));
}

#[test]
fn test_hidden_layer_and_disabled_ambient_draw_nothing() {
    let physic = PhysicEngineFireworks::with_seed(&PhysicConfig::default(), 200.0, 150.0, 3);
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let mut timers = TimerService::new();
    let mut sky = AmbientLayer::new(LayerId::Sky, true);
    sky.spawn_sparkle(&mut rng, &mut timers);

    let mut renderer = Renderer::headless(200, 150, &RendererConfig::default());
    sky.set_visible(false);
    assert_eq!(renderer.render_frame(&physic, &[&sky], 3_000), 1);

    sky.set_visible(true);
    renderer.reload_config(&RendererConfig {
        ambient_enabled: false,
        ..RendererConfig::default()
    });
    assert_eq!(renderer.render_frame(&physic, &[&sky], 3_000), 1);
    assert!(!renderer.config().ambient_enabled);
}

#[test]
fn test_resize_and_screenshot() {
    let physic = busy_physic();
    let mut renderer = Renderer::headless(200, 150, &RendererConfig::default());
    renderer.set_window_size(120, 90);
    assert_eq!(renderer.window_size(), (120, 90));
    renderer.render_frame(&physic, &[], 0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shot.png");
    renderer.save_screenshot(&path).unwrap();

    let image = image::open(&path).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (120, 90));
    assert!(image.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn test_screenshot_into_missing_directory_fails() {
    let renderer = Renderer::headless(10, 10, &RendererConfig::default());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("shot.png");
    let err = renderer.save_screenshot(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to save screenshot"));
}
