use log::{error, info};

use wirecam::prelude::*;

fn run() -> wirecam::Result<()> {
    let config = ViewerConfig::default();
    let mut window = Window::new(&config)?;
    let mut scene = config.scene()?;

    let tall_cube = scene.add_object(RenderableObject::cuboid(
        Vec3::new(-2.0, 0.0, 3.0),
        1.0,
        2.0,
        1.0,
    ));
    scene.add_object(RenderableObject::cuboid(Vec3::new(0.0, 1.0, 3.0), 1.0, 1.0, 1.0));
    let spinning_cube =
        scene.add_object(RenderableObject::cuboid(Vec3::new(0.0, -1.0, 3.0), 1.0, 1.0, 1.0));
    scene.add_object(RenderableObject::cuboid(Vec3::new(2.0, 0.0, 3.0), 1.0, 1.0, 1.0));

    let mut limiter = FrameLimiter::new(&window, &config);
    info!(
        "running {}x{} at up to {} fps",
        window.width(),
        window.height(),
        config.max_fps
    );

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                // Vertical motion pitches (rotation.x), horizontal motion yaws (rotation.y).
                WindowEvent::MouseMotion { xrel, yrel } => {
                    scene.camera_mut().apply_look_input(yrel, xrel)
                }
            }
        }

        let dt = limiter.wait_and_get_delta(&window);

        let input = window.movement_input();
        scene.camera_mut().update(&input, dt)?;

        if let Some(cube) = scene.object_mut(spinning_cube) {
            cube.rotate(Vec3::UP, dt)?;
        }
        if let Some(cube) = scene.object_mut(tall_cube) {
            cube.rotate(Vec3::ONE, dt)?;
        }

        window.clear();
        SceneProjector::new(&scene).render(&mut window)?;
        window.present();
    }

    info!("shutting down");
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
