use firstperson_controller::prelude::*;
use firstperson_engine::{ApplicationBuilder, Result};
use winit::event_loop::EventLoop;

mod controller_layer;

use controller_layer::ControllerLayer;

/// Key bindings live next to the binary, like an engine config file
const BINDINGS_PATH: &str = "input.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_module("firstperson", log::LevelFilter::Debug)
        .filter_module("firstperson_controller", log::LevelFilter::Debug)
        .filter_module("firstperson_engine", log::LevelFilter::Debug)
        .init();

    let event_loop = EventLoop::with_user_event().build()?;

    let mut app = ApplicationBuilder::new()
        .add_layer(|context| Box::new(ControllerLayer::new(context)))
        .build();

    // Binding lifecycle: load what is on disk, install the default scheme
    // unless a custom one is being kept, persist the result
    let mut bindings = InputBindings::load(BINDINGS_PATH)?;
    if bindings.ensure_defaults() {
        bindings.save(BINDINGS_PATH)?;
    }

    {
        let world = app.world();
        let mut world = world.lock().unwrap();
        world.insert_resource(bindings);
        world.insert_resource(Interactor::default());

        let mut trace = world.resource_mut::<TraceWorld>();

        // Three ground paddocks with distinct surface materials
        trace.add_volume(
            Volume::new(
                Point3::new(-2000.0, -100.0, -2000.0),
                Point3::new(0.0, 0.0, 2000.0),
            )
            .with_material(SurfaceMaterial::new("grass")),
        );
        trace.add_volume(
            Volume::new(
                Point3::new(0.0, -100.0, -2000.0),
                Point3::new(2000.0, 0.0, 0.0),
            )
            .with_material(SurfaceMaterial::new("stone")),
        );
        trace.add_volume(
            Volume::new(
                Point3::new(0.0, -100.0, 0.0),
                Point3::new(2000.0, 0.0, 2000.0),
            )
            .with_material(SurfaceMaterial::new("wood")),
        );

        // A low ceiling to crawl under; standing is blocked beneath it
        trace.add_volume(Volume::new(
            Point3::new(-600.0, 120.0, -600.0),
            Point3::new(-200.0, 240.0, -200.0),
        ));
    }

    app.spawn(
        "Player",
        (
            Transform {
                position: Point3::new(-500.0, 88.0, 500.0),
                ..Default::default()
            },
            Capsule::default(),
            CharacterMovement::default(),
            FirstPersonCamera::default(),
            CameraSettings::default(),
            MovementSettings::default(),
            StanceState::default(),
            FootstepSettings::new(vec![
                SurfaceSounds::new(
                    SurfaceMaterial::new("grass"),
                    vec![
                        SoundId::new("step_grass_01"),
                        SoundId::new("step_grass_02"),
                        SoundId::new("step_grass_03"),
                    ],
                ),
                SurfaceSounds::new(
                    SurfaceMaterial::new("stone"),
                    vec![SoundId::new("step_stone_01"), SoundId::new("step_stone_02")],
                ),
                SurfaceSounds::new(
                    SurfaceMaterial::new("wood"),
                    vec![SoundId::new("step_wood_01"), SoundId::new("step_wood_02")],
                )
                .with_strides(StanceStrides {
                    walk: 140.0,
                    crouch: 100.0,
                    run: 80.0,
                }),
            ]),
            FootstepState::default(),
            CameraShakes::default(),
        ),
    );

    event_loop.run_app(&mut app)?;

    Ok(())
}
