pub use bevy_ecs::world::World;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use winit::{application::ApplicationHandler, event::WindowEvent, window::Window};

use crate::audio::AudioSink;
use crate::camera_shake::CameraShakePlayer;
use crate::input::InputState;
use crate::prelude::QuitRequested;
use crate::trace::TraceWorld;

pub type Result<T> = anyhow::Result<T>;

pub mod audio;
pub mod camera_shake;
pub mod components;
pub mod input;
pub mod movement;
pub mod prelude;
pub mod trace;

pub trait Layer: 'static {
    fn frame(&mut self, context: &LayerContext) -> Result<()>;
    fn detach(&mut self, context: &LayerContext);
    fn event(&mut self, _context: &LayerContext, _event: LayerEvent) {}
}

pub trait LayerFactory: 'static {
    fn create(&self, context: &LayerContext) -> Box<dyn Layer>;
}

pub struct LayerContext {
    pub window: Arc<Window>,
    pub world: Arc<Mutex<World>>,
    pub delta_time: Duration,
}

pub enum LayerEvent {
    WindowEvent(Arc<WindowEvent>),
}

pub struct ApplicationBuilder {
    layer_factories: Vec<Box<dyn LayerFactory>>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self {
            layer_factories: Vec::new(),
        }
    }

    pub fn add_layer_factory(mut self, factory: impl LayerFactory) -> Self {
        self.layer_factories.push(Box::new(factory));
        self
    }

    pub fn add_layer<F>(mut self, factory_fn: F) -> Self
    where
        F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
    {
        self.layer_factories
            .push(Box::new(ClosureLayerFactory::new(factory_fn)));
        self
    }

    pub fn build(self) -> Application {
        let world = Arc::new(Mutex::new(World::new()));

        // Host-owned services every layer can rely on
        {
            let mut w = world.lock().unwrap();
            w.insert_resource(InputState::new());
            w.insert_resource(TraceWorld::new());
            w.insert_resource(AudioSink::new());
            w.insert_resource(CameraShakePlayer::new());
            w.insert_resource(QuitRequested::default());
        }

        Application {
            layer_factories: self.layer_factories,
            state: None,
            world,
        }
    }
}

impl Default for ApplicationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

struct ClosureLayerFactory<F> {
    factory_fn: F,
}

impl<F> ClosureLayerFactory<F> {
    fn new(factory_fn: F) -> Self {
        Self { factory_fn }
    }
}

impl<F> LayerFactory for ClosureLayerFactory<F>
where
    F: Fn(&LayerContext) -> Box<dyn Layer> + 'static,
{
    fn create(&self, context: &LayerContext) -> Box<dyn Layer> {
        (self.factory_fn)(context)
    }
}

pub struct Application {
    layer_factories: Vec<Box<dyn LayerFactory>>,
    state: Option<ApplicationState>,
    world: Arc<Mutex<World>>,
}

pub struct ApplicationState {
    window: Arc<Window>,
    layers: Vec<Box<dyn Layer>>,
    last_frame_time: Instant,
}

impl Application {
    fn redraw(&mut self) -> Result<()> {
        let state = match &mut self.state {
            Some(state) => state,
            None => return Ok(()),
        };

        let now = Instant::now();
        let delta_time = now.duration_since(state.last_frame_time);
        state.last_frame_time = now;

        let context = LayerContext {
            window: state.window.clone(),
            world: self.world.clone(),
            delta_time,
        };

        for layer in &mut state.layers {
            layer.frame(&context)?;
        }

        // Hand queued playback requests to the host and clear per-frame
        // input state. Clearing happens after the layers ran so key edges
        // from the event batch preceding this redraw are seen exactly once.
        {
            let mut world = self.world.lock().unwrap();
            if let Some(mut audio) = world.get_resource_mut::<AudioSink>() {
                audio.drain();
            }
            if let Some(mut shakes) = world.get_resource_mut::<CameraShakePlayer>() {
                shakes.drain();
            }
            if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
                input_state.reset_frame();
            }
            world.clear_trackers();
        }

        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.world
            .lock()
            .unwrap()
            .get_resource::<QuitRequested>()
            .is_some_and(|quit| quit.0)
    }

    pub fn spawn<B: bevy_ecs::bundle::Bundle>(&mut self, label: impl Into<String>, bundle: B) {
        use crate::prelude::*;
        let bundle = (
            Tag {
                label: label.into(),
            },
            bundle,
        );
        self.world.lock().unwrap().spawn(bundle);
    }

    pub fn world(&self) -> Arc<Mutex<World>> {
        self.world.clone()
    }
}

impl ApplicationHandler for Application {
    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        let window_attributes = Window::default_attributes();
        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        let context = LayerContext {
            window: window.clone(),
            world: self.world.clone(),
            delta_time: Duration::ZERO,
        };

        let layers: Vec<Box<dyn Layer>> = self
            .layer_factories
            .iter()
            .map(|factory| factory.create(&context))
            .collect();

        self.state = Some(ApplicationState {
            window,
            layers,
            last_frame_time: Instant::now(),
        });
    }

    fn suspended(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.detach(&context);
            }
        }
        self.state = None;
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: winit::event::WindowEvent,
    ) {
        // Route input events into the world
        {
            use winit::event::{ElementState, MouseButton, WindowEvent};
            use winit::keyboard::PhysicalKey;
            use winit::window::CursorGrabMode;

            let mut world = self.world.lock().unwrap();
            if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
                match &event {
                    WindowEvent::KeyboardInput {
                        event: key_event, ..
                    } => {
                        if let PhysicalKey::Code(keycode) = key_event.physical_key {
                            match key_event.state {
                                ElementState::Pressed => input_state.press_key(keycode),
                                ElementState::Released => input_state.release_key(keycode),
                            }
                        }
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        // Toggle mouse capture on right click
                        if *button == MouseButton::Right && *state == ElementState::Pressed {
                            input_state.toggle_mouse_capture();

                            if let Some(app_state) = &self.state {
                                if input_state.mouse_captured {
                                    app_state.window.set_cursor_visible(false);
                                    let _ = app_state
                                        .window
                                        .set_cursor_grab(CursorGrabMode::Locked)
                                        .or_else(|_| {
                                            app_state
                                                .window
                                                .set_cursor_grab(CursorGrabMode::Confined)
                                        });
                                    log::info!("Mouse captured - use right-click to release");
                                } else {
                                    app_state.window.set_cursor_visible(true);
                                    let _ = app_state.window.set_cursor_grab(CursorGrabMode::None);
                                    log::info!("Mouse released");
                                }
                            }
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        input_state.set_mouse_position(position.x as f32, position.y as f32);
                    }
                    _ => {}
                }
            }
        }

        let event = Arc::new(event);

        match *event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    log::error!("Frame update failed: {e:#}");
                }
                if self.quit_requested() {
                    event_loop.exit();
                }
            }
            _ => {}
        }

        if let Some(state) = &mut self.state {
            let context = LayerContext {
                window: state.window.clone(),
                world: self.world.clone(),
                delta_time: Duration::ZERO,
            };

            for layer in &mut state.layers {
                layer.event(&context, LayerEvent::WindowEvent(event.clone()));
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &winit::event_loop::ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: winit::event::DeviceEvent,
    ) {
        use winit::event::DeviceEvent;

        let mut world = self.world.lock().unwrap();
        if let Some(mut input_state) = world.get_resource_mut::<InputState>() {
            if let DeviceEvent::MouseMotion { delta } = event {
                input_state.add_mouse_delta(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}
