use firstperson_controller::prelude::*;
use firstperson_engine::{Layer, LayerContext};

/// Layer that drives the first-person character pipeline every frame
pub struct ControllerLayer {
    schedule: Schedule,
}

impl ControllerLayer {
    pub fn new(_context: &LayerContext) -> Self {
        Self {
            schedule: character_schedule(),
        }
    }
}

impl Layer for ControllerLayer {
    fn frame(&mut self, context: &LayerContext) -> firstperson_engine::Result<()> {
        let mut world = context.world.lock().unwrap();
        world.insert_resource(Time(context.delta_time));

        self.schedule.run(&mut world);

        Ok(())
    }

    fn detach(&mut self, _context: &LayerContext) {}
}
