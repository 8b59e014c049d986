mod camera_shakes;
mod footsteps;
mod movement;

pub use camera_shakes::*;
pub use footsteps::*;
pub use movement::*;
