pub use crate::components::*;
pub use crate::input::*;
pub use crate::interact::*;
pub use crate::systems::*;

pub use firstperson_engine::prelude::*;
