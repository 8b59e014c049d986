mod camera_shake;
mod crouch;
mod footsteps;
mod init;
mod look;
mod movement;
mod session;
mod stance;

pub use camera_shake::*;
pub use crouch::*;
pub use footsteps::*;
pub use init::*;
pub use look::*;
pub use movement::*;
pub use session::*;
pub use stance::*;

use bevy_ecs::prelude::*;

/// The full per-frame pipeline for first-person characters, in the order
/// the pieces depend on each other: input reactions, movement
/// integration, then everything that observes the integrated motion.
pub fn character_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            initialize_characters,
            update_look,
            apply_movement_input,
            update_stance,
            firstperson_engine::movement::integrate_movement,
            react_to_landing,
            update_crouch,
            update_footsteps,
            update_camera_shake,
            handle_session_actions,
        )
            .chain(),
    );
    schedule
}
