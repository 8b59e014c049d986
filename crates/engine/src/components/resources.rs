use bevy_ecs::prelude::*;

use std::time::Duration;

#[derive(Resource)]
pub struct Time(pub Duration);

/// Set by gameplay to ask the host to leave the event loop
#[derive(Resource, Default)]
pub struct QuitRequested(pub bool);
