use bevy_ecs::prelude::*;

/// Human-readable label attached to every spawned entity
#[derive(Component, Clone)]
pub struct Tag {
    pub label: String,
}
