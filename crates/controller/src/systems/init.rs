use crate::prelude::*;

/// One-time setup for freshly spawned characters: seed the movement
/// component from the designer settings and capture the spawn-time
/// capsule height and position used as interpolation anchors later.
pub fn initialize_characters(
    mut query: Query<
        (
            &Tag,
            &Transform,
            &Capsule,
            &MovementSettings,
            &mut CharacterMovement,
            &mut StanceState,
            &mut FootstepState,
        ),
        Added<StanceState>,
    >,
) {
    for (tag, transform, capsule, settings, mut movement, mut stance, mut footsteps) in
        query.iter_mut()
    {
        movement.max_walk_speed = settings.walk_speed;
        movement.jump_velocity = settings.jump_velocity;

        stance.original_half_height = capsule.half_height;
        stance.can_uncrouch = true;

        footsteps.last_position = transform.position;
        footsteps.travel_distance = 0.0;

        log::debug!(
            "Character '{}' initialized (half-height {:.0})",
            tag.label,
            capsule.half_height
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialization_runs_once() {
        let mut world = World::new();
        let entity = world
            .spawn((
                Tag {
                    label: "Player".into(),
                },
                Transform {
                    position: Point3::new(1.0, 88.0, 2.0),
                    ..Default::default()
                },
                Capsule::new(34.0, 88.0),
                MovementSettings {
                    walk_speed: 250.0,
                    jump_velocity: 420.0,
                    ..Default::default()
                },
                CharacterMovement::default(),
                StanceState::default(),
                FootstepState::default(),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(initialize_characters);
        schedule.run(&mut world);
        world.clear_trackers();

        let movement = world.get::<CharacterMovement>(entity).unwrap();
        assert_eq!(movement.max_walk_speed, 250.0);
        assert_eq!(movement.jump_velocity, 420.0);

        let stance = world.get::<StanceState>(entity).unwrap();
        assert_eq!(stance.original_half_height, 88.0);

        let footsteps = world.get::<FootstepState>(entity).unwrap();
        assert_eq!(footsteps.last_position, Point3::new(1.0, 88.0, 2.0));

        // A later frame with changed settings must not reinitialize
        world.get_mut::<CharacterMovement>(entity).unwrap().max_walk_speed = 500.0;
        schedule.run(&mut world);
        assert_eq!(
            world.get::<CharacterMovement>(entity).unwrap().max_walk_speed,
            500.0
        );
    }
}
