use crate::prelude::*;

/// The walking shake runs at double strength; idle and run at base
const WALK_SHAKE_SCALE: f32 = 2.0;

/// Classify the character's motion each tick and keep the matching
/// pre-authored shake alive: walking when moving on the ground (crouched
/// or not), breathing otherwise, with the run shake layered on top at
/// run speed.
pub fn update_camera_shake(
    query: Query<(&CharacterMovement, &MovementSettings, &CameraShakes)>,
    mut shake_player: ResMut<CameraShakePlayer>,
) {
    for (movement, settings, shakes) in query.iter() {
        let moving = movement.speed() > 0.0 && movement.is_moving_on_ground();

        if moving {
            shake_player.play(&shakes.walk, WALK_SHAKE_SCALE);
        } else {
            shake_player.play(&shakes.idle, 1.0);
        }

        if moving && movement.max_walk_speed >= settings.run_speed {
            shake_player.play(&shakes.run, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shake_world(
        grounded_speed: Option<f32>,
        max_walk_speed: f32,
        crouching: bool,
    ) -> CameraShakePlayer {
        let mut world = World::new();
        world.insert_resource(CameraShakePlayer::new());

        let mut movement = CharacterMovement::default();
        movement.max_walk_speed = max_walk_speed;
        if let Some(speed) = grounded_speed {
            // Grounded with the given horizontal speed
            force_grounded(&mut movement, speed);
        }

        world.spawn((
            movement,
            StanceState {
                is_crouching: crouching,
                ..Default::default()
            },
            MovementSettings::default(),
            CameraShakes::default(),
        ));

        let mut schedule = Schedule::default();
        schedule.add_systems(update_camera_shake);
        schedule.run(&mut world);

        world.remove_resource::<CameraShakePlayer>().unwrap()
    }

    fn force_grounded(movement: &mut CharacterMovement, speed: f32) {
        use std::time::Duration;

        // Run one integration step over a floor to put the component in
        // the grounded state with the requested velocity
        let mut world = World::new();
        let mut trace = TraceWorld::new();
        trace.add_volume(Volume::new(
            Point3::new(-1000.0, -100.0, -1000.0),
            Point3::new(1000.0, 0.0, 1000.0),
        ));
        world.insert_resource(trace);
        world.insert_resource(Time(Duration::from_millis(16)));

        let mut staged = CharacterMovement::default();
        staged.max_walk_speed = movement.max_walk_speed;
        let entity = world
            .spawn((
                Transform {
                    position: Point3::new(0.0, 88.0, 0.0),
                    ..Default::default()
                },
                Capsule::default(),
                staged,
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_movement);
        schedule.run(&mut world);

        if speed > 0.0 {
            world
                .get_mut::<CharacterMovement>(entity)
                .unwrap()
                .add_movement_input(Vector3::new(1.0, 0.0, 0.0), speed / movement.max_walk_speed);
            schedule.run(&mut world);
        }

        *movement = world.entity_mut(entity).take::<CharacterMovement>().unwrap();
    }

    fn scales(player: &CameraShakePlayer) -> Vec<(String, f32)> {
        player
            .pending()
            .iter()
            .map(|r| (r.shake.name().to_string(), r.scale))
            .collect()
    }

    #[test]
    fn test_idle_when_standing_still() {
        let player = shake_world(Some(0.0), 300.0, false);
        assert_eq!(scales(&player), vec![("idle_shake".to_string(), 1.0)]);
    }

    #[test]
    fn test_walk_shake_while_moving() {
        let player = shake_world(Some(300.0), 300.0, false);
        assert_eq!(scales(&player), vec![("walk_shake".to_string(), 2.0)]);
    }

    #[test]
    fn test_run_shake_layered_on_walk() {
        let player = shake_world(Some(500.0), 500.0, false);
        assert_eq!(
            scales(&player),
            vec![
                ("walk_shake".to_string(), 2.0),
                ("run_shake".to_string(), 1.0)
            ]
        );
    }

    #[test]
    fn test_airborne_counts_as_idle() {
        let player = shake_world(None, 300.0, false);
        assert_eq!(scales(&player), vec![("idle_shake".to_string(), 1.0)]);
    }

    #[test]
    fn test_crouch_walking_plays_walk_shake() {
        // Sneaking still rocks the camera; only the speed decides between
        // the walk and run shakes
        let player = shake_world(Some(150.0), 150.0, true);
        assert_eq!(scales(&player), vec![("walk_shake".to_string(), 2.0)]);
    }
}
