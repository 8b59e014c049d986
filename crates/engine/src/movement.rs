use bevy_ecs::prelude::*;
use nalgebra::Vector3;

use crate::components::{Time, Transform};
use crate::trace::TraceWorld;

/// Units per second squared, matching the usual centimeter scale
const GRAVITY: f32 = 980.0;

/// Extra reach below the capsule when probing for a supporting floor
const FLOOR_PROBE_SLACK: f32 = 10.0;

/// The character's body volume for collision and floor probes
#[derive(Component)]
pub struct Capsule {
    pub radius: f32,
    pub half_height: f32,
}

impl Capsule {
    pub fn new(radius: f32, half_height: f32) -> Self {
        Self {
            radius,
            half_height,
        }
    }

    pub fn set_half_height(&mut self, half_height: f32) {
        self.half_height = half_height;
    }
}

impl Default for Capsule {
    fn default() -> Self {
        Self {
            radius: 34.0,
            half_height: 88.0,
        }
    }
}

/// Movement integration component. Gameplay configures the speed and jump
/// parameters and feeds in movement input; `integrate_movement` does the
/// rest. The integration is a deliberately simple stand-in for a host
/// engine's character movement: desired-velocity ground movement, gravity,
/// and floor snapping against the trace world.
#[derive(Component)]
pub struct CharacterMovement {
    pub velocity: Vector3<f32>,
    pub max_walk_speed: f32,
    pub jump_velocity: f32,
    /// Fraction of movement input that applies while airborne
    pub air_control: f32,
    grounded: bool,
    just_landed: bool,
    input: Vector3<f32>,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        Self {
            velocity: Vector3::zeros(),
            max_walk_speed: 300.0,
            jump_velocity: 300.0,
            air_control: 0.1,
            grounded: false,
            just_landed: false,
            input: Vector3::zeros(),
        }
    }
}

impl CharacterMovement {
    /// Accumulate movement input for this frame. Direction is expected to
    /// be horizontal; the combined input is clamped to unit length when
    /// consumed so diagonals are not faster.
    pub fn add_movement_input(&mut self, direction: Vector3<f32>, scale: f32) {
        self.input += direction * scale;
    }

    /// Launch the character if it is standing on the floor
    pub fn jump(&mut self) -> bool {
        if self.grounded {
            self.velocity.y = self.jump_velocity;
            self.grounded = false;
            true
        } else {
            false
        }
    }

    pub fn is_moving_on_ground(&self) -> bool {
        self.grounded
    }

    pub fn is_falling(&self) -> bool {
        !self.grounded
    }

    /// True only for the frame on which the character touched down
    pub fn just_landed(&self) -> bool {
        self.just_landed
    }

    pub fn speed(&self) -> f32 {
        self.velocity.magnitude()
    }

    fn consume_input(&mut self) -> Vector3<f32> {
        let mut input = std::mem::replace(&mut self.input, Vector3::zeros());
        let magnitude = input.magnitude();
        if magnitude > 1.0 {
            input /= magnitude;
        }
        input
    }
}

/// Per-frame movement integration for every character in the world
pub fn integrate_movement(
    mut query: Query<(&mut Transform, &mut CharacterMovement, &Capsule)>,
    trace_world: Res<TraceWorld>,
    time: Res<Time>,
) {
    let dt = time.0.as_secs_f32();
    if dt <= 0.0 {
        return;
    }

    for (mut transform, mut movement, capsule) in query.iter_mut() {
        movement.just_landed = false;

        let input = movement.consume_input();
        let desired = input * movement.max_walk_speed;

        // Full authority over horizontal velocity on the ground, a small
        // fraction of it in the air
        let blend = if movement.grounded {
            1.0
        } else {
            movement.air_control
        };
        movement.velocity.x += (desired.x - movement.velocity.x) * blend;
        movement.velocity.z += (desired.z - movement.velocity.z) * blend;

        if !movement.grounded {
            movement.velocity.y -= GRAVITY * dt;
        }

        transform.position += movement.velocity * dt;

        // Floor snap: the transform sits at the capsule center
        let probe_length = capsule.half_height + FLOOR_PROBE_SLACK;
        let floor = trace_world.find_floor(transform.position, probe_length);

        let was_grounded = movement.grounded;
        match floor {
            Some(hit) if movement.velocity.y <= 0.0 => {
                transform.position.y = hit.location.y + capsule.half_height;
                movement.velocity.y = 0.0;
                movement.grounded = true;
                movement.just_landed = !was_grounded;
            }
            _ => {
                movement.grounded = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::Volume;
    use nalgebra::Point3;
    use std::time::Duration;

    fn test_world() -> World {
        let mut world = World::new();
        let mut trace = TraceWorld::new();
        trace.add_volume(Volume::new(
            Point3::new(-1000.0, -100.0, -1000.0),
            Point3::new(1000.0, 0.0, 1000.0),
        ));
        world.insert_resource(trace);
        world.insert_resource(Time(Duration::from_millis(16)));
        world
    }

    fn step(world: &mut World, schedule: &mut Schedule) {
        schedule.run(world);
    }

    #[test]
    fn test_lands_exactly_once() {
        let mut world = test_world();
        let entity = world
            .spawn((
                Transform {
                    position: Point3::new(0.0, 250.0, 0.0),
                    ..Default::default()
                },
                CharacterMovement::default(),
                Capsule::default(),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_movement);

        let mut landings = 0;
        for _ in 0..300 {
            step(&mut world, &mut schedule);
            if world.get::<CharacterMovement>(entity).unwrap().just_landed() {
                landings += 1;
            }
        }

        let movement = world.get::<CharacterMovement>(entity).unwrap();
        assert!(movement.is_moving_on_ground());
        assert_eq!(landings, 1);

        // Resting on the floor with the capsule center one half-height up
        let transform = world.get::<Transform>(entity).unwrap();
        assert!((transform.position.y - 88.0).abs() < 0.001);
    }

    #[test]
    fn test_walks_at_max_speed() {
        let mut world = test_world();
        let entity = world
            .spawn((
                Transform {
                    position: Point3::new(0.0, 88.0, 0.0),
                    ..Default::default()
                },
                CharacterMovement::default(),
                Capsule::default(),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(integrate_movement);

        // Settle onto the floor first
        step(&mut world, &mut schedule);

        world
            .get_mut::<CharacterMovement>(entity)
            .unwrap()
            .add_movement_input(Vector3::new(1.0, 0.0, 0.0), 1.0);
        step(&mut world, &mut schedule);

        let movement = world.get::<CharacterMovement>(entity).unwrap();
        assert!((movement.velocity.x - movement.max_walk_speed).abs() < 0.001);

        // Input is consumed; next frame without input stops on the spot
        step(&mut world, &mut schedule);
        let movement = world.get::<CharacterMovement>(entity).unwrap();
        assert_eq!(movement.velocity.x, 0.0);
    }

    #[test]
    fn test_diagonal_input_is_clamped() {
        let mut movement = CharacterMovement::default();
        movement.add_movement_input(Vector3::new(1.0, 0.0, 0.0), 1.0);
        movement.add_movement_input(Vector3::new(0.0, 0.0, 1.0), 1.0);

        let input = movement.consume_input();
        assert!((input.magnitude() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut movement = CharacterMovement::default();
        assert!(!movement.jump());

        movement.grounded = true;
        assert!(movement.jump());
        assert_eq!(movement.velocity.y, movement.jump_velocity);
        assert!(movement.is_falling());
    }
}
