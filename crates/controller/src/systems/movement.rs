use crate::prelude::*;

/// Feed the MoveForward/MoveRight axes into the movement component,
/// rotated into the camera's yaw basis. Pitch never tilts ground
/// movement; looking at the floor does not slow the character down.
pub fn apply_movement_input(
    mut query: Query<(&mut CharacterMovement, &FirstPersonCamera)>,
    bindings: Res<InputBindings>,
    input: Res<InputState>,
) {
    for (mut movement, camera) in query.iter_mut() {
        let forward_axis = bindings.axis_value(Axis::MoveForward, &input);
        let right_axis = bindings.axis_value(Axis::MoveRight, &input);

        if forward_axis == 0.0 && right_axis == 0.0 {
            continue;
        }

        let forward = Vector3::new(camera.yaw.cos(), 0.0, camera.yaw.sin());
        let right = Vector3::new(-camera.yaw.sin(), 0.0, camera.yaw.cos());

        movement.add_movement_input(forward, forward_axis);
        movement.add_movement_input(right, right_axis);
    }
}
