use crate::prelude::*;

/// Length of the overhead probe that decides whether standing is blocked
const STAND_PROBE_LENGTH: f32 = 130.0;

/// Camera height above the capsule center while fully crouched
const CROUCH_CAMERA_HEIGHT: f32 = 30.0;

/// Exponential step from `current` toward `target`. Never overshoots
/// while the factor stays below one.
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor.clamp(0.0, 1.0)
}

/// Per-frame crouch transition: the camera offset and capsule half-height
/// chase their stance targets, and while crouched an upward probe decides
/// whether standing room exists.
pub fn update_crouch(
    mut query: Query<(
        &Transform,
        &mut FirstPersonCamera,
        &mut Capsule,
        &mut StanceState,
        &MovementSettings,
    )>,
    trace_world: Res<TraceWorld>,
    time: Res<Time>,
) {
    let dt = time.0.as_secs_f32();

    for (transform, mut camera, mut capsule, mut stance, settings) in query.iter_mut() {
        let factor = settings.crouch_transition_speed * dt;

        let (camera_target, height_target) = if stance.is_crouching {
            (
                Vector3::new(0.0, CROUCH_CAMERA_HEIGHT, 0.0),
                stance.original_half_height / 2.0,
            )
        } else {
            (camera.original_offset, stance.original_half_height)
        };

        camera.offset = Vector3::new(
            approach(camera.offset.x, camera_target.x, factor),
            approach(camera.offset.y, camera_target.y, factor),
            approach(camera.offset.z, camera_target.z, factor),
        );
        let new_half_height = approach(capsule.half_height, height_target, factor);
        capsule.set_half_height(new_half_height);

        if stance.is_crouching {
            let probe_end = transform.position + Vector3::new(0.0, STAND_PROBE_LENGTH, 0.0);
            stance.can_uncrouch = trace_world.line_trace(transform.position, probe_end).is_none();
        }
    }
}
