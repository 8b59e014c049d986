use crate::prelude::*;

/// Designer sensitivity of 50 maps to 0.002 radians per pixel
const SENSITIVITY_TO_RADIANS: f32 = 0.000_04;

/// Mouse look: the Turn and LookUp axes drive yaw and pitch, with pitch
/// clamped to the configured view limits
pub fn update_look(
    mut query: Query<(&mut FirstPersonCamera, &CameraSettings)>,
    bindings: Res<InputBindings>,
    input: Res<InputState>,
) {
    for (mut camera, settings) in query.iter_mut() {
        let turn = bindings.axis_value(Axis::Turn, &input);
        let look_up = bindings.axis_value(Axis::LookUp, &input);

        camera.yaw -= turn * settings.sensitivity_x * SENSITIVITY_TO_RADIANS;
        camera.pitch += look_up * settings.sensitivity_y * SENSITIVITY_TO_RADIANS;
        camera.pitch = camera.pitch.clamp(
            settings.min_pitch.to_radians(),
            settings.max_pitch.to_radians(),
        );
    }
}
