use crate::prelude::*;

/// Landing plays the jump shake harder than takeoff does
const LANDING_SHAKE_SCALE: f32 = 3.0;

/// React to the Run, Crouch and Jump edges: swap the active speed and
/// stride constants and kick off the jump shake.
pub fn update_stance(
    mut query: Query<(
        &mut CharacterMovement,
        &mut StanceState,
        &mut FootstepSettings,
        &MovementSettings,
        &CameraShakes,
    )>,
    bindings: Res<InputBindings>,
    input: Res<InputState>,
    mut shake_player: ResMut<CameraShakePlayer>,
) {
    for (mut movement, mut stance, mut footsteps, settings, shakes) in query.iter_mut() {
        if bindings.action_just_pressed(Action::Run, &input) && !stance.is_crouching {
            movement.max_walk_speed = settings.run_speed;
            footsteps.set_stance(Stance::Running);
        }
        if bindings.action_just_released(Action::Run, &input) && !stance.is_crouching {
            movement.max_walk_speed = settings.walk_speed;
            footsteps.set_stance(Stance::Standing);
        }

        // Crouch toggles on press, but only while on the ground and with
        // standing room available
        if bindings.action_just_pressed(Action::Crouch, &input)
            && movement.is_moving_on_ground()
            && stance.can_uncrouch
        {
            stance.is_crouching = !stance.is_crouching;
            if stance.is_crouching {
                movement.max_walk_speed = settings.crouch_speed;
                footsteps.set_stance(Stance::Crouching);
                log::debug!("Crouching");
            } else {
                movement.max_walk_speed = settings.walk_speed;
                footsteps.set_stance(Stance::Standing);
                log::debug!("Standing");
            }
        }

        // In hold mode, releasing the key stands back up
        if bindings.action_just_released(Action::Crouch, &input)
            && !settings.toggle_crouch
            && stance.can_uncrouch
            && stance.is_crouching
        {
            stance.is_crouching = false;
            movement.max_walk_speed = settings.walk_speed;
            footsteps.set_stance(Stance::Standing);
        }

        // Jumping is refused while crouched
        if bindings.action_just_pressed(Action::Jump, &input)
            && !stance.is_crouching
            && movement.jump()
        {
            shake_player.play(&shakes.jump, 1.0);
        }
    }
}

/// Touch-down feedback: the jump shake at landing scale plus an
/// immediate footstep, skipped entirely while crouched
pub fn react_to_landing(
    mut query: Query<(
        &CharacterMovement,
        &StanceState,
        &FootstepSettings,
        &mut FootstepState,
        &CameraShakes,
    )>,
    mut shake_player: ResMut<CameraShakePlayer>,
) {
    for (movement, stance, settings, mut state, shakes) in query.iter_mut() {
        if movement.just_landed() && !stance.is_crouching {
            shake_player.play(&shakes.jump, LANDING_SHAKE_SCALE);
            if settings.enabled {
                state.force_step = true;
            }
        }
    }
}
