use crate::prelude::*;

use rand::Rng;

/// Footsteps are quieter while sneaking
const CROUCH_VOLUME: f32 = 0.35;

/// Extra reach below the capsule for the footstep floor probe
const FLOOR_PROBE_SLACK: f32 = 50.0;

/// Accumulate traveled ground distance and fire a footstep whenever the
/// active stride threshold is crossed (or a landing forced one). The
/// surface material under the character picks the sound set; a missing
/// material or mapping is logged and skipped.
pub fn update_footsteps(
    mut query: Query<(
        &Transform,
        &Capsule,
        &CharacterMovement,
        &StanceState,
        &MovementSettings,
        &mut FootstepSettings,
        &mut FootstepState,
    )>,
    trace_world: Res<TraceWorld>,
    mut audio: ResMut<AudioSink>,
) {
    for (transform, capsule, movement, stance, movement_settings, mut settings, mut state) in
        query.iter_mut()
    {
        if !settings.enabled {
            continue;
        }

        if movement.is_moving_on_ground() && movement.speed() > 0.0 {
            let delta = transform.position - state.last_position;
            state.travel_distance += Vector3::new(delta.x, 0.0, delta.z).magnitude();
            state.last_position = transform.position;
        } else if movement.is_falling() {
            state.last_position = transform.position;
            state.travel_distance = 0.0;
        }

        let due = movement.is_moving_on_ground() && state.travel_distance > settings.stride;
        if due || state.force_step {
            state.force_step = false;
            state.travel_distance = 0.0;

            let stance_kind = stance.stance(movement, movement_settings);
            play_footstep(
                transform,
                capsule,
                stance_kind,
                stance.is_crouching,
                &mut settings,
                &trace_world,
                &mut audio,
            );
        }
    }
}

fn play_footstep(
    transform: &Transform,
    capsule: &Capsule,
    stance: Stance,
    is_crouching: bool,
    settings: &mut FootstepSettings,
    trace_world: &TraceWorld,
    audio: &mut AudioSink,
) {
    let probe_length = capsule.half_height + FLOOR_PROBE_SLACK;
    let Some(hit) = trace_world.find_floor(transform.position, probe_length) else {
        return;
    };

    let Some(material) = hit.material else {
        log::warn!(
            "No physical material under character at ({:.0}, {:.0}, {:.0})",
            hit.location.x,
            hit.location.y,
            hit.location.z
        );
        return;
    };

    let resolved = settings
        .resolve(&material)
        .map(|mapping| (mapping.sounds.clone(), mapping.strides));
    let Some((sounds, strides)) = resolved else {
        log::warn!("No footstep sound mapped for material '{material}'");
        return;
    };

    // The override holds only while walking on that surface; the
    // character's own stride set is the fallback and stays untouched
    let strides = strides.unwrap_or(settings.strides);
    settings.stride = strides.for_stance(stance);

    if sounds.is_empty() {
        log::warn!("Footstep mapping for '{material}' has no sounds");
        return;
    }

    let sound = sounds[rand::rng().random_range(0..sounds.len())].clone();
    let volume = if is_crouching { CROUCH_VOLUME } else { 1.0 };
    audio.play_at(sound, hit.location, volume);
}
