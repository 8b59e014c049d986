use crate::prelude::*;

/// Designer-facing movement tuning, read-only at runtime
#[derive(Component, Clone)]
pub struct MovementSettings {
    /// The normal movement speed
    pub walk_speed: f32,
    /// The movement speed while crouching
    pub crouch_speed: f32,
    /// The movement speed while running
    pub run_speed: f32,
    /// The initial vertical jump velocity
    pub jump_velocity: f32,
    /// How fast the stand/crouch transition converges
    pub crouch_transition_speed: f32,
    /// Crouch stays on after the key is released when set
    pub toggle_crouch: bool,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            walk_speed: 300.0,
            crouch_speed: 150.0,
            run_speed: 500.0,
            jump_velocity: 300.0,
            crouch_transition_speed: 10.0,
            toggle_crouch: false,
        }
    }
}

/// Designer-facing camera tuning
#[derive(Component, Clone)]
pub struct CameraSettings {
    /// Horizontal look sensitivity
    pub sensitivity_x: f32,
    /// Vertical look sensitivity
    pub sensitivity_y: f32,
    /// Minimum view pitch in degrees
    pub min_pitch: f32,
    /// Maximum view pitch in degrees
    pub max_pitch: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            sensitivity_x: 50.0,
            sensitivity_y: 50.0,
            min_pitch: -90.0,
            max_pitch: 90.0,
        }
    }
}

/// First-person camera attached to the character capsule
#[derive(Component, Clone)]
pub struct FirstPersonCamera {
    /// Camera offset relative to the capsule center
    pub offset: Vector3<f32>,
    /// Rotation around the vertical axis, radians
    pub yaw: f32,
    /// Rotation around the horizontal axis, radians
    pub pitch: f32,
    /// Offset at spawn; the stand-up interpolation target
    pub original_offset: Vector3<f32>,
}

impl FirstPersonCamera {
    pub fn new(offset: Vector3<f32>) -> Self {
        Self {
            offset,
            yaw: 0.0,
            pitch: 0.0,
            original_offset: offset,
        }
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(Vector3::new(0.0, 70.0, 0.0))
    }
}

/// Motion stances the controller distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stance {
    Standing,
    Running,
    Crouching,
}

/// Transient stance state of one character
#[derive(Component, Clone)]
pub struct StanceState {
    pub is_crouching: bool,
    /// False while an overhead obstruction blocks standing up
    pub can_uncrouch: bool,
    /// Capsule half-height at spawn; the stand-up interpolation target
    pub original_half_height: f32,
}

impl Default for StanceState {
    fn default() -> Self {
        Self {
            is_crouching: false,
            can_uncrouch: true,
            original_half_height: 0.0,
        }
    }
}

impl StanceState {
    /// Current stance given the configured movement component
    pub fn stance(&self, movement: &CharacterMovement, settings: &MovementSettings) -> Stance {
        if self.is_crouching {
            Stance::Crouching
        } else if movement.max_walk_speed >= settings.run_speed {
            Stance::Running
        } else {
            Stance::Standing
        }
    }
}
