pub use crate::audio::{AudioSink, PlayRequest, SoundId};
pub use crate::camera_shake::{CameraShakeId, CameraShakePlayer, ShakeRequest};
pub use crate::components::*;
pub use crate::input::InputState;
pub use crate::movement::{Capsule, CharacterMovement, integrate_movement};
pub use crate::trace::{SurfaceMaterial, TraceHit, TraceWorld, Volume};
pub use crate::{Layer, LayerContext, LayerEvent, Result};

pub use bevy_ecs::prelude::*;
pub use nalgebra::{Point3, UnitQuaternion, Vector3};
