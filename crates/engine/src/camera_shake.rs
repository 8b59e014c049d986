use bevy_ecs::prelude::*;

/// Handle to a pre-authored camera shake effect
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CameraShakeId(String);

impl CameraShakeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

pub struct ShakeRequest {
    pub shake: CameraShakeId,
    pub scale: f32,
}

/// Camera shake requests queued for the host, which owns the actual
/// perturbation playback. Requesting the same shake repeatedly keeps it
/// alive; only the latest request per shake survives a frame.
#[derive(Resource, Default)]
pub struct CameraShakePlayer {
    requests: Vec<ShakeRequest>,
}

impl CameraShakePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, shake: &CameraShakeId, scale: f32) {
        if let Some(existing) = self.requests.iter_mut().find(|r| &r.shake == shake) {
            existing.scale = scale;
        } else {
            self.requests.push(ShakeRequest {
                shake: shake.clone(),
                scale,
            });
        }
    }

    pub fn pending(&self) -> &[ShakeRequest] {
        &self.requests
    }

    /// Host side: take this frame's requests
    pub fn drain(&mut self) -> Vec<ShakeRequest> {
        for request in &self.requests {
            log::trace!(
                "Camera shake '{}' scale {:.1}",
                request.shake.name(),
                request.scale
            );
        }
        std::mem::take(&mut self.requests)
    }
}
