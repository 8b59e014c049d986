use bevy_ecs::prelude::*;
use nalgebra::Point3;

/// Handle to a host-registered sound asset
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SoundId(String);

impl SoundId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

pub struct PlayRequest {
    pub sound: SoundId,
    pub location: Point3<f32>,
    pub volume: f32,
}

/// Playback requests queued for the host. Mixing and output are the
/// host's concern; this crate only records what gameplay asked for.
#[derive(Resource, Default)]
pub struct AudioSink {
    requests: Vec<PlayRequest>,
}

impl AudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request one-shot playback of a sound at a world location
    pub fn play_at(&mut self, sound: SoundId, location: Point3<f32>, volume: f32) {
        self.requests.push(PlayRequest {
            sound,
            location,
            volume,
        });
    }

    pub fn pending(&self) -> &[PlayRequest] {
        &self.requests
    }

    /// Host side: take this frame's requests
    pub fn drain(&mut self) -> Vec<PlayRequest> {
        for request in &self.requests {
            log::debug!(
                "Playing '{}' at ({:.0}, {:.0}, {:.0}) volume {:.2}",
                request.sound.name(),
                request.location.x,
                request.location.y,
                request.location.z,
                request.volume
            );
        }
        std::mem::take(&mut self.requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut sink = AudioSink::new();
        sink.play_at(SoundId::new("step"), Point3::origin(), 1.0);
        sink.play_at(SoundId::new("step"), Point3::origin(), 0.35);

        assert_eq!(sink.pending().len(), 2);
        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert!(sink.pending().is_empty());
    }
}
