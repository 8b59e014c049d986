use crate::prelude::*;

/// Stride thresholds per stance. Distance between footstep sounds:
/// lower fires more often, higher less often.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StanceStrides {
    pub walk: f32,
    pub crouch: f32,
    pub run: f32,
}

impl Default for StanceStrides {
    fn default() -> Self {
        Self {
            walk: 160.0,
            crouch: 120.0,
            run: 90.0,
        }
    }
}

impl StanceStrides {
    pub fn for_stance(&self, stance: Stance) -> f32 {
        match stance {
            Stance::Standing => self.walk,
            Stance::Running => self.run,
            Stance::Crouching => self.crouch,
        }
    }
}

/// Designer-authored mapping from a surface material to its footstep
/// sound set, optionally overriding the stride thresholds while the
/// character walks on that surface
#[derive(Clone)]
pub struct SurfaceSounds {
    pub material: SurfaceMaterial,
    pub sounds: Vec<SoundId>,
    pub strides: Option<StanceStrides>,
}

impl SurfaceSounds {
    pub fn new(material: SurfaceMaterial, sounds: Vec<SoundId>) -> Self {
        Self {
            material,
            sounds,
            strides: None,
        }
    }

    pub fn with_strides(mut self, strides: StanceStrides) -> Self {
        self.strides = Some(strides);
        self
    }
}

/// Designer-facing footstep tuning
#[derive(Component, Clone)]
pub struct FootstepSettings {
    pub enabled: bool,
    /// Current threshold; stance changes and surface overrides mutate it
    pub stride: f32,
    pub strides: StanceStrides,
    pub mappings: Vec<SurfaceSounds>,
}

impl Default for FootstepSettings {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FootstepSettings {
    pub fn new(mappings: Vec<SurfaceSounds>) -> Self {
        let strides = StanceStrides::default();
        Self {
            enabled: true,
            stride: strides.walk,
            strides,
            mappings,
        }
    }

    /// Switch the active stride threshold to the one for `stance`
    pub fn set_stance(&mut self, stance: Stance) {
        self.stride = self.strides.for_stance(stance);
    }

    /// First-match scan over the configured mappings
    pub fn resolve(&self, material: &SurfaceMaterial) -> Option<&SurfaceSounds> {
        self.mappings.iter().find(|m| &m.material == material)
    }
}

/// Travel accumulation for one character
#[derive(Component, Clone)]
pub struct FootstepState {
    pub last_position: Point3<f32>,
    pub travel_distance: f32,
    /// Fires a footstep this frame regardless of distance (landing)
    pub force_step: bool,
}

impl Default for FootstepState {
    fn default() -> Self {
        Self {
            last_position: Point3::origin(),
            travel_distance: 0.0,
            force_step: false,
        }
    }
}
