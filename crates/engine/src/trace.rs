use bevy_ecs::prelude::*;
use nalgebra::{Point3, Vector3};

/// Engine metadata tag describing what a surface is made of.
/// Gameplay uses it to pick context-appropriate sounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SurfaceMaterial(String);

impl SurfaceMaterial {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SurfaceMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Axis-aligned blocking volume, optionally tagged with a surface material
pub struct Volume {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
    pub material: Option<SurfaceMaterial>,
}

impl Volume {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self {
            min,
            max,
            material: None,
        }
    }

    pub fn with_material(mut self, material: SurfaceMaterial) -> Self {
        self.material = Some(material);
        self
    }

    /// Slab test: distance along a normalized direction to the volume,
    /// within `max_distance`. An origin inside the volume hits at zero.
    fn intersect(&self, origin: Point3<f32>, direction: Vector3<f32>, max_distance: f32) -> Option<f32> {
        let mut t_enter = 0.0f32;
        let mut t_exit = max_distance;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];

            if d.abs() < 1e-6 {
                // Parallel to the slab: inside or nothing
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
            } else {
                let mut t0 = (self.min[axis] - o) / d;
                let mut t1 = (self.max[axis] - o) / d;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }

                t_enter = t_enter.max(t0);
                t_exit = t_exit.min(t1);
                if t_enter > t_exit {
                    return None;
                }
            }
        }

        Some(t_enter)
    }
}

/// Result of a line trace against the world
pub struct TraceHit {
    /// Point where the trace entered the volume
    pub location: Point3<f32>,
    /// Distance from the trace start to the hit
    pub distance: f32,
    /// Surface material of the hit volume, if it has one
    pub material: Option<SurfaceMaterial>,
}

/// Host-owned collision geometry the controller probes against.
/// Stands in for the engine's scene queries (line traces, floor finding).
#[derive(Resource, Default)]
pub struct TraceWorld {
    volumes: Vec<Volume>,
}

impl TraceWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_volume(&mut self, volume: Volume) {
        self.volumes.push(volume);
    }

    /// Trace a segment and return the nearest blocking hit, if any
    pub fn line_trace(&self, start: Point3<f32>, end: Point3<f32>) -> Option<TraceHit> {
        let segment = end - start;
        let length = segment.magnitude();
        if length <= f32::EPSILON {
            return None;
        }
        let direction = segment / length;

        let mut nearest: Option<TraceHit> = None;
        for volume in &self.volumes {
            if let Some(distance) = volume.intersect(start, direction, length) {
                let closer = nearest
                    .as_ref()
                    .is_none_or(|hit| distance < hit.distance);
                if closer {
                    nearest = Some(TraceHit {
                        location: start + direction * distance,
                        distance,
                        material: volume.material.clone(),
                    });
                }
            }
        }

        nearest
    }

    /// Probe straight down from `location` for the supporting floor
    pub fn find_floor(&self, location: Point3<f32>, probe_length: f32) -> Option<TraceHit> {
        let end = Point3::new(location.x, location.y - probe_length, location.z);
        self.line_trace(location, end)
    }
}
