use crate::prelude::*;

/// Pre-authored shake effects keyed by motion state. The host owns the
/// actual effects; these are the handles gameplay requests them by.
#[derive(Component, Clone)]
pub struct CameraShakes {
    /// Played while standing still (breathing)
    pub idle: CameraShakeId,
    /// Played while walking
    pub walk: CameraShakeId,
    /// Played while running
    pub run: CameraShakeId,
    /// Played on jump takeoff and landing
    pub jump: CameraShakeId,
}

impl Default for CameraShakes {
    fn default() -> Self {
        Self {
            idle: CameraShakeId::new("idle_shake"),
            walk: CameraShakeId::new("walk_shake"),
            run: CameraShakeId::new("run_shake"),
            jump: CameraShakeId::new("jump_shake"),
        }
    }
}
