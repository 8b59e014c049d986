use crate::prelude::*;

/// Extension point invoked when the Interact action fires. Bind your own
/// implementation to give the character interaction behavior.
pub trait Interaction: Send + Sync + 'static {
    fn interact(&mut self, character_position: Point3<f32>);
}

/// Default binding that does nothing but say so
pub struct NoopInteraction;

impl Interaction for NoopInteraction {
    fn interact(&mut self, _character_position: Point3<f32>) {
        log::warn!("No interaction behavior bound; provide your own Interaction implementation");
    }
}

#[derive(Resource)]
pub struct Interactor(pub Box<dyn Interaction>);

impl Default for Interactor {
    fn default() -> Self {
        Self(Box::new(NoopInteraction))
    }
}

impl Interactor {
    pub fn new(interaction: impl Interaction) -> Self {
        Self(Box::new(interaction))
    }
}
