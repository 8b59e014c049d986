use crate::prelude::*;

/// Escape asks the host to quit; Interact invokes whatever behavior is
/// bound, which is a logged no-op by default.
pub fn handle_session_actions(
    query: Query<&Transform, With<StanceState>>,
    bindings: Res<InputBindings>,
    input: Res<InputState>,
    mut quit: ResMut<QuitRequested>,
    mut interactor: ResMut<Interactor>,
) {
    if bindings.action_just_pressed(Action::Escape, &input) {
        log::info!("Quit requested");
        quit.0 = true;
    }

    if bindings.action_just_pressed(Action::Interact, &input) {
        for transform in query.iter() {
            interactor.0.interact(transform.position);
        }
    }
}
