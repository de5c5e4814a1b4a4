use bevy::prelude::*;

use crate::engine::core::app_state::{StopViewer, ViewerState};

/// Stop the render loop on the first `StopViewer`. Natively the app exits too;
/// in the browser the canvas keeps its last frame.
pub fn handle_stop_requests(
    mut requests: EventReader<StopViewer>,
    state: Res<State<ViewerState>>,
    mut next_state: ResMut<NextState<ViewerState>>,
    #[cfg(not(target_arch = "wasm32"))] mut exit: EventWriter<AppExit>,
) {
    if requests.read().last().is_none() || *state.get() == ViewerState::Stopped {
        return;
    }

    info!("→ Stop requested, transitioning to Stopped state");
    next_state.set(ViewerState::Stopped);

    #[cfg(not(target_arch = "wasm32"))]
    exit.write(AppExit::Success);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn stop_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut stop: EventWriter<StopViewer>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        stop.write(StopViewer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn lifecycle_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<ViewerState>()
            .add_event::<StopViewer>()
            .add_event::<AppExit>()
            .add_systems(Update, handle_stop_requests);
        app
    }

    fn state(app: &App) -> ViewerState {
        *app.world().resource::<State<ViewerState>>().get()
    }

    #[test]
    fn stop_request_moves_to_stopped() {
        let mut app = lifecycle_app();
        app.world_mut()
            .resource_mut::<NextState<ViewerState>>()
            .set(ViewerState::Running);
        app.update();
        assert_eq!(state(&app), ViewerState::Running);

        app.world_mut().send_event(StopViewer);
        app.update();
        app.update();
        assert_eq!(state(&app), ViewerState::Stopped);
    }

    #[test]
    fn no_request_keeps_running() {
        let mut app = lifecycle_app();
        app.world_mut()
            .resource_mut::<NextState<ViewerState>>()
            .set(ViewerState::Running);
        app.update();
        app.update();
        assert_eq!(state(&app), ViewerState::Running);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn stop_requests_native_exit() {
        let mut app = lifecycle_app();
        app.world_mut().send_event(StopViewer);
        app.update();

        let exits = app.world().resource::<Events<AppExit>>();
        assert!(!exits.is_empty());
    }
}
