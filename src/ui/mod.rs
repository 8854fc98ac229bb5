mod arena_view;
mod area_view;
pub mod layout;
mod moon_view;
pub mod starfield;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::arena::nav::NavigationState;
use ratatui::prelude::*;

/// Draw the view the navigator currently selects.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    match state.view() {
        NavigationState::Home => arena_view::render(frame, &app_layout, state),
        NavigationState::Lunar if state.area_view.moon_viewer => {
            moon_view::render(frame, app_layout.content, state)
        }
        view => {
            if let Some(area) = view.area() {
                area_view::render(frame, app_layout.content, state, area);
            }
        }
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
