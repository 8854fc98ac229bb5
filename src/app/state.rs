use crate::app::action::Action;
use crate::arena::nav::{Area, NavigationState, Navigator};
use crate::arena::Arena;
use crate::config::AppConfig;
use crate::ui::starfield::Starfield;
use ratatui::layout::Rect;

/// A button on an area view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaButton {
    Explore,
    MoonViewer,
    ReturnHome,
}

impl AreaButton {
    pub fn label(&self) -> &'static str {
        match self {
            AreaButton::Explore => "Explore Further",
            AreaButton::MoonViewer => "Interact with 3D Moon",
            AreaButton::ReturnHome => "Return to Arena",
        }
    }

    pub fn for_area(area: Area) -> &'static [AreaButton] {
        match area {
            Area::Lunar => &[AreaButton::Explore, AreaButton::MoonViewer, AreaButton::ReturnHome],
            Area::Mars => &[AreaButton::Explore, AreaButton::ReturnHome],
        }
    }
}

/// Presentation state of the area views, reset whenever the view changes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AreaViewState {
    pub selected: usize,
    pub moon_viewer: bool,
}

pub struct AppState {
    pub config: AppConfig,
    pub nav: Navigator,
    pub arena: Arena,
    pub area_view: AreaViewState,
    pub starfield: Starfield,
    /// Full terminal area; `None` until the size is known.
    pub screen: Option<Rect>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let arena = Arena::from_config(&config.arena);
        let starfield = Starfield::random(config.ui.star_count);
        Self {
            config,
            nav: Navigator::new(),
            arena,
            area_view: AreaViewState::default(),
            starfield,
            screen: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    pub fn view(&self) -> NavigationState {
        self.nav.current()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_message = Some(text.into());
        self.dirty = true;
    }

    pub fn target_label(&self, area: Area) -> String {
        self.arena
            .target(area)
            .map(|t| t.label.clone())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| area.default_label().to_string())
    }

    /// Leave the arena for `area`, tearing down any dock sequence still running.
    pub fn navigate_to(&mut self, area: Area) -> Vec<Action> {
        if !self.nav.request_navigate_to(area) {
            return vec![];
        }
        self.area_view = AreaViewState::default();
        self.status_message = None;
        self.dirty = true;
        self.arena
            .teardown()
            .into_iter()
            .map(|area| Action::CancelDock { area })
            .collect()
    }

    pub fn return_home(&mut self) {
        if self.nav.request_return_home() {
            self.area_view = AreaViewState::default();
            self.status_message = None;
            self.dirty = true;
        }
    }

    pub fn area_buttons(&self) -> &'static [AreaButton] {
        match self.view().area() {
            Some(area) => AreaButton::for_area(area),
            None => &[],
        }
    }

    pub fn select_next_button(&mut self) {
        let count = self.area_buttons().len();
        if count > 0 {
            self.area_view.selected = (self.area_view.selected + 1) % count;
            self.dirty = true;
        }
    }

    pub fn select_prev_button(&mut self) {
        let count = self.area_buttons().len();
        if count > 0 {
            self.area_view.selected = (self.area_view.selected + count - 1) % count;
            self.dirty = true;
        }
    }

    pub fn explore_url(&self, area: Area) -> &str {
        match area {
            Area::Lunar => &self.config.links.lunar_explore,
            Area::Mars => &self.config.links.mars_explore,
        }
    }

    /// Whether the current view animates and needs a redraw every tick.
    pub fn is_animating(&self) -> bool {
        match self.view() {
            NavigationState::Home => true,
            NavigationState::Lunar => self.area_view.moon_viewer,
            NavigationState::Mars => false,
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match self.view() {
            NavigationState::Home if self.arena.tracker.is_active() => {
                "Dragging the pipe...".to_string()
            }
            NavigationState::Home => "Drag the pipe onto a spaceship".to_string(),
            NavigationState::Lunar if self.area_view.moon_viewer => "Moon viewer".to_string(),
            NavigationState::Lunar | NavigationState::Mars => {
                "Enter to choose, Esc to return".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::geometry::Point;
    use crate::arena::drag::DropOutcome;

    #[test]
    fn test_new_state_is_home() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.view(), NavigationState::Home);
        assert_eq!(state.starfield.stars().len(), 100);
        assert!(state.is_animating());
    }

    #[test]
    fn test_navigate_cancels_pending_docks() {
        let mut state = AppState::new(AppConfig::default());
        let mars = state.arena.target(Area::Mars).unwrap().region.center();
        state.arena.pointer_down(Point::new(96.0, 48.0), (0.0, 0.0));
        assert!(matches!(state.arena.pointer_up(mars, 0), Some(DropOutcome::Accepted(_))));

        let actions = state.navigate_to(Area::Lunar);
        assert_eq!(actions, vec![Action::CancelDock { area: Area::Mars }]);
        assert_eq!(state.view(), NavigationState::Lunar);
        assert!(!state.arena.is_docking());
    }

    #[test]
    fn test_button_selection_wraps() {
        let mut state = AppState::new(AppConfig::default());
        state.navigate_to(Area::Mars);
        assert_eq!(state.area_buttons().len(), 2);
        state.select_prev_button();
        assert_eq!(state.area_view.selected, 1);
        state.select_next_button();
        assert_eq!(state.area_view.selected, 0);
    }

    #[test]
    fn test_return_home_resets_area_view() {
        let mut state = AppState::new(AppConfig::default());
        state.navigate_to(Area::Lunar);
        state.area_view.moon_viewer = true;
        state.area_view.selected = 2;
        state.return_home();
        assert_eq!(state.view(), NavigationState::Home);
        assert_eq!(state.area_view, AreaViewState::default());
    }
}
