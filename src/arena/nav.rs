//! Navigation controller.
//!
//! Single owner of which full-screen view is displayed. Valid transitions
//! are `Home -> Lunar`, `Home -> Mars` and `area -> Home`; everything else
//! is a no-op that reports `false`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A destination reachable from the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Lunar,
    Mars,
}

impl Area {
    pub fn id(&self) -> &'static str {
        match self {
            Area::Lunar => "lunar",
            Area::Mars => "mars",
        }
    }

    pub fn default_label(&self) -> &'static str {
        match self {
            Area::Lunar => "Lunar Area",
            Area::Mars => "Mars Area",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    #[default]
    Home,
    Lunar,
    Mars,
}

impl NavigationState {
    pub fn area(&self) -> Option<Area> {
        match self {
            NavigationState::Home => None,
            NavigationState::Lunar => Some(Area::Lunar),
            NavigationState::Mars => Some(Area::Mars),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavigationState::Home => "ARENA",
            NavigationState::Lunar => "LUNAR",
            NavigationState::Mars => "MARS",
        }
    }
}

impl From<Area> for NavigationState {
    fn from(area: Area) -> Self {
        match area {
            Area::Lunar => NavigationState::Lunar,
            Area::Mars => NavigationState::Mars,
        }
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    current: NavigationState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> NavigationState {
        self.current
    }

    /// Move from the arena into `area`. Returns whether the view changed.
    pub fn request_navigate_to(&mut self, area: Area) -> bool {
        if self.current != NavigationState::Home {
            tracing::debug!(from = ?self.current, to = %area, "ignored navigation request");
            return false;
        }
        self.current = area.into();
        tracing::info!(to = %area, "navigated");
        true
    }

    /// Leave the current area for the arena. Returns whether the view changed.
    pub fn request_return_home(&mut self) -> bool {
        if self.current == NavigationState::Home {
            return false;
        }
        tracing::info!(from = ?self.current, "returned home");
        self.current = NavigationState::Home;
        true
    }
}
