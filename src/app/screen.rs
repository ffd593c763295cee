// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Tab;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Favorites,
    /// Remembers the tab it was opened from, where "back" returns.
    FoodDetails { origin: Tab },
}

impl Screen {
    /// The highlighted tab, `None` outside the tabbed screens.
    #[must_use]
    pub fn tab(self) -> Option<Tab> {
        match self {
            Screen::Dashboard => Some(Tab::Dashboard),
            Screen::Favorites => Some(Tab::Favorites),
            Screen::FoodDetails { .. } => None,
        }
    }

    /// The tab this screen belongs to for "back" navigation.
    #[must_use]
    pub fn origin(self) -> Tab {
        match self {
            Screen::Dashboard => Tab::Dashboard,
            Screen::Favorites => Tab::Favorites,
            Screen::FoodDetails { origin } => origin,
        }
    }
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Dashboard => Screen::Dashboard,
            Tab::Favorites => Screen::Favorites,
        }
    }
}
