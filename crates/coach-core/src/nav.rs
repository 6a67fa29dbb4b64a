//! Navigation State
//!
//! The single state container owned by the root view. Views receive it
//! explicitly and request changes through [`NavAction`]s.

use serde::{Deserialize, Serialize};

use crate::page::{PageId, View, select_view};

/// Signed-in user placeholder.
///
/// Nothing populates it yet; it is the slot a real auth integration would fill.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
}

/// A requested state change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum NavAction {
    /// Show another page
    Navigate(PageId),

    /// Open or close the mobile menu
    ToggleMobileMenu,

    /// Navigate from a mobile menu item, which also closes the menu
    NavigateFromMenu(PageId),
}

/// Call-to-action button in the navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavCta {
    pub label: &'static str,
    pub target: PageId,
}

/// Which page is shown and whether the mobile menu is open
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Page requested by the last navigation
    pub current_page: PageId,

    /// Mobile menu visibility
    pub mobile_menu_open: bool,

    /// Never set by the application; see [`NavState::set_logged_in`]
    pub is_logged_in: bool,

    /// Always `None` in the current build
    pub user: Option<UserProfile>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current page. No validation, always succeeds.
    pub fn set_current_page(&mut self, page: PageId) {
        if page != self.current_page {
            tracing::debug!(from = %self.current_page, to = %page, "navigate");
        }
        if !page.has_view() {
            tracing::debug!(page = %page, "no view for page, rendering home");
        }
        self.current_page = page;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        tracing::trace!(open = self.mobile_menu_open, "mobile menu toggled");
    }

    /// View for the current page
    pub fn select_page(&self) -> View {
        select_view(self.current_page)
    }

    /// Apply an action
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Navigate(page) => self.set_current_page(page),
            NavAction::ToggleMobileMenu => self.toggle_mobile_menu(),
            NavAction::NavigateFromMenu(page) => {
                self.set_current_page(page);
                self.mobile_menu_open = false;
            }
        }
    }

    /// Hook for a future auth integration. The site never calls it.
    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.is_logged_in = logged_in;
    }

    /// Desktop call-to-action
    pub fn cta(&self) -> NavCta {
        if self.is_logged_in {
            NavCta {
                label: "Dashboard",
                target: PageId::Dashboard,
            }
        } else {
            NavCta {
                label: "Entrar",
                target: PageId::Login,
            }
        }
    }

    /// Mobile menu call-to-action. The label follows the login flag but the
    /// button always opens the login page.
    pub fn mobile_cta(&self) -> NavCta {
        NavCta {
            label: self.cta().label,
            target: PageId::Login,
        }
    }
}
