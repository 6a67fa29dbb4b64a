//! Navigation Store
//!
//! State-plus-dispatch handle created by the root view and passed to every
//! view as a prop.

use coach_core::{NavAction, NavCta, NavState, PageId, View};
use leptos::prelude::*;

/// Reactive wrapper around [`NavState`]
#[derive(Clone, Copy)]
pub struct NavStore {
    state: RwSignal<NavState>,
}

impl NavStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NavState::new()),
        }
    }

    pub fn dispatch(&self, action: NavAction) {
        tracing::debug!(?action, "dispatch");
        self.state.update(|state| state.apply(action));
    }

    pub fn navigate(&self, page: PageId) {
        self.dispatch(NavAction::Navigate(page));
    }

    /// Navigate and close the mobile menu
    pub fn navigate_from_menu(&self, page: PageId) {
        self.dispatch(NavAction::NavigateFromMenu(page));
    }

    pub fn toggle_mobile_menu(&self) {
        self.dispatch(NavAction::ToggleMobileMenu);
    }

    pub fn view(&self) -> View {
        self.state.with(NavState::select_page)
    }

    /// Selected view that only notifies when the view changes, so a menu
    /// toggle does not remount the page.
    pub fn view_memo(&self) -> Memo<View> {
        let store = *self;
        Memo::new(move |_| store.view())
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.state.with(|state| state.mobile_menu_open)
    }

    pub fn cta(&self) -> NavCta {
        self.state.with(NavState::cta)
    }

    pub fn mobile_cta(&self) -> NavCta {
        self.state.with(NavState::mobile_cta)
    }
}

impl Default for NavStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_menu_navigation_closes_menu() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = NavStore::new();
            assert_eq!(nav.view(), View::Home);
            assert!(!nav.mobile_menu_open());

            nav.toggle_mobile_menu();
            assert!(nav.mobile_menu_open());

            nav.navigate_from_menu(PageId::Pricing);
            assert_eq!(nav.view(), View::Pricing);
            assert!(!nav.mobile_menu_open());

            nav.navigate(PageId::Checkout);
            assert_eq!(nav.view(), View::Home);
        });
    }

    #[test]
    fn test_menu_toggle_keeps_view_memo() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = NavStore::new();
            nav.navigate(PageId::Login);

            let view = nav.view_memo();
            let mounts = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&mounts);
            let page = Memo::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                view.get()
            });

            assert_eq!(page.get(), View::Login);
            assert_eq!(mounts.load(Ordering::SeqCst), 1);

            nav.toggle_mobile_menu();
            nav.toggle_mobile_menu();
            nav.toggle_mobile_menu();
            assert_eq!(page.get(), View::Login);
            assert_eq!(mounts.load(Ordering::SeqCst), 1);

            nav.navigate(PageId::Pricing);
            assert_eq!(page.get(), View::Pricing);
            assert_eq!(mounts.load(Ordering::SeqCst), 2);
        });
    }
}
