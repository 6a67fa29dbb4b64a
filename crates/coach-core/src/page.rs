//! Page Identifiers and View Selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Identifier of a page the site can be asked to show.
///
/// `Features`, `Dashboard` and `Checkout` are targets of buttons but have no
/// view of their own; they render the home view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    Features,
    Pricing,
    Login,
    Dashboard,
    Checkout,
}

impl PageId {
    /// Every identifier, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Features,
        Self::Pricing,
        Self::Login,
        Self::Dashboard,
        Self::Checkout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Features => "features",
            PageId::Pricing => "pricing",
            PageId::Login => "login",
            PageId::Dashboard => "dashboard",
            PageId::Checkout => "checkout",
        }
    }

    /// Whether a dedicated view exists for this page
    pub fn has_view(&self) -> bool {
        matches!(self, PageId::Home | PageId::Pricing | PageId::Login)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == token)
            .ok_or_else(|| CoreError::UnknownPage(s.to_string()))
    }
}

/// The views that actually exist
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Pricing,
    Login,
}

/// Map a page to the view that renders it.
///
/// Total over [`PageId`]: anything without a view of its own falls back to
/// [`View::Home`].
pub fn select_view(page: PageId) -> View {
    match page {
        PageId::Home => View::Home,
        PageId::Pricing => View::Pricing,
        PageId::Login => View::Login,
        _ => View::Home,
    }
}

/// Select a view from a raw page token. Unrecognized tokens render home.
pub fn select_view_for_token(token: &str) -> View {
    token.parse().map_or(View::Home, select_view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_pages_select_their_view() {
        assert_eq!(select_view(PageId::Home), View::Home);
        assert_eq!(select_view(PageId::Pricing), View::Pricing);
        assert_eq!(select_view(PageId::Login), View::Login);
    }

    #[test]
    fn test_pages_without_view_fall_back_to_home() {
        for page in [PageId::Features, PageId::Dashboard, PageId::Checkout] {
            assert!(!page.has_view());
            assert_eq!(select_view(page), View::Home);
        }
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_home() {
        assert_eq!(select_view_for_token("pricing"), View::Pricing);
        assert_eq!(select_view_for_token("LOGIN "), View::Login);
        assert_eq!(select_view_for_token("settings"), View::Home);
        assert_eq!(select_view_for_token(""), View::Home);
        assert_eq!(select_view_for_token("checkout"), View::Home);
    }

    #[test]
    fn test_parse_round_trips_tokens() {
        for page in PageId::ALL {
            assert_eq!(page.to_string().parse::<PageId>(), Ok(page));
        }
    }

    #[test]
    fn test_parse_unknown_page() {
        let err = "admin".parse::<PageId>().unwrap_err();
        assert_eq!(err, CoreError::UnknownPage("admin".into()));
        assert_eq!(err.to_string(), "Unknown page: admin");
    }

    #[test]
    fn test_serde_uses_lowercase_tokens() {
        let json = serde_json::to_string(&PageId::Checkout).unwrap();
        assert_eq!(json, "\"checkout\"");

        let page: PageId = serde_json::from_str("\"pricing\"").unwrap();
        assert_eq!(page, PageId::Pricing);
    }
}
