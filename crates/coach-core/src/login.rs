//! Login View Tabs

use serde::{Deserialize, Serialize};

/// Active tab of the login view.
///
/// Local to the view: it starts at [`LoginTab::SignIn`] every time the view
/// is mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoginTab {
    #[default]
    #[serde(rename = "login")]
    SignIn,
    #[serde(rename = "register")]
    Register,
}

impl LoginTab {
    pub const ALL: [Self; 2] = [Self::SignIn, Self::Register];

    /// Tab value used in markup
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginTab::SignIn => "login",
            LoginTab::Register => "register",
        }
    }

    /// Tab trigger label
    pub fn label(&self) -> &'static str {
        match self {
            LoginTab::SignIn => "Entrar",
            LoginTab::Register => "Registrar",
        }
    }

    /// Submit button label of the tab's form
    pub fn submit_label(&self) -> &'static str {
        match self {
            LoginTab::SignIn => "Entrar",
            LoginTab::Register => "Criar Conta",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_sign_in() {
        assert_eq!(LoginTab::default(), LoginTab::SignIn);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(LoginTab::SignIn.as_str(), "login");
        assert_eq!(LoginTab::Register.label(), "Registrar");
        assert_eq!(LoginTab::Register.submit_label(), "Criar Conta");
    }

    #[test]
    fn test_serde_matches_markup_value() {
        for tab in LoginTab::ALL {
            let json = serde_json::to_value(tab).unwrap();
            assert_eq!(json, tab.as_str());
            let parsed: LoginTab = serde_json::from_value(json).unwrap();
            assert_eq!(parsed, tab);
        }
    }
}
