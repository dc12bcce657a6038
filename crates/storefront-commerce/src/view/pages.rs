//! Small two-or-more-state page toggles: the accounts page's login/register
//! switch and the profile page's tabs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which form the accounts page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn show_login(&mut self) {
        *self = AuthMode::Login;
    }

    pub fn show_register(&mut self) {
        *self = AuthMode::Register;
    }

    /// Switch to the other form and return the new mode.
    pub fn toggle(&mut self) -> AuthMode {
        *self = match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        *self
    }

    pub fn is_register(&self) -> bool {
        *self == AuthMode::Register
    }

    /// Subheading under "Welcome".
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "Log in to your account",
            AuthMode::Register => "Create your account",
        }
    }
}

/// Tabs on the user profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    #[default]
    Personal,
    Security,
    Payment,
    Orders,
    Wishlist,
    Settings,
}

impl ProfileTab {
    /// Tabs in display order.
    pub const ALL: [ProfileTab; 6] = [
        ProfileTab::Personal,
        ProfileTab::Security,
        ProfileTab::Payment,
        ProfileTab::Orders,
        ProfileTab::Wishlist,
        ProfileTab::Settings,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProfileTab::Personal => "personal",
            ProfileTab::Security => "security",
            ProfileTab::Payment => "payment",
            ProfileTab::Orders => "orders",
            ProfileTab::Wishlist => "wishlist",
            ProfileTab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Personal => "Personal Info",
            ProfileTab::Security => "Security",
            ProfileTab::Payment => "Payment Methods",
            ProfileTab::Orders => "Order History",
            ProfileTab::Wishlist => "Wishlist",
            ProfileTab::Settings => "Settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The profile page's active tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileView {
    pub active: ProfileTab,
}

impl ProfileView {
    pub fn select(&mut self, tab: ProfileTab) {
        self.active = tab;
    }

    /// Select by tab id; unknown ids leave the selection unchanged.
    pub fn select_id(&mut self, id: &str) -> bool {
        match ProfileTab::from_id(id) {
            Some(tab) => {
                self.active = tab;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_mode_defaults_to_login() {
        let mode = AuthMode::default();
        assert_eq!(mode, AuthMode::Login);
        assert_eq!(mode.heading(), "Log in to your account");
    }

    #[test]
    fn test_auth_mode_toggle_round_trip() {
        let mut mode = AuthMode::default();
        assert_eq!(mode.toggle(), AuthMode::Register);
        assert!(mode.is_register());
        assert_eq!(mode.heading(), "Create your account");
        assert_eq!(mode.toggle(), AuthMode::Login);
    }

    #[test]
    fn test_explicit_buttons_are_idempotent() {
        let mut mode = AuthMode::default();
        mode.show_register();
        mode.show_register();
        assert!(mode.is_register());
        mode.show_login();
        assert_eq!(mode, AuthMode::Login);
    }

    #[test]
    fn test_profile_tabs() {
        let mut view = ProfileView::default();
        assert_eq!(view.active, ProfileTab::Personal);

        assert!(view.select_id("orders"));
        assert_eq!(view.active, ProfileTab::Orders);

        assert!(!view.select_id("billing"));
        assert_eq!(view.active, ProfileTab::Orders);
    }
}
