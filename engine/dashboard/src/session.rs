//! Session state
//!
//! A session lives for the duration of a sign-in and is never persisted.
//! The engines never read it: the facade extracts the tier and passes it
//! into every gated call explicitly.

use access_policy::Tier;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// A signed-in account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub account_id: u64,
    pub display_name: String,
    pub tier: Tier,
    pub signed_in_at: DateTime<Utc>,
}

/// Current sign-in state. `None` user means anonymous.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    /// Anonymous session
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    /// Session already signed in at the given tier
    pub fn signed_in(account_id: u64, display_name: impl Into<String>, tier: Tier) -> Self {
        let mut session = Self::anonymous();
        session.sign_in(account_id, display_name, tier);
        session
    }

    pub fn sign_in(&mut self, account_id: u64, display_name: impl Into<String>, tier: Tier) {
        let user = User {
            account_id,
            display_name: display_name.into(),
            tier,
            signed_in_at: Utc::now(),
        };
        info!("Signed in account {} at tier {}", user.account_id, user.tier);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Signed out account {}", user.account_id);
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Tier of the signed-in user, `None` when anonymous
    pub fn tier(&self) -> Option<Tier> {
        self.user.as_ref().map(|u| u.tier)
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifecycle() {
        let mut session = Session::anonymous();
        assert!(!session.is_signed_in());
        assert_eq!(session.tier(), None);

        session.sign_in(42, "Jordan", Tier::Premium);
        assert!(session.is_signed_in());
        assert_eq!(session.tier(), Some(Tier::Premium));
        assert_eq!(session.user().unwrap().display_name, "Jordan");

        session.sign_out();
        assert!(!session.is_signed_in());
        assert_eq!(session.tier(), None);
    }

    #[test]
    fn test_signed_in_constructor() {
        let session = Session::signed_in(7, "Riley", Tier::Pro);
        assert_eq!(session.tier(), Some(Tier::Pro));
    }
}
