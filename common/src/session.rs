//! Signed-in user state.
//!
//! A `Session` is created on startup from whatever the browser persisted,
//! replaced on login and cleared on logout. It is passed explicitly to the
//! pages and API calls that need a bearer token.

use serde::{Deserialize, Serialize};

use crate::requests::{LoginResponse, UserProfile};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key of the serialized [`UserProfile`].
pub const USER_KEY: &str = "userData";

const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Outcome of the admin dashboard gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    RedirectToLogin,
    RedirectToContribute,
    Granted,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Rebuilds a session from the two persisted values. A user blob that
    /// does not parse is discarded.
    pub fn restore(token: Option<String>, user_json: Option<&str>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        let user = user_json.and_then(|raw| serde_json::from_str::<UserProfile>(raw).ok());
        Self { token, user }
    }

    pub fn from_login(response: &LoginResponse) -> Option<Self> {
        let token = response.bearer()?.to_string();
        Some(Self {
            token: Some(token),
            user: response.user.clone(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == ADMIN_ROLE)
    }

    pub fn bearer_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }

    pub fn user_json(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| serde_json::to_string(u).ok())
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("")
    }

    pub fn dashboard_access(&self) -> AccessDecision {
        if self.token.is_none() || self.user.is_none() {
            AccessDecision::RedirectToLogin
        } else if !self.is_admin() {
            AccessDecision::RedirectToContribute
        } else {
            AccessDecision::Granted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> UserProfile {
        UserProfile {
            id: 1,
            name: "Admin".into(),
            email: "admin@tarlac.gov.ph".into(),
            role: "admin".into(),
        }
    }

    #[test]
    fn dashboard_gate() {
        assert_eq!(Session::anonymous().dashboard_access(), AccessDecision::RedirectToLogin);

        let token_only = Session::restore(Some("t".into()), None);
        assert_eq!(token_only.dashboard_access(), AccessDecision::RedirectToLogin);

        let mut contributor = admin();
        contributor.role = "user".into();
        let session = Session {
            token: Some("t".into()),
            user: Some(contributor),
        };
        assert_eq!(session.dashboard_access(), AccessDecision::RedirectToContribute);

        let session = Session {
            token: Some("t".into()),
            user: Some(admin()),
        };
        assert_eq!(session.dashboard_access(), AccessDecision::Granted);
        assert_eq!(session.bearer_header().as_deref(), Some("Bearer t"));
    }

    #[test]
    fn restore_discards_garbage() {
        let session = Session::restore(Some(String::new()), Some("{not json"));
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());

        let json = serde_json::to_string(&admin()).unwrap();
        let session = Session::restore(Some("t".into()), Some(&json));
        assert!(session.is_admin());
    }

    #[test]
    fn login_without_token_is_rejected() {
        assert!(Session::from_login(&LoginResponse::default()).is_none());
    }
}
