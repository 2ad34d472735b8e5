//! The authenticated session: token plus (optionally) who it belongs to.

use serde::{Deserialize, Serialize};

use super::user::UserIdentity;

/// The current authentication state of the client.
///
/// Created at successful login, destroyed on logout or when the backend
/// rejects the token. The identity is optional: a session is usable for
/// authenticated calls as soon as the token is known, even if the profile
/// fetch that populates `user` has not completed or failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token attached to every authenticated request.
    pub token: String,
    /// Identity of the logged-in user, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserIdentity>,
}

impl Session {
    /// Create a token-only session.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: None,
        }
    }

    /// Attach the identity this token belongs to.
    #[must_use]
    pub fn with_user(mut self, user: UserIdentity) -> Self {
        self.user = Some(user);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip_preserves_token_and_user() {
        let session = Session::new("abc").with_user(UserIdentity {
            id: Some("u1".into()),
            name: Some("Ayşe".into()),
            surname: Some("Yılmaz".into()),
            email: Some("ayse@example.com".into()),
            phone: None,
        });

        let encoded = serde_json::to_string(&session).expect("serialize");
        let decoded: Session = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, session);
    }

    #[test]
    fn token_only_session_omits_user() {
        let encoded = serde_json::to_string(&Session::new("abc")).expect("serialize");
        assert_eq!(encoded, r#"{"token":"abc"}"#);
    }
}
