//! Account-facing payloads: identity, registration, profile and password
//! updates, and the token returned by the login endpoint.

use serde::{Deserialize, Serialize};

/// Public identity of a logged-in user.
///
/// The backend spells the identifier either `id` or `_id` depending on the
/// endpoint; both are accepted. All fields are optional because the client
/// renders whatever subset the backend returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// User identifier (`id` or `_id` on the wire).
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Access token returned by `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    /// The bearer token itself.
    pub access_token: String,
    /// Token scheme, always `"bearer"` for this backend.
    pub token_type: String,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Email address, used as the login identifier.
    pub email: String,
    /// Plain-text password; the backend hashes it.
    pub password: String,
    /// Optional phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for `PUT /user/profile`. Only the provided fields are changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    /// New first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Payload for `PUT /user/change-password`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// The password being replaced.
    pub current_password: String,
    /// The password to set.
    pub new_password: String,
}

/// Generic acknowledgment body the backend returns for mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation, ready to render.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_accepts_both_id_spellings() {
        let primary: UserIdentity =
            serde_json::from_str(r#"{"id":"u1","name":"Ayşe"}"#).expect("primary id");
        assert_eq!(primary.id.as_deref(), Some("u1"));

        let alternate: UserIdentity =
            serde_json::from_str(r#"{"_id":"u2","name":"Fatma"}"#).expect("alternate id");
        assert_eq!(alternate.id.as_deref(), Some("u2"));
    }

    #[test]
    fn change_password_uses_camel_case_on_the_wire() {
        let body = serde_json::to_value(ChangePasswordRequest {
            current_password: "eski".into(),
            new_password: "yeni".into(),
        })
        .expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({"currentPassword": "eski", "newPassword": "yeni"})
        );
    }

    #[test]
    fn profile_update_omits_unset_fields() {
        let body = serde_json::to_string(&ProfileUpdate {
            name: Some("Deniz".into()),
            ..ProfileUpdate::default()
        })
        .expect("serialize");
        assert_eq!(body, r#"{"name":"Deniz"}"#);
    }
}
