use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::form::deserialize_bool_flexible;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CredentialsForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// OAuth2 password-flow body for `POST /token`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_flexible")]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_admin_flag_variants() {
        let t: TokenResponse =
            serde_json::from_str(r#"{"access_token":"a","token_type":"bearer","is_admin":true}"#)
                .unwrap();
        assert!(t.is_admin);
        let t: TokenResponse = serde_json::from_str(r#"{"access_token":"a","is_admin":"false"}"#).unwrap();
        assert!(!t.is_admin);
        let t: TokenResponse = serde_json::from_str(r#"{"access_token":"a"}"#).unwrap();
        assert!(!t.is_admin);
    }

    #[test]
    fn credentials_validation() {
        let form = CredentialsForm {
            email: "not-an-email".into(),
            password: "".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }
}
