use serde::{Deserialize, Serialize};

use crate::models::user::User;
use crate::utils::form::{deserialize_bool_flexible, non_empty};

/// Admin edit of a user's flags; checkboxes absent from the post are false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdateForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "deserialize_bool_flexible")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "deserialize_bool_flexible")]
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserUpdatePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
}

impl UserUpdateForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone().unwrap_or_default(),
            is_active: user.is_active,
            is_admin: user.is_admin,
        }
    }
}

impl From<UserUpdateForm> for UserUpdatePayload {
    fn from(form: UserUpdateForm) -> Self {
        Self {
            full_name: non_empty(&form.full_name),
            is_active: form.is_active,
            is_admin: form.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_boxes_are_false() {
        let form: UserUpdateForm = serde_json::from_str(r#"{"full_name":"","is_admin":"on"}"#).unwrap();
        let payload = UserUpdatePayload::from(form);
        assert!(!payload.is_active);
        assert!(payload.is_admin);
        assert_eq!(payload.full_name, None);
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"is_active":false,"is_admin":true}"#
        );
    }
}
