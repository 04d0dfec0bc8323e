pub mod admin;
pub mod auth;
pub mod courses;
pub mod health;
pub mod home;
pub mod lessons;
pub mod study_plan;

use axum::response::Redirect;

use crate::error::{Error, Result};

/// Post/Redirect/Get target carrying a one-shot message in the query string.
pub fn redirect_with(path: &str, key: &str, message: &str) -> Redirect {
    redirect_with_all(path, &[(key, message)])
}

pub fn redirect_with_all(path: &str, pairs: &[(&str, &str)]) -> Redirect {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    Redirect::to(&format!("{}?{}", path, query))
}

/// Splits a failed mutation: session and permission errors propagate, the
/// rest become a message for the current screen.
pub fn failure_message(err: Error, fallback: &str) -> Result<String> {
    match err {
        Error::Unauthorized | Error::Forbidden => Err(err),
        other => {
            tracing::warn!(error = %other, "request to backend failed");
            Ok(other.user_message(fallback))
        }
    }
}
