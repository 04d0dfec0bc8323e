use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::middleware::session::Session;
use crate::models::quiz::QuizContentError;
use crate::views;

pub type Result<T> = std::result::Result<T, Error>;

/// Where an error page points the user back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackLink {
    pub href: String,
    pub label: String,
}

impl BackLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    pub fn home() -> Self {
        Self::new("/", "Back to home")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Access Denied")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backend returned {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Backend {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Quiz(#[from] QuizContentError),

    #[error("{message}")]
    Page {
        status: StatusCode,
        message: String,
        back: BackLink,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Server-provided detail when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Backend {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Error::NotFound(msg) | Error::BadRequest(msg) => msg.clone(),
            Error::Page { message, .. } => message.clone(),
            Error::Validation(err) => err.to_string(),
            Error::Quiz(err) => err.to_string(),
            Error::Unauthorized => "Session expired or invalid. Please log in again.".to_string(),
            Error::Forbidden => "Access Denied".to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Status the error page is served with. Backend server errors are
    /// reported as a bad gateway.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Unauthorized => StatusCode::UNAUTHORIZED,
            Error::Forbidden => StatusCode::FORBIDDEN,
            Error::Page { status, .. } => *status,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::BadRequest(_) | Error::Validation(_) | Error::Quiz(_) | Error::Json(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::Backend { status, .. } if status.is_server_error() => StatusCode::BAD_GATEWAY,
            Error::Backend { status, .. } => *status,
            Error::Http(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) | Error::Internal(_) | Error::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}

pub trait ResultExt<T> {
    /// Turns a failure into a page-level error that links back to `href`.
    /// Session and permission failures pass through untouched.
    fn back_to(self, href: &str, label: &str) -> Result<T>;

    /// Same as `back_to` but with an explicit fallback message.
    fn back_to_or(self, href: &str, label: &str, fallback: &str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn back_to(self, href: &str, label: &str) -> Result<T> {
        self.back_to_or(href, label, "An unknown error occurred")
    }

    fn back_to_or(self, href: &str, label: &str, fallback: &str) -> Result<T> {
        self.map_err(|err| match err {
            Error::Unauthorized | Error::Forbidden => err,
            other => Error::Page {
                status: other.status_code(),
                message: other.user_message(fallback),
                back: BackLink::new(href, label),
            },
        })
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, back) = match self {
            Error::Unauthorized => {
                let jar = Session::clear(CookieJar::new());
                return (jar, Redirect::to(Session::LOGIN_PATH)).into_response();
            }
            Error::Forbidden => {
                return (status, views::layout::access_denied()).into_response();
            }
            Error::Page { message, back, .. } => (message, back),
            Error::NotFound(msg) | Error::BadRequest(msg) => (msg, BackLink::home()),
            Error::Validation(err) => (err.to_string(), BackLink::home()),
            Error::Quiz(err) => (err.to_string(), BackLink::home()),
            Error::Json(err) => (err.to_string(), BackLink::home()),
            Error::Backend { status, detail } => (
                detail.unwrap_or_else(|| format!("Request failed: {}", status)),
                BackLink::home(),
            ),
            Error::Http(err) => {
                tracing::error!(error = ?err, "backend request failed");
                (
                    "Could not reach the learning platform. Please try again later.".to_string(),
                    BackLink::home(),
                )
            }
            other => {
                tracing::error!(error = %other, "unhandled error");
                ("An unexpected error occurred".to_string(), BackLink::home())
            }
        };

        (status, views::layout::error_page(&message, &back)).into_response()
    }
}
