use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use validator::Validate;

use crate::dto::auth_dto::CredentialsForm;
use crate::error::{Error, Result};
use crate::middleware::session::Session;
use crate::routes::{failure_message, redirect_with};
use crate::utils::validation::messages;
use crate::views::auth::{auth_form, AuthMode};
use crate::views::components::Flash;
use crate::AppState;

const BAD_CREDENTIALS: &str = "Incorrect email or password";

fn rejected(mode: AuthMode, email: &str, errors: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        auth_form(mode, email, &errors, &Flash::default()),
    )
        .into_response()
}

#[axum::debug_handler]
pub async fn login_page(Query(flash): Query<Flash>) -> impl IntoResponse {
    auth_form(AuthMode::Login, "", &[], &flash)
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        return Ok(rejected(AuthMode::Login, &form.email, messages(&errors)));
    }
    match state.auth_service.login(&form.email, &form.password).await {
        Ok(token) => {
            tracing::info!(is_admin = token.is_admin, "user logged in");
            let jar = Session::establish(jar, &token.access_token, token.is_admin, state.secure_cookies);
            Ok((jar, Redirect::to(Session::HOME_PATH)).into_response())
        }
        // The token endpoint answers bad credentials with 401.
        Err(Error::Unauthorized) => Ok(rejected(
            AuthMode::Login,
            &form.email,
            vec![BAD_CREDENTIALS.to_string()],
        )),
        Err(err) => {
            let message = failure_message(err, "Failed to login")?;
            Ok(rejected(AuthMode::Login, &form.email, vec![message]))
        }
    }
}

#[axum::debug_handler]
pub async fn register_page() -> impl IntoResponse {
    auth_form(AuthMode::Register, "", &[], &Flash::default())
}

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response> {
    if let Err(errors) = form.validate() {
        return Ok(rejected(AuthMode::Register, &form.email, messages(&errors)));
    }
    match state.auth_service.register(&form.email, &form.password).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "account registered");
            Ok(redirect_with(
                Session::LOGIN_PATH,
                "notice",
                "Registration successful. Please log in.",
            )
            .into_response())
        }
        Err(err) => {
            let message = failure_message(err, "Failed to register")?;
            Ok(rejected(AuthMode::Register, &form.email, vec![message]))
        }
    }
}

#[axum::debug_handler]
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (Session::clear(jar), Redirect::to(Session::HOME_PATH))
}
