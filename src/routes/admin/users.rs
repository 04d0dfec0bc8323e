use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;

use crate::dto::user_dto::{UserUpdateForm, UserUpdatePayload};
use crate::error::{Result, ResultExt};
use crate::middleware::session::RequireAdmin;
use crate::routes::{failure_message, redirect_with};
use crate::views::admin::users::user_list;
use crate::views::components::Flash;
use crate::AppState;

const LIST: &str = "/admin/users";

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(flash): Query<Flash>,
) -> Result<Markup> {
    let users = state
        .user_service
        .list(&admin.token)
        .await
        .back_to_or("/admin", "Back to admin", "Failed to fetch users")?;
    Ok(user_list(&admin.session, &users, &flash))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
    Form(form): Form<UserUpdateForm>,
) -> Result<Response> {
    let payload = UserUpdatePayload::from(form);
    match state.user_service.update(id, &admin.token, &payload).await {
        Ok(user) => {
            let notice = format!("User {} updated.", user.email);
            Ok(redirect_with(LIST, "notice", &notice).into_response())
        }
        Err(err) => {
            let message = failure_message(err, "Failed to update user")?;
            Ok(redirect_with(LIST, "error", &message).into_response())
        }
    }
}
