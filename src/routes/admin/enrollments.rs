use axum::extract::State;
use maud::Markup;

use crate::error::{Result, ResultExt};
use crate::middleware::session::RequireAdmin;
use crate::views::admin::enrollments::enrollment_list;
use crate::AppState;

#[axum::debug_handler]
pub async fn list_enrollments(State(state): State<AppState>, admin: RequireAdmin) -> Result<Markup> {
    let enrollments = state
        .enrollment_service
        .list_all(&admin.token)
        .await
        .back_to_or("/admin", "Back to admin", "Failed to fetch enrollments")?;
    Ok(enrollment_list(&admin.session, &enrollments))
}
