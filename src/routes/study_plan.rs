use axum::extract::State;
use maud::Markup;

use crate::error::{Result, ResultExt};
use crate::middleware::session::RequireUser;
use crate::views;
use crate::AppState;

#[axum::debug_handler]
pub async fn study_plan(State(state): State<AppState>, user: RequireUser) -> Result<Markup> {
    let plan = state
        .enrollment_service
        .study_plan(&user.token)
        .await
        .back_to_or("/", "Back to home", "Failed to fetch study plan")?;
    Ok(views::study_plan::study_plan(&user.session, &plan))
}
