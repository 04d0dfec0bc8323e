use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;

use crate::dto::skill_dto::SkillForm;
use crate::error::{Result, ResultExt};
use crate::middleware::session::RequireAdmin;
use crate::models::skill::Skill;
use crate::routes::{failure_message, redirect_with};
use crate::utils::validation::messages;
use crate::views::admin::skills::{confirm_skill_delete, skill_form, skill_list};
use crate::views::components::Flash;
use crate::AppState;

const LIST: &str = "/admin/skills";

async fn load_skill(state: &AppState, admin: &RequireAdmin, id: i64) -> Result<Skill> {
    state
        .skill_service
        .get(id, &admin.token)
        .await
        .back_to_or(LIST, "Go back to skills", "Failed to fetch skill")
}

#[axum::debug_handler]
pub async fn list_skills(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(flash): Query<Flash>,
) -> Result<Markup> {
    let skills = state
        .skill_service
        .list(&admin.token)
        .await
        .back_to_or("/admin", "Back to admin", "Failed to fetch skills")?;
    Ok(skill_list(&admin.session, &skills, &flash))
}

#[axum::debug_handler]
pub async fn new_skill(admin: RequireAdmin) -> Markup {
    skill_form(&admin.session, None, &SkillForm::default(), &[])
}

#[axum::debug_handler]
pub async fn create_skill(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Form(form): Form<SkillForm>,
) -> Result<Response> {
    let errors = match form.clone().into_payload() {
        Ok(payload) => match state.skill_service.create(&admin.token, &payload).await {
            Ok(_) => return Ok(redirect_with(LIST, "notice", "Skill created successfully!").into_response()),
            Err(err) => vec![failure_message(err, "Failed to create skill")?],
        },
        Err(errors) => messages(&errors),
    };
    Ok((StatusCode::BAD_REQUEST, skill_form(&admin.session, None, &form, &errors)).into_response())
}

#[axum::debug_handler]
pub async fn edit_skill(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Markup> {
    let skill = load_skill(&state, &admin, id).await?;
    Ok(skill_form(&admin.session, Some(id), &SkillForm::from_skill(&skill), &[]))
}

#[axum::debug_handler]
pub async fn update_skill(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
    Form(form): Form<SkillForm>,
) -> Result<Response> {
    let errors = match form.clone().into_payload() {
        Ok(payload) => match state.skill_service.update(id, &admin.token, &payload).await {
            Ok(_) => return Ok(redirect_with(LIST, "notice", "Skill updated successfully!").into_response()),
            Err(err) => vec![failure_message(err, "Failed to update skill")?],
        },
        Err(errors) => messages(&errors),
    };
    Ok((StatusCode::BAD_REQUEST, skill_form(&admin.session, Some(id), &form, &errors)).into_response())
}

#[axum::debug_handler]
pub async fn confirm_delete(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Markup> {
    let skill = load_skill(&state, &admin, id).await?;
    Ok(confirm_skill_delete(&admin.session, &skill))
}

#[axum::debug_handler]
pub async fn delete_skill(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response> {
    match state.skill_service.delete(id, &admin.token).await {
        Ok(()) => Ok(redirect_with(LIST, "notice", "Skill deleted successfully.").into_response()),
        Err(err) => {
            let message = failure_message(err, "Failed to delete skill")?;
            Ok(redirect_with(LIST, "error", &format!("Error deleting skill: {}", message)).into_response())
        }
    }
}
