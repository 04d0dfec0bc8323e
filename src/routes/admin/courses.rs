use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;

use crate::dto::course_dto::CourseForm;
use crate::dto::skill_dto::SkillToggleForm;
use crate::error::{Result, ResultExt};
use crate::middleware::session::RequireAdmin;
use crate::routes::{failure_message, redirect_with};
use crate::utils::validation::messages;
use crate::views::admin::courses::{confirm_course_delete, course_form, course_list};
use crate::views::components::Flash;
use crate::AppState;

const LIST: &str = "/admin/courses";
const BACK_LABEL: &str = "Go back to courses";

#[axum::debug_handler]
pub async fn list_courses(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Query(flash): Query<Flash>,
) -> Result<Markup> {
    let courses = state
        .course_service
        .list(Some(&admin.token))
        .await
        .back_to_or("/admin", "Back to admin", "Failed to fetch courses")?;
    Ok(course_list(&admin.session, &courses, &flash))
}

#[axum::debug_handler]
pub async fn new_course(admin: RequireAdmin) -> Markup {
    course_form(&admin.session, None, &CourseForm::default(), &[], &[], &Flash::default())
}

#[axum::debug_handler]
pub async fn create_course(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Form(form): Form<CourseForm>,
) -> Result<Response> {
    let rejected = |errors: Vec<String>| {
        (
            StatusCode::BAD_REQUEST,
            course_form(&admin.session, None, &form, &errors, &[], &Flash::default()),
        )
            .into_response()
    };
    let payload = match form.clone().into_payload() {
        Ok(payload) => payload,
        Err(errors) => return Ok(rejected(messages(&errors))),
    };
    match state.course_service.create(&admin.token, &payload).await {
        Ok(_) => Ok(redirect_with(LIST, "notice", "Course created successfully!").into_response()),
        Err(err) => Ok(rejected(vec![failure_message(err, "Failed to create course")?])),
    }
}

async fn editor(
    state: &AppState,
    admin: &RequireAdmin,
    id: i64,
    form: Option<CourseForm>,
    errors: &[String],
    flash: &Flash,
) -> Result<Markup> {
    let course = state
        .course_service
        .get(id, Some(&admin.token))
        .await
        .back_to_or(LIST, BACK_LABEL, "Failed to fetch course")?;
    let skills = state
        .skill_service
        .list(&admin.token)
        .await
        .back_to_or(LIST, BACK_LABEL, "Failed to fetch skills")?;
    let form = form.unwrap_or_else(|| CourseForm::from_course(&course));
    Ok(course_form(&admin.session, Some(&course), &form, errors, &skills, flash))
}

#[axum::debug_handler]
pub async fn edit_course(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
    Query(flash): Query<Flash>,
) -> Result<Markup> {
    editor(&state, &admin, id, None, &[], &flash).await
}

#[axum::debug_handler]
pub async fn update_course(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
    Form(form): Form<CourseForm>,
) -> Result<Response> {
    let errors = match form.clone().into_payload() {
        Ok(payload) => match state.course_service.update(id, &admin.token, &payload).await {
            Ok(_) => return Ok(redirect_with(LIST, "notice", "Course updated successfully!").into_response()),
            Err(err) => vec![failure_message(err, "Failed to update course")?],
        },
        Err(errors) => messages(&errors),
    };
    let page = editor(&state, &admin, id, Some(form), &errors, &Flash::default()).await?;
    Ok((StatusCode::BAD_REQUEST, page).into_response())
}

#[axum::debug_handler]
pub async fn confirm_delete(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Markup> {
    let course = state
        .course_service
        .get(id, Some(&admin.token))
        .await
        .back_to_or(LIST, BACK_LABEL, "Failed to fetch course")?;
    Ok(confirm_course_delete(&admin.session, &course))
}

#[axum::debug_handler]
pub async fn delete_course(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response> {
    match state.course_service.delete(id, &admin.token).await {
        Ok(()) => Ok(redirect_with(LIST, "notice", "Course deleted successfully.").into_response()),
        Err(err) => {
            let message = failure_message(err, "Failed to delete course")?;
            Ok(redirect_with(LIST, "error", &format!("Error deleting course: {}", message)).into_response())
        }
    }
}

#[axum::debug_handler]
pub async fn toggle_skill(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path((id, skill_id)): Path<(i64, i64)>,
    Form(form): Form<SkillToggleForm>,
) -> Result<Response> {
    let target = format!("/admin/courses/{}/edit", id);
    match state.course_service.set_skill(id, skill_id, form.attach, &admin.token).await {
        Ok(()) => {
            let notice = if form.attach { "Skill attached." } else { "Skill detached." };
            Ok(redirect_with(&target, "notice", notice).into_response())
        }
        Err(err) => {
            let message = failure_message(err, "Failed to update course skills")?;
            Ok(redirect_with(&target, "error", &message).into_response())
        }
    }
}
