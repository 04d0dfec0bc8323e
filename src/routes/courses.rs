use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;

use crate::dto::enrollment_dto::ProgressForm;
use crate::error::{Result, ResultExt};
use crate::middleware::session::{RequireUser, Session};
use crate::routes::{failure_message, redirect_with};
use crate::views::{self, components::Flash};
use crate::AppState;

#[axum::debug_handler]
pub async fn list_courses(State(state): State<AppState>, session: Session) -> Result<Markup> {
    let courses = state
        .course_service
        .list(session.token())
        .await
        .back_to_or("/", "Back to home", "Failed to fetch courses")?;
    Ok(views::courses::course_list(&session, &courses))
}

#[axum::debug_handler]
pub async fn course_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Query(flash): Query<Flash>,
) -> Result<Markup> {
    let course = state
        .course_service
        .get(id, session.token())
        .await
        .back_to_or("/courses", "Back to courses", "Failed to fetch course details")?;

    // Enrollment status is best effort; the course is readable without it.
    let enrollment = match session.token() {
        Some(token) => match state.enrollment_service.for_course(id, token).await {
            Ok(enrollment) => enrollment,
            Err(err) => {
                tracing::warn!(course_id = id, error = %err, "could not load enrollment status");
                None
            }
        },
        None => None,
    };
    Ok(views::courses::course_detail(
        &session,
        &course,
        enrollment.as_ref(),
        &flash,
    ))
}

#[axum::debug_handler]
pub async fn enroll(
    State(state): State<AppState>,
    user: RequireUser,
    Path(id): Path<i64>,
) -> Result<Response> {
    let target = format!("/courses/{}", id);
    match state.enrollment_service.enroll(id, &user.token).await {
        Ok(_) => Ok(redirect_with(&target, "notice", "Successfully enrolled in course!").into_response()),
        Err(err) => {
            let message = failure_message(err, "Failed to enroll in course.")?;
            Ok(redirect_with(&target, "error", &message).into_response())
        }
    }
}

#[axum::debug_handler]
pub async fn set_progress(
    State(state): State<AppState>,
    user: RequireUser,
    Path((course_id, lesson_id)): Path<(i64, i64)>,
    Form(form): Form<ProgressForm>,
) -> Result<Response> {
    let target = format!("/courses/{}", course_id);
    let result = state
        .enrollment_service
        .set_lesson_completed(form.enrollment_id, lesson_id, form.completed, &user.token)
        .await;
    match result {
        Ok(_) => {
            let notice = if form.completed {
                "Lesson marked as complete."
            } else {
                "Lesson marked as incomplete."
            };
            Ok(redirect_with(&target, "notice", notice).into_response())
        }
        Err(err) => {
            let message = failure_message(err, "Failed to update lesson progress.")?;
            Ok(redirect_with(&target, "error", &message).into_response())
        }
    }
}
