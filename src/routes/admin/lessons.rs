use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;

use crate::dto::lesson_dto::{LessonForm, LessonPayload};
use crate::error::{Error, Result, ResultExt};
use crate::middleware::session::RequireAdmin;
use crate::models::lesson::Lesson;
use crate::models::module::CourseModule;
use crate::routes::{failure_message, redirect_with, redirect_with_all};
use crate::services::authoring_service::{prepare_lesson_save, LessonSave};
use crate::utils::validation::messages;
use crate::views::admin::lessons::{confirm_lesson_delete, lesson_form, lesson_list, LessonEditor};
use crate::views::components::Flash;
use crate::AppState;

fn lessons_href(module_id: Option<i64>) -> String {
    match module_id {
        Some(id) => format!("/admin/modules/{}/lessons", id),
        None => "/admin/courses".to_string(),
    }
}

async fn load_module(state: &AppState, admin: &RequireAdmin, id: i64) -> Result<CourseModule> {
    state
        .module_service
        .get(id, Some(&admin.token))
        .await
        .back_to_or("/admin/courses", "Go back to courses", "Failed to fetch module")
}

async fn load_lesson(state: &AppState, admin: &RequireAdmin, id: i64) -> Result<Lesson> {
    state
        .lesson_service
        .get(id, Some(&admin.token))
        .await
        .back_to_or("/admin/courses", "Go back to courses", "Failed to fetch lesson")
}

/// Outcome of turning the editor form into a request body.
enum Prepared {
    Ready(LessonPayload, Option<String>),
    Rejected { errors: Vec<String>, confirm_reset: bool },
}

fn prepare(form: &LessonForm) -> Result<Prepared> {
    match prepare_lesson_save(form) {
        Ok(LessonSave::Ready { payload, warning }) => Ok(Prepared::Ready(payload, warning)),
        Ok(LessonSave::NeedsConfirmation) => Ok(Prepared::Rejected {
            errors: vec!["Quiz content is not valid JSON. Confirm below to replace it with an empty quiz.".to_string()],
            confirm_reset: true,
        }),
        Err(Error::Validation(errors)) => Ok(Prepared::Rejected {
            errors: messages(&errors),
            confirm_reset: false,
        }),
        Err(err) => Err(err),
    }
}

fn saved(module_id: Option<i64>, notice: &str, warning: Option<String>) -> Response {
    let target = lessons_href(module_id);
    let redirect = match warning {
        Some(warning) => redirect_with_all(&target, &[("notice", notice), ("warning", warning.as_str())]),
        None => redirect_with(&target, "notice", notice),
    };
    redirect.into_response()
}

#[axum::debug_handler]
pub async fn list_lessons(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(module_id): Path<i64>,
    Query(flash): Query<Flash>,
) -> Result<Markup> {
    let module = load_module(&state, &admin, module_id).await?;
    Ok(lesson_list(&admin.session, &module, &flash))
}

#[axum::debug_handler]
pub async fn new_lesson(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(module_id): Path<i64>,
) -> Result<Markup> {
    let module = load_module(&state, &admin, module_id).await?;
    let form = LessonForm::for_new(module.next_lesson_order());
    Ok(lesson_form(
        &admin.session,
        &LessonEditor {
            module_id: Some(module_id),
            lesson: None,
            form: &form,
            errors: &[],
            confirm_reset: false,
        },
    ))
}

#[axum::debug_handler]
pub async fn create_lesson(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(module_id): Path<i64>,
    Form(form): Form<LessonForm>,
) -> Result<Response> {
    let (errors, confirm_reset) = match prepare(&form)? {
        Prepared::Ready(payload, warning) => {
            match state.module_service.create_lesson(module_id, &admin.token, &payload).await {
                Ok(_) => return Ok(saved(Some(module_id), "Lesson created successfully!", warning)),
                Err(err) => (vec![failure_message(err, "Failed to create lesson")?], false),
            }
        }
        Prepared::Rejected { errors, confirm_reset } => (errors, confirm_reset),
    };
    let page = lesson_form(
        &admin.session,
        &LessonEditor {
            module_id: Some(module_id),
            lesson: None,
            form: &form,
            errors: &errors,
            confirm_reset,
        },
    );
    Ok((StatusCode::BAD_REQUEST, page).into_response())
}

/// Opens the editor. Unparseable quiz content is not reported here; the
/// pre-assessment box simply starts unchecked.
#[axum::debug_handler]
pub async fn edit_lesson(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Markup> {
    let lesson = load_lesson(&state, &admin, id).await?;
    let form = LessonForm::from_lesson(&lesson);
    Ok(lesson_form(
        &admin.session,
        &LessonEditor {
            module_id: lesson.module_id,
            lesson: Some(&lesson),
            form: &form,
            errors: &[],
            confirm_reset: false,
        },
    ))
}

#[axum::debug_handler]
pub async fn update_lesson(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
    Form(form): Form<LessonForm>,
) -> Result<Response> {
    let lesson = load_lesson(&state, &admin, id).await?;
    let (errors, confirm_reset) = match prepare(&form)? {
        Prepared::Ready(payload, warning) => {
            match state.lesson_service.update(id, &admin.token, &payload).await {
                Ok(updated) => {
                    let module_id = updated.module_id.or(lesson.module_id);
                    return Ok(saved(module_id, "Lesson updated successfully!", warning));
                }
                Err(err) => (vec![failure_message(err, "Failed to update lesson")?], false),
            }
        }
        Prepared::Rejected { errors, confirm_reset } => (errors, confirm_reset),
    };
    let page = lesson_form(
        &admin.session,
        &LessonEditor {
            module_id: lesson.module_id,
            lesson: Some(&lesson),
            form: &form,
            errors: &errors,
            confirm_reset,
        },
    );
    Ok((StatusCode::BAD_REQUEST, page).into_response())
}

#[axum::debug_handler]
pub async fn confirm_delete(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Markup> {
    let lesson = load_lesson(&state, &admin, id).await?;
    Ok(confirm_lesson_delete(&admin.session, &lesson))
}

#[axum::debug_handler]
pub async fn delete_lesson(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response> {
    let lesson = load_lesson(&state, &admin, id).await?;
    let target = lessons_href(lesson.module_id);
    match state.lesson_service.delete(id, &admin.token).await {
        Ok(()) => Ok(redirect_with(&target, "notice", "Lesson deleted successfully.").into_response()),
        Err(err) => {
            let message = failure_message(err, "Failed to delete lesson")?;
            Ok(redirect_with(&target, "error", &format!("Error deleting lesson: {}", message)).into_response())
        }
    }
}
