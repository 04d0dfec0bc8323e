use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;

use crate::dto::course_dto::ModuleForm;
use crate::dto::skill_dto::SkillToggleForm;
use crate::error::{Result, ResultExt};
use crate::middleware::session::RequireAdmin;
use crate::models::module::CourseModule;
use crate::routes::{failure_message, redirect_with};
use crate::utils::validation::messages;
use crate::views::admin::modules::{confirm_module_delete, module_form, module_list};
use crate::views::components::Flash;
use crate::AppState;

fn modules_href(course_id: Option<i64>) -> String {
    match course_id {
        Some(id) => format!("/admin/courses/{}/modules", id),
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

#[axum::debug_handler]
pub async fn list_modules(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(course_id): Path<i64>,
    Query(flash): Query<Flash>,
) -> Result<Markup> {
    let course = state
        .course_service
        .get(course_id, Some(&admin.token))
        .await
        .back_to_or("/admin/courses", "Go back to courses", "Failed to fetch course")?;
    let modules = state
        .course_service
        .list_modules(course_id, Some(&admin.token))
        .await
        .back_to_or("/admin/courses", "Go back to courses", "Failed to fetch modules")?;
    Ok(module_list(&admin.session, &course, &modules, &flash))
}

#[axum::debug_handler]
pub async fn new_module(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(course_id): Path<i64>,
) -> Result<Markup> {
    let course = state
        .course_service
        .get(course_id, Some(&admin.token))
        .await
        .back_to_or("/admin/courses", "Go back to courses", "Failed to fetch course")?;
    let form = ModuleForm::for_new(course.next_module_order());
    Ok(module_form(&admin.session, course_id, None, &form, &[], &[], &Flash::default()))
}

#[axum::debug_handler]
pub async fn create_module(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(course_id): Path<i64>,
    Form(form): Form<ModuleForm>,
) -> Result<Response> {
    let errors = match form.clone().into_payload() {
        Ok(payload) => match state.course_service.create_module(course_id, &admin.token, &payload).await {
            Ok(_) => {
                return Ok(redirect_with(
                    &modules_href(Some(course_id)),
                    "notice",
                    "Module created successfully!",
                )
                .into_response())
            }
            Err(err) => vec![failure_message(err, "Failed to create module")?],
        },
        Err(errors) => messages(&errors),
    };
    let page = module_form(&admin.session, course_id, None, &form, &errors, &[], &Flash::default());
    Ok((StatusCode::BAD_REQUEST, page).into_response())
}

async fn editor(
    state: &AppState,
    admin: &RequireAdmin,
    id: i64,
    form: Option<ModuleForm>,
    errors: &[String],
    flash: &Flash,
) -> Result<Markup> {
    let module = load_module(state, admin, id).await?;
    let back = modules_href(module.course_id);
    let skills = state
        .skill_service
        .list(&admin.token)
        .await
        .back_to_or(&back, "Go back to modules", "Failed to fetch skills")?;
    let form = form.unwrap_or_else(|| ModuleForm::from_module(&module));
    Ok(module_form(
        &admin.session,
        module.course_id.unwrap_or_default(),
        Some(&module),
        &form,
        errors,
        &skills,
        flash,
    ))
}

#[axum::debug_handler]
pub async fn edit_module(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
    Query(flash): Query<Flash>,
) -> Result<Markup> {
    editor(&state, &admin, id, None, &[], &flash).await
}

#[axum::debug_handler]
pub async fn update_module(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
    Form(form): Form<ModuleForm>,
) -> Result<Response> {
    let errors = match form.clone().into_payload() {
        Ok(payload) => match state.module_service.update(id, &admin.token, &payload).await {
            Ok(module) => {
                return Ok(redirect_with(
                    &modules_href(module.course_id),
                    "notice",
                    "Module updated successfully!",
                )
                .into_response())
            }
            Err(err) => vec![failure_message(err, "Failed to update module")?],
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
    let module = load_module(&state, &admin, id).await?;
    Ok(confirm_module_delete(
        &admin.session,
        &module,
        &modules_href(module.course_id),
    ))
}

#[axum::debug_handler]
pub async fn delete_module(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(id): Path<i64>,
) -> Result<Response> {
    let module = load_module(&state, &admin, id).await?;
    let target = modules_href(module.course_id);
    match state.module_service.delete(id, &admin.token).await {
        Ok(()) => Ok(redirect_with(&target, "notice", "Module deleted successfully.").into_response()),
        Err(err) => {
            let message = failure_message(err, "Failed to delete module")?;
            Ok(redirect_with(&target, "error", &format!("Error deleting module: {}", message)).into_response())
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
    let target = format!("/admin/modules/{}/edit", id);
    match state.module_service.set_skill(id, skill_id, form.attach, &admin.token).await {
        Ok(()) => {
            let notice = if form.attach { "Skill attached." } else { "Skill detached." };
            Ok(redirect_with(&target, "notice", notice).into_response())
        }
        Err(err) => {
            let message = failure_message(err, "Failed to update module skills")?;
            Ok(redirect_with(&target, "error", &message).into_response())
        }
    }
}
