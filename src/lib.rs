pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    api_client::ApiClient, auth_service::AuthService, course_service::CourseService,
    enrollment_service::EnrollmentService, lesson_service::LessonService,
    module_service::ModuleService, skill_service::SkillService, user_service::UserService,
};

/// Largest form post accepted; quiz JSON is the biggest field.
const BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub course_service: CourseService,
    pub module_service: ModuleService,
    pub lesson_service: LessonService,
    pub skill_service: SkillService,
    pub user_service: UserService,
    pub enrollment_service: EnrollmentService,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let api = ApiClient::new(
            &config.backend_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;

        Ok(Self {
            auth_service: AuthService::new(api.clone()),
            course_service: CourseService::new(api.clone()),
            module_service: ModuleService::new(api.clone()),
            lesson_service: LessonService::new(api.clone()),
            skill_service: SkillService::new(api.clone()),
            user_service: UserService::new(api.clone()),
            enrollment_service: EnrollmentService::new(api),
            secure_cookies: config.secure_cookies,
        })
    }
}

pub fn router(state: AppState) -> Router {
    use routes::admin;

    let learner = Router::new()
        .route("/", get(routes::home::home))
        .route(
            "/login",
            get(routes::auth::login_page).post(routes::auth::login),
        )
        .route(
            "/register",
            get(routes::auth::register_page).post(routes::auth::register),
        )
        .route("/logout", post(routes::auth::logout))
        .route("/courses", get(routes::courses::list_courses))
        .route("/courses/:id", get(routes::courses::course_detail))
        .route("/courses/:id/enroll", post(routes::courses::enroll))
        .route(
            "/courses/:id/lessons/:lesson_id",
            get(routes::lessons::view_lesson),
        )
        .route(
            "/courses/:id/lessons/:lesson_id/progress",
            post(routes::courses::set_progress),
        )
        .route(
            "/courses/:id/lessons/:lesson_id/quiz",
            post(routes::lessons::submit_quiz),
        )
        .route(
            "/courses/:id/lessons/:lesson_id/quiz/retake",
            post(routes::lessons::retake_quiz),
        )
        .route("/study-plan", get(routes::study_plan::study_plan));

    let admin = Router::new()
        .route("/admin", get(admin::dashboard))
        .route(
            "/admin/courses",
            get(admin::courses::list_courses).post(admin::courses::create_course),
        )
        .route("/admin/courses/new", get(admin::courses::new_course))
        .route(
            "/admin/courses/:id/edit",
            get(admin::courses::edit_course).post(admin::courses::update_course),
        )
        .route(
            "/admin/courses/:id/delete",
            get(admin::courses::confirm_delete).post(admin::courses::delete_course),
        )
        .route(
            "/admin/courses/:id/skills/:skill_id",
            post(admin::courses::toggle_skill),
        )
        .route(
            "/admin/courses/:id/modules",
            get(admin::modules::list_modules).post(admin::modules::create_module),
        )
        .route(
            "/admin/courses/:id/modules/new",
            get(admin::modules::new_module),
        )
        .route(
            "/admin/modules/:id/edit",
            get(admin::modules::edit_module).post(admin::modules::update_module),
        )
        .route(
            "/admin/modules/:id/delete",
            get(admin::modules::confirm_delete).post(admin::modules::delete_module),
        )
        .route(
            "/admin/modules/:id/skills/:skill_id",
            post(admin::modules::toggle_skill),
        )
        .route(
            "/admin/modules/:id/lessons",
            get(admin::lessons::list_lessons).post(admin::lessons::create_lesson),
        )
        .route(
            "/admin/modules/:id/lessons/new",
            get(admin::lessons::new_lesson),
        )
        .route(
            "/admin/lessons/:id/edit",
            get(admin::lessons::edit_lesson).post(admin::lessons::update_lesson),
        )
        .route(
            "/admin/lessons/:id/delete",
            get(admin::lessons::confirm_delete).post(admin::lessons::delete_lesson),
        )
        .route(
            "/admin/skills",
            get(admin::skills::list_skills).post(admin::skills::create_skill),
        )
        .route("/admin/skills/new", get(admin::skills::new_skill))
        .route(
            "/admin/skills/:id/edit",
            get(admin::skills::edit_skill).post(admin::skills::update_skill),
        )
        .route(
            "/admin/skills/:id/delete",
            get(admin::skills::confirm_delete).post(admin::skills::delete_skill),
        )
        .route("/admin/users", get(admin::users::list_users))
        .route("/admin/users/:id", post(admin::users::update_user))
        .route("/admin/enrollments", get(admin::enrollments::list_enrollments));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(learner)
        .merge(admin)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
