#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    body::{to_bytes, Body},
    extract::{Path, State},
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get as get_route, post as post_route, put as put_route},
    Form, Json, Router,
};
use lms_frontend::{config::Config, router, AppState};
use serde_json::{json, Value as JsonValue};
use tokio::net::TcpListener;

pub const ADMIN_COOKIE: &str = "access_token=admin-token; is_admin=true";
pub const LEARNER_COOKIE: &str = "access_token=learner-token; is_admin=false";

/// Enrollment timestamps as the backend writes them: ISO without an offset.
pub const ENROLLED_AT: &str = "2025-05-01T12:34:56.123456";

pub const SAMPLE_QUIZ: &str = r#"{"isPreAssessment":true,"questions":[{"id":"q1","text":"2+2?","type":"multiple-choice","options":[{"id":"a","text":"3"},{"id":"b","text":"4"}],"correctAnswer":"b","skill_ids":[1]}]}"#;

/// Requests the stub backend received, as (path, JSON body).
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<(String, JsonValue)>>>);

impl Recorder {
    fn push(&self, path: String, body: JsonValue) {
        self.0.lock().unwrap().push((path, body));
    }

    pub fn all(&self) -> Vec<(String, JsonValue)> {
        self.0.lock().unwrap().clone()
    }
}

pub struct StubBackend {
    pub url: String,
    pub recorder: Recorder,
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn lesson_json(id: i64) -> Option<JsonValue> {
    let (content_type, content) = match id {
        1 | 4 => ("quiz", SAMPLE_QUIZ),
        2 => ("quiz", "{not json"),
        3 => ("text", "Plain words."),
        _ => return None,
    };
    Some(json!({
        "id": id,
        "title": format!("Lesson {}", id),
        "content": content,
        "content_type": content_type,
        "order": 0,
        "module_id": 7
    }))
}

fn course_json(id: i64) -> Option<JsonValue> {
    match id {
        5 => Some(json!({
            "id": 5,
            "title": "Intro to AI",
            "description": "Basics first",
            "instructor_id": null,
            "modules": [{
                "id": 7,
                "title": "Foundations",
                "description": null,
                "order": 0,
                "course_id": 5,
                "lessons": [
                    { "id": 11, "title": "Welcome", "content": "Hi", "content_type": "text", "order": 0, "module_id": 7 },
                    { "id": 12, "title": "History", "content": "Long ago", "content_type": "markdown", "order": 1, "module_id": 7 }
                ],
                "skills": []
            }],
            "skills": [{ "id": 1, "name": "Algebra" }]
        })),
        6 => Some(json!({
            "id": 6,
            "title": "Archived course",
            "description": null,
            "modules": [],
            "skills": []
        })),
        _ => None,
    }
}

fn skill_json(id: i64) -> Option<JsonValue> {
    match id {
        1 => Some(json!({ "id": 1, "name": "Algebra", "description": null })),
        2 => Some(json!({ "id": 2, "name": "Geometry", "description": "Shapes" })),
        _ => None,
    }
}

fn enrollment_json(course_id: i64, completed: &[i64]) -> JsonValue {
    json!({
        "id": 3,
        "user_id": 2,
        "course_id": course_id,
        "enrolled_at": ENROLLED_AT,
        "completed_lessons": completed
    })
}

async fn token(Form(form): Form<HashMap<String, String>>) -> Response {
    let username = form.get("username").map(String::as_str);
    let password = form.get("password").map(String::as_str);
    match (username, password) {
        (Some("admin@example.com"), Some("secret")) => Json(json!({
            "access_token": "admin-token", "token_type": "bearer", "is_admin": true
        }))
        .into_response(),
        (Some(_), Some("secret")) => Json(json!({
            "access_token": "learner-token", "token_type": "bearer", "is_admin": false
        }))
        .into_response(),
        _ => detail(StatusCode::UNAUTHORIZED, "Incorrect username or password"),
    }
}

async fn register(Json(body): Json<JsonValue>) -> Response {
    if body["email"] == "taken@example.com" {
        return detail(StatusCode::BAD_REQUEST, "Email already registered");
    }
    Json(json!({ "id": 10, "email": body["email"], "is_active": true })).into_response()
}

async fn get_lesson(Path(id): Path<i64>) -> Response {
    match lesson_json(id) {
        Some(lesson) => Json(lesson).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Lesson not found"),
    }
}

async fn update_lesson(
    State(recorder): State<Recorder>,
    Path(id): Path<i64>,
    Json(body): Json<JsonValue>,
) -> Response {
    recorder.push(format!("PUT /lessons/{}", id), body.clone());
    let mut lesson = body;
    lesson["id"] = json!(id);
    lesson["module_id"] = json!(7);
    Json(lesson).into_response()
}

async fn submit_quiz(
    State(recorder): State<Recorder>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<JsonValue>,
) -> Response {
    if bearer(&headers) == Some("expired") {
        return detail(StatusCode::UNAUTHORIZED, "Could not validate credentials");
    }
    recorder.push(format!("POST /lessons/{}/submit_quiz", id), body);
    if id == 4 {
        return detail(StatusCode::BAD_REQUEST, "Quiz closed");
    }
    Json(json!({
        "lesson_id": id,
        "overall_score": 66.6666,
        "score_per_skill": { "1": 50.0 }
    }))
    .into_response()
}

async fn admin_users(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some("admin-token") => Json(json!([
            { "id": 1, "email": "admin@example.com", "full_name": "Ada Admin", "is_active": true, "is_admin": true }
        ]))
        .into_response(),
        Some("expired") | None => detail(StatusCode::UNAUTHORIZED, "Could not validate credentials"),
        Some(_) => detail(StatusCode::FORBIDDEN, "Not enough permissions"),
    }
}

async fn list_courses() -> Response {
    let courses: Vec<JsonValue> = [5, 6].into_iter().filter_map(course_json).collect();
    Json(courses).into_response()
}

async fn create_course(State(recorder): State<Recorder>, Json(body): Json<JsonValue>) -> Response {
    recorder.push("POST /courses/".to_string(), body.clone());
    if body["title"] == "Duplicate" {
        return detail(StatusCode::BAD_REQUEST, "Course title already exists");
    }
    let mut course = body;
    course["id"] = json!(9);
    Json(course).into_response()
}

async fn get_course(Path(id): Path<i64>) -> Response {
    match course_json(id) {
        Some(course) => Json(course).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Course not found"),
    }
}

async fn update_course(
    State(recorder): State<Recorder>,
    Path(id): Path<i64>,
    Json(body): Json<JsonValue>,
) -> Response {
    recorder.push(format!("PUT /courses/{}", id), body.clone());
    let mut course = body;
    course["id"] = json!(id);
    Json(course).into_response()
}

async fn delete_course(State(recorder): State<Recorder>, Path(id): Path<i64>) -> Response {
    recorder.push(format!("DELETE /courses/{}", id), JsonValue::Null);
    if id == 6 {
        return detail(StatusCode::BAD_REQUEST, "Course has enrollments");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_modules(Path(id): Path<i64>) -> Response {
    match course_json(id) {
        Some(course) => Json(course["modules"].clone()).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Course not found"),
    }
}

async fn create_module(
    State(recorder): State<Recorder>,
    Path(id): Path<i64>,
    Json(body): Json<JsonValue>,
) -> Response {
    recorder.push(format!("POST /courses/{}/modules/", id), body.clone());
    let mut module = body;
    module["id"] = json!(8);
    module["course_id"] = json!(id);
    Json(module).into_response()
}

async fn attach_course_skill(
    State(recorder): State<Recorder>,
    Path((id, skill_id)): Path<(i64, i64)>,
) -> Response {
    recorder.push(format!("POST /admin/courses/{}/skills/{}", id, skill_id), JsonValue::Null);
    Json(json!({ "ok": true })).into_response()
}

async fn detach_course_skill(
    State(recorder): State<Recorder>,
    Path((id, skill_id)): Path<(i64, i64)>,
) -> Response {
    recorder.push(format!("DELETE /admin/courses/{}/skills/{}", id, skill_id), JsonValue::Null);
    StatusCode::NO_CONTENT.into_response()
}

async fn list_skills() -> Response {
    let skills: Vec<JsonValue> = [1, 2].into_iter().filter_map(skill_json).collect();
    Json(skills).into_response()
}

async fn get_skill(Path(id): Path<i64>) -> Response {
    match skill_json(id) {
        Some(skill) => Json(skill).into_response(),
        None => detail(StatusCode::NOT_FOUND, "Skill not found"),
    }
}

async fn create_skill(State(recorder): State<Recorder>, Json(body): Json<JsonValue>) -> Response {
    recorder.push("POST /admin/skills/".to_string(), body.clone());
    let mut skill = body;
    skill["id"] = json!(3);
    Json(skill).into_response()
}

async fn delete_skill(State(recorder): State<Recorder>, Path(id): Path<i64>) -> Response {
    recorder.push(format!("DELETE /admin/skills/{}", id), JsonValue::Null);
    StatusCode::NO_CONTENT.into_response()
}

async fn update_user(
    State(recorder): State<Recorder>,
    Path(id): Path<i64>,
    Json(body): Json<JsonValue>,
) -> Response {
    recorder.push(format!("PUT /admin/users/{}", id), body.clone());
    Json(json!({
        "id": id,
        "email": "lea@example.com",
        "full_name": body["full_name"],
        "is_active": body["is_active"],
        "is_admin": body["is_admin"]
    }))
    .into_response()
}

async fn enroll(State(recorder): State<Recorder>, Json(body): Json<JsonValue>) -> Response {
    recorder.push("POST /enrollments/".to_string(), body.clone());
    let course_id = body["course_id"].as_i64().unwrap_or_default();
    Json(enrollment_json(course_id, &[])).into_response()
}

async fn my_enrollments(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some("learner-token") => Json(json!([enrollment_json(5, &[11])])).into_response(),
        Some("expired") | None => detail(StatusCode::UNAUTHORIZED, "Could not validate credentials"),
        Some(_) => Json(json!([])).into_response(),
    }
}

async fn set_progress(
    State(recorder): State<Recorder>,
    Path((id, lesson_id, action)): Path<(i64, i64, String)>,
) -> Response {
    recorder.push(
        format!("POST /enrollments/{}/lessons/{}/{}", id, lesson_id, action),
        JsonValue::Null,
    );
    let completed: &[i64] = if action == "complete" { &[11, 12] } else { &[] };
    Json(enrollment_json(5, completed)).into_response()
}

async fn admin_enrollments() -> Response {
    let mut enrollment = enrollment_json(5, &[11]);
    enrollment["user"] = json!({ "id": 2, "email": "lea@example.com", "full_name": "Lea Learner" });
    enrollment["course"] = json!({ "id": 5, "title": "Intro to AI" });
    Json(json!([enrollment])).into_response()
}

async fn study_plan() -> Response {
    Json(json!({
        "user_name": "Lea",
        "enrolled_courses_count": 1,
        "completed_lessons_count": 1,
        "recommendations": [
            { "id": 7, "title": "Foundations", "type": "module", "course_id": 5, "description": "Start here" },
            { "id": 6, "title": "Archived course", "type": "course" }
        ]
    }))
    .into_response()
}

pub async fn spawn_backend() -> StubBackend {
    let recorder = Recorder::default();
    let app = Router::new()
        .route("/token", post_route(token))
        .route("/users/", post_route(register))
        .route("/lessons/:id", get_route(get_lesson).put(update_lesson))
        .route("/lessons/:id/submit_quiz", post_route(submit_quiz))
        .route("/admin/users/", get_route(admin_users))
        .route("/admin/users/:id", put_route(update_user))
        .route("/courses/", get_route(list_courses).post(create_course))
        .route(
            "/courses/:id",
            get_route(get_course).put(update_course).delete(delete_course),
        )
        .route("/courses/:id/modules/", get_route(list_modules).post(create_module))
        .route(
            "/admin/courses/:id/skills/:skill_id",
            post_route(attach_course_skill).delete(detach_course_skill),
        )
        .route("/admin/skills/", get_route(list_skills).post(create_skill))
        .route("/admin/skills/:id", get_route(get_skill).delete(delete_skill))
        .route("/enrollments/", post_route(enroll))
        .route("/users/me/enrollments/", get_route(my_enrollments))
        .route(
            "/enrollments/:id/lessons/:lesson_id/:action",
            post_route(set_progress),
        )
        .route("/admin/enrollments/", get_route(admin_enrollments))
        .route("/users/me/study-plan", get_route(study_plan))
        .with_state(recorder.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubBackend {
        url: format!("http://{}", addr),
        recorder,
    }
}

pub fn app(backend: &StubBackend) -> Router {
    let state = AppState::new(&Config::for_backend(backend.url.clone())).unwrap();
    router(state)
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, cookie: Option<&str>, fields: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}

pub fn set_cookies(resp: &Response) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
