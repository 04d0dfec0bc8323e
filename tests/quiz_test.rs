mod common;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use common::{app, body_text, get, location, post_form, spawn_backend, LEARNER_COOKIE};

#[tokio::test]
async fn quiz_renders_without_answers() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(get("/courses/5/lessons/1", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("name=\"question-q1\""));
    assert!(html.contains("action=\"/courses/5/lessons/1/quiz\""));
    assert!(html.contains("Pre-assessment"));
    assert!(!html.contains("correctAnswer"));
}

#[tokio::test]
async fn incomplete_submission_stays_local() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(post_form("/courses/5/lessons/1/quiz", Some(LEARNER_COOKIE), &[]))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(resp)
        .await
        .contains("Please answer all questions before submitting."));
    assert!(backend.recorder.all().is_empty());
}

#[tokio::test]
async fn submission_needs_a_session() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(post_form("/courses/5/lessons/1/quiz", None, &[("question-q1", "b")]))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("You must be logged in to submit a quiz."));
    assert!(html.contains("value=\"b\" checked"));
    assert!(backend.recorder.all().is_empty());
}

#[tokio::test]
async fn complete_submission_shows_score() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(post_form(
            "/courses/5/lessons/1/quiz",
            Some(LEARNER_COOKIE),
            &[("question-q1", "b")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Quiz Results"));
    assert!(html.contains("66.67"));
    assert!(html.contains("Skill ID 1: 50.00%"));
    assert!(html.contains("action=\"/courses/5/lessons/1/quiz/retake\""));

    let recorded = backend.recorder.all();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].0, "POST /lessons/1/submit_quiz");
    assert_eq!(
        recorded[0].1,
        json!({ "answers": [{ "question_id": "q1", "selected_option_id": "b" }] })
    );
}

#[tokio::test]
async fn unknown_options_do_not_count_as_answers() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(post_form(
            "/courses/5/lessons/1/quiz",
            Some(LEARNER_COOKIE),
            &[("question-q1", "z"), ("question-q9", "a")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(backend.recorder.all().is_empty());
}

#[tokio::test]
async fn backend_error_keeps_answers() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(post_form(
            "/courses/5/lessons/4/quiz",
            Some(LEARNER_COOKIE),
            &[("question-q1", "b")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Quiz closed"));
    assert!(html.contains("value=\"b\" checked"));
    assert!(!html.contains("Quiz Results"));
}

#[tokio::test]
async fn expired_token_on_submit_goes_to_login() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(post_form(
            "/courses/5/lessons/1/quiz",
            Some("access_token=expired"),
            &[("question-q1", "a")],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn malformed_quiz_shows_page_error() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(get("/courses/5/lessons/2", Some(LEARNER_COOKIE)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Failed to load quiz: Invalid format."));
    assert!(!html.contains("type=\"radio\""));
}

#[tokio::test]
async fn retake_returns_to_blank_quiz() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(post_form(
            "/courses/5/lessons/1/quiz/retake",
            Some(LEARNER_COOKIE),
            &[],
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Submit Quiz"));
    assert!(!html.contains(" checked"));
}

#[tokio::test]
async fn missing_lesson_links_back_to_course() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(get("/courses/5/lessons/99", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let html = body_text(resp).await;
    assert!(html.contains("Lesson not found"));
    assert!(html.contains("href=\"/courses/5\""));
}
