mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

use common::{app, body_text, get, location, set_cookies, spawn_backend, ADMIN_COOKIE, LEARNER_COOKIE};

#[tokio::test]
async fn signed_out_users_are_sent_to_login() {
    let backend = spawn_backend().await;
    for path in ["/study-plan", "/admin", "/admin/courses", "/admin/lessons/1/edit"] {
        let resp = app(&backend).oneshot(get(path, None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{}", path);
        assert_eq!(location(&resp), "/login", "{}", path);
    }
}

#[tokio::test]
async fn learners_are_sent_home_from_admin() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(get("/admin/users", Some(LEARNER_COOKIE)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");
    assert!(backend.recorder.all().is_empty());
}

#[tokio::test]
async fn admin_sees_user_list() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(get("/admin/users", Some(ADMIN_COOKIE)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Ada Admin"));
    assert!(html.contains("action=\"/admin/users/1\""));
}

#[tokio::test]
async fn rejected_token_clears_session() {
    let backend = spawn_backend().await;
    let resp = app(&backend)
        .oneshot(get("/admin/users", Some("access_token=expired; is_admin=true")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login");
    assert!(set_cookies(&resp)
        .iter()
        .any(|c| c.starts_with("access_token=;")));
}

#[tokio::test]
async fn backend_refusal_renders_access_denied() {
    let backend = spawn_backend().await;
    // Admin flag in the cookie, but the backend knows better.
    let resp = app(&backend)
        .oneshot(get("/admin/users", Some("access_token=learner-token; is_admin=true")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(body_text(resp).await.contains("Access Denied"));
}
