use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};

use crate::error::{Result, ResultExt};
use crate::middleware::session::Session;
use crate::models::lesson::Lesson;
use crate::services::quiz_service::{QuizSession, SUBMIT_FAILED_MESSAGE};
use crate::views::lesson::{lesson_page, LessonView};
use crate::AppState;

const ANSWER_PREFIX: &str = "question-";

async fn load_lesson(state: &AppState, session: &Session, course_id: i64, lesson_id: i64) -> Result<Lesson> {
    state
        .lesson_service
        .get(lesson_id, session.token())
        .await
        .back_to_or(
            &format!("/courses/{}", course_id),
            "Back to course",
            "Failed to fetch lesson details",
        )
}

#[axum::debug_handler]
pub async fn view_lesson(
    State(state): State<AppState>,
    session: Session,
    Path((course_id, lesson_id)): Path<(i64, i64)>,
) -> Result<Response> {
    let lesson = load_lesson(&state, &session, course_id, lesson_id).await?;
    let view = LessonView::from_lesson(&lesson);
    Ok(lesson_page(&session, course_id, &lesson, &view).into_response())
}

#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    session: Session,
    Path((course_id, lesson_id)): Path<(i64, i64)>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Result<Response> {
    let lesson = load_lesson(&state, &session, course_id, lesson_id).await?;
    let mut view = LessonView::from_lesson(&lesson);
    let status = match &mut view {
        LessonView::Quiz(quiz) => submit_answers(&state, &session, lesson_id, quiz, &fields).await?,
        _ => StatusCode::BAD_REQUEST,
    };
    Ok((status, lesson_page(&session, course_id, &lesson, &view)).into_response())
}

/// Radio groups arrive as `question-<id>=<option id>`; unanswered
/// questions are simply absent from the post.
async fn submit_answers(
    state: &AppState,
    session: &Session,
    lesson_id: i64,
    quiz: &mut QuizSession,
    fields: &BTreeMap<String, String>,
) -> Result<StatusCode> {
    for (field, option_id) in fields {
        if let Some(question_id) = field.strip_prefix(ANSWER_PREFIX) {
            if let Err(err) = quiz.select(question_id, option_id) {
                tracing::debug!(lesson_id, error = %err, "ignoring answer");
            }
        }
    }

    let (request, token) = match (quiz.begin_submit(session.token()), session.token()) {
        (Ok(request), Some(token)) => (request, token),
        _ => return Ok(StatusCode::UNPROCESSABLE_ENTITY),
    };
    match state.lesson_service.submit_quiz(lesson_id, token, &request).await {
        Ok(result) => quiz.complete(result),
        Err(err) if err.is_unauthorized() => return Err(err),
        Err(err) => {
            tracing::warn!(lesson_id, error = %err, "quiz submission failed");
            quiz.fail(err.user_message(SUBMIT_FAILED_MESSAGE));
        }
    }
    Ok(StatusCode::OK)
}

#[axum::debug_handler]
pub async fn retake_quiz(
    State(state): State<AppState>,
    session: Session,
    Path((course_id, lesson_id)): Path<(i64, i64)>,
) -> Result<Response> {
    let lesson = load_lesson(&state, &session, course_id, lesson_id).await?;
    let mut view = LessonView::from_lesson(&lesson);
    if let LessonView::Quiz(quiz) = &mut view {
        quiz.retake();
    }
    Ok(lesson_page(&session, course_id, &lesson, &view).into_response())
}
