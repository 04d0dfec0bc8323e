use maud::{html, Markup};

use crate::middleware::session::Session;
use crate::models::lesson::{Lesson, LessonBody};
use crate::models::quiz::QuizSubmissionResult;
use crate::services::quiz_service::{format_score, QuizPhase, QuizSession};
use crate::views::page_with_session;

pub const INVALID_QUIZ_MESSAGE: &str = "Failed to load quiz: Invalid format.";

/// What the lesson screen shows below its title.
#[derive(Debug, Clone)]
pub enum LessonView {
    Body(LessonBody),
    Quiz(QuizSession),
    /// Content could not be loaded; no questions are rendered.
    Broken(String),
}

impl LessonView {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        match lesson.body() {
            Ok(LessonBody::Quiz(quiz)) => LessonView::Quiz(QuizSession::new(quiz)),
            Ok(body) => LessonView::Body(body),
            Err(err) => {
                tracing::warn!(lesson_id = lesson.id, error = %err, "lesson has unparseable quiz content");
                LessonView::Broken(INVALID_QUIZ_MESSAGE.to_string())
            }
        }
    }
}

pub fn lesson_page(session: &Session, course_id: i64, lesson: &Lesson, view: &LessonView) -> Markup {
    let quiz_action = format!("/courses/{}/lessons/{}/quiz", course_id, lesson.id);
    page_with_session(
        &lesson.title,
        session,
        html! {
            p { a href=(format!("/courses/{}", course_id)) { "← Back to course" } }
            h1 { (lesson.title) }
            article class="lesson-content" {
                @match view {
                    LessonView::Broken(message) => p class="alert" { "Error: " (message) },
                    LessonView::Body(body) => { (body_markup(&lesson.title, body)) }
                    LessonView::Quiz(quiz) => { (quiz_markup(&quiz_action, quiz)) }
                }
            }
        },
    )
}

fn body_markup(title: &str, body: &LessonBody) -> Markup {
    html! {
        @match body {
            LessonBody::Empty => p { "No content available for this lesson." },
            LessonBody::Text(text) => pre class="content" { (text) },
            LessonBody::Markdown(source) => pre class="content markdown" { (source) },
            LessonBody::VideoUrl(url) => {
                iframe src=(url) title=(title) width="640" height="360"
                       allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                       allowfullscreen {}
            }
            LessonBody::Quiz(_) => p { "This quiz cannot be shown here." },
            LessonBody::Unsupported(kind) => p { "Unsupported content type: " (kind) },
        }
    }
}

fn quiz_markup(action: &str, quiz: &QuizSession) -> Markup {
    if let QuizPhase::Result(result) = quiz.phase() {
        return result_markup(action, result);
    }
    let content = quiz.quiz();
    if content.is_empty() {
        return html! { p { "Quiz is not configured correctly or has no questions." } };
    }
    html! {
        @if content.is_pre_assessment {
            p class="notice" { "Pre-assessment: your answers help place you in the right material." }
        }
        form method="post" action=(action) {
            @for (idx, question) in content.questions.iter().enumerate() {
                fieldset {
                    legend { (idx + 1) ". " (question.text) }
                    @for opt in &question.options {
                        label {
                            input type="radio"
                                  name=(format!("question-{}", question.id))
                                  value=(opt.id)
                                  checked[quiz.selected(&question.id) == Some(opt.id.as_str())];
                            " " (opt.text)
                        }
                        br;
                    }
                }
            }
            @if let Some(message) = quiz.message() {
                p class="alert" role="alert" { (message) }
            }
            button type="submit" { "Submit Quiz" }
        }
    }
}

fn result_markup(action: &str, result: &QuizSubmissionResult) -> Markup {
    html! {
        section class="quiz-result" {
            h2 { "Quiz Results" }
            p { "Overall Score: " strong { (format_score(result.overall_score)) "%" } }
            @if let Some(breakdown) = result.skill_breakdown() {
                h3 { "Score per Skill:" }
                ul {
                    @for (skill_id, score) in breakdown {
                        li { "Skill ID " (skill_id) ": " (format_score(*score)) "%" }
                    }
                }
            }
            form method="post" action=(format!("{}/retake", action)) {
                button type="submit" { "Retake Quiz" }
            }
        }
    }
}
