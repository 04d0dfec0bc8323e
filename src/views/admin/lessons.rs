use maud::{html, Markup};

use crate::dto::lesson_dto::LessonForm;
use crate::middleware::session::Session;
use crate::models::lesson::{ContentType, Lesson};
use crate::models::module::CourseModule;
use crate::services::authoring_service::RESET_WARNING;
use crate::views::components::{checkbox, confirm_delete, flash, form_errors, number_input, text_input, textarea, Flash};
use crate::views::page_with_session;

const QUIZ_SHAPE: &str = r#"{
  "isPreAssessment": false,
  "questions": [
    {
      "id": "q1",
      "text": "What is 2 + 2?",
      "type": "multiple-choice",
      "options": [
        {"id": "a", "text": "3"},
        {"id": "b", "text": "4"}
      ],
      "correctAnswer": "b",
      "skill_ids": [1]
    }
  ]
}"#;

pub fn lesson_list(session: &Session, module: &CourseModule, notice: &Flash) -> Markup {
    let back = module
        .course_id
        .map(|id| format!("/admin/courses/{}/modules", id))
        .unwrap_or_else(|| "/admin/courses".to_string());
    page_with_session(
        "Manage lessons",
        session,
        html! {
            p { a href=(back) { "← Modules" } }
            h1 { "Manage Lessons for: " (module.title) }
            (flash(notice))
            p { a href=(format!("/admin/modules/{}/lessons/new", module.id)) { "+ New lesson" } }
            @if module.lessons.is_empty() {
                p { "This module has no lessons yet." }
            } @else {
                table {
                    thead { tr { th { "Order" } th { "Title" } th { "Type" } th { "Preview" } th { "Actions" } } }
                    tbody {
                        @for lesson in module.sorted_lessons() {
                            tr {
                                td { (lesson.order) }
                                td { (lesson.title) }
                                td { (lesson.content_type) }
                                td { small { (lesson.preview().unwrap_or_default()) } }
                                td {
                                    a href=(format!("/admin/lessons/{}/edit", lesson.id)) { "Edit" }
                                    " · "
                                    a href=(format!("/admin/lessons/{}/delete", lesson.id)) { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub struct LessonEditor<'a> {
    /// Owning module, used for the create action and the back link.
    pub module_id: Option<i64>,
    pub lesson: Option<&'a Lesson>,
    pub form: &'a LessonForm,
    pub errors: &'a [String],
    /// Saving would replace unparseable quiz content; ask before doing it.
    pub confirm_reset: bool,
}

impl LessonEditor<'_> {
    fn back_href(&self) -> String {
        match self.module_id {
            Some(id) => format!("/admin/modules/{}/lessons", id),
            None => "/admin/courses".to_string(),
        }
    }

    fn action(&self) -> String {
        match (self.lesson, self.module_id) {
            (Some(lesson), _) => format!("/admin/lessons/{}/edit", lesson.id),
            (None, Some(module_id)) => format!("/admin/modules/{}/lessons", module_id),
            (None, None) => "/admin/courses".to_string(),
        }
    }
}

pub fn lesson_form(session: &Session, editor: &LessonEditor<'_>) -> Markup {
    let title = if editor.lesson.is_some() {
        "Edit Lesson"
    } else {
        "Create New Lesson"
    };
    let form = editor.form;
    page_with_session(
        title,
        session,
        html! {
            p { a href=(editor.back_href()) { "← Lessons" } }
            h1 { (title) }
            (form_errors(editor.errors))
            @if editor.confirm_reset {
                div class="warning" role="alert" {
                    p { strong { "The current quiz content is not valid JSON." } }
                    p { "Saving will discard it and store an empty quiz. Fix the JSON below, or tick the box to confirm." }
                }
            }
            form method="post" action=(editor.action()) {
                (text_input("Title", "title", &form.title, true))
                p {
                    label {
                        "Content type"
                        br;
                        select name="content_type" {
                            @for kind in ContentType::ALL {
                                option value=(kind.as_str()) selected[form.content_type == kind.as_str()] { (kind.label()) }
                            }
                        }
                    }
                }
                (number_input("Order", "order", &form.order))
                (textarea("Content", "content", &form.content, 16))
                (checkbox("Pre-assessment quiz (only used when the content type is Quiz)", "is_pre_assessment", form.is_pre_assessment))
                @if editor.confirm_reset {
                    (checkbox("Discard the unparseable quiz content", "discard_invalid_quiz", false))
                }
                button type="submit" { "Save" }
            }
            details {
                summary { "Quiz content format" }
                p { "For quiz lessons the content is JSON in this shape. Questions are edited by hand; the checkbox above manages " code { "isPreAssessment" } "." }
                pre { (QUIZ_SHAPE) }
                p { small { "If the stored content cannot be parsed, saving replaces it: " (RESET_WARNING) } }
            }
        },
    )
}

pub fn confirm_lesson_delete(session: &Session, lesson: &Lesson) -> Markup {
    let cancel = match lesson.module_id {
        Some(id) => format!("/admin/modules/{}/lessons", id),
        None => "/admin/courses".to_string(),
    };
    page_with_session(
        "Delete lesson",
        session,
        confirm_delete(
            "lesson",
            &lesson.title,
            &format!("/admin/lessons/{}/delete", lesson.id),
            &cancel,
        ),
    )
}
