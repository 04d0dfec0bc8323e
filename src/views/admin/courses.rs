use maud::{html, Markup};

use crate::dto::course_dto::CourseForm;
use crate::middleware::session::Session;
use crate::models::course::Course;
use crate::models::skill::Skill;
use crate::views::admin::skill_toggles;
use crate::views::components::{confirm_delete, flash, form_errors, number_input, text_input, textarea, Flash};
use crate::views::page_with_session;

pub fn course_list(session: &Session, courses: &[Course], notice: &Flash) -> Markup {
    page_with_session(
        "Manage courses",
        session,
        html! {
            p { a href="/admin" { "← Admin" } }
            h1 { "Manage Courses" }
            (flash(notice))
            p { a href="/admin/courses/new" { "+ New course" } }
            @if courses.is_empty() {
                p { "No courses yet." }
            } @else {
                table {
                    thead { tr { th { "ID" } th { "Title" } th { "Modules" } th { "Lessons" } th { "Actions" } } }
                    tbody {
                        @for course in courses {
                            tr {
                                td { (course.id) }
                                td { (course.title) }
                                td { (course.modules.len()) }
                                td { (course.lesson_count()) }
                                td {
                                    a href=(format!("/admin/courses/{}/modules", course.id)) { "Modules" }
                                    " · "
                                    a href=(format!("/admin/courses/{}/edit", course.id)) { "Edit" }
                                    " · "
                                    a href=(format!("/admin/courses/{}/delete", course.id)) { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Create form when `course` is `None`, edit form with skill toggles otherwise.
pub fn course_form(
    session: &Session,
    course: Option<&Course>,
    form: &CourseForm,
    errors: &[String],
    skills: &[Skill],
    notice: &Flash,
) -> Markup {
    let (title, action) = match course {
        Some(c) => ("Edit course", format!("/admin/courses/{}/edit", c.id)),
        None => ("New course", "/admin/courses".to_string()),
    };
    page_with_session(
        title,
        session,
        html! {
            p { a href="/admin/courses" { "← Courses" } }
            h1 { (title) }
            (flash(notice))
            (form_errors(errors))
            form method="post" action=(action) {
                (text_input("Title", "title", &form.title, true))
                (textarea("Description", "description", &form.description, 4))
                (number_input("Instructor ID (optional)", "instructor_id", &form.instructor_id))
                button type="submit" { "Save" }
            }
            @if let Some(course) = course {
                (skill_toggles(&format!("/admin/courses/{}/skills", course.id), skills, &course.skills))
            }
        },
    )
}

pub fn confirm_course_delete(session: &Session, course: &Course) -> Markup {
    page_with_session(
        "Delete course",
        session,
        confirm_delete(
            "course",
            &course.title,
            &format!("/admin/courses/{}/delete", course.id),
            "/admin/courses",
        ),
    )
}
