use maud::{html, Markup};

use crate::middleware::session::Session;
use crate::models::course::Course;
use crate::models::enrollment::Enrollment;
use crate::utils::time::format_date;
use crate::views::components::{flash, Flash};
use crate::views::page_with_session;

pub fn course_list(session: &Session, courses: &[Course]) -> Markup {
    page_with_session(
        "Courses",
        session,
        html! {
            h1 { "Courses" }
            @if courses.is_empty() {
                p { "No courses available yet." }
            } @else {
                ul {
                    @for course in courses {
                        li {
                            a href=(format!("/courses/{}", course.id)) { strong { (course.title) } }
                            @if let Some(desc) = &course.description {
                                br;
                                small { (desc) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn course_detail(
    session: &Session,
    course: &Course,
    enrollment: Option<&Enrollment>,
    notice: &Flash,
) -> Markup {
    page_with_session(
        &course.title,
        session,
        html! {
            p { a href="/courses" { "← Back to courses" } }
            h1 { (course.title) }
            @if let Some(desc) = &course.description {
                p { (desc) }
            }
            (flash(notice))

            @match enrollment {
                Some(e) => p class="notice" { "You are enrolled in this course (since " (format_date(e.enrolled_at)) ")." },
                None if session.is_signed_in() => {
                    form method="post" action=(format!("/courses/{}/enroll", course.id)) {
                        button type="submit" { "Enroll in this course" }
                    }
                }
                None => p { a href="/login" { "Log in" } " to enroll in this course." },
            }

            h2 { "Modules" }
            @if course.modules.is_empty() {
                p { "This course has no modules yet." }
            }
            @for module in course.sorted_modules() {
                section {
                    h3 { (module.title) }
                    @if let Some(desc) = &module.description {
                        p { (desc) }
                    }
                    @if module.lessons.is_empty() {
                        p { small { "No lessons in this module." } }
                    } @else {
                        ol {
                            @for lesson in module.sorted_lessons() {
                                li {
                                    a href=(format!("/courses/{}/lessons/{}", course.id, lesson.id)) { (lesson.title) }
                                    " " small { "(" (lesson.content_type) ")" }
                                    @if let Some(enrollment) = enrollment {
                                        @let done = enrollment.is_completed(lesson.id);
                                        " "
                                        form class="inline" method="post"
                                             action=(format!("/courses/{}/lessons/{}/progress", course.id, lesson.id)) {
                                            input type="hidden" name="enrollment_id" value=(enrollment.id);
                                            input type="hidden" name="completed" value=(if done { "false" } else { "true" });
                                            button type="submit" {
                                                @if done { "✓ Mark incomplete" } @else { "Mark complete" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
