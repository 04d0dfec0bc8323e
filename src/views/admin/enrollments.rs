use maud::{html, Markup};

use crate::middleware::session::Session;
use crate::models::enrollment::Enrollment;
use crate::utils::time::format_datetime;
use crate::views::page_with_session;

pub fn enrollment_list(session: &Session, enrollments: &[Enrollment]) -> Markup {
    page_with_session(
        "Enrollments",
        session,
        html! {
            p { a href="/admin" { "← Admin" } }
            h1 { "Enrollments" }
            @if enrollments.is_empty() {
                p { "No enrollments yet." }
            } @else {
                table {
                    thead { tr { th { "ID" } th { "User" } th { "Course" } th { "Enrolled at" } th { "Completed lessons" } } }
                    tbody {
                        @for e in enrollments {
                            tr {
                                td { (e.id) }
                                td {
                                    @match &e.user {
                                        Some(user) => { (user.full_name.as_deref().unwrap_or(&user.email)) }
                                        None => { "User #" (e.user_id) }
                                    }
                                }
                                td {
                                    @match &e.course {
                                        Some(course) => { (course.title) }
                                        None => { "Course #" (e.course_id) }
                                    }
                                }
                                td { (format_datetime(e.enrolled_at)) }
                                td { (e.completed_lessons.len()) }
                            }
                        }
                    }
                }
            }
        },
    )
}
