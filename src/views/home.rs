use maud::{html, Markup};

use crate::middleware::session::{Role, Session};
use crate::views::components::{flash, Flash};
use crate::views::page_with_session;

pub fn home(session: &Session, notice: &Flash) -> Markup {
    page_with_session(
        "Home",
        session,
        html! {
            (flash(notice))
            h1 { "Learn at your own pace" }
            p { "Browse courses, work through lessons and quizzes, and follow a study plan built from your results." }
            @match session.role() {
                Role::Anonymous => {
                    p {
                        a href="/login" { "Log in" }
                        " or "
                        a href="/register" { "create an account" }
                        " to enroll in courses."
                    }
                }
                Role::Learner => {
                    p { a href="/courses" { "Browse courses" } " · " a href="/study-plan" { "Your study plan" } }
                }
                Role::Admin => {
                    p { a href="/courses" { "Browse courses" } " · " a href="/admin" { "Admin dashboard" } }
                }
            }
        },
    )
}
