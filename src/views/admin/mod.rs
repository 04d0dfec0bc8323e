pub mod courses;
pub mod enrollments;
pub mod lessons;
pub mod modules;
pub mod skills;
pub mod users;

use maud::{html, Markup};

use crate::middleware::session::Session;
use crate::models::skill::Skill;
use crate::views::page_with_session;

pub fn dashboard(session: &Session) -> Markup {
    page_with_session(
        "Admin",
        session,
        html! {
            h1 { "Admin Dashboard" }
            ul {
                li { a href="/admin/courses" { "Manage Courses" } }
                li { a href="/admin/skills" { "Manage Skills" } }
                li { a href="/admin/users" { "Manage Users" } }
                li { a href="/admin/enrollments" { "View Enrollments" } }
            }
        },
    )
}

/// Attach/detach buttons for every known skill against the ones already
/// linked. `action_base` is suffixed with the skill id.
pub fn skill_toggles(action_base: &str, all: &[Skill], attached: &[Skill]) -> Markup {
    html! {
        h2 { "Skills" }
        @if all.is_empty() {
            p { "No skills defined. " a href="/admin/skills/new" { "Create one" } "." }
        } @else {
            table {
                thead { tr { th { "Skill" } th { "Linked" } th {} } }
                tbody {
                    @for skill in all {
                        @let linked = attached.iter().any(|s| s.id == skill.id);
                        tr {
                            td { (skill.name) }
                            td { @if linked { "Yes" } @else { "No" } }
                            td {
                                form class="inline" method="post" action=(format!("{}/{}", action_base, skill.id)) {
                                    input type="hidden" name="attach" value=(if linked { "false" } else { "true" });
                                    button type="submit" {
                                        @if linked { "Detach" } @else { "Attach" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
