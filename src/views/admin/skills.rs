use maud::{html, Markup};

use crate::dto::skill_dto::SkillForm;
use crate::middleware::session::Session;
use crate::models::skill::Skill;
use crate::views::components::{confirm_delete, flash, form_errors, text_input, textarea, Flash};
use crate::views::page_with_session;

pub fn skill_list(session: &Session, skills: &[Skill], notice: &Flash) -> Markup {
    page_with_session(
        "Manage skills",
        session,
        html! {
            p { a href="/admin" { "← Admin" } }
            h1 { "Manage Skills" }
            (flash(notice))
            p { a href="/admin/skills/new" { "+ New skill" } }
            @if skills.is_empty() {
                p { "No skills yet." }
            } @else {
                table {
                    thead { tr { th { "ID" } th { "Name" } th { "Description" } th { "Actions" } } }
                    tbody {
                        @for skill in skills {
                            tr {
                                td { (skill.id) }
                                td { (skill.name) }
                                td { (skill.description.as_deref().unwrap_or("N/A")) }
                                td {
                                    a href=(format!("/admin/skills/{}/edit", skill.id)) { "Edit" }
                                    " · "
                                    a href=(format!("/admin/skills/{}/delete", skill.id)) { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn skill_form(session: &Session, skill_id: Option<i64>, form: &SkillForm, errors: &[String]) -> Markup {
    let (title, action) = match skill_id {
        Some(id) => ("Edit skill", format!("/admin/skills/{}/edit", id)),
        None => ("New skill", "/admin/skills".to_string()),
    };
    page_with_session(
        title,
        session,
        html! {
            p { a href="/admin/skills" { "← Skills" } }
            h1 { (title) }
            (form_errors(errors))
            form method="post" action=(action) {
                (text_input("Name", "name", &form.name, true))
                (textarea("Description", "description", &form.description, 3))
                button type="submit" { "Save" }
            }
        },
    )
}

pub fn confirm_skill_delete(session: &Session, skill: &Skill) -> Markup {
    page_with_session(
        "Delete skill",
        session,
        confirm_delete(
            "skill",
            &skill.name,
            &format!("/admin/skills/{}/delete", skill.id),
            "/admin/skills",
        ),
    )
}
