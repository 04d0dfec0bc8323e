use maud::{html, Markup};

use crate::dto::course_dto::ModuleForm;
use crate::middleware::session::Session;
use crate::models::course::Course;
use crate::models::module::CourseModule;
use crate::models::skill::Skill;
use crate::views::admin::skill_toggles;
use crate::views::components::{confirm_delete, flash, form_errors, number_input, text_input, textarea, Flash};
use crate::views::page_with_session;

pub fn module_list(session: &Session, course: &Course, modules: &[CourseModule], notice: &Flash) -> Markup {
    let mut modules: Vec<&CourseModule> = modules.iter().collect();
    modules.sort_by_key(|m| m.order);
    page_with_session(
        "Manage modules",
        session,
        html! {
            p { a href="/admin/courses" { "← Courses" } }
            h1 { "Modules of " (course.title) }
            (flash(notice))
            p { a href=(format!("/admin/courses/{}/modules/new", course.id)) { "+ New module" } }
            @if modules.is_empty() {
                p { "This course has no modules yet." }
            } @else {
                table {
                    thead { tr { th { "Order" } th { "Title" } th { "Lessons" } th { "Actions" } } }
                    tbody {
                        @for module in modules {
                            tr {
                                td { (module.order) }
                                td { (module.title) }
                                td { (module.lessons.len()) }
                                td {
                                    a href=(format!("/admin/modules/{}/lessons", module.id)) { "Lessons" }
                                    " · "
                                    a href=(format!("/admin/modules/{}/edit", module.id)) { "Edit" }
                                    " · "
                                    a href=(format!("/admin/modules/{}/delete", module.id)) { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn module_form(
    session: &Session,
    course_id: i64,
    module: Option<&CourseModule>,
    form: &ModuleForm,
    errors: &[String],
    skills: &[Skill],
    notice: &Flash,
) -> Markup {
    let (title, action) = match module {
        Some(m) => ("Edit module", format!("/admin/modules/{}/edit", m.id)),
        None => ("New module", format!("/admin/courses/{}/modules", course_id)),
    };
    page_with_session(
        title,
        session,
        html! {
            p { a href=(format!("/admin/courses/{}/modules", course_id)) { "← Modules" } }
            h1 { (title) }
            (flash(notice))
            (form_errors(errors))
            form method="post" action=(action) {
                (text_input("Title", "title", &form.title, true))
                (textarea("Description", "description", &form.description, 4))
                (number_input("Order", "order", &form.order))
                button type="submit" { "Save" }
            }
            @if let Some(module) = module {
                (skill_toggles(&format!("/admin/modules/{}/skills", module.id), skills, &module.skills))
            }
        },
    )
}

pub fn confirm_module_delete(session: &Session, module: &CourseModule, cancel_href: &str) -> Markup {
    page_with_session(
        "Delete module",
        session,
        confirm_delete(
            "module",
            &module.title,
            &format!("/admin/modules/{}/delete", module.id),
            cancel_href,
        ),
    )
}
