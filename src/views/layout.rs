use maud::{html, Markup, DOCTYPE};

use crate::error::BackLink;
use crate::middleware::session::{Role, Session};

const APP_NAME: &str = "LMS";

fn css() -> Markup {
    html! {
        style {
            "body{font-family:system-ui,sans-serif;max-width:960px;margin:0 auto;padding:0 1rem;}"
            "nav{display:flex;gap:1rem;align-items:center;padding:1rem 0;border-bottom:1px solid #ddd;}"
            "nav .spacer{flex:1;}"
            ".notice{background:#d4edda;padding:.5rem 1rem;border-radius:4px;}"
            ".alert{background:#f8d7da;padding:.5rem 1rem;border-radius:4px;}"
            ".warning{background:#fff3cd;padding:.5rem 1rem;border-radius:4px;}"
            "pre.content{white-space:pre-wrap;}"
            "table{border-collapse:collapse;width:100%;}"
            "td,th{border-bottom:1px solid #eee;padding:.4rem;text-align:left;}"
            "form.inline{display:inline;}"
        }
    }
}

fn nav(role: Option<Role>) -> Markup {
    html! {
        nav {
            a href="/" { strong { (APP_NAME) } }
            a href="/courses" { "Courses" }
            @if matches!(role, Some(Role::Learner) | Some(Role::Admin)) {
                a href="/study-plan" { "Study plan" }
            }
            @if role.is_some_and(Role::is_admin) {
                a href="/admin" { "Admin" }
            }
            span class="spacer" {}
            @match role {
                Some(Role::Learner) | Some(Role::Admin) => {
                    form class="inline" method="post" action="/logout" {
                        button type="submit" { "Log out" }
                    }
                }
                Some(Role::Anonymous) => {
                    a href="/login" { "Log in" }
                    a href="/register" { "Register" }
                }
                None => {}
            }
        }
    }
}

fn document(title: &str, role: Option<Role>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (css())
                title { (format!("{title} - {APP_NAME}")) }
            }
            body {
                (nav(role))
                main { (body) }
            }
        }
    }
}

/// Page without session-aware navigation, used where no session is at hand.
pub fn page(title: &str, body: Markup) -> Markup {
    document(title, None, body)
}

pub fn page_with_session(title: &str, session: &Session, body: Markup) -> Markup {
    document(title, Some(session.role()), body)
}

pub fn error_page(message: &str, back: &BackLink) -> Markup {
    page(
        "Error",
        html! {
            h1 { "Something went wrong" }
            p class="alert" { "Error: " (message) }
            p { a href=(back.href) { (back.label) } }
        },
    )
}

pub fn access_denied() -> Markup {
    page(
        "Access Denied",
        html! {
            h1 { "Access Denied" }
            p { "You do not have permission to view this page." }
            p { a href="/" { "Back to home" } }
        },
    )
}
