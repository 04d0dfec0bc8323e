use maud::{html, Markup};
use serde::Deserialize;

/// One-shot messages carried through a Post/Redirect/Get round trip.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Flash {
    pub notice: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

pub fn flash(flash: &Flash) -> Markup {
    html! {
        @if let Some(notice) = &flash.notice {
            p class="notice" role="status" { (notice) }
        }
        @if let Some(warning) = &flash.warning {
            p class="warning" role="status" { "Warning: " (warning) }
        }
        @if let Some(error) = &flash.error {
            p class="alert" role="alert" { (error) }
        }
    }
}

/// Inline list of form errors shown above a re-rendered form.
pub fn form_errors(errors: &[String]) -> Markup {
    html! {
        @if !errors.is_empty() {
            div class="alert" role="alert" {
                ul {
                    @for err in errors {
                        li { (err) }
                    }
                }
            }
        }
    }
}

pub fn text_input(label: &str, name: &str, value: &str, required: bool) -> Markup {
    html! {
        p {
            label {
                (label)
                br;
                input type="text" name=(name) value=(value) required[required];
            }
        }
    }
}

pub fn number_input(label: &str, name: &str, value: &str) -> Markup {
    html! {
        p {
            label {
                (label)
                br;
                input type="number" name=(name) value=(value);
            }
        }
    }
}

pub fn textarea(label: &str, name: &str, value: &str, rows: u32) -> Markup {
    html! {
        p {
            label {
                (label)
                br;
                textarea name=(name) rows=(rows) cols="80" { (value) }
            }
        }
    }
}

pub fn checkbox(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        p {
            label {
                input type="checkbox" name=(name) value="true" checked[checked];
                " " (label)
            }
        }
    }
}

/// Explicit confirmation step in front of every delete.
pub fn confirm_delete(what: &str, name: &str, action: &str, cancel_href: &str) -> Markup {
    html! {
        h1 { "Delete " (what) }
        p { "Are you sure you want to delete " (what) " " strong { (name) } "? This cannot be undone." }
        form method="post" action=(action) {
            button type="submit" { "Delete" }
            " "
            a href=(cancel_href) { "Cancel" }
        }
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}
