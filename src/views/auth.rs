use maud::{html, Markup};

use crate::views::components::{flash, form_errors, Flash};
use crate::views::page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Log in",
            AuthMode::Register => "Register",
        }
    }

    fn action(self) -> &'static str {
        match self {
            AuthMode::Login => "/login",
            AuthMode::Register => "/register",
        }
    }
}

/// Shared credentials form for login and registration.
pub fn auth_form(mode: AuthMode, email: &str, errors: &[String], notice: &Flash) -> Markup {
    page(
        mode.title(),
        html! {
            h1 { (mode.title()) }
            (flash(notice))
            (form_errors(errors))
            form method="post" action=(mode.action()) {
                p {
                    label {
                        "Email"
                        br;
                        input type="email" name="email" value=(email) required;
                    }
                }
                p {
                    label {
                        "Password"
                        br;
                        input type="password" name="password" required;
                    }
                }
                button type="submit" { (mode.title()) }
            }
            @match mode {
                AuthMode::Login => p { "No account yet? " a href="/register" { "Register" } },
                AuthMode::Register => p { "Already registered? " a href="/login" { "Log in" } },
            }
        },
    )
}
