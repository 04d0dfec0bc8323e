use maud::{html, Markup};

use crate::dto::user_dto::UserUpdateForm;
use crate::middleware::session::Session;
use crate::models::user::User;
use crate::views::components::{flash, yes_no, Flash};
use crate::views::page_with_session;

pub fn user_list(session: &Session, users: &[User], notice: &Flash) -> Markup {
    page_with_session(
        "Manage users",
        session,
        html! {
            p { a href="/admin" { "← Admin" } }
            h1 { "Manage Users" }
            (flash(notice))
            @if users.is_empty() {
                p { "No users found." }
            } @else {
                table {
                    thead { tr { th { "ID" } th { "Email" } th { "Full name" } th { "Active" } th { "Admin" } th { "Update" } } }
                    tbody {
                        @for user in users {
                            @let current = UserUpdateForm::from_user(user);
                            tr {
                                td { (user.id) }
                                td { (user.email) }
                                td { (user.full_name.as_deref().unwrap_or("N/A")) }
                                td { (yes_no(user.is_active)) }
                                td { (yes_no(user.is_admin)) }
                                td {
                                    form class="inline" method="post" action=(format!("/admin/users/{}", user.id)) {
                                        input type="text" name="full_name" placeholder="Full name"
                                              value=(current.full_name);
                                        label { input type="checkbox" name="is_active" value="true" checked[current.is_active]; " active" }
                                        " "
                                        label { input type="checkbox" name="is_admin" value="true" checked[current.is_admin]; " admin" }
                                        " "
                                        button type="submit" { "Save" }
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
