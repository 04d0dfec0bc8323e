pub mod courses;
pub mod enrollments;
pub mod lessons;
pub mod modules;
pub mod skills;
pub mod users;

use maud::Markup;

use crate::middleware::session::RequireAdmin;
use crate::views;

#[axum::debug_handler]
pub async fn dashboard(admin: RequireAdmin) -> Markup {
    views::admin::dashboard(&admin.session)
}
