use axum::extract::Query;
use maud::Markup;

use crate::middleware::session::Session;
use crate::views::{self, components::Flash};

#[axum::debug_handler]
pub async fn home(session: Session, Query(flash): Query<Flash>) -> Markup {
    views::home::home(&session, &flash)
}
