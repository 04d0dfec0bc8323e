pub mod admin;
pub mod auth;
pub mod components;
pub mod courses;
pub mod home;
pub mod layout;
pub mod lesson;
pub mod study_plan;

pub use layout::{page, page_with_session};
