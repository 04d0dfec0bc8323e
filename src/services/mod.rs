pub mod api_client;
pub mod auth_service;
pub mod authoring_service;
pub mod course_service;
pub mod enrollment_service;
pub mod lesson_service;
pub mod module_service;
pub mod quiz_service;
pub mod skill_service;
pub mod user_service;
