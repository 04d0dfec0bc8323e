pub mod auth_dto;
pub mod course_dto;
pub mod enrollment_dto;
pub mod lesson_dto;
pub mod skill_dto;
pub mod user_dto;
