pub mod course;
pub mod enrollment;
pub mod lesson;
pub mod module;
pub mod quiz;
pub mod skill;
pub mod study_plan;
pub mod user;
