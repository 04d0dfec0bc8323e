use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::user::UserSummary;
use crate::utils::time::deserialize_backend_datetime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    #[serde(deserialize_with = "deserialize_backend_datetime")]
    pub enrolled_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_lessons: Vec<i64>,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub course: Option<CourseSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
}

impl Enrollment {
    pub fn is_completed(&self, lesson_id: i64) -> bool {
        self.completed_lessons.contains(&lesson_id)
    }
}
