use serde::{Deserialize, Serialize};

use crate::utils::form::deserialize_bool_flexible;

#[derive(Debug, Clone, Serialize)]
pub struct EnrollRequest {
    pub course_id: i64,
}

/// Completion toggle posted from the course page.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressForm {
    pub enrollment_id: i64,
    #[serde(deserialize_with = "deserialize_bool_flexible")]
    pub completed: bool,
}
