use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Course,
    Module,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyRecommendation {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub course_id: Option<i64>,
}

impl StudyRecommendation {
    /// Modules have no page of their own; they link to their course.
    pub fn href(&self) -> String {
        match self.kind {
            RecommendationKind::Course => format!("/courses/{}", self.id),
            RecommendationKind::Module => match self.course_id {
                Some(course_id) => format!("/courses/{}", course_id),
                None => "/courses".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    #[serde(default)]
    pub recommendations: Vec<StudyRecommendation>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub enrolled_courses_count: Option<i64>,
    #[serde(default)]
    pub completed_lessons_count: Option<i64>,
}
