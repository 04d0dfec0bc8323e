use serde::{Deserialize, Serialize};

use crate::models::lesson::Lesson;
use crate::models::skill::Skill;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl CourseModule {
    pub fn sorted_lessons(&self) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self.lessons.iter().collect();
        lessons.sort_by_key(|l| l.order);
        lessons
    }

    pub fn next_lesson_order(&self) -> i32 {
        self.lessons.iter().map(|l| l.order + 1).max().unwrap_or(0)
    }
}
