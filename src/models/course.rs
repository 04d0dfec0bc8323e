use serde::{Deserialize, Serialize};

use crate::models::module::CourseModule;
use crate::models::skill::Skill;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub instructor_id: Option<i64>,
    #[serde(default)]
    pub modules: Vec<CourseModule>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Course {
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }

    pub fn sorted_modules(&self) -> Vec<&CourseModule> {
        let mut modules: Vec<&CourseModule> = self.modules.iter().collect();
        modules.sort_by_key(|m| m.order);
        modules
    }

    /// Next free position for a new module.
    pub fn next_module_order(&self) -> i32 {
        self.modules.iter().map(|m| m.order + 1).max().unwrap_or(0)
    }
}
