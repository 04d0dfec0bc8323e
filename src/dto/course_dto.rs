use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::course::Course;
use crate::models::module::CourseModule;
use crate::utils::form::{non_empty, parse_integer, parse_optional_id};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CourseForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructor_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoursePayload {
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: Option<i64>,
}

impl CourseForm {
    pub fn from_course(course: &Course) -> Self {
        Self {
            title: course.title.clone(),
            description: course.description.clone().unwrap_or_default(),
            instructor_id: course
                .instructor_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn into_payload(self) -> Result<CoursePayload, ValidationErrors> {
        self.validate()?;
        Ok(CoursePayload {
            instructor_id: parse_optional_id("instructor_id", &self.instructor_id)?,
            description: non_empty(&self.description),
            title: self.title.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ModuleForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub order: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModulePayload {
    pub title: String,
    pub description: Option<String>,
    pub order: i32,
}

impl ModuleForm {
    pub fn for_new(order: i32) -> Self {
        Self {
            order: order.to_string(),
            ..Self::default()
        }
    }

    pub fn from_module(module: &CourseModule) -> Self {
        Self {
            title: module.title.clone(),
            description: module.description.clone().unwrap_or_default(),
            order: module.order.to_string(),
        }
    }

    pub fn into_payload(self) -> Result<ModulePayload, ValidationErrors> {
        self.validate()?;
        Ok(ModulePayload {
            order: parse_integer("order", &self.order)?,
            description: non_empty(&self.description),
            title: self.title.trim().to_string(),
        })
    }
}
