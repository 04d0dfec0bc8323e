use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::lesson::{ContentType, Lesson};
use crate::utils::form::{deserialize_bool_flexible, parse_integer};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LessonForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[validate(custom(function = "known_content_type"))]
    pub content_type: String,
    #[serde(default)]
    pub order: String,
    #[serde(default, deserialize_with = "deserialize_bool_flexible")]
    pub is_pre_assessment: bool,
    /// Admin consent to replace quiz content that cannot be parsed.
    #[serde(default, deserialize_with = "deserialize_bool_flexible")]
    pub discard_invalid_quiz: bool,
}

fn known_content_type(value: &str) -> Result<(), ValidationError> {
    if ContentType::from_name(value).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("content_type");
        err.message = Some(format!("Unsupported content type: {}", value).into());
        Err(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonPayload {
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub order: i32,
}

impl LessonForm {
    pub fn for_new(order: i32) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            content_type: ContentType::Text.as_str().to_string(),
            order: order.to_string(),
            is_pre_assessment: false,
            discard_invalid_quiz: false,
        }
    }

    /// Seeds the editor; the pre-assessment toggle is read from the stored
    /// quiz and falls back to unchecked when the content does not parse.
    pub fn from_lesson(lesson: &Lesson) -> Self {
        let content = lesson.content.clone().unwrap_or_default();
        let is_pre_assessment = lesson.content_type == ContentType::Quiz.as_str()
            && crate::services::authoring_service::read_pre_assessment(&content);
        Self {
            title: lesson.title.clone(),
            content,
            content_type: lesson.content_type.clone(),
            order: lesson.order.to_string(),
            is_pre_assessment,
            discard_invalid_quiz: false,
        }
    }

    pub fn is_quiz(&self) -> bool {
        self.content_type == ContentType::Quiz.as_str()
    }

    /// Validated payload with the content exactly as typed.
    pub fn to_payload(&self) -> Result<LessonPayload, ValidationErrors> {
        self.validate()?;
        Ok(LessonPayload {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            content_type: self.content_type.clone(),
            order: parse_integer("order", &self.order)?,
        })
    }
}
