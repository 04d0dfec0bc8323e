use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::models::skill::Skill;
use crate::utils::form::{deserialize_bool_flexible, non_empty};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SkillForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillPayload {
    pub name: String,
    pub description: Option<String>,
}

impl SkillForm {
    pub fn from_skill(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            description: skill.description.clone().unwrap_or_default(),
        }
    }

    pub fn into_payload(self) -> Result<SkillPayload, ValidationErrors> {
        self.validate()?;
        Ok(SkillPayload {
            name: self.name.trim().to_string(),
            description: non_empty(&self.description),
        })
    }
}

/// Attach or detach a skill on a course or module.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillToggleForm {
    #[serde(deserialize_with = "deserialize_bool_flexible")]
    pub attach: bool,
}
