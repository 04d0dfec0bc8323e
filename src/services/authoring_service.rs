//! Pre-assessment toggle round-trip for quiz lessons. Questions stay
//! hand-authored JSON; only the `isPreAssessment` key is managed here.

use serde_json::{Map, Value as JsonValue};

use crate::dto::lesson_dto::{LessonForm, LessonPayload};
use crate::error::Result;

pub const RESET_WARNING: &str =
    "Existing quiz content was not valid JSON and has been replaced with an empty quiz.";

const PRE_ASSESSMENT_KEY: &str = "isPreAssessment";

#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredQuiz {
    pub content: String,
    pub warning: Option<String>,
}

/// The value to seed the editor toggle with. Unparseable content reads as
/// `false` without surfacing an error.
pub fn read_pre_assessment(content: &str) -> bool {
    parse_object(content)
        .and_then(|obj| obj.get(PRE_ASSESSMENT_KEY).and_then(JsonValue::as_bool))
        .unwrap_or(false)
}

/// True when saving would have to throw the current content away.
pub fn needs_reset(content: &str) -> bool {
    !content.trim().is_empty() && parse_object(content).is_none()
}

/// Writes the toggle into the stored quiz, leaving every other key as it
/// was. Content that is not a JSON object is replaced by an empty quiz and
/// a warning is returned alongside.
pub fn apply_pre_assessment(content: &str, is_pre_assessment: bool) -> Result<AuthoredQuiz> {
    let (mut object, warning) = if content.trim().is_empty() {
        (Map::new(), None)
    } else {
        match parse_object(content) {
            Some(object) => (object, None),
            None => {
                tracing::warn!("discarding unparseable quiz content on save");
                let mut fresh = Map::new();
                fresh.insert("questions".to_string(), JsonValue::Array(Vec::new()));
                (fresh, Some(RESET_WARNING.to_string()))
            }
        }
    };
    object.insert(
        PRE_ASSESSMENT_KEY.to_string(),
        JsonValue::Bool(is_pre_assessment),
    );
    let content = serde_json::to_string_pretty(&JsonValue::Object(object))?;
    Ok(AuthoredQuiz { content, warning })
}

fn parse_object(content: &str) -> Option<Map<String, JsonValue>> {
    match serde_json::from_str::<JsonValue>(content) {
        Ok(JsonValue::Object(object)) => Some(object),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LessonSave {
    Ready {
        payload: LessonPayload,
        warning: Option<String>,
    },
    /// Quiz content is unparseable and the admin has not agreed to discard it.
    NeedsConfirmation,
}

/// Builds the outgoing lesson payload from the editor form.
pub fn prepare_lesson_save(form: &LessonForm) -> Result<LessonSave> {
    let mut payload = form.to_payload()?;
    if !form.is_quiz() {
        return Ok(LessonSave::Ready {
            payload,
            warning: None,
        });
    }
    if needs_reset(&form.content) && !form.discard_invalid_quiz {
        return Ok(LessonSave::NeedsConfirmation);
    }
    let authored = apply_pre_assessment(&form.content, form.is_pre_assessment)?;
    payload.content = authored.content;
    Ok(LessonSave::Ready {
        payload,
        warning: authored.warning,
    })
}
