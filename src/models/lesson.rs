use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::quiz::{QuizContent, QuizContentError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub content_type: String,
    pub order: i32,
    #[serde(default)]
    pub module_id: Option<i64>,
}

/// Discriminator selecting how a lesson's stored `content` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Text,
    Markdown,
    VideoUrl,
    Quiz,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Text,
        ContentType::Markdown,
        ContentType::VideoUrl,
        ContentType::Quiz,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Markdown => "markdown",
            ContentType::VideoUrl => "video_url",
            ContentType::Quiz => "quiz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Text => "Text",
            ContentType::Markdown => "Markdown",
            ContentType::VideoUrl => "Video URL",
            ContentType::Quiz => "Quiz",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lesson's content, validated once when the lesson is loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonBody {
    Empty,
    Text(String),
    Markdown(String),
    VideoUrl(String),
    Quiz(QuizContent),
    Unsupported(String),
}

impl LessonBody {
    pub fn parse(content_type: &str, content: Option<&str>) -> Result<Self, QuizContentError> {
        let content = match content {
            Some(c) if !c.is_empty() => c,
            _ => return Ok(LessonBody::Empty),
        };
        let body = match ContentType::from_name(content_type) {
            Some(ContentType::Text) => LessonBody::Text(content.to_string()),
            Some(ContentType::Markdown) => LessonBody::Markdown(content.to_string()),
            Some(ContentType::VideoUrl) => LessonBody::VideoUrl(content.to_string()),
            Some(ContentType::Quiz) => LessonBody::Quiz(QuizContent::parse(content)?),
            None => LessonBody::Unsupported(content_type.to_string()),
        };
        Ok(body)
    }
}

impl Lesson {
    pub fn body(&self) -> Result<LessonBody, QuizContentError> {
        LessonBody::parse(&self.content_type, self.content.as_deref())
    }

    /// First hundred characters of the content, for listings.
    pub fn preview(&self) -> Option<String> {
        self.content
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|c| c.chars().take(100).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_names_round_trip() {
        for t in ContentType::ALL {
            assert_eq!(ContentType::from_name(t.as_str()), Some(t));
        }
        assert_eq!(ContentType::from_name("pdf"), None);
    }

    #[test]
    fn body_variants() {
        assert_eq!(LessonBody::parse("text", None).unwrap(), LessonBody::Empty);
        assert_eq!(LessonBody::parse("quiz", Some("")).unwrap(), LessonBody::Empty);
        assert_eq!(
            LessonBody::parse("video_url", Some("https://v.example/1")).unwrap(),
            LessonBody::VideoUrl("https://v.example/1".into())
        );
        assert_eq!(
            LessonBody::parse("slides", Some("x")).unwrap(),
            LessonBody::Unsupported("slides".into())
        );
        assert!(matches!(
            LessonBody::parse("quiz", Some(r#"{"questions":[]}"#)).unwrap(),
            LessonBody::Quiz(q) if q.is_empty()
        ));
        assert!(LessonBody::parse("quiz", Some("{not json")).is_err());
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        let lesson = Lesson {
            id: 1,
            title: "t".into(),
            content: Some("é".repeat(150)),
            content_type: "text".into(),
            order: 0,
            module_id: None,
        };
        assert_eq!(lesson.preview().unwrap().chars().count(), 100);
    }
}
