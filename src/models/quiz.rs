use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// Quiz payload stored as serialized JSON inside a lesson's `content` field
/// when its content type is `quiz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizContent {
    #[serde(rename = "isPreAssessment", default)]
    pub is_pre_assessment: bool,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub options: Vec<QuizOption>,
    #[serde(
        rename = "correctAnswer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub correct_answer: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub skill_ids: BTreeSet<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum QuizContentError {
    #[error("Failed to load quiz: Invalid format. {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Duplicate question id '{0}'")]
    DuplicateQuestion(String),

    #[error("Duplicate option id '{option_id}' in question '{question_id}'")]
    DuplicateOption {
        question_id: String,
        option_id: String,
    },
}

impl QuizContent {
    pub fn empty(is_pre_assessment: bool) -> Self {
        Self {
            is_pre_assessment,
            questions: Vec::new(),
        }
    }

    /// Parses lesson content and checks id uniqueness. Never panics on
    /// arbitrary input.
    pub fn parse(raw: &str) -> Result<Self, QuizContentError> {
        let quiz: QuizContent = serde_json::from_str(raw)?;
        quiz.check_ids()?;
        Ok(quiz)
    }

    fn check_ids(&self) -> Result<(), QuizContentError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(QuizContentError::DuplicateQuestion(question.id.clone()));
            }
            let mut options = HashSet::new();
            for option in &question.options {
                if !options.insert(option.id.as_str()) {
                    return Err(QuizContentError::DuplicateOption {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Copy safe to render for a learner: correct answers removed.
    pub fn for_learner(&self) -> Self {
        Self {
            is_pre_assessment: self.is_pre_assessment,
            questions: self
                .questions
                .iter()
                .map(|q| Question {
                    correct_answer: None,
                    ..q.clone()
                })
                .collect(),
        }
    }
}

impl Question {
    pub fn has_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.id == option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: String,
    pub selected_option_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: Vec<UserAnswer>,
}

/// Score computed by the backend; only displayed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSubmissionResult {
    pub lesson_id: i64,
    pub overall_score: f64,
    #[serde(default)]
    pub score_per_skill: Option<BTreeMap<i64, f64>>,
}

impl QuizSubmissionResult {
    pub fn skill_breakdown(&self) -> Option<&BTreeMap<i64, f64>> {
        self.score_per_skill.as_ref().filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"isPreAssessment":true,"questions":[{"id":"q1","text":"2+2?","type":"multiple-choice","options":[{"id":"a","text":"3"},{"id":"b","text":"4"}],"correctAnswer":"b"}]}"#;

    #[test]
    fn parses_authoring_payload() {
        let quiz = QuizContent::parse(SAMPLE).unwrap();
        assert!(quiz.is_pre_assessment);
        assert_eq!(quiz.questions.len(), 1);
        let q = &quiz.questions[0];
        assert_eq!(q.question_type, QuestionType::MultipleChoice);
        assert_eq!(q.correct_answer.as_deref(), Some("b"));
        assert!(q.skill_ids.is_empty());
        assert!(q.has_option("a"));
        assert!(!q.has_option("c"));
    }

    #[test]
    fn serialize_then_parse_is_identity() {
        let mut quiz = QuizContent::parse(SAMPLE).unwrap();
        quiz.questions[0].skill_ids = [3, 7].into_iter().collect();
        quiz.questions.push(Question {
            id: "q2".into(),
            text: "Capital of France?".into(),
            question_type: QuestionType::MultipleChoice,
            options: vec![QuizOption {
                id: "x".into(),
                text: "Paris".into(),
            }],
            correct_answer: None,
            skill_ids: BTreeSet::new(),
        });

        let reparsed = QuizContent::parse(&quiz.to_pretty_json().unwrap()).unwrap();
        assert_eq!(reparsed, quiz);
    }

    #[test]
    fn non_json_is_a_malformed_error() {
        let err = QuizContent::parse("{not json").unwrap_err();
        assert!(matches!(err, QuizContentError::Malformed(_)));
        assert!(QuizContent::parse("").is_err());
        assert!(QuizContent::parse("[1,2]").is_err());
    }

    #[test]
    fn missing_questions_defaults_to_empty() {
        let quiz = QuizContent::parse(r#"{"isPreAssessment":false}"#).unwrap();
        assert!(quiz.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let raw = r#"{"questions":[
            {"id":"q1","text":"a","type":"multiple-choice","options":[]},
            {"id":"q1","text":"b","type":"multiple-choice","options":[]}
        ]}"#;
        assert!(matches!(
            QuizContent::parse(raw),
            Err(QuizContentError::DuplicateQuestion(id)) if id == "q1"
        ));

        let raw = r#"{"questions":[
            {"id":"q1","text":"a","type":"multiple-choice",
             "options":[{"id":"a","text":"1"},{"id":"a","text":"2"}]}
        ]}"#;
        assert!(matches!(
            QuizContent::parse(raw),
            Err(QuizContentError::DuplicateOption { .. })
        ));
    }

    #[test]
    fn learner_copy_has_no_correct_answers() {
        let quiz = QuizContent::parse(SAMPLE).unwrap();
        let learner = quiz.for_learner();
        assert!(learner.questions.iter().all(|q| q.correct_answer.is_none()));
        let json = serde_json::to_string(&learner).unwrap();
        assert!(!json.contains("correctAnswer"));
    }

    #[test]
    fn skill_scores_use_integer_keys() {
        let result: QuizSubmissionResult = serde_json::from_str(
            r#"{"lesson_id":4,"overall_score":66.666,"score_per_skill":{"1":50.0,"2":100.0}}"#,
        )
        .unwrap();
        let breakdown = result.skill_breakdown().unwrap();
        assert_eq!(breakdown.get(&2), Some(&100.0));

        let result: QuizSubmissionResult =
            serde_json::from_str(r#"{"lesson_id":4,"overall_score":10,"score_per_skill":{}}"#)
                .unwrap();
        assert!(result.skill_breakdown().is_none());
    }
}
