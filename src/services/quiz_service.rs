use std::collections::{BTreeMap, HashSet};

use crate::models::quiz::{QuizContent, QuizSubmissionResult, SubmitQuizRequest, UserAnswer};

pub const INCOMPLETE_MESSAGE: &str = "Please answer all questions before submitting.";
pub const SIGN_IN_MESSAGE: &str = "You must be logged in to submit a quiz.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit quiz";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("{}", INCOMPLETE_MESSAGE)]
    Incomplete { answered: usize, total: usize },

    #[error("Question '{0}' is answered more than once")]
    DuplicateAnswer(String),

    #[error("Question '{0}' is not part of this quiz")]
    UnknownQuestion(String),

    #[error("Option '{option_id}' does not belong to question '{question_id}'")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },

    #[error("{}", SIGN_IN_MESSAGE)]
    SignInRequired,

    #[error("This quiz has no questions")]
    NoQuestions,
}

/// Checks an answer list against the quiz: one answer per question, every
/// id known. The request lists answers in question order.
pub fn prepare_submission(
    quiz: &QuizContent,
    answers: &[UserAnswer],
) -> Result<SubmitQuizRequest, SubmissionError> {
    if quiz.is_empty() {
        return Err(SubmissionError::NoQuestions);
    }
    let mut seen = HashSet::new();
    for answer in answers {
        let question = quiz
            .question(&answer.question_id)
            .ok_or_else(|| SubmissionError::UnknownQuestion(answer.question_id.clone()))?;
        if !question.has_option(&answer.selected_option_id) {
            return Err(SubmissionError::UnknownOption {
                question_id: answer.question_id.clone(),
                option_id: answer.selected_option_id.clone(),
            });
        }
        if !seen.insert(answer.question_id.as_str()) {
            return Err(SubmissionError::DuplicateAnswer(answer.question_id.clone()));
        }
    }
    if answers.len() != quiz.questions.len() {
        return Err(SubmissionError::Incomplete {
            answered: answers.len(),
            total: quiz.questions.len(),
        });
    }

    let ordered = quiz
        .questions
        .iter()
        .filter_map(|q| answers.iter().find(|a| a.question_id == q.id).cloned())
        .collect();
    Ok(SubmitQuizRequest { answers: ordered })
}

/// Score as displayed: two decimals.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuizPhase {
    Unanswered,
    Answering,
    Submitting,
    Result(QuizSubmissionResult),
    SubmissionError(String),
}

/// One learner's pass through a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz: QuizContent,
    answers: BTreeMap<String, String>,
    phase: QuizPhase,
    validation: Option<String>,
}

impl QuizSession {
    pub fn new(quiz: QuizContent) -> Self {
        Self {
            quiz: quiz.for_learner(),
            answers: BTreeMap::new(),
            phase: QuizPhase::Unanswered,
            validation: None,
        }
    }

    pub fn quiz(&self) -> &QuizContent {
        &self.quiz
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn selected(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Inline message for the submit button area: a local validation
    /// failure or the backend's submission error.
    pub fn message(&self) -> Option<&str> {
        match &self.phase {
            QuizPhase::SubmissionError(msg) => Some(msg),
            _ => self.validation.as_deref(),
        }
    }

    pub fn result(&self) -> Option<&QuizSubmissionResult> {
        match &self.phase {
            QuizPhase::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Records a single-select choice. Unknown ids are ignored and reported.
    pub fn select(&mut self, question_id: &str, option_id: &str) -> Result<(), SubmissionError> {
        let question = self
            .quiz
            .question(question_id)
            .ok_or_else(|| SubmissionError::UnknownQuestion(question_id.to_string()))?;
        if !question.has_option(option_id) {
            return Err(SubmissionError::UnknownOption {
                question_id: question_id.to_string(),
                option_id: option_id.to_string(),
            });
        }
        self.answers
            .insert(question_id.to_string(), option_id.to_string());
        if matches!(self.phase, QuizPhase::Unanswered | QuizPhase::SubmissionError(_)) {
            self.phase = QuizPhase::Answering;
        }
        Ok(())
    }

    /// Validates locally and, when the attempt may be sent, moves to
    /// `Submitting` and returns the request body. On failure the phase and
    /// answers are kept and the reason becomes the inline message.
    pub fn begin_submit(&mut self, token: Option<&str>) -> Result<SubmitQuizRequest, SubmissionError> {
        self.validation = None;
        let answers: Vec<UserAnswer> = self
            .answers
            .iter()
            .map(|(question_id, selected_option_id)| UserAnswer {
                question_id: question_id.clone(),
                selected_option_id: selected_option_id.clone(),
            })
            .collect();

        let prepared = prepare_submission(&self.quiz, &answers).and_then(|request| {
            if token.is_some() {
                Ok(request)
            } else {
                Err(SubmissionError::SignInRequired)
            }
        });
        match prepared {
            Ok(request) => {
                self.phase = QuizPhase::Submitting;
                Ok(request)
            }
            Err(err) => {
                self.validation = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn complete(&mut self, result: QuizSubmissionResult) {
        self.phase = QuizPhase::Result(result);
    }

    /// Submission failed; answers stay so the learner can resend.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = QuizPhase::SubmissionError(message.into());
    }

    /// Leaves the result view: answers and result are cleared, the quiz
    /// itself is kept.
    pub fn retake(&mut self) {
        self.answers.clear();
        self.validation = None;
        self.phase = QuizPhase::Answering;
    }
}
