use crate::dto::lesson_dto::LessonPayload;
use crate::error::Result;
use crate::models::lesson::Lesson;
use crate::models::quiz::{QuizSubmissionResult, SubmitQuizRequest};
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct LessonService {
    api: ApiClient,
}

impl LessonService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get(&self, id: i64, token: Option<&str>) -> Result<Lesson> {
        self.api.get(&format!("/lessons/{}", id), token).await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn update(&self, id: i64, token: &str, payload: &LessonPayload) -> Result<Lesson> {
        let lesson = self
            .api
            .put_json(&format!("/lessons/{}", id), Some(token), payload)
            .await?;
        tracing::info!(lesson_id = id, content_type = %payload.content_type, "lesson updated");
        Ok(lesson)
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete(&self, id: i64, token: &str) -> Result<()> {
        self.api.delete(&format!("/lessons/{}", id), Some(token)).await?;
        tracing::info!(lesson_id = id, "lesson deleted");
        Ok(())
    }

    /// Scoring happens on the backend; the result is only displayed.
    #[tracing::instrument(skip(self, token, request), fields(answers = request.answers.len()))]
    pub async fn submit_quiz(
        &self,
        id: i64,
        token: &str,
        request: &SubmitQuizRequest,
    ) -> Result<QuizSubmissionResult> {
        let result: QuizSubmissionResult = self
            .api
            .post_json(&format!("/lessons/{}/submit_quiz", id), Some(token), request)
            .await?;
        tracing::info!(lesson_id = id, score = result.overall_score, "quiz submitted");
        Ok(result)
    }
}
