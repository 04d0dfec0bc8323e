use crate::dto::enrollment_dto::EnrollRequest;
use crate::error::Result;
use crate::models::enrollment::Enrollment;
use crate::models::study_plan::StudyPlan;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct EnrollmentService {
    api: ApiClient,
}

impl EnrollmentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn enroll(&self, course_id: i64, token: &str) -> Result<Enrollment> {
        let enrollment: Enrollment = self
            .api
            .post_json("/enrollments/", Some(token), &EnrollRequest { course_id })
            .await?;
        tracing::info!(course_id, enrollment_id = enrollment.id, "enrolled");
        Ok(enrollment)
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn mine(&self, token: &str) -> Result<Vec<Enrollment>> {
        self.api.get("/users/me/enrollments/", Some(token)).await
    }

    /// The current user's enrollment in one course, if any.
    pub async fn for_course(&self, course_id: i64, token: &str) -> Result<Option<Enrollment>> {
        let enrollments = self.mine(token).await?;
        Ok(enrollments.into_iter().find(|e| e.course_id == course_id))
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list_all(&self, token: &str) -> Result<Vec<Enrollment>> {
        self.api.get("/admin/enrollments/?limit=200", Some(token)).await
    }

    /// Marks a lesson complete, or incomplete when `completed` is false.
    #[tracing::instrument(skip(self, token))]
    pub async fn set_lesson_completed(
        &self,
        enrollment_id: i64,
        lesson_id: i64,
        completed: bool,
        token: &str,
    ) -> Result<Enrollment> {
        let action = if completed { "complete" } else { "incomplete" };
        self.api
            .post_empty(
                &format!("/enrollments/{}/lessons/{}/{}", enrollment_id, lesson_id, action),
                Some(token),
            )
            .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn study_plan(&self, token: &str) -> Result<StudyPlan> {
        self.api.get("/users/me/study-plan", Some(token)).await
    }
}
