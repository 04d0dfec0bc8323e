use crate::dto::course_dto::ModulePayload;
use crate::dto::lesson_dto::LessonPayload;
use crate::error::Result;
use crate::models::lesson::Lesson;
use crate::models::module::CourseModule;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct ModuleService {
    api: ApiClient,
}

impl ModuleService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Module with its lessons and owning course id.
    #[tracing::instrument(skip(self, token))]
    pub async fn get(&self, id: i64, token: Option<&str>) -> Result<CourseModule> {
        self.api.get(&format!("/modules/{}", id), token).await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn update(&self, id: i64, token: &str, payload: &ModulePayload) -> Result<CourseModule> {
        let module = self
            .api
            .put_json(&format!("/modules/{}", id), Some(token), payload)
            .await?;
        tracing::info!(module_id = id, "module updated");
        Ok(module)
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete(&self, id: i64, token: &str) -> Result<()> {
        self.api.delete(&format!("/modules/{}", id), Some(token)).await?;
        tracing::info!(module_id = id, "module deleted");
        Ok(())
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn create_lesson(&self, module_id: i64, token: &str, payload: &LessonPayload) -> Result<Lesson> {
        let lesson: Lesson = self
            .api
            .post_json(&format!("/modules/{}/lessons/", module_id), Some(token), payload)
            .await?;
        tracing::info!(module_id, lesson_id = lesson.id, "lesson created");
        Ok(lesson)
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn set_skill(&self, module_id: i64, skill_id: i64, attach: bool, token: &str) -> Result<()> {
        let path = format!("/admin/modules/{}/skills/{}", module_id, skill_id);
        if attach {
            self.api.post_discard(&path, Some(token)).await?;
        } else {
            self.api.delete(&path, Some(token)).await?;
        }
        tracing::info!(module_id, skill_id, attach, "module skill toggled");
        Ok(())
    }
}
