use crate::dto::course_dto::{CoursePayload, ModulePayload};
use crate::error::Result;
use crate::models::course::Course;
use crate::models::module::CourseModule;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct CourseService {
    api: ApiClient,
}

impl CourseService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list(&self, token: Option<&str>) -> Result<Vec<Course>> {
        self.api.get("/courses/?limit=100", token).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get(&self, id: i64, token: Option<&str>) -> Result<Course> {
        self.api.get(&format!("/courses/{}", id), token).await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn create(&self, token: &str, payload: &CoursePayload) -> Result<Course> {
        let course: Course = self.api.post_json("/courses/", Some(token), payload).await?;
        tracing::info!(course_id = course.id, "course created");
        Ok(course)
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn update(&self, id: i64, token: &str, payload: &CoursePayload) -> Result<Course> {
        let course = self
            .api
            .put_json(&format!("/courses/{}", id), Some(token), payload)
            .await?;
        tracing::info!(course_id = id, "course updated");
        Ok(course)
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete(&self, id: i64, token: &str) -> Result<()> {
        self.api.delete(&format!("/courses/{}", id), Some(token)).await?;
        tracing::info!(course_id = id, "course deleted");
        Ok(())
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list_modules(&self, course_id: i64, token: Option<&str>) -> Result<Vec<CourseModule>> {
        self.api
            .get(&format!("/courses/{}/modules/", course_id), token)
            .await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn create_module(
        &self,
        course_id: i64,
        token: &str,
        payload: &ModulePayload,
    ) -> Result<CourseModule> {
        let module: CourseModule = self
            .api
            .post_json(&format!("/courses/{}/modules/", course_id), Some(token), payload)
            .await?;
        tracing::info!(course_id, module_id = module.id, "module created");
        Ok(module)
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn set_skill(&self, course_id: i64, skill_id: i64, attach: bool, token: &str) -> Result<()> {
        let path = format!("/admin/courses/{}/skills/{}", course_id, skill_id);
        if attach {
            self.api.post_discard(&path, Some(token)).await?;
        } else {
            self.api.delete(&path, Some(token)).await?;
        }
        tracing::info!(course_id, skill_id, attach, "course skill toggled");
        Ok(())
    }
}
