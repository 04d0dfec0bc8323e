use crate::dto::skill_dto::SkillPayload;
use crate::error::Result;
use crate::models::skill::Skill;
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct SkillService {
    api: ApiClient,
}

impl SkillService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn list(&self, token: &str) -> Result<Vec<Skill>> {
        self.api.get("/admin/skills/?limit=100", Some(token)).await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn get(&self, id: i64, token: &str) -> Result<Skill> {
        self.api.get(&format!("/admin/skills/{}", id), Some(token)).await
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn create(&self, token: &str, payload: &SkillPayload) -> Result<Skill> {
        let skill: Skill = self.api.post_json("/admin/skills/", Some(token), payload).await?;
        tracing::info!(skill_id = skill.id, "skill created");
        Ok(skill)
    }

    #[tracing::instrument(skip(self, token, payload))]
    pub async fn update(&self, id: i64, token: &str, payload: &SkillPayload) -> Result<Skill> {
        let skill = self
            .api
            .put_json(&format!("/admin/skills/{}", id), Some(token), payload)
            .await?;
        tracing::info!(skill_id = id, "skill updated");
        Ok(skill)
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete(&self, id: i64, token: &str) -> Result<()> {
        self.api.delete(&format!("/admin/skills/{}", id), Some(token)).await?;
        tracing::info!(skill_id = id, "skill deleted");
        Ok(())
    }
}
