use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::professional::{Professional, ProfessionalIdentity, SkillSummary},
    errors::AppError,
    repositories::sqlx_repo::SqlxProfessionalRepo,
};

#[async_trait]
pub trait ProfessionalRepository: Send + Sync {
    async fn count_active(&self) -> Result<i64, AppError>;

    async fn get_professional(&self, id: &Uuid) -> Result<Option<Professional>, AppError>;

    /// Display identities of all active professionals.
    async fn list_identities(&self) -> Result<Vec<ProfessionalIdentity>, AppError>;

    /// Display identities for the given ids, active professionals only.
    async fn identities_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProfessionalIdentity>, AppError>;

    /// A professional's current skills with technology and level resolved.
    async fn current_skill_summaries(&self, professional_id: &Uuid) -> Result<Vec<SkillSummary>, AppError>;
}

impl SqlxProfessionalRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfessionalRepo { pool }
    }
}

#[async_trait]
impl ProfessionalRepository for SqlxProfessionalRepo {
    async fn count_active(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM professionals WHERE active",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn get_professional(&self, id: &Uuid) -> Result<Option<Professional>, AppError> {
        let professional = sqlx::query_as::<_, Professional>(
            "SELECT id, user_id, active FROM professionals WHERE id = $1 AND active",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(professional)
    }

    async fn list_identities(&self) -> Result<Vec<ProfessionalIdentity>, AppError> {
        let identities = sqlx::query_as::<_, ProfessionalIdentity>(
            r#"
            SELECT p.id, u.name, u.email
            FROM professionals p
            JOIN users u ON u.id = p.user_id
            WHERE p.active
            ORDER BY u.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(identities)
    }

    async fn identities_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProfessionalIdentity>, AppError> {
        let identities = sqlx::query_as::<_, ProfessionalIdentity>(
            r#"
            SELECT p.id, u.name, u.email
            FROM professionals p
            JOIN users u ON u.id = p.user_id
            WHERE p.id = ANY($1) AND p.active
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(identities)
    }

    async fn current_skill_summaries(&self, professional_id: &Uuid) -> Result<Vec<SkillSummary>, AppError> {
        let skills = sqlx::query_as::<_, SkillSummary>(
            r#"
            SELECT ts.id,
                   ts.technology_id,
                   t.name AS technology_name,
                   ts.level_id,
                   l.name AS level_name,
                   l.weight AS level_weight,
                   ts.creation_date_time
            FROM tech_skills ts
            JOIN technologies t ON t.id = ts.technology_id
            JOIN tech_skill_levels l ON l.id = ts.level_id
            WHERE ts.professional_id = $1 AND ts.current
            ORDER BY t.name
            "#,
        )
        .bind(professional_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }
}
