use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::tech_skill::{NewTechSkill, SkillHistoryPoint, SkillRow, TechSkill},
    errors::AppError,
    repositories::sqlx_repo::SqlxTechSkillRepo,
};

/// Skill-record access. All `current_skills*` methods return the joined
/// representation the radar builder and search engine consume.
#[async_trait]
pub trait TechSkillRepository: Send + Sync {
    async fn current_skills(&self) -> Result<Vec<SkillRow>, AppError>;

    async fn current_skills_for_professionals(&self, professional_ids: &[Uuid]) -> Result<Vec<SkillRow>, AppError>;

    async fn current_skills_for_technologies(&self, technology_ids: &[Uuid]) -> Result<Vec<SkillRow>, AppError>;

    /// Technologies a professional currently has a skill in.
    async fn current_skill_technology_ids(&self, professional_id: &Uuid) -> Result<Vec<Uuid>, AppError>;

    async fn insert_skills(&self, professional_id: &Uuid, skills: &[NewTechSkill]) -> Result<(), AppError>;

    /// Atomically marks the current row superseded and inserts its
    /// replacement, so readers never observe zero or two current rows for
    /// a (professional, technology) pair. Returns the new current row.
    async fn supersede_skill(&self, id: &Uuid, level_id: &Uuid) -> Result<TechSkill, AppError>;

    /// Soft-deactivates a current skill, keeping the row for history.
    async fn deactivate_skill(&self, id: &Uuid) -> Result<(), AppError>;

    /// Full history (current and superseded) for a technology, oldest
    /// first.
    async fn history_for_technology(&self, technology_id: &Uuid) -> Result<Vec<SkillHistoryPoint>, AppError>;

    /// Number of distinct professionals with a current skill in the
    /// technology.
    async fn distinct_skilled_professionals(&self, technology_id: &Uuid) -> Result<i64, AppError>;

    /// Current skill weights for a technology, one per professional.
    async fn current_weights_for_technology(&self, technology_id: &Uuid) -> Result<Vec<f64>, AppError>;
}

impl SqlxTechSkillRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxTechSkillRepo { pool }
    }
}

const SKILL_ROW_SELECT: &str = r#"
    SELECT ts.professional_id,
           ts.technology_id,
           t.name AS technology_name,
           COALESCE(array_agg(m.category_id) FILTER (WHERE m.category_id IS NOT NULL), '{}') AS category_ids,
           l.weight AS level_weight
    FROM tech_skills ts
    JOIN technologies t ON t.id = ts.technology_id
    JOIN tech_skill_levels l ON l.id = ts.level_id
    LEFT JOIN technology_category_memberships m ON m.technology_id = ts.technology_id
"#;

const SKILL_ROW_GROUP: &str =
    "GROUP BY ts.id, ts.professional_id, ts.technology_id, t.name, l.weight, ts.creation_date_time ORDER BY ts.creation_date_time";

#[async_trait]
impl TechSkillRepository for SqlxTechSkillRepo {
    async fn current_skills(&self) -> Result<Vec<SkillRow>, AppError> {
        let rows = sqlx::query_as::<_, SkillRow>(&format!(
            "{SKILL_ROW_SELECT} WHERE ts.current {SKILL_ROW_GROUP}"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn current_skills_for_professionals(&self, professional_ids: &[Uuid]) -> Result<Vec<SkillRow>, AppError> {
        let rows = sqlx::query_as::<_, SkillRow>(&format!(
            "{SKILL_ROW_SELECT} WHERE ts.current AND ts.professional_id = ANY($1) {SKILL_ROW_GROUP}"
        ))
        .bind(professional_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn current_skills_for_technologies(&self, technology_ids: &[Uuid]) -> Result<Vec<SkillRow>, AppError> {
        let rows = sqlx::query_as::<_, SkillRow>(&format!(
            "{SKILL_ROW_SELECT} WHERE ts.current AND ts.technology_id = ANY($1) {SKILL_ROW_GROUP}"
        ))
        .bind(technology_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn current_skill_technology_ids(&self, professional_id: &Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT technology_id FROM tech_skills WHERE professional_id = $1 AND current",
        )
        .bind(professional_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    async fn insert_skills(&self, professional_id: &Uuid, skills: &[NewTechSkill]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        for skill in skills {
            sqlx::query(
                r#"
                INSERT INTO tech_skills (professional_id, technology_id, level_id, current)
                VALUES ($1, $2, $3, TRUE)
                "#,
            )
            .bind(professional_id)
            .bind(skill.technology_id)
            .bind(skill.level_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    async fn supersede_skill(&self, id: &Uuid, level_id: &Uuid) -> Result<TechSkill, AppError> {
        let mut tx = self.pool.begin().await?;

        let superseded = sqlx::query_as::<_, TechSkill>(
            r#"
            UPDATE tech_skills SET current = FALSE
            WHERE id = $1 AND current
            RETURNING id, professional_id, technology_id, level_id, current, creation_date_time
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No current tech skill with id {id}")))?;

        let replacement = sqlx::query_as::<_, TechSkill>(
            r#"
            INSERT INTO tech_skills (professional_id, technology_id, level_id, current)
            VALUES ($1, $2, $3, TRUE)
            RETURNING id, professional_id, technology_id, level_id, current, creation_date_time
            "#,
        )
        .bind(superseded.professional_id)
        .bind(superseded.technology_id)
        .bind(level_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(replacement)
    }

    async fn deactivate_skill(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE tech_skills SET current = FALSE WHERE id = $1 AND current",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No current tech skill with id {id}")));
        }

        Ok(())
    }

    async fn history_for_technology(&self, technology_id: &Uuid) -> Result<Vec<SkillHistoryPoint>, AppError> {
        let points = sqlx::query_as::<_, SkillHistoryPoint>(
            r#"
            SELECT ts.creation_date_time, l.weight AS level_weight
            FROM tech_skills ts
            JOIN tech_skill_levels l ON l.id = ts.level_id
            WHERE ts.technology_id = $1
            ORDER BY ts.creation_date_time
            "#,
        )
        .bind(technology_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(points)
    }

    async fn distinct_skilled_professionals(&self, technology_id: &Uuid) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(DISTINCT professional_id)
            FROM tech_skills
            WHERE technology_id = $1 AND current
            "#,
        )
        .bind(technology_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn current_weights_for_technology(&self, technology_id: &Uuid) -> Result<Vec<f64>, AppError> {
        let weights = sqlx::query_scalar::<_, f64>(
            r#"
            SELECT l.weight
            FROM tech_skills ts
            JOIN tech_skill_levels l ON l.id = ts.level_id
            WHERE ts.technology_id = $1 AND ts.current
            "#,
        )
        .bind(technology_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(weights)
    }
}
