use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::{
        category::{NewTechnologyCategory, TechnologyCategory, UpdateTechnologyCategory},
        skill_level::{NewTechSkillLevel, TechSkillLevel},
        tech_radar::AxisMember,
        technology::{NewTechnology, Technology, UpdateTechnology},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxCatalogRepo,
};

/// Catalog reads and writes. Every "list" method returns active rows
/// only, so soft-delete filtering never leaks into the use cases.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn check_connection(&self) -> Result<(), AppError>;

    async fn list_technologies(&self) -> Result<Vec<Technology>, AppError>;
    async fn get_technology(&self, id: &Uuid) -> Result<Option<Technology>, AppError>;
    async fn create_technology(&self, tech: &NewTechnology) -> Result<Uuid, AppError>;
    async fn update_technology(&self, id: &Uuid, tech: &UpdateTechnology) -> Result<Technology, AppError>;
    async fn soft_delete_technology(&self, id: &Uuid) -> Result<(), AppError>;

    /// Active technologies among `ids`, unordered.
    async fn technologies_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AxisMember>, AppError>;

    /// Active categories among `ids`, unordered.
    async fn categories_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AxisMember>, AppError>;

    async fn list_categories(&self) -> Result<Vec<TechnologyCategory>, AppError>;
    async fn get_category(&self, id: &Uuid) -> Result<Option<TechnologyCategory>, AppError>;
    async fn create_category(&self, category: &NewTechnologyCategory) -> Result<Uuid, AppError>;
    async fn update_category(&self, id: &Uuid, category: &UpdateTechnologyCategory) -> Result<TechnologyCategory, AppError>;
    async fn soft_delete_category(&self, id: &Uuid) -> Result<(), AppError>;

    async fn list_skill_levels(&self) -> Result<Vec<TechSkillLevel>, AppError>;
    async fn get_skill_level(&self, id: &Uuid) -> Result<Option<TechSkillLevel>, AppError>;
    async fn create_skill_level(&self, level: &NewTechSkillLevel) -> Result<Uuid, AppError>;
    async fn soft_delete_skill_level(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxCatalogRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxCatalogRepo { pool }
    }
}

const TECHNOLOGY_SELECT: &str = r#"
    SELECT t.id,
           t.name,
           t.description,
           COALESCE(array_agg(m.category_id) FILTER (WHERE m.category_id IS NOT NULL), '{}') AS category_ids,
           t.active
    FROM technologies t
    LEFT JOIN technology_category_memberships m ON m.technology_id = t.id
"#;

#[async_trait]
impl CatalogRepository for SqlxCatalogRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>, AppError> {
        let technologies = sqlx::query_as::<_, Technology>(&format!(
            "{TECHNOLOGY_SELECT} WHERE t.active GROUP BY t.id ORDER BY t.name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(technologies)
    }

    async fn get_technology(&self, id: &Uuid) -> Result<Option<Technology>, AppError> {
        let technology = sqlx::query_as::<_, Technology>(&format!(
            "{TECHNOLOGY_SELECT} WHERE t.id = $1 AND t.active GROUP BY t.id"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(technology)
    }

    async fn create_technology(&self, tech: &NewTechnology) -> Result<Uuid, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO technologies (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&tech.name)
        .bind(&tech.description)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO technology_category_memberships (technology_id, category_id)
            SELECT $1, unnest($2::uuid[])
            "#,
        )
        .bind(id)
        .bind(&tech.category_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(id)
    }

    async fn update_technology(&self, id: &Uuid, tech: &UpdateTechnology) -> Result<Technology, AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE technologies SET name = $2, description = $3 WHERE id = $1 AND active",
        )
        .bind(id)
        .bind(&tech.name)
        .bind(&tech.description)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No technology with id {id}")));
        }

        sqlx::query("DELETE FROM technology_category_memberships WHERE technology_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO technology_category_memberships (technology_id, category_id)
            SELECT $1, unnest($2::uuid[])
            "#,
        )
        .bind(id)
        .bind(&tech.category_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_technology(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No technology with id {id}")))
    }

    async fn soft_delete_technology(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE technologies SET active = FALSE WHERE id = $1 AND active")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No technology with id {id}")));
        }

        Ok(())
    }

    async fn technologies_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AxisMember>, AppError> {
        let members = sqlx::query_as::<_, AxisMember>(
            "SELECT id, name FROM technologies WHERE id = ANY($1) AND active",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn categories_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AxisMember>, AppError> {
        let members = sqlx::query_as::<_, AxisMember>(
            "SELECT id, name FROM technology_categories WHERE id = ANY($1) AND active",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn list_categories(&self) -> Result<Vec<TechnologyCategory>, AppError> {
        let categories = sqlx::query_as::<_, TechnologyCategory>(
            "SELECT id, name, active FROM technology_categories WHERE active ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn get_category(&self, id: &Uuid) -> Result<Option<TechnologyCategory>, AppError> {
        let category = sqlx::query_as::<_, TechnologyCategory>(
            "SELECT id, name, active FROM technology_categories WHERE id = $1 AND active",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn create_category(&self, category: &NewTechnologyCategory) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO technology_categories (name) VALUES ($1) RETURNING id",
        )
        .bind(&category.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update_category(&self, id: &Uuid, category: &UpdateTechnologyCategory) -> Result<TechnologyCategory, AppError> {
        let updated = sqlx::query_as::<_, TechnologyCategory>(
            r#"
            UPDATE technology_categories SET name = $2
            WHERE id = $1 AND active
            RETURNING id, name, active
            "#,
        )
        .bind(id)
        .bind(&category.name)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| AppError::NotFound(format!("No technology category with id {id}")))
    }

    async fn soft_delete_category(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE technology_categories SET active = FALSE WHERE id = $1 AND active",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No technology category with id {id}")));
        }

        Ok(())
    }

    async fn list_skill_levels(&self) -> Result<Vec<TechSkillLevel>, AppError> {
        let levels = sqlx::query_as::<_, TechSkillLevel>(
            "SELECT id, name, weight, active FROM tech_skill_levels WHERE active ORDER BY weight",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(levels)
    }

    async fn get_skill_level(&self, id: &Uuid) -> Result<Option<TechSkillLevel>, AppError> {
        let level = sqlx::query_as::<_, TechSkillLevel>(
            "SELECT id, name, weight, active FROM tech_skill_levels WHERE id = $1 AND active",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(level)
    }

    async fn create_skill_level(&self, level: &NewTechSkillLevel) -> Result<Uuid, AppError> {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO tech_skill_levels (name, weight) VALUES ($1, $2) RETURNING id",
        )
        .bind(&level.name)
        .bind(level.weight)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn soft_delete_skill_level(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE tech_skill_levels SET active = FALSE WHERE id = $1 AND active",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No skill level with id {id}")));
        }

        Ok(())
    }
}
