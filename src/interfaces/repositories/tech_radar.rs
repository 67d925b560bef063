use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::tech_radar::{AxisMember, NewTechRadar, ResolvedTechRadar, TechRadar},
    errors::AppError,
    repositories::sqlx_repo::SqlxTechRadarRepo,
};

#[async_trait]
pub trait TechRadarRepository: Send + Sync {
    /// A saved radar with member sets resolved to active rows, or `None`
    /// if the radar is missing or inactive.
    async fn radar_by_id(&self, id: &Uuid) -> Result<Option<ResolvedTechRadar>, AppError>;

    async fn list_radars(&self) -> Result<Vec<TechRadar>, AppError>;

    async fn create_radar(&self, radar: &NewTechRadar) -> Result<Uuid, AppError>;

    async fn soft_delete_radar(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxTechRadarRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxTechRadarRepo { pool }
    }
}

#[async_trait]
impl TechRadarRepository for SqlxTechRadarRepo {
    async fn radar_by_id(&self, id: &Uuid) -> Result<Option<ResolvedTechRadar>, AppError> {
        let radar = sqlx::query_as::<_, TechRadar>(
            r#"
            SELECT id, name, owner_id, angular_axis, radial_axis, active
            FROM tech_radars
            WHERE id = $1 AND active
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(radar) = radar else {
            return Ok(None);
        };

        let technologies = sqlx::query_as::<_, AxisMember>(
            r#"
            SELECT t.id, t.name
            FROM tech_radar_technologies rt
            JOIN technologies t ON t.id = rt.technology_id
            WHERE rt.radar_id = $1 AND t.active
            ORDER BY t.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let tech_categories = sqlx::query_as::<_, AxisMember>(
            r#"
            SELECT c.id, c.name
            FROM tech_radar_categories rc
            JOIN technology_categories c ON c.id = rc.category_id
            WHERE rc.radar_id = $1 AND c.active
            ORDER BY c.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let professional_ids = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT p.id
            FROM tech_radar_professionals rp
            JOIN professionals p ON p.id = rp.professional_id
            WHERE rp.radar_id = $1 AND p.active
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(ResolvedTechRadar {
            id: radar.id,
            name: radar.name,
            angular_axis: radar.angular_axis,
            radial_axis: radar.radial_axis,
            technologies,
            tech_categories,
            professional_ids,
        }))
    }

    async fn list_radars(&self) -> Result<Vec<TechRadar>, AppError> {
        let radars = sqlx::query_as::<_, TechRadar>(
            r#"
            SELECT id, name, owner_id, angular_axis, radial_axis, active
            FROM tech_radars
            WHERE active
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(radars)
    }

    async fn create_radar(&self, radar: &NewTechRadar) -> Result<Uuid, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO tech_radars (name, owner_id, angular_axis, radial_axis)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&radar.name)
        .bind(radar.owner_id)
        .bind(radar.angular_axis_type)
        .bind(radar.radial_axis_type)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO tech_radar_technologies (radar_id, technology_id)
            SELECT $1, unnest($2::uuid[])
            "#,
        )
        .bind(id)
        .bind(&radar.technologies)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO tech_radar_categories (radar_id, category_id)
            SELECT $1, unnest($2::uuid[])
            "#,
        )
        .bind(id)
        .bind(&radar.tech_categories)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO tech_radar_professionals (radar_id, professional_id)
            SELECT $1, unnest($2::uuid[])
            "#,
        )
        .bind(id)
        .bind(&radar.professionals)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(id)
    }

    async fn soft_delete_radar(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE tech_radars SET active = FALSE WHERE id = $1 AND active",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No tech radar with id {id}")));
        }

        Ok(())
    }
}
