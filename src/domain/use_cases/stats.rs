use uuid::Uuid;

use crate::{
    entities::{
        chart::{TrendChart, TrendPoint, TrendSeries},
        skill_level::TechSkillLevel,
        technology::{TechLevelStats, TechPercentageStats},
    },
    errors::AppError,
    repositories::{
        catalog::CatalogRepository, professional::ProfessionalRepository,
        tech_skill::TechSkillRepository,
    },
};

/// The active level whose weight is closest to `weight`. Equidistant
/// levels resolve to the higher-weight one.
pub fn nearest_level(levels: &[TechSkillLevel], weight: f64) -> Option<&TechSkillLevel> {
    levels.iter().reduce(|acc, item| {
        let acc_diff = (acc.weight - weight).abs();
        let item_diff = (item.weight - weight).abs();

        if acc_diff == item_diff {
            if acc.weight >= item.weight { acc } else { item }
        } else if acc_diff > item_diff {
            item
        } else {
            acc
        }
    })
}

pub struct StatsHandler<S, P, C>
where
    S: TechSkillRepository,
    P: ProfessionalRepository,
    C: CatalogRepository,
{
    pub skill_repo: S,
    pub professional_repo: P,
    pub catalog_repo: C,
}

impl<S, P, C> StatsHandler<S, P, C>
where
    S: TechSkillRepository,
    P: ProfessionalRepository,
    C: CatalogRepository,
{
    pub fn new(skill_repo: S, professional_repo: P, catalog_repo: C) -> Self {
        StatsHandler {
            skill_repo,
            professional_repo,
            catalog_repo,
        }
    }

    /// How many active professionals hold a current skill in the
    /// technology, as a share of all active professionals.
    pub async fn technology_percentage(&self, technology_id: &Uuid) -> Result<TechPercentageStats, AppError> {
        self.require_technology(technology_id).await?;

        let skilled = self
            .skill_repo
            .distinct_skilled_professionals(technology_id)
            .await?;
        let total = self.professional_repo.count_active().await?;

        let skill_percentage = if total == 0 {
            0.0
        } else {
            (skilled as f64 / total as f64) * 100.0
        };

        Ok(TechPercentageStats {
            total_professionals: total,
            skilled_professionals: skilled,
            skill_percentage,
        })
    }

    /// Company-wide average level for the technology, labeled with the
    /// nearest configured level name.
    pub async fn technology_level(&self, technology_id: &Uuid) -> Result<TechLevelStats, AppError> {
        self.require_technology(technology_id).await?;

        let weights = self
            .skill_repo
            .current_weights_for_technology(technology_id)
            .await?;

        let weight = if weights.is_empty() {
            0.0
        } else {
            weights.iter().sum::<f64>() / weights.len() as f64
        };

        let levels = self.catalog_repo.list_skill_levels().await?;

        let name = nearest_level(&levels, weight)
            .map(|level| level.name.clone())
            .ok_or_else(|| AppError::NotFound("No active skill levels configured".to_string()))?;

        let max_weight = levels.iter().map(|level| level.weight).fold(0.0, f64::max);

        Ok(TechLevelStats {
            weight,
            max_weight,
            name,
        })
    }

    /// Line-chart data over the technology's full skill history, oldest
    /// observation first.
    pub async fn technology_trend(&self, technology_id: &Uuid) -> Result<TrendChart, AppError> {
        let technology = self
            .catalog_repo
            .get_technology(technology_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No technology with id {technology_id}")))?;

        let history = self
            .skill_repo
            .history_for_technology(technology_id)
            .await?;

        let data = history
            .into_iter()
            .map(|point| TrendPoint {
                x: point.creation_date_time,
                y: point.level_weight,
            })
            .collect();

        Ok(TrendChart {
            datasets: vec![TrendSeries {
                label: technology.name,
                data,
                fill: false,
            }],
        })
    }

    async fn require_technology(&self, technology_id: &Uuid) -> Result<(), AppError> {
        self.catalog_repo
            .get_technology(technology_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("No technology with id {technology_id}")))
    }
}
