use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Professional {
    pub id: Uuid,
    pub user_id: Uuid,
    pub active: bool,
}

/// Display identity of a professional, resolved from the linked user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProfessionalIdentity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// A professional with their current skills, as shown on the admin pages.
#[derive(Debug, Serialize)]
pub struct ProfessionalProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub skills: Vec<SkillSummary>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct SkillSummary {
    pub id: Uuid,
    pub technology_id: Uuid,
    pub technology_name: String,
    pub level_id: Uuid,
    pub level_name: String,
    pub level_weight: f64,
    pub creation_date_time: DateTime<Utc>,
}

/// Comparison applied between a current skill's weight and a criterion
/// threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelOperator {
    Gte,
    Lte,
    Eq,
}

impl LevelOperator {
    pub fn matches(&self, weight: f64, threshold: f64) -> bool {
        match self {
            LevelOperator::Gte => weight >= threshold,
            LevelOperator::Lte => weight <= threshold,
            LevelOperator::Eq => weight == threshold,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SkillCriterion {
    pub technology_id: Uuid,

    #[validate(range(min = 0.0, message = "Level weight must be non-negative"))]
    pub level_weight: f64,

    pub level_operator: LevelOperator,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(nested)]
    pub criteria: Vec<SkillCriterion>,
}
