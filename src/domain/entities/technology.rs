use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A catalog technology with its category memberships aggregated in.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Technology {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category_ids: Vec<Uuid>,
    pub active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewTechnology {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTechnology {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    pub description: Option<String>,

    #[serde(default)]
    pub category_ids: Vec<Uuid>,
}

/// Share of active professionals holding a current skill in a technology.
#[derive(Debug, Serialize)]
pub struct TechPercentageStats {
    pub total_professionals: i64,
    pub skilled_professionals: i64,
    pub skill_percentage: f64,
}

/// Company-wide average level for a technology, with the closest
/// configured level name for display.
#[derive(Debug, Serialize)]
pub struct TechLevelStats {
    pub weight: f64,
    pub max_weight: f64,
    pub name: String,
}
