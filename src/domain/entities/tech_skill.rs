use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point-in-time assertion that a professional holds a level in a
/// technology. Rows are never mutated in place: an edit marks the old row
/// `current = false` and inserts a replacement, so the full history stays
/// queryable for trend charts.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TechSkill {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub technology_id: Uuid,
    pub level_id: Uuid,
    pub current: bool,
    pub creation_date_time: DateTime<Utc>,
}

/// The joined skill record both the radar builder and the search engine
/// consume: owning professional, technology (with its category
/// memberships) and the resolved level weight.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SkillRow {
    pub professional_id: Uuid,
    pub technology_id: Uuid,
    pub technology_name: String,
    pub category_ids: Vec<Uuid>,
    pub level_weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTechSkill {
    pub technology_id: Uuid,
    pub level_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AddSkillsRequest {
    pub skills: Vec<NewTechSkill>,
}

#[derive(Debug, Deserialize)]
pub struct EditTechSkill {
    pub level_id: Uuid,
}

/// One historical observation of a technology's skill weight, for the
/// trend chart.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SkillHistoryPoint {
    pub creation_date_time: DateTime<Utc>,
    pub level_weight: f64,
}
