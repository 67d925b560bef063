use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An admin-configured skill level. The weight is the numeric ordering
/// value used for both search comparisons and radar averaging.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TechSkillLevel {
    pub id: Uuid,
    pub name: String,
    pub weight: f64,
    pub active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewTechSkillLevel {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Weight must be non-negative"))]
    pub weight: f64,
}
