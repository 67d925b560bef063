use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TechnologyCategory {
    pub id: Uuid,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewTechnologyCategory {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTechnologyCategory {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
}
