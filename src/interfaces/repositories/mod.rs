pub mod sqlx_repo;
pub mod catalog;
pub mod professional;
pub mod tech_skill;
pub mod tech_radar;
