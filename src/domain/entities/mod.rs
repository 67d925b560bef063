pub mod technology;
pub mod category;
pub mod skill_level;
pub mod professional;
pub mod tech_skill;
pub mod tech_radar;
pub mod chart;
