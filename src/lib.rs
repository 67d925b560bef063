mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::db;

use repositories::sqlx_repo::{
    SqlxCatalogRepo, SqlxProfessionalRepo, SqlxTechRadarRepo, SqlxTechSkillRepo,
};
use use_cases::{
    catalog::CatalogHandler, radar::RadarHandler, search::SearchHandler, skill::SkillHandler,
    stats::StatsHandler,
};

pub type AppRadarHandler = RadarHandler<SqlxCatalogRepo, SqlxTechSkillRepo, SqlxTechRadarRepo>;
pub type AppSearchHandler = SearchHandler<SqlxTechSkillRepo, SqlxProfessionalRepo>;
pub type AppSkillHandler = SkillHandler<SqlxTechSkillRepo, SqlxProfessionalRepo>;
pub type AppStatsHandler = StatsHandler<SqlxTechSkillRepo, SqlxProfessionalRepo, SqlxCatalogRepo>;
pub type AppCatalogHandler = CatalogHandler<SqlxCatalogRepo, SqlxProfessionalRepo>;

pub struct AppState {
    pub radar_handler: AppRadarHandler,
    pub search_handler: AppSearchHandler,
    pub skill_handler: AppSkillHandler,
    pub stats_handler: AppStatsHandler,
    pub catalog_handler: AppCatalogHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let catalog_repo = SqlxCatalogRepo::new(pool.clone());
        let professional_repo = SqlxProfessionalRepo::new(pool.clone());
        let skill_repo = SqlxTechSkillRepo::new(pool.clone());
        let radar_repo = SqlxTechRadarRepo::new(pool);

        AppState {
            radar_handler: RadarHandler::new(
                catalog_repo.clone(),
                skill_repo.clone(),
                radar_repo,
            ),
            search_handler: SearchHandler::new(skill_repo.clone(), professional_repo.clone()),
            skill_handler: SkillHandler::new(skill_repo.clone(), professional_repo.clone()),
            stats_handler: StatsHandler::new(
                skill_repo,
                professional_repo.clone(),
                catalog_repo.clone(),
            ),
            catalog_handler: CatalogHandler::new(catalog_repo, professional_repo),
        }
    }
}
