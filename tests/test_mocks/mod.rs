#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use techradar_backend::entities::{
    category::{NewTechnologyCategory, TechnologyCategory, UpdateTechnologyCategory},
    professional::{Professional, ProfessionalIdentity, SkillSummary},
    skill_level::{NewTechSkillLevel, TechSkillLevel},
    tech_radar::{AxisMember, NewTechRadar, ResolvedTechRadar, TechRadar},
    tech_skill::{NewTechSkill, SkillHistoryPoint, SkillRow, TechSkill},
    technology::{NewTechnology, Technology, UpdateTechnology},
};
use techradar_backend::errors::AppError;
use techradar_backend::repositories::{
    catalog::CatalogRepository, professional::ProfessionalRepository,
    tech_radar::TechRadarRepository, tech_skill::TechSkillRepository,
};

mock! {
    pub CatalogRepo {}

    #[async_trait]
    impl CatalogRepository for CatalogRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn list_technologies(&self) -> Result<Vec<Technology>, AppError>;
        async fn get_technology(&self, id: &Uuid) -> Result<Option<Technology>, AppError>;
        async fn create_technology(&self, tech: &NewTechnology) -> Result<Uuid, AppError>;
        async fn update_technology(&self, id: &Uuid, tech: &UpdateTechnology) -> Result<Technology, AppError>;
        async fn soft_delete_technology(&self, id: &Uuid) -> Result<(), AppError>;
        async fn technologies_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AxisMember>, AppError>;
        async fn categories_by_ids(&self, ids: &[Uuid]) -> Result<Vec<AxisMember>, AppError>;
        async fn list_categories(&self) -> Result<Vec<TechnologyCategory>, AppError>;
        async fn get_category(&self, id: &Uuid) -> Result<Option<TechnologyCategory>, AppError>;
        async fn create_category(&self, category: &NewTechnologyCategory) -> Result<Uuid, AppError>;
        async fn update_category(&self, id: &Uuid, category: &UpdateTechnologyCategory) -> Result<TechnologyCategory, AppError>;
        async fn soft_delete_category(&self, id: &Uuid) -> Result<(), AppError>;
        async fn list_skill_levels(&self) -> Result<Vec<TechSkillLevel>, AppError>;
        async fn get_skill_level(&self, id: &Uuid) -> Result<Option<TechSkillLevel>, AppError>;
        async fn create_skill_level(&self, level: &NewTechSkillLevel) -> Result<Uuid, AppError>;
        async fn soft_delete_skill_level(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    pub ProfessionalRepo {}

    #[async_trait]
    impl ProfessionalRepository for ProfessionalRepo {
        async fn count_active(&self) -> Result<i64, AppError>;
        async fn get_professional(&self, id: &Uuid) -> Result<Option<Professional>, AppError>;
        async fn list_identities(&self) -> Result<Vec<ProfessionalIdentity>, AppError>;
        async fn identities_by_ids(&self, ids: &[Uuid]) -> Result<Vec<ProfessionalIdentity>, AppError>;
        async fn current_skill_summaries(&self, professional_id: &Uuid) -> Result<Vec<SkillSummary>, AppError>;
    }
}

mock! {
    pub SkillRepo {}

    #[async_trait]
    impl TechSkillRepository for SkillRepo {
        async fn current_skills(&self) -> Result<Vec<SkillRow>, AppError>;
        async fn current_skills_for_professionals(&self, professional_ids: &[Uuid]) -> Result<Vec<SkillRow>, AppError>;
        async fn current_skills_for_technologies(&self, technology_ids: &[Uuid]) -> Result<Vec<SkillRow>, AppError>;
        async fn current_skill_technology_ids(&self, professional_id: &Uuid) -> Result<Vec<Uuid>, AppError>;
        async fn insert_skills(&self, professional_id: &Uuid, skills: &[NewTechSkill]) -> Result<(), AppError>;
        async fn supersede_skill(&self, id: &Uuid, level_id: &Uuid) -> Result<TechSkill, AppError>;
        async fn deactivate_skill(&self, id: &Uuid) -> Result<(), AppError>;
        async fn history_for_technology(&self, technology_id: &Uuid) -> Result<Vec<SkillHistoryPoint>, AppError>;
        async fn distinct_skilled_professionals(&self, technology_id: &Uuid) -> Result<i64, AppError>;
        async fn current_weights_for_technology(&self, technology_id: &Uuid) -> Result<Vec<f64>, AppError>;
    }
}

mock! {
    pub RadarRepo {}

    #[async_trait]
    impl TechRadarRepository for RadarRepo {
        async fn radar_by_id(&self, id: &Uuid) -> Result<Option<ResolvedTechRadar>, AppError>;
        async fn list_radars(&self) -> Result<Vec<TechRadar>, AppError>;
        async fn create_radar(&self, radar: &NewTechRadar) -> Result<Uuid, AppError>;
        async fn soft_delete_radar(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

pub fn member(id: Uuid, name: &str) -> AxisMember {
    AxisMember {
        id,
        name: name.to_string(),
    }
}

pub fn skill_row(
    professional_id: Uuid,
    technology_id: Uuid,
    technology_name: &str,
    category_ids: Vec<Uuid>,
    level_weight: f64,
) -> SkillRow {
    SkillRow {
        professional_id,
        technology_id,
        technology_name: technology_name.to_string(),
        category_ids,
        level_weight,
    }
}

pub fn identity(id: Uuid, name: &str, email: &str) -> ProfessionalIdentity {
    ProfessionalIdentity {
        id,
        name: name.to_string(),
        email: email.to_string(),
    }
}

/// In-memory skill store used to exercise the supersession state machine
/// without a database.
#[derive(Default)]
pub struct FakeSkillStore {
    rows: Mutex<Vec<TechSkill>>,
}

impl FakeSkillStore {
    pub fn new() -> Self {
        FakeSkillStore::default()
    }

    pub fn rows(&self) -> Vec<TechSkill> {
        self.rows.lock().unwrap().clone()
    }

    pub fn current_rows_for(&self, professional_id: Uuid, technology_id: Uuid) -> Vec<TechSkill> {
        self.rows()
            .into_iter()
            .filter(|row| {
                row.professional_id == professional_id
                    && row.technology_id == technology_id
                    && row.current
            })
            .collect()
    }
}

#[async_trait]
impl TechSkillRepository for FakeSkillStore {
    async fn current_skills(&self) -> Result<Vec<SkillRow>, AppError> {
        unimplemented!("not exercised through the fake store")
    }

    async fn current_skills_for_professionals(&self, _professional_ids: &[Uuid]) -> Result<Vec<SkillRow>, AppError> {
        unimplemented!("not exercised through the fake store")
    }

    async fn current_skills_for_technologies(&self, _technology_ids: &[Uuid]) -> Result<Vec<SkillRow>, AppError> {
        unimplemented!("not exercised through the fake store")
    }

    async fn current_skill_technology_ids(&self, professional_id: &Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.professional_id == *professional_id && row.current)
            .map(|row| row.technology_id)
            .collect();

        Ok(ids)
    }

    async fn insert_skills(&self, professional_id: &Uuid, skills: &[NewTechSkill]) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();

        for skill in skills {
            rows.push(TechSkill {
                id: Uuid::new_v4(),
                professional_id: *professional_id,
                technology_id: skill.technology_id,
                level_id: skill.level_id,
                current: true,
                creation_date_time: Utc::now(),
            });
        }

        Ok(())
    }

    async fn supersede_skill(&self, id: &Uuid, level_id: &Uuid) -> Result<TechSkill, AppError> {
        let mut rows = self.rows.lock().unwrap();

        let old = rows
            .iter_mut()
            .find(|row| row.id == *id && row.current)
            .ok_or_else(|| AppError::NotFound(format!("No current tech skill with id {id}")))?;

        old.current = false;
        let (professional_id, technology_id) = (old.professional_id, old.technology_id);

        let replacement = TechSkill {
            id: Uuid::new_v4(),
            professional_id,
            technology_id,
            level_id: *level_id,
            current: true,
            creation_date_time: Utc::now(),
        };
        rows.push(replacement.clone());

        Ok(replacement)
    }

    async fn deactivate_skill(&self, id: &Uuid) -> Result<(), AppError> {
        let mut rows = self.rows.lock().unwrap();

        let row = rows
            .iter_mut()
            .find(|row| row.id == *id && row.current)
            .ok_or_else(|| AppError::NotFound(format!("No current tech skill with id {id}")))?;

        row.current = false;

        Ok(())
    }

    async fn history_for_technology(&self, _technology_id: &Uuid) -> Result<Vec<SkillHistoryPoint>, AppError> {
        unimplemented!("not exercised through the fake store")
    }

    async fn distinct_skilled_professionals(&self, _technology_id: &Uuid) -> Result<i64, AppError> {
        unimplemented!("not exercised through the fake store")
    }

    async fn current_weights_for_technology(&self, _technology_id: &Uuid) -> Result<Vec<f64>, AppError> {
        unimplemented!("not exercised through the fake store")
    }
}
