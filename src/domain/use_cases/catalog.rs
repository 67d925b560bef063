use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        category::{NewTechnologyCategory, TechnologyCategory, UpdateTechnologyCategory},
        professional::{ProfessionalIdentity, ProfessionalProfile},
        skill_level::{NewTechSkillLevel, TechSkillLevel},
        technology::{NewTechnology, Technology, UpdateTechnology},
    },
    errors::AppError,
    repositories::{catalog::CatalogRepository, professional::ProfessionalRepository},
};

pub struct CatalogHandler<C, P>
where
    C: CatalogRepository,
    P: ProfessionalRepository,
{
    pub catalog_repo: C,
    pub professional_repo: P,
}

impl<C, P> CatalogHandler<C, P>
where
    C: CatalogRepository,
    P: ProfessionalRepository,
{
    pub fn new(catalog_repo: C, professional_repo: P) -> Self {
        CatalogHandler {
            catalog_repo,
            professional_repo,
        }
    }

    pub async fn list_technologies(&self) -> Result<Vec<Technology>, AppError> {
        self.catalog_repo.list_technologies().await
    }

    pub async fn get_technology(&self, id: &Uuid) -> Result<Technology, AppError> {
        self.catalog_repo
            .get_technology(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No technology with id {id}")))
    }

    pub async fn create_technology(&self, tech: NewTechnology) -> Result<Uuid, AppError> {
        tech.validate()?;

        self.catalog_repo.create_technology(&tech).await
    }

    pub async fn update_technology(&self, id: &Uuid, tech: UpdateTechnology) -> Result<Technology, AppError> {
        tech.validate()?;

        self.catalog_repo.update_technology(id, &tech).await
    }

    pub async fn delete_technology(&self, id: &Uuid) -> Result<(), AppError> {
        self.catalog_repo.soft_delete_technology(id).await
    }

    pub async fn list_categories(&self) -> Result<Vec<TechnologyCategory>, AppError> {
        self.catalog_repo.list_categories().await
    }

    pub async fn get_category(&self, id: &Uuid) -> Result<TechnologyCategory, AppError> {
        self.catalog_repo
            .get_category(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No technology category with id {id}")))
    }

    pub async fn create_category(&self, category: NewTechnologyCategory) -> Result<Uuid, AppError> {
        category.validate()?;

        self.catalog_repo.create_category(&category).await
    }

    pub async fn update_category(&self, id: &Uuid, category: UpdateTechnologyCategory) -> Result<TechnologyCategory, AppError> {
        category.validate()?;

        self.catalog_repo.update_category(id, &category).await
    }

    pub async fn delete_category(&self, id: &Uuid) -> Result<(), AppError> {
        self.catalog_repo.soft_delete_category(id).await
    }

    pub async fn list_skill_levels(&self) -> Result<Vec<TechSkillLevel>, AppError> {
        self.catalog_repo.list_skill_levels().await
    }

    pub async fn get_skill_level(&self, id: &Uuid) -> Result<TechSkillLevel, AppError> {
        self.catalog_repo
            .get_skill_level(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No skill level with id {id}")))
    }

    pub async fn create_skill_level(&self, level: NewTechSkillLevel) -> Result<Uuid, AppError> {
        level.validate()?;

        self.catalog_repo.create_skill_level(&level).await
    }

    pub async fn delete_skill_level(&self, id: &Uuid) -> Result<(), AppError> {
        self.catalog_repo.soft_delete_skill_level(id).await
    }

    pub async fn list_professionals(&self) -> Result<Vec<ProfessionalIdentity>, AppError> {
        self.professional_repo.list_identities().await
    }

    /// A professional's identity and current skills, for the profile
    /// page.
    pub async fn professional_profile(&self, id: &Uuid) -> Result<ProfessionalProfile, AppError> {
        let identity = self
            .professional_repo
            .identities_by_ids(&[*id])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("No professional with id {id}")))?;

        let skills = self
            .professional_repo
            .current_skill_summaries(id)
            .await?;

        Ok(ProfessionalProfile {
            id: identity.id,
            name: identity.name,
            email: identity.email,
            skills,
        })
    }
}
