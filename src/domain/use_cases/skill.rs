use uuid::Uuid;

use crate::{
    entities::tech_skill::{NewTechSkill, TechSkill},
    errors::AppError,
    repositories::{professional::ProfessionalRepository, tech_skill::TechSkillRepository},
};

pub struct SkillHandler<S, P>
where
    S: TechSkillRepository,
    P: ProfessionalRepository,
{
    pub skill_repo: S,
    pub professional_repo: P,
}

impl<S, P> SkillHandler<S, P>
where
    S: TechSkillRepository,
    P: ProfessionalRepository,
{
    pub fn new(skill_repo: S, professional_repo: P) -> Self {
        SkillHandler {
            skill_repo,
            professional_repo,
        }
    }

    /// Adds current skills for a professional, skipping technologies the
    /// professional already has a current skill in. Returns how many rows
    /// were inserted.
    pub async fn add_skills(&self, professional_id: &Uuid, skills: Vec<NewTechSkill>) -> Result<usize, AppError> {
        self.professional_repo
            .get_professional(professional_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No professional with id {professional_id}")))?;

        let existing = self
            .skill_repo
            .current_skill_technology_ids(professional_id)
            .await?;

        let to_insert: Vec<NewTechSkill> = skills
            .into_iter()
            .filter(|skill| !existing.contains(&skill.technology_id))
            .collect();

        if !to_insert.is_empty() {
            self.skill_repo
                .insert_skills(professional_id, &to_insert)
                .await?;
        }

        Ok(to_insert.len())
    }

    /// Changes a skill's level by superseding the current row. The old
    /// row stays in storage as history.
    pub async fn edit_skill(&self, skill_id: &Uuid, level_id: &Uuid) -> Result<TechSkill, AppError> {
        self.skill_repo.supersede_skill(skill_id, level_id).await
    }

    /// Soft-deletes a skill: the row is marked non-current but kept for
    /// trend queries.
    pub async fn remove_skill(&self, skill_id: &Uuid) -> Result<(), AppError> {
        self.skill_repo.deactivate_skill(skill_id).await
    }
}
