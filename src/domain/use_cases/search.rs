use std::collections::HashMap;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        professional::{ProfessionalIdentity, SkillCriterion},
        tech_skill::SkillRow,
    },
    errors::AppError,
    repositories::{professional::ProfessionalRepository, tech_skill::TechSkillRepository},
};

/// Professionals whose current skills satisfy every criterion. A
/// criterion is satisfied when the professional has a row for its
/// technology whose weight passes the operator test; the match is an AND
/// across all criteria. Result order is whatever the row order gave us.
pub fn matching_professional_ids(criteria: &[SkillCriterion], skills: &[SkillRow]) -> Vec<Uuid> {
    let mut by_professional: HashMap<Uuid, Vec<&SkillRow>> = HashMap::new();

    for skill in skills {
        by_professional
            .entry(skill.professional_id)
            .or_default()
            .push(skill);
    }

    by_professional
        .into_iter()
        .filter(|(_, skills)| {
            criteria.iter().all(|criterion| {
                skills.iter().any(|skill| {
                    skill.technology_id == criterion.technology_id
                        && criterion
                            .level_operator
                            .matches(skill.level_weight, criterion.level_weight)
                })
            })
        })
        .map(|(professional_id, _)| professional_id)
        .collect()
}

pub struct SearchHandler<S, P>
where
    S: TechSkillRepository,
    P: ProfessionalRepository,
{
    pub skill_repo: S,
    pub professional_repo: P,
}

impl<S, P> SearchHandler<S, P>
where
    S: TechSkillRepository,
    P: ProfessionalRepository,
{
    pub fn new(skill_repo: S, professional_repo: P) -> Self {
        SearchHandler {
            skill_repo,
            professional_repo,
        }
    }

    /// Resolves a multi-criterion skill search to display identities.
    /// An empty criteria list returns all active professionals.
    pub async fn search(&self, criteria: Vec<SkillCriterion>) -> Result<Vec<ProfessionalIdentity>, AppError> {
        for criterion in &criteria {
            criterion.validate()?;
        }

        if criteria.is_empty() {
            return self.professional_repo.list_identities().await;
        }

        let mut technology_ids: Vec<Uuid> = criteria
            .iter()
            .map(|criterion| criterion.technology_id)
            .collect();
        technology_ids.sort();
        technology_ids.dedup();

        let skills = self
            .skill_repo
            .current_skills_for_technologies(&technology_ids)
            .await?;

        let matched = matching_professional_ids(&criteria, &skills);
        if matched.is_empty() {
            return Ok(Vec::new());
        }

        self.professional_repo.identities_by_ids(&matched).await
    }
}
