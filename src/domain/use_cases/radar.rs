use std::collections::HashMap;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        chart::{ChartSeries, RadarDataset},
        tech_radar::{
            AngularAxisType, AxisMember, NewTechRadar, RadarPreviewRequest, RadialAxisRequest,
            RadialAxisType, TechRadar,
        },
        tech_skill::SkillRow,
    },
    errors::AppError,
    repositories::{
        catalog::CatalogRepository, tech_radar::TechRadarRepository,
        tech_skill::TechSkillRepository,
    },
};

/// Groups a skill into its angular-axis spokes. A technology axis puts
/// each skill in exactly one group; a category axis fans a skill out to
/// every category its technology is tagged with (possibly none).
pub fn group_ids(axis: AngularAxisType, skill: &SkillRow) -> Vec<Uuid> {
    match axis {
        AngularAxisType::Technology => vec![skill.technology_id],
        AngularAxisType::Category => skill.category_ids.clone(),
    }
}

fn skills_by_group(axis: AngularAxisType, skills: &[SkillRow]) -> HashMap<Uuid, Vec<&SkillRow>> {
    let mut groups: HashMap<Uuid, Vec<&SkillRow>> = HashMap::new();

    for skill in skills {
        for id in group_ids(axis, skill) {
            groups.entry(id).or_default().push(skill);
        }
    }

    groups
}

fn average_weight(skills: &[&SkillRow]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }

    let total: f64 = skills.iter().map(|skill| skill.level_weight).sum();
    total / skills.len() as f64
}

/// Per-member average skill weight, aligned with the member order. A
/// member with no matching skills yields `0.0` so the chart stays
/// well-defined.
pub fn series_data(axis: AngularAxisType, members: &[AxisMember], skills: &[SkillRow]) -> Vec<f64> {
    let groups = skills_by_group(axis, skills);

    members
        .iter()
        .map(|member| {
            groups
                .get(&member.id)
                .map(|group| average_weight(group))
                .unwrap_or(0.0)
        })
        .collect()
}

/// Assembles the chart dataset: one label per angular-axis member, one
/// series per radial axis, series order mirroring the caller's.
pub fn build_dataset(
    axis: AngularAxisType,
    members: &[AxisMember],
    series: Vec<(String, Vec<SkillRow>)>,
) -> RadarDataset {
    if members.is_empty() {
        return RadarDataset::empty();
    }

    let labels = members.iter().map(|member| member.name.clone()).collect();

    let datasets = series
        .into_iter()
        .map(|(label, skills)| ChartSeries {
            label,
            data: series_data(axis, members, &skills),
        })
        .collect();

    RadarDataset { labels, datasets }
}

/// Reorders fetched members into the caller-supplied id order, dropping
/// duplicates and ids that resolved to nothing.
pub fn order_members(ids: &[Uuid], mut members: Vec<AxisMember>) -> Vec<AxisMember> {
    let mut ordered = Vec::with_capacity(members.len());

    for id in ids {
        if let Some(pos) = members.iter().position(|member| member.id == *id) {
            ordered.push(members.swap_remove(pos));
        }
    }

    ordered
}

/// Radar over a raw set of skills, spokes being the distinct technologies
/// in first-seen order. Used for the company and per-professional radars.
pub fn dataset_from_skills(skills: &[SkillRow], label: &str) -> RadarDataset {
    let mut members: Vec<AxisMember> = Vec::new();

    for skill in skills {
        if !members.iter().any(|member| member.id == skill.technology_id) {
            members.push(AxisMember {
                id: skill.technology_id,
                name: skill.technology_name.clone(),
            });
        }
    }

    build_dataset(
        AngularAxisType::Technology,
        &members,
        vec![(label.to_string(), skills.to_vec())],
    )
}

pub struct RadarHandler<C, S, R>
where
    C: CatalogRepository,
    S: TechSkillRepository,
    R: TechRadarRepository,
{
    pub catalog_repo: C,
    pub skill_repo: S,
    pub radar_repo: R,
}

impl<C, S, R> RadarHandler<C, S, R>
where
    C: CatalogRepository,
    S: TechSkillRepository,
    R: TechRadarRepository,
{
    pub fn new(catalog_repo: C, skill_repo: S, radar_repo: R) -> Self {
        RadarHandler {
            catalog_repo,
            skill_repo,
            radar_repo,
        }
    }

    /// Builds the dataset for an ad hoc radar configuration.
    pub async fn preview_dataset(&self, request: RadarPreviewRequest) -> Result<RadarDataset, AppError> {
        request.validate()?;

        let member_ids = request.angular_member_ids();
        if member_ids.is_empty() {
            return Ok(RadarDataset::empty());
        }

        let fetched = match request.angular_axis_type {
            AngularAxisType::Technology => self.catalog_repo.technologies_by_ids(member_ids).await?,
            AngularAxisType::Category => self.catalog_repo.categories_by_ids(member_ids).await?,
        };
        let members = order_members(member_ids, fetched);

        let skills_per_axis = futures::future::try_join_all(
            request.radial_axes.iter().map(|axis| self.axis_skills(axis)),
        )
        .await?;

        let series = request
            .radial_axes
            .iter()
            .map(|axis| axis.name.clone())
            .zip(skills_per_axis)
            .collect();

        Ok(build_dataset(request.angular_axis_type, &members, series))
    }

    async fn axis_skills(&self, axis: &RadialAxisRequest) -> Result<Vec<SkillRow>, AppError> {
        match axis.radial_axis_type {
            RadialAxisType::Company => self.skill_repo.current_skills().await,
            RadialAxisType::Professional => {
                self.skill_repo
                    .current_skills_for_professionals(&axis.professional_ids)
                    .await
            }
        }
    }

    /// Builds the single-series dataset of a saved radar.
    pub async fn dataset_by_id(&self, id: &Uuid) -> Result<RadarDataset, AppError> {
        let radar = self
            .radar_repo
            .radar_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No tech radar with id {id}")))?;

        let members = match radar.angular_axis {
            AngularAxisType::Technology => &radar.technologies,
            AngularAxisType::Category => &radar.tech_categories,
        };

        let skills = match radar.radial_axis {
            RadialAxisType::Company => self.skill_repo.current_skills().await?,
            RadialAxisType::Professional => {
                self.skill_repo
                    .current_skills_for_professionals(&radar.professional_ids)
                    .await?
            }
        };

        Ok(build_dataset(
            radar.angular_axis,
            members,
            vec![(radar.name, skills)],
        ))
    }

    /// Company-wide radar over every current skill.
    pub async fn company_dataset(&self) -> Result<RadarDataset, AppError> {
        let skills = self.skill_repo.current_skills().await?;

        Ok(dataset_from_skills(&skills, "Professionals"))
    }

    /// Radar over a single professional's current skills.
    pub async fn professional_dataset(&self, professional_id: &Uuid) -> Result<RadarDataset, AppError> {
        let skills = self
            .skill_repo
            .current_skills_for_professionals(&[*professional_id])
            .await?;

        Ok(dataset_from_skills(&skills, "Professionals"))
    }

    pub async fn create_radar(&self, radar: NewTechRadar) -> Result<Uuid, AppError> {
        radar.validate()?;

        self.radar_repo.create_radar(&radar).await
    }

    pub async fn list_radars(&self) -> Result<Vec<TechRadar>, AppError> {
        self.radar_repo.list_radars().await
    }

    pub async fn delete_radar(&self, id: &Uuid) -> Result<(), AppError> {
        self.radar_repo.soft_delete_radar(id).await
    }
}
