use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// What each spoke of the radar represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "radar_angular_axis", rename_all = "lowercase")]
pub enum AngularAxisType {
    Technology,
    Category,
}

/// Which population a radar series aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "radar_radial_axis", rename_all = "lowercase")]
pub enum RadialAxisType {
    Company,
    Professional,
}

/// An angular-axis member: a technology or a category, as labeled on the
/// chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AxisMember {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TechRadar {
    pub id: Uuid,
    pub name: String,
    pub owner_id: Option<Uuid>,
    pub angular_axis: AngularAxisType,
    pub radial_axis: RadialAxisType,
    pub active: bool,
}

/// A saved radar with its member sets resolved to active rows.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTechRadar {
    pub id: Uuid,
    pub name: String,
    pub angular_axis: AngularAxisType,
    pub radial_axis: RadialAxisType,
    pub technologies: Vec<AxisMember>,
    pub tech_categories: Vec<AxisMember>,
    pub professional_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RadialAxisRequest {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    pub radial_axis_type: RadialAxisType,

    #[serde(default)]
    pub professional_ids: Vec<Uuid>,
}

/// The ad hoc radar configuration submitted from the radar studio.
/// Disabled radial axes are dropped client-side; every axis arriving here
/// is plotted.
#[derive(Debug, Deserialize, Validate)]
pub struct RadarPreviewRequest {
    pub angular_axis_type: AngularAxisType,

    #[serde(default)]
    pub technologies: Vec<Uuid>,

    #[serde(default)]
    pub tech_categories: Vec<Uuid>,

    #[validate(nested)]
    pub radial_axes: Vec<RadialAxisRequest>,
}

impl RadarPreviewRequest {
    /// Ids of the angular axis members matching the configured axis type.
    pub fn angular_member_ids(&self) -> &[Uuid] {
        match self.angular_axis_type {
            AngularAxisType::Technology => &self.technologies,
            AngularAxisType::Category => &self.tech_categories,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewTechRadar {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    pub owner_id: Option<Uuid>,

    pub angular_axis_type: AngularAxisType,

    pub radial_axis_type: RadialAxisType,

    #[serde(default)]
    pub technologies: Vec<Uuid>,

    #[serde(default)]
    pub tech_categories: Vec<Uuid>,

    #[serde(default)]
    pub professionals: Vec<Uuid>,
}
