use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::{professional::SearchRequest, tech_skill::AddSkillsRequest},
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_professionals(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let professionals = state.catalog_handler.list_professionals().await?;

    Ok(HttpResponse::Ok().json(professionals))
}

#[instrument(skip(state))]
pub async fn get_professional(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let profile = state.catalog_handler.professional_profile(&id).await?;

    Ok(HttpResponse::Ok().json(profile))
}

#[instrument(skip(state, data))]
pub async fn add_skills(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    data: web::Json<AddSkillsRequest>,
) -> Result<impl Responder, AppError> {
    let added = state
        .skill_handler
        .add_skills(&id, data.into_inner().skills)
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "added": added })))
}

#[instrument(skip(state, data))]
pub async fn search_professionals(
    state: web::Data<AppState>,
    data: web::Json<SearchRequest>,
) -> Result<impl Responder, AppError> {
    let professionals = state
        .search_handler
        .search(data.into_inner().criteria)
        .await?;

    Ok(HttpResponse::Ok().json(professionals))
}
