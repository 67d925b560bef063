use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::{
        category::{NewTechnologyCategory, UpdateTechnologyCategory},
        skill_level::NewTechSkillLevel,
        technology::{NewTechnology, UpdateTechnology},
    },
    errors::AppError,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_technologies(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let technologies = state.catalog_handler.list_technologies().await?;

    Ok(HttpResponse::Ok().json(technologies))
}

#[instrument(skip(state))]
pub async fn get_technology(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let technology = state.catalog_handler.get_technology(&id).await?;

    Ok(HttpResponse::Ok().json(technology))
}

#[instrument(skip(state, data))]
pub async fn create_technology(
    state: web::Data<AppState>,
    data: web::Json<NewTechnology>,
) -> Result<impl Responder, AppError> {
    let id = state
        .catalog_handler
        .create_technology(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "id": id })))
}

#[instrument(skip(state, data))]
pub async fn update_technology(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    data: web::Json<UpdateTechnology>,
) -> Result<impl Responder, AppError> {
    let technology = state
        .catalog_handler
        .update_technology(&id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(technology))
}

#[instrument(skip(state))]
pub async fn delete_technology(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.catalog_handler.delete_technology(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(state))]
pub async fn list_categories(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let categories = state.catalog_handler.list_categories().await?;

    Ok(HttpResponse::Ok().json(categories))
}

#[instrument(skip(state))]
pub async fn get_category(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let category = state.catalog_handler.get_category(&id).await?;

    Ok(HttpResponse::Ok().json(category))
}

#[instrument(skip(state, data))]
pub async fn create_category(
    state: web::Data<AppState>,
    data: web::Json<NewTechnologyCategory>,
) -> Result<impl Responder, AppError> {
    let id = state
        .catalog_handler
        .create_category(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "id": id })))
}

#[instrument(skip(state, data))]
pub async fn update_category(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    data: web::Json<UpdateTechnologyCategory>,
) -> Result<impl Responder, AppError> {
    let category = state
        .catalog_handler
        .update_category(&id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(category))
}

#[instrument(skip(state))]
pub async fn delete_category(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.catalog_handler.delete_category(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[instrument(skip(state))]
pub async fn list_skill_levels(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let levels = state.catalog_handler.list_skill_levels().await?;

    Ok(HttpResponse::Ok().json(levels))
}

#[instrument(skip(state))]
pub async fn get_skill_level(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let level = state.catalog_handler.get_skill_level(&id).await?;

    Ok(HttpResponse::Ok().json(level))
}

#[instrument(skip(state, data))]
pub async fn create_skill_level(
    state: web::Data<AppState>,
    data: web::Json<NewTechSkillLevel>,
) -> Result<impl Responder, AppError> {
    let id = state
        .catalog_handler
        .create_skill_level(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "id": id })))
}

#[instrument(skip(state))]
pub async fn delete_skill_level(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.catalog_handler.delete_skill_level(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
