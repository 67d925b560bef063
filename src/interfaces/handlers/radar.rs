use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    entities::tech_radar::{NewTechRadar, RadarPreviewRequest},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, data))]
pub async fn preview_radar(
    state: web::Data<AppState>,
    data: web::Json<RadarPreviewRequest>,
) -> Result<impl Responder, AppError> {
    let dataset = state
        .radar_handler
        .preview_dataset(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(dataset))
}

#[instrument(skip(state))]
pub async fn radar_dataset(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let dataset = state.radar_handler.dataset_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(dataset))
}

#[instrument(skip(state))]
pub async fn company_radar(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let dataset = state.radar_handler.company_dataset().await?;

    Ok(HttpResponse::Ok().json(dataset))
}

#[instrument(skip(state))]
pub async fn professional_radar(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let dataset = state.radar_handler.professional_dataset(&id).await?;

    Ok(HttpResponse::Ok().json(dataset))
}

#[instrument(skip(state))]
pub async fn list_radars(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let radars = state.radar_handler.list_radars().await?;

    Ok(HttpResponse::Ok().json(radars))
}

#[instrument(skip(state, data))]
pub async fn create_radar(
    state: web::Data<AppState>,
    data: web::Json<NewTechRadar>,
) -> Result<impl Responder, AppError> {
    let id = state.radar_handler.create_radar(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "id": id })))
}

#[instrument(skip(state))]
pub async fn delete_radar(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.radar_handler.delete_radar(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
