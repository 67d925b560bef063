use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn technology_percentage(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let stats = state.stats_handler.technology_percentage(&id).await?;

    Ok(HttpResponse::Ok().json(stats))
}

#[instrument(skip(state))]
pub async fn technology_level(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let stats = state.stats_handler.technology_level(&id).await?;

    Ok(HttpResponse::Ok().json(stats))
}

#[instrument(skip(state))]
pub async fn technology_trend(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let chart = state.stats_handler.technology_trend(&id).await?;

    Ok(HttpResponse::Ok().json(chart))
}
