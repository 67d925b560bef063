use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use uuid::Uuid;

use crate::{entities::tech_skill::EditTechSkill, errors::AppError, AppState};

#[instrument(skip(state, data))]
pub async fn edit_skill(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    data: web::Json<EditTechSkill>,
) -> Result<impl Responder, AppError> {
    let skill = state
        .skill_handler
        .edit_skill(&id, &data.into_inner().level_id)
        .await?;

    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.remove_skill(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
