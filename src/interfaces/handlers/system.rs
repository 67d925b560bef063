use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;
use std::time::Duration;

use crate::{constants::START_TIME, repositories::catalog::CatalogRepository, AppState};

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    database: String,
    version: String,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let database = match state.catalog_handler.catalog_repo.check_connection().await {
        Ok(_) => "OK",
        Err(_) => "Unavailable",
    };

    let response = HealthCheckResponse {
        status: if database == "OK" { "healthy" } else { "degraded" }.to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    if database == "OK" {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
