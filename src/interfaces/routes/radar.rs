use actix_web::web;

use crate::handlers::radar;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/radars")
            .service(
                web::resource("")
                    .route(web::get().to(radar::list_radars))
                    .route(web::post().to(radar::create_radar))
            )
            .service(
                web::resource("/preview")
                    .route(web::post().to(radar::preview_radar))
            )
            .service(
                web::resource("/company")
                    .route(web::get().to(radar::company_radar))
            )
            .service(
                web::resource("/professional/{id}")
                    .route(web::get().to(radar::professional_radar))
            )
            .service(
                web::resource("/{id}/dataset")
                    .route(web::get().to(radar::radar_dataset))
            )
            .service(
                web::resource("/{id}")
                    .route(web::delete().to(radar::delete_radar))
            )
    );
}
