use actix_web::web;

use crate::handlers::{catalog, stats};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/technologies")
            .service(
                web::resource("")
                    .route(web::get().to(catalog::list_technologies))
                    .route(web::post().to(catalog::create_technology))
            )
            .service(
                web::resource("/{id}/stats/percentage")
                    .route(web::get().to(stats::technology_percentage))
            )
            .service(
                web::resource("/{id}/stats/level")
                    .route(web::get().to(stats::technology_level))
            )
            .service(
                web::resource("/{id}/stats/trend")
                    .route(web::get().to(stats::technology_trend))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(catalog::get_technology))
                    .route(web::put().to(catalog::update_technology))
                    .route(web::delete().to(catalog::delete_technology))
            )
    );

    cfg.service(
        web::scope("/categories")
            .service(
                web::resource("")
                    .route(web::get().to(catalog::list_categories))
                    .route(web::post().to(catalog::create_category))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(catalog::get_category))
                    .route(web::put().to(catalog::update_category))
                    .route(web::delete().to(catalog::delete_category))
            )
    );

    cfg.service(
        web::scope("/skill-levels")
            .service(
                web::resource("")
                    .route(web::get().to(catalog::list_skill_levels))
                    .route(web::post().to(catalog::create_skill_level))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(catalog::get_skill_level))
                    .route(web::delete().to(catalog::delete_skill_level))
            )
    );
}
