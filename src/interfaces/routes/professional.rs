use actix_web::web;

use crate::handlers::professional;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/professionals")
            .service(
                web::resource("")
                    .route(web::get().to(professional::list_professionals))
            )
            .service(
                web::resource("/search")
                    .route(web::post().to(professional::search_professionals))
            )
            .service(
                web::resource("/{id}/skills")
                    .route(web::post().to(professional::add_skills))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(professional::get_professional))
            )
    );
}
