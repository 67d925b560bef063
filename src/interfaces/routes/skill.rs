use actix_web::web;

use crate::handlers::skill;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("/{id}")
                    .route(web::put().to(skill::edit_skill))
                    .route(web::delete().to(skill::delete_skill))
            )
    );
}
