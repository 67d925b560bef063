use actix_web::web;

use crate::handlers::home::home;

mod catalog;
mod professional;
mod skill;
mod radar;
mod system;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(catalog::config_routes)
            .configure(professional::config_routes)
            .configure(skill::config_routes)
            .configure(radar::config_routes)
    );

    cfg.service(
        web::scope("/admin")
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
