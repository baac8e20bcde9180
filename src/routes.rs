use crate::{
    api::{attendance, employee},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter shared by every worker built from it.
pub fn rate_limit(requests_per_min: u32) -> anyhow::Result<RateLimit> {
    if requests_per_min == 0 {
        anyhow::bail!("Rate limit must allow at least one request per minute");
    }
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Invalid rate limit: {} per minute", requests_per_min))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limit: &RateLimit) {
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(limit)) // rate limiting
            .configure(employee_routes),
    );
}

pub fn employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employee")
            // /employee
            .service(
                web::resource("")
                    .name("employee_list")
                    .route(web::get().to(employee::list_employees)),
            )
            // /employee/{id}
            .service(web::resource("/{id}").route(web::get().to(employee::get_employee)))
            // /employee/{id}/attendance
            .service(
                web::resource("/{id}/attendance")
                    .route(web::post().to(attendance::save_attendance)),
            )
            // /employee/{id}/attendance/enter
            .service(
                web::resource("/{id}/attendance/enter")
                    .route(web::get().to(attendance::enter_attendance)),
            )
            // /employee/{id}/attendance/weeks
            .service(
                web::resource("/{id}/attendance/weeks")
                    .name("grouped_attendance")
                    .route(web::get().to(attendance::grouped_attendance)),
            )
            // /employee/{id}/attendance/weeks/{week_start}
            .service(
                web::resource("/{id}/attendance/weeks/{week_start}")
                    .route(web::get().to(attendance::edit_week))
                    .route(web::put().to(attendance::save_week))
                    .route(web::delete().to(attendance::delete_week)),
            ),
    );
}
