use crate::{
    api::{calendar, leave},
    auth::handlers,
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;
use anyhow::anyhow;
use std::sync::Arc;

type Limiter = Governor<PeerIpKeyExtractor, NoOpMiddleware>;

// Helper to build per-route limiter
fn build_limiter(requests_per_min: u32) -> anyhow::Result<Limiter> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| anyhow!("invalid rate limit: {requests_per_min} requests per minute"))?;
    Ok(Governor::new(&cfg))
}

/// Limiters shared by every worker, so quotas are per process.
#[derive(Clone)]
pub struct RateLimiters {
    login: Arc<Limiter>,
    protected: Arc<Limiter>,
}

impl RateLimiters {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            login: Arc::new(build_limiter(config.rate_login_per_min)?),
            protected: Arc::new(build_limiter(config.rate_protected_per_min)?),
        })
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiters: &RateLimiters) {
    // Public routes
    cfg.service(
        web::scope("/auth")
            .service(
                web::resource("/login")
                    .wrap(limiters.login.clone())
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/logout")
                    .wrap(limiters.login.clone())
                    .route(web::post().to(handlers::logout)),
            ),
    );

    // Protected routes; credentials are checked by the extractor in each handler
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(limiters.protected.clone()) // rate limiting
            .service(
                web::scope("/calendar")
                    // /calendar
                    .service(web::resource("").route(web::get().to(calendar::month_calendar)))
                    // /calendar/day/{date}
                    .service(
                        web::resource("/day/{date}").route(web::get().to(calendar::day_detail)),
                    ),
            )
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::get().to(leave::list_leaves))
                            .route(web::post().to(leave::create_leave)),
                    )
                    // /leave/schema
                    .service(web::resource("/schema").route(web::get().to(leave::leave_schema))),
            )
            .service(web::resource("/holiday").route(web::get().to(leave::list_holidays))),
    );
}
