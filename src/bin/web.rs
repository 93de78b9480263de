//! Single binary web server exposing the tennis team engine as a JSON REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT,
//! TOURNAMENT_TTL_HOURS, CLEANUP_INTERVAL_MINUTES, RECORD_POLICY.

use actix_web::{web::Data, App, HttpServer};
use tennis_team_web::api::{self, AppContext};
use tennis_team_web::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!(
        "Starting server at http://{}:{} (policy {}, ttl {:?})",
        bind.0,
        bind.1,
        config.default_policy,
        config.tournament_ttl
    );

    let cleanup_every = config.cleanup_interval;
    let state = Data::new(AppContext::new(config));

    // Background task: periodically drop tournaments nobody has touched within the TTL
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(cleanup_every);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.store.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let removed = g.purge_expired();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind(bind)?
    .run()
    .await
}
