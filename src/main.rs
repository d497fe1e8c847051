use profile_gateway::auth::adapter::outgoing::jwt::JwtTokenService;
use profile_gateway::auth::application::ports::outgoing::token_provider::TokenVerifier;
use profile_gateway::config::AppConfig;
use profile_gateway::profile::adapter::outgoing::ProfileApiHttp;
use profile_gateway::profile::application::services::ProfileResolver;
use profile_gateway::{init_routes, AppState};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();
    info!(
        "Server run on: {} (profile backend: {})",
        server_url, config.profile_api.base_url
    );

    let profile_api = ProfileApiHttp::new(&config.profile_api)?;
    let resolver = ProfileResolver::new(profile_api);

    let state = AppState {
        resolve_profile_use_case: Arc::new(resolver),
    };

    let token_verifier_arc: Arc<dyn TokenVerifier + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_verifier_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
