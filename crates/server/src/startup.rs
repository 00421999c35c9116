use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Create the configured administrator, if any.
async fn bootstrap_admin(state: &ServerState, cfg: &configs::AuthConfig) -> Result<(), StartupError> {
    match (&cfg.admin_email, &cfg.admin_password) {
        (Some(email), Some(password)) => state
            .auth
            .ensure_admin(email, password)
            .await
            .map_err(|e| StartupError::Bootstrap(e.to_string())),
        _ => {
            warn!("no [auth] admin configured; admin-only routes are unreachable until a role is granted");
            Ok(())
        }
    }
}

/// Public entry: connect, migrate, build the app and serve until the task is dropped.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    if cfg.auth.uses_dev_secret() {
        warn!("auth.jwt_secret is the built-in development secret; set JWT_SECRET outside local development");
    }
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!("migrations applied");
    }

    let state = ServerState::from_db(db, &cfg.auth);
    bootstrap_admin(&state, &cfg.auth).await?;

    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting bookstore server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
