use anyhow::{Context, Result};
use harmocrew_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::AvatarUrlGenerator,
    },
    services::{ApplicationServices, Repositories},
};
use harmocrew_core::config::AppConfig;
use harmocrew_core::infrastructure::{
    database,
    repositories::{
        SqliteCandidacyRepository, SqliteFollowRepository, SqliteMessageRepository,
        SqlitePostRepository, SqliteUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::HmacTokenManager},
    time::SystemClock,
    util::TemplateAvatarUrlGenerator,
};
use harmocrew_core::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(config.database_url(), config.db_max_connections())
        .await
        .with_context(|| format!("opening database {}", config.database_url()))?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let repos = Repositories {
        users: Arc::new(SqliteUserRepository::new(Arc::clone(&pool))),
        posts: Arc::new(SqlitePostRepository::new(Arc::clone(&pool))),
        candidacies: Arc::new(SqliteCandidacyRepository::new(Arc::clone(&pool))),
        follows: Arc::new(SqliteFollowRepository::new(Arc::clone(&pool))),
        messages: Arc::new(SqliteMessageRepository::new(Arc::clone(&pool))),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let ttl = chrono::Duration::from_std(config.token_ttl()).context("token ttl out of range")?;
    let token_manager: Arc<dyn TokenManager> =
        Arc::new(HmacTokenManager::new(config.token_secret(), ttl)?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let avatars: Arc<dyn AvatarUrlGenerator> =
        Arc::new(TemplateAvatarUrlGenerator::new(config.avatar_base_url()));

    let services = Arc::new(ApplicationServices::new(
        repos,
        password_hasher,
        token_manager,
        clock,
        avatars,
    ));

    let state = HttpState {
        services,
        db_pool: Arc::clone(&pool),
        settings: HttpSettings {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit(),
        },
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("binding {}", config.listen_addr()))?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info,sqlx=warn"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
