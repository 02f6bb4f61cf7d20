use anyhow::Result;
use catalog_core::application::{
    ports::{
        imaging::ImageProcessor,
        security::{PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        storage::MediaStorage,
        time::Clock,
        util::SlugGenerator,
    },
    services::{Adapters, ApplicationServices, Repositories},
    uploads::UploadPolicy,
};
use catalog_core::config::AppConfig;
use catalog_core::infrastructure::{
    database,
    media::{ImageCrateProcessor, LocalMediaStorage},
    repositories::{
        PostgresCategoryImageRepository, PostgresCategoryReadRepository,
        PostgresCategoryWriteRepository, PostgresUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, session_store::InMemorySessionRevocationStore,
        token::BiscuitTokenManager,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use catalog_core::presentation::http::{
    routes::build_router,
    state::{HttpState, MediaSettings},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    tokio::fs::create_dir_all(config.media_root()).await?;

    let repos = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        category_writes: Arc::new(PostgresCategoryWriteRepository::new(pool.clone())),
        category_reads: Arc::new(PostgresCategoryReadRepository::new(pool.clone())),
        category_images: Arc::new(PostgresCategoryImageRepository::new(pool)),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let session_revocation_store: Arc<dyn SessionRevocationStore> =
        Arc::new(InMemorySessionRevocationStore::new());
    let storage: Arc<dyn MediaStorage> = Arc::new(LocalMediaStorage::new(
        config.media_root().clone(),
        config.media_url(),
    ));
    let images: Arc<dyn ImageProcessor> = Arc::new(ImageCrateProcessor::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let adapters = Adapters {
        password_hasher,
        token_manager,
        session_revocation_store,
        storage,
        images,
        clock,
        slugger,
    };
    let upload_policy = UploadPolicy {
        max_bytes: config.max_upload_bytes(),
    };

    let services = Arc::new(ApplicationServices::new(repos, adapters, upload_policy));

    let state = HttpState {
        services,
        media: MediaSettings {
            root: config.media_root().clone(),
            url_prefix: config.media_url().to_owned(),
        },
        max_upload_bytes: config.max_upload_bytes(),
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, media_root = %config.media_root().display(), "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
