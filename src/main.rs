use blog_cms::application::{
    commands::session::AdminCredentials,
    ports::{
        security::PasswordHasher,
        time::Clock,
        util::{ImageKeyGenerator, SlugGenerator},
    },
    services::{ApplicationServices, ServiceDependencies},
};
use blog_cms::config::AppConfig;
use blog_cms::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    image::ImageStore,
};
use blog_cms::infrastructure::{
    database,
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    security::password::Argon2PasswordHasher,
    storage::FilesystemImageStore,
    time::SystemClock,
    util::{DefaultSlugGenerator, UuidImageKeyGenerator},
};
use blog_cms::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const MAX_DB_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "configuration loaded");

    let pool = database::init_pool(config.database_url(), MAX_DB_CONNECTIONS).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let image_store: Arc<dyn ImageStore> =
        Arc::new(FilesystemImageStore::open(config.image_dir()).await?);

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let image_keys: Arc<dyn ImageKeyGenerator> = Arc::new(UuidImageKeyGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        article_write_repo,
        article_read_repo,
        image_store,
        password_hasher,
        clock,
        slugger,
        image_keys,
        credentials: AdminCredentials::new(config.admin_username(), config.admin_password_hash()),
        dashboard_page_size: config.dashboard_page_size(),
    }));

    let state = HttpState {
        services,
        settings: Arc::new(HttpSettings::from_config(&config)),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        %address,
        image_dir = %config.image_dir().display(),
        static_dir = %config.static_dir().display(),
        "listening"
    );

    axum::serve(listener, app.into_make_service())
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
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
                tracing::error!(error = %err, "failed to install SIGTERM handler");
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
