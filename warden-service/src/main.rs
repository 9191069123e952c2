use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use warden_adapters::{
    Argon2PasswordHasher, HashMapUserStore, JwtTokenIssuer, PostgresUserStore,
    config::AuthServiceSetting,
};
use warden_auth_service::{AuthService, configure_postgresql};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = AuthServiceSetting::load()?;

    let hasher = Argon2PasswordHasher::default();
    let token_issuer = JwtTokenIssuer::new(config.jwt_auth_config());
    let assets_dir = &config.application.assets_dir;

    let auth_service = match &config.postgres {
        Some(postgres) => {
            let pg_pool = configure_postgresql(postgres).await?;
            AuthService::new(
                PostgresUserStore::new(pg_pool),
                hasher,
                token_issuer,
                assets_dir,
            )
        }
        None => {
            tracing::warn!("No database configured, users are kept in memory");
            AuthService::new(HashMapUserStore::new(), hasher, token_issuer, assets_dir)
        }
    };

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;

    auth_service
        .run_standalone(listener, Some(config.auth.allowed_origins.clone()))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
