//! Cycle companion backend server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cycle_companion::adapters::http::{
    app_router, AppStates, CycleAppState, GuidanceAppState, StatusAppState,
};
use cycle_companion::adapters::postgres::{
    connect_lazy, run_migrations, PostgresIdeaReader, PostgresStoreStatus,
};
use cycle_companion::adapters::{InMemoryIdeaReader, SystemClock};
use cycle_companion::application::CycleLengthPolicy;
use cycle_companion::config::{AppConfig, CycleSettings, DatabaseConfig};
use cycle_companion::domain::cycle::CycleLength;
use cycle_companion::ports::{IdeaReader, StoreStatusProbe};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let (idea_reader, probe) = idea_store(&config.database).await?;
    let states = AppStates {
        cycle: CycleAppState::new(
            Arc::new(SystemClock),
            length_policy(&config.cycle),
            CycleLength::new(i64::from(config.cycle.default_length))?,
        ),
        guidance: GuidanceAppState::new(idea_reader, config.ideas.default_limit),
        status: StatusAppState::new(probe),
    };
    let app = app_router(states, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Listening on {} ({:?})",
        addr,
        config.server.environment
    );
    axum::serve(listener, app).await?;

    Ok(())
}

/// JSON lines in production, compact text otherwise. `RUST_LOG` wins over config.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false).json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

fn length_policy(settings: &CycleSettings) -> CycleLengthPolicy {
    CycleLengthPolicy {
        enforce: settings.enforce_plausible_length,
        min_days: settings.min_plausible_length,
        max_days: settings.max_plausible_length,
    }
}

/// Postgres when a URL is configured, otherwise a store that always reports
/// itself unavailable so every listing falls back.
async fn idea_store(
    database: &DatabaseConfig,
) -> Result<(Arc<dyn IdeaReader>, Arc<dyn StoreStatusProbe>), sqlx::Error> {
    let Some(url) = &database.url else {
        tracing::warn!("No database configured, serving fallback ideas only");
        let offline = Arc::new(InMemoryIdeaReader::unavailable());
        let reader: Arc<dyn IdeaReader> = offline.clone();
        let probe: Arc<dyn StoreStatusProbe> = offline;
        return Ok((reader, probe));
    };

    let pool = connect_lazy(database, url)?;
    if database.run_migrations {
        match run_migrations(&pool).await {
            Ok(()) => tracing::info!("Database migrations applied"),
            Err(err) => tracing::warn!("Skipping migrations, store not ready: {}", err),
        }
    }

    let reader: Arc<dyn IdeaReader> = Arc::new(PostgresIdeaReader::new(pool.clone()));
    let probe: Arc<dyn StoreStatusProbe> = Arc::new(PostgresStoreStatus::new(pool));
    Ok((reader, probe))
}
