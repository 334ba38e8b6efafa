/// Groove Server - music library API
use clap::{Parser, Subcommand};
use groove_server::{config::ServerConfig, create_router, export, state::AppState};
use groove_storage::LocalStorageContext;
use rand::{rngs::StdRng, SeedableRng};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "groove-server")]
#[command(about = "Groove music library server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Wipe the database and load the fixture library
    Seed {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Seed for the duration generator (random when omitted)
        #[arg(long, env = "GROOVE_RNG_SEED")]
        rng_seed: Option<u64>,
    },
    /// Write the API documents and the merged page as JSON files
    Export {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output directory
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "groove_server=info,groove_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Seed { config, rng_seed } => {
            if let Err(e) = seed(config.as_deref(), rng_seed).await {
                tracing::error!(error = %e, "Seeding failed");
                std::process::exit(1);
            }
        }
        Commands::Export { config, out } => {
            export_documents(config.as_deref(), &out).await?;
        }
    }

    Ok(())
}

async fn open_database(
    config_path: Option<&Path>,
) -> anyhow::Result<(ServerConfig, Arc<LocalStorageContext>)> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    let pool = groove_storage::create_pool(&config.storage.database_url).await?;
    groove_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    Ok((config, Arc::new(LocalStorageContext::new(pool))))
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    let (config, db) = open_database(config_path).await?;

    tracing::info!("Starting Groove Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let app = create_router(AppState::new(db));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed(config_path: Option<&Path>, rng_seed: Option<u64>) -> anyhow::Result<()> {
    let (_, db) = open_database(config_path).await?;

    let mut rng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    groove_storage::seed::run(db.pool(), &mut rng).await?;

    for (table, rows) in groove_storage::schema::row_counts(db.pool()).await? {
        tracing::info!(table, rows, "Seeded table");
    }

    Ok(())
}

async fn export_documents(config_path: Option<&Path>, out: &Path) -> anyhow::Result<()> {
    let (_, db) = open_database(config_path).await?;

    let written = export::export_all(db.as_ref(), out).await?;
    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}
