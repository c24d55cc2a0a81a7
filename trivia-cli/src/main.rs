//! trivia CLI - run the questions API server or seed its database
//!
//! Subcommands:
//! - `serve`: start the HTTP API (migrations run on startup)
//! - `seed`: load questions from a JSON file, skipping duplicates

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use trivia_server::db::create_pool;
use trivia_server::{seed, DbConfig, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "HTTP API for trivia questions backed by Postgres"
)]
struct Cli {
    /// Enable debug logging (overridable via RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    /// Database connection URL (overrides DATABASE_URL / POSTGRES_* env)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Seed the database from a JSON file of questions
    Seed(SeedArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// Allow requests from any origin (development only)
    #[arg(long)]
    cors_permissive: bool,
}

#[derive(Parser, Debug)]
struct SeedArgs {
    /// Path to a JSON array of question objects
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; ignore a missing file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    let db_config = match &cli.database_url {
        Some(url) => DbConfig::from_url(url),
        None => DbConfig::from_env(),
    };

    match cli.command {
        Commands::Serve(args) => serve(db_config, args).await,
        Commands::Seed(args) => run_seed(db_config, args).await,
    }
}

async fn serve(db_config: DbConfig, args: ServeArgs) -> Result<()> {
    let pool = create_pool(&db_config.url)
        .await
        .context("could not connect to database")?;

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        cors_permissive: args.cors_permissive,
    };

    trivia_server::run_server(pool, config).await?;
    Ok(())
}

async fn run_seed(db_config: DbConfig, args: SeedArgs) -> Result<()> {
    let pool = create_pool(&db_config.url)
        .await
        .context("could not connect to database")?;

    let inserted = seed::seed_from_file(&pool, &args.file)
        .await
        .with_context(|| format!("seeding from {} failed", args.file.display()))?;

    println!("Seeded {inserted} new questions");
    Ok(())
}
