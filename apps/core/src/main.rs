// Pollstats launcher
// Stores poll submissions and prints analytics as JSON on stdout.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pollstats_core::config::AppConfig;
use pollstats_core::database::{self, SqliteResponseStore};
use pollstats_core::models::{Answers, PollSubmission, PollType};
use pollstats_core::{catalogue, service, telemetry};
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Phase {
    /// Before the activity
    Pre,
    /// After the activity
    Post,
}

impl From<Phase> for PollType {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Pre => PollType::Pre,
            Phase::Post => PollType::Post,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pollstats")]
#[command(about = "Pre/post poll collection and analytics", long_about = None)]
#[command(version)]
struct Cli {
    /// SQLite database URL (overrides POLLSTATS_DATABASE_URL)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the poll questions
    Questions,
    /// Store one poll submission
    Submit {
        /// Poll phase the answers belong to
        #[arg(long, value_enum)]
        phase: Phase,
        /// Answers as a JSON object keyed by question id
        #[arg(long)]
        answers: String,
    },
    /// Print the analytics report for all stored responses
    Analytics {
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the number of stored responses per phase
    Status,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

async fn open_store(config: &AppConfig) -> anyhow::Result<SqliteResponseStore> {
    let pool = database::init_db(config)
        .await
        .context("Failed to initialize database")?;
    Ok(SqliteResponseStore::new(pool))
}

async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Questions => print_json(catalogue::poll(), true),
        Commands::Submit { phase, answers } => {
            let answers: Answers =
                serde_json::from_str(&answers).context("--answers must be a JSON object")?;
            let store = open_store(&config).await?;
            let submission = PollSubmission {
                poll_type: PollType::from(phase).to_string(),
                answers,
            };
            let receipt = service::submit_poll(&store, submission).await?;
            print_json(&receipt, false)
        }
        Commands::Analytics { pretty } => {
            let store = open_store(&config).await?;
            let report = service::analytics(&store).await?;
            print_json(&report, pretty)
        }
        Commands::Status => {
            let store = open_store(&config).await?;
            let pre = database::count_by_type(store.pool(), PollType::Pre).await?;
            let post = database::count_by_type(store.pool(), PollType::Post).await?;
            print_json(
                &serde_json::json!({
                    "pre_poll_count": pre,
                    "post_poll_count": post,
                    "total_responses": pre + post,
                }),
                false,
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Invalid configuration")?;
    if let Some(url) = cli.database_url.clone() {
        config.database_url = url;
    }

    telemetry::init_tracing(&config)?;
    info!("Command received: {:?}", cli.command);

    if let Err(e) = run(cli, config).await {
        error!("Command failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
