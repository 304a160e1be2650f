use clap::{Parser, Subcommand};
use gamification::{PageRequest, calculate_level, progress_to_next_level};
use importer::{JsonFileSource, Snapshot, SnapshotSource, SnapshotValidator};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gamify")]
#[command(about = "Classroom gamification leaderboard and progress tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "ROSTER_PATH", global = true)]
    roster: Option<PathBuf>,

    #[arg(long, env = "RECORDS_PATH", global = true)]
    records: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-student view joined from roster and gamification rows
    Students,
    Leaderboard {
        /// Restrict the ranking to one class
        #[arg(long)]
        class: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 50)]
        page_size: u32,
    },
    Stats {
        username: String,
    },
    /// Level and progress for a points total; needs no snapshot
    Level {
        points: u64,
    },
    Validate,
}

#[derive(Serialize)]
struct LevelReport {
    points: u64,
    level: u32,
    progress: gamification::LevelProgress,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gamify={},importer={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (roster, records) = (cli.roster, cli.records);

    match cli.command {
        Commands::Level { points } => handle_level(points)?,
        Commands::Students => handle_students(&load_snapshot(roster, records).await?)?,
        Commands::Leaderboard {
            class,
            page,
            page_size,
        } => handle_leaderboard(
            &load_snapshot(roster, records).await?,
            class.as_deref(),
            page,
            page_size,
        )?,
        Commands::Stats { username } => {
            handle_stats(&load_snapshot(roster, records).await?, &username)?
        }
        Commands::Validate => handle_validate(&load_snapshot(roster, records).await?)?,
    }

    Ok(())
}

async fn load_snapshot(
    roster: Option<PathBuf>,
    records: Option<PathBuf>,
) -> Result<Snapshot, Box<dyn std::error::Error>> {
    let roster = roster.ok_or("--roster or ROSTER_PATH is required")?;
    let records = records.ok_or("--records or RECORDS_PATH is required")?;

    let source = JsonFileSource::new(roster, records);
    tracing::debug!("Loading snapshot from {} source", source.name());
    Ok(source.load().await?)
}

fn handle_level(points: u64) -> Result<(), Box<dyn std::error::Error>> {
    print_json(&LevelReport {
        points,
        level: calculate_level(points),
        progress: progress_to_next_level(points),
    })
}

fn handle_students(snapshot: &Snapshot) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = snapshot.students();
    tracing::info!("Processed {} students", outcome.students.len());

    for diagnostic in &outcome.diagnostics {
        tracing::warn!("{}", diagnostic);
    }

    print_json(&outcome.students)
}

fn handle_leaderboard(
    snapshot: &Snapshot,
    class: Option<&str>,
    page: u32,
    page_size: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = PageRequest::new(page, page_size)?;

    let entries = snapshot.leaderboard(class);
    match class {
        Some(class_id) => tracing::info!("Ranked {} entries in class {}", entries.len(), class_id),
        None => tracing::info!("Ranked {} entries", entries.len()),
    }

    print_json(&gamification::paginate(&entries, request))
}

fn handle_stats(snapshot: &Snapshot, username: &str) -> Result<(), Box<dyn std::error::Error>> {
    let stats = snapshot.stats(username);
    if !stats.is_participating() {
        tracing::info!("'{}' has no gamification record yet", username);
    }

    print_json(&stats)
}

fn handle_validate(snapshot: &Snapshot) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Validating snapshot...");
    let report = SnapshotValidator::validate(snapshot)?;
    report.log_warnings();
    tracing::info!(
        "✓ Validation successful ({} warning(s))",
        report.warnings.len()
    );

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
