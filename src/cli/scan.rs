use std::path::Path;
use std::time::Duration;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use crate::cli::commands::ScanArgs;
use crate::config::{parse_config, CampusGuardConfig, ClassifierKind};
use crate::dashboard::{DashboardStore, SnapshotCache};
use crate::db::Database;
use crate::errors::CampusGuardError;
use crate::pipeline::{ScanOrchestrator, ScanVerdict};

pub async fn handle_scan(args: ScanArgs) -> Result<(), CampusGuardError> {
    let mut config = match &args.config {
        Some(path) => parse_config(Path::new(path)).await?,
        None => CampusGuardConfig::default(),
    };

    if let Some(kind) = &args.classifier {
        let kind = ClassifierKind::parse(kind).ok_or_else(|| {
            CampusGuardError::Config(format!("Unknown classifier '{}' (expected gemini or heuristic)", kind))
        })?;
        config.classifier.get_or_insert_with(Default::default).provider = Some(kind);
    }
    if let Some(key) = &args.api_key {
        config.classifier.get_or_insert_with(Default::default).api_key = Some(key.clone());
    }
    if let Some(key) = &args.reputation_api_key {
        config.reputation.get_or_insert_with(Default::default).api_key = Some(key.clone());
    }

    let orchestrator = ScanOrchestrator::from_config(&config)?;
    let db = Database::new(&config.db_path(args.db))?;
    let cache_dir = config.cache_dir(args.cache_dir);
    let store = DashboardStore::open(&args.user, db, SnapshotCache::new(Path::new(&cache_dir)));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("AI is analyzing the link...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = orchestrator.scan(&args.url, &store).await;
    spinner.finish_and_clear();

    let outcome = result?;
    match outcome.verdict {
        ScanVerdict::Safe => {
            println!("{}  {}", style("All Clear!").green().bold(), outcome.message);
        }
        ScanVerdict::Warning => {
            println!("{}  {}", style("Dangerous link!").red().bold(), outcome.message);
        }
    }
    println!(
        "Reputation: {} malicious, {} suspicious",
        outcome.report.malicious, outcome.report.suspicious
    );

    let snapshot = store.snapshot();
    println!(
        "Scans completed: {}  Threats blocked: {}",
        snapshot.scans_completed, snapshot.threats_blocked
    );

    Ok(())
}
