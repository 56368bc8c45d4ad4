use ecowaste::{
    config,
    core::{session, stats, workers},
    errors::Result,
    storage::FileStore,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints a status overview of the stored collections: account count,
/// complaint totals by status, the current green champion, and the best
/// scrap prices across the configured worker roster.
fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenvy::dotenv().ok();

    // 3. Worker roster from config.toml
    let roster = config::workers::load_default_config()?.workers;
    info!(workers = roster.len(), "loaded worker roster");

    // 4. Open the file-backed store
    let data_dir = config::data_dir();
    let store = FileStore::open(&data_dir)?;
    info!(dir = %data_dir.display(), "opened data store");

    let accounts = session::get_all_accounts(&store)?;
    let stats = stats::complaint_stats(&store)?;
    info!(
        accounts = accounts.len(),
        total = stats.total,
        pending = stats.pending,
        assigned = stats.assigned,
        resolved = stats.resolved,
        open_reports = stats.open_reports,
        "collection overview"
    );

    let champion = stats::green_champion(&store)?;
    info!(name = %champion.name, credits = champion.credits, "green champion");

    if let Some(prices) = workers::best_prices(&roster) {
        info!(
            steel = prices.steel,
            plastic = prices.plastic,
            paper = prices.paper,
            "best scrap prices"
        );
    }

    Ok(())
}
