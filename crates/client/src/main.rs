//! Guild recruitment client binary.
//!
//! Loads negotiation content from `GUILD_DATA_DIR` and opens a recruitment
//! session on stdin/stdout.
//!
//! # Examples
//!
//! ```bash
//! GUILD_DATA_DIR=data cargo run -p guild-client
//! echo "quote 1" | GUILD_JSON_EVENTS=true cargo run -p guild-client
//! ```

use anyhow::{Context, Result};
use guild_content::ContentFactory;
use guild_core::Turn;
use guild_runtime::RecruitmentDesk;

use guild_client::{CliApp, CliConfig, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    logging::setup_logging(&config)?;

    tracing::info!("Starting guild client");
    tracing::info!("Data directory: {}", config.data_dir.display());

    let bundle = ContentFactory::new(&config.data_dir)
        .load_all()
        .with_context(|| format!("failed to load content from {}", config.data_dir.display()))?;
    tracing::info!(
        "Loaded {} heroes, {} catalog traits, {} keywords",
        bundle.heroes.len(),
        bundle.traits.len(),
        bundle.keywords.len()
    );

    let desk = RecruitmentDesk::from_bundle(bundle, Turn(config.start_turn))?;
    let mut app = CliApp::new(desk, config.json_events);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    app.run(stdin.lock(), &mut stdout)?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
