//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap the recruitment client.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Directory holding `config.toml`, `keywords.ron`, `traits.ron` and
    /// `heroes.ron`.
    pub data_dir: PathBuf,
    /// Log directory override; the platform cache directory otherwise.
    pub log_dir: Option<PathBuf>,
    /// Print drained events as JSON lines instead of prose.
    pub json_events: bool,
    pub start_turn: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            log_dir: None,
            json_events: false,
            start_turn: 1,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GUILD_DATA_DIR` - Content directory (default: `data`)
    /// - `GUILD_LOG_DIR` - Log directory (default: platform-specific)
    /// - `GUILD_JSON_EVENTS` - Emit events as JSON lines (default: false)
    /// - `GUILD_START_TURN` - Calendar turn the campaign starts on (default: 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("GUILD_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.log_dir = env::var_os("GUILD_LOG_DIR").map(PathBuf::from);

        if let Some(enable) = read_env::<bool>("GUILD_JSON_EVENTS") {
            config.json_events = enable;
        } else if env::var("GUILD_JSON_EVENTS").is_ok_and(|value| value.is_empty() || value == "1") {
            // Also accept just setting the variable as "true"
            config.json_events = true;
        }

        if let Some(turn) = read_env::<u64>("GUILD_START_TURN") {
            config.start_turn = turn;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
