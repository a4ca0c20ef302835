//! Huddle headless runner.
//!
//! # Usage
//!
//! ```bash
//! # Play 200 seeded lobby events with chat output at info level
//! huddle --seed 7 --events 200
//!
//! # Load switches from a JSON file and hide system messages
//! huddle --config hud.json --hide-text-messages
//! ```

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use huddle_app::{HudEvent, SHOW_SETTINGS_COMMAND, SettingsCommand};
use huddle_cli::{Hud, LogDriver, Runtime, load_config};
use huddle_core::MemberId;
use huddle_harness::{Scenario, ScenarioConfig, SimLobby, standard_strings};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Huddle HUD chat runner
#[derive(Parser, Debug)]
#[command(name = "huddle")]
#[command(about = "Run the HUD chat against a seeded simulated lobby")]
#[command(version)]
struct Args {
    /// Scenario seed. Random if not given.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of scenario events to play
    #[arg(short, long, default_value = "200")]
    events: usize,

    /// Milliseconds between scenario events
    #[arg(long, default_value = "0")]
    tick_ms: u64,

    /// JSON configuration file; applied settings are saved back to it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hide system text messages
    #[arg(long)]
    hide_text_messages: bool,

    /// Reproduce the stock client's stop-typing latch
    #[arg(long)]
    legacy_typing_latch: bool,

    /// Console commands to run before the scenario starts
    #[arg(long = "exec", value_name = "COMMAND")]
    commands: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let mut config = load_config(args.config.as_deref())?;
    if args.hide_text_messages {
        config.show_text_messages = false;
    }
    if args.legacy_typing_latch {
        config.legacy_typing_latch = true;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, events = args.events, ?config, "huddle starting");

    let lobby = SimLobby::new(MemberId(0x0110_0001_0000_0001), "Player");
    let scenario = Scenario::new(seed, lobby.clone(), ScenarioConfig::default());
    let mut driver =
        LogDriver::new(scenario, lobby.clone(), args.events, Duration::from_millis(args.tick_ms));
    if let Some(path) = args.config {
        driver = driver.with_config_path(path);
    }

    driver.push_event(HudEvent::Settings(SettingsCommand::Create));
    for command in &args.commands {
        match SettingsCommand::from_console(command) {
            Some(command) => driver.push_event(HudEvent::Settings(command)),
            None => {
                tracing::warn!(%command, "unknown console command (try {SHOW_SETTINGS_COMMAND})");
            },
        }
    }

    let hud = Hud::new(lobby, standard_strings(), config);
    Runtime::new(driver, hud).run().await?;

    Ok(())
}
