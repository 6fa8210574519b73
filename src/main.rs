use std::io::stdout;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio_util::sync::CancellationToken;

use draftpick::app::App;
use draftpick::catalog::{CatalogStore, FileCatalog};
use draftpick::config::{Config, load_config};
use draftpick::listing::ListingEngine;
use draftpick::matchup::{MatchupCache, spawn_worker};
use draftpick::opendota::OpenDotaClient;
use draftpick::roster::{RosterSets, Side};
use draftpick::session::DraftSession;

/// Frame interval; also how often finished matchup fetches are picked up
const TICK: Duration = Duration::from_millis(100);

/// Interactive hero draft helper
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to use instead of ~/.config/draftpick/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Load the hero catalog from a heroStats JSON file instead of the API
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Team to draft for (radiant or dire)
    #[arg(long)]
    side: Option<Side>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_log();

    let config_result = load_config(args.config.as_deref());
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }
    let mut config = config_result.config;
    if let Some(side) = args.side {
        config.draft.drafting_as = side;
    }

    let catalog = load_catalog(&config, args.catalog)?;
    log::info!("Loaded {} heroes", catalog.len());

    // Matchup worker gets its own client; reqwest clients stay on the runtime that built them
    let client = OpenDotaClient::new(&config.api.base_url, config.api.timeout())?;
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let cancel = CancellationToken::new();
    let worker = spawn_worker(client, request_rx, response_tx, cancel.clone())?;

    let session = DraftSession::new(
        ListingEngine::new(catalog),
        RosterSets::new(config.draft.team_size, config.draft.ban_limit),
        MatchupCache::new(request_tx, response_rx),
        config.draft.drafting_as,
    )?;
    let app = App::new(session, config_result.warning);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    // Pasted text arrives as one event instead of a burst of key presses
    let _ = execute!(stdout(), EnableBracketedPaste);
    let result = run(terminal, app);
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    cancel.cancel();
    if worker.join().is_err() {
        log::warn!("Matchup worker panicked");
    }

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events(TICK)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Fetch the hero catalog before the UI starts. Failure here is fatal.
fn load_catalog(config: &Config, file: Option<PathBuf>) -> Result<CatalogStore> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let catalog = match file {
        Some(path) => runtime.block_on(CatalogStore::load(&FileCatalog::new(path))),
        None => {
            let client = OpenDotaClient::new(&config.api.base_url, config.api.timeout())?;
            runtime.block_on(CatalogStore::load(&client))
        }
    };

    catalog.map_err(|e| eyre!("{}", e))
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let path = std::env::temp_dir().join("draftpick-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
