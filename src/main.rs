use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, bail};
use tracing_subscriber::EnvFilter;

use dexsearch::client::GraphQlClient;
use dexsearch::constants::DEFAULT_MAX_PAGES;
use dexsearch::domain::SortOrder;
use dexsearch::state::{
    AppConfig, FilePreferences, LaunchPreferences, SearchController, SearchState,
};
use dexsearch::ui::{ResultPrinter, WELCOME_BANNER};

/// dexsearch - search the Pokemon species catalog from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search species by name, ordered by capture rate
    Search(SearchArgs),
    /// Show the welcome banner
    Welcome {
        /// Show the banner again on the next launch
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Name fragment to search for (letters and hyphens)
    name: String,

    /// Order by capture rate, highest first
    #[arg(long)]
    desc: bool,

    /// Maximum number of pages to show
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pages: u32,

    /// Species per page (overrides config)
    #[arg(long)]
    page_size: Option<u32>,

    /// GraphQL endpoint URL (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Minimum loading time before an error is shown, in ms (overrides config)
    #[arg(long)]
    min_loading_ms: Option<u64>,
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search(args) => {
            greet_first_launch();
            run_search(args, AppConfig::load()).await
        }
        Commands::Welcome { reset } => run_welcome(reset),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ============================================================================
// Search
// ============================================================================

async fn run_search(args: SearchArgs, config: AppConfig) -> Result<()> {
    let mut search_config = config.search_config();
    if let Some(page_size) = args.page_size {
        search_config = search_config.with_page_size(page_size);
    }
    if let Some(ms) = args.min_loading_ms {
        search_config = search_config.with_min_loading(Duration::from_millis(ms));
    }
    let endpoint = args.endpoint.unwrap_or_else(|| config.endpoint.clone());

    let client = Arc::new(GraphQlClient::new(endpoint, &config.http_config())?);
    tracing::debug!(endpoint = client.endpoint(), ?search_config, "Client ready");

    let controller = SearchController::new(client, search_config);
    controller.set_sort_order(if args.desc {
        SortOrder::Desc
    } else {
        config.sort_order
    });

    let mut updates = controller.subscribe();
    let mut printer = ResultPrinter::new();
    controller.submit_search(&args.name)?;

    while let Some(state) = updates.recv().await {
        if let SearchState::Error { message } = &state {
            bail!("{message}");
        }
        if let Some(text) = printer.render(&state) {
            println!("{text}");
        }

        let SearchState::Success(results) = &state else {
            continue;
        };
        if results.is_loading_more {
            continue;
        }
        let pages_shown = controller.current_page().saturating_add(1);
        if !results.has_next_page || results.load_more_error || pages_shown >= args.pages {
            break;
        }
        controller.load_more();
    }

    Ok(())
}

// ============================================================================
// First Launch
// ============================================================================

/// Print the banner if it has not been shown yet. Returns whether it was.
fn show_welcome_once(prefs: &mut impl LaunchPreferences) -> Result<bool> {
    if prefs.is_completed() {
        return Ok(false);
    }
    println!("{WELCOME_BANNER}\n");
    prefs.mark_completed()?;
    Ok(true)
}

/// Best effort: a broken preference store never blocks a search.
fn greet_first_launch() {
    let shown =
        FilePreferences::open_default().and_then(|mut prefs| show_welcome_once(&mut prefs));
    if let Err(err) = shown {
        tracing::debug!("First-launch check skipped: {err}");
    }
}

fn run_welcome(reset: bool) -> Result<()> {
    let mut prefs = FilePreferences::open_default()?;
    if reset {
        prefs.reset()?;
        println!("The welcome banner will show on the next launch.");
        return Ok(());
    }

    if !show_welcome_once(&mut prefs)? {
        println!("{WELCOME_BANNER}");
    }
    Ok(())
}
