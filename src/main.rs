//! # Hanzi Cards Entry Point
//!
//! This is the main entry point for the Hanzi Cards TUI application.
//!
//! ## Overview
//!
//! Hanzi Cards shows a deck of Chinese characters as cards, a page at a time
//! or all at once. Pages turn with the arrow keys, the Previous / Next
//! buttons, or by dragging the mouse across the cards like a touch swipe.
//!
//! ## Usage
//!
//! ```bash
//! # Everything enabled, greetings deck
//! hanzi
//!
//! # The browser preset with a fixed page size
//! hanzi --variant browser --page-size 8
//!
//! # Print the resolved pages and exit
//! hanzi --list
//! ```
//!
//! ## Key Bindings
//!
//! - `←` / `h` / `PageUp` - Previous page
//! - `→` / `l` / `PageDown` / `Space` - Next page
//! - `Home` / `g`, `End` / `G` - First / last page
//! - `s` - Toggle show-all mode
//! - `p` / `P` - Cycle page size (auto, 4, 6, 8, 10, 12, 16)
//! - `a` - Add a character (`Tab` switches field, `Enter` adds, `Esc` leaves)
//! - `t` - Cycle colour theme
//! - `?` - Help
//! - `q` / `Esc` / `Ctrl+c` - Quit
//!
//! ## Logging
//!
//! The TUI owns stdout, so logs go to a file (`--log-file`, or `hanzi.log` in
//! the data directory). Set `RUST_LOG=debug` to see page and swipe events.

use hanzi::deck::Dataset;
use hanzi::paging::PageSizeMode;
use hanzi::ui::{self, input, layout::ScreenLayout, App, Config, Variant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Terminal width assumed by `--list` when stdout is not a terminal.
const FALLBACK_COLUMNS: u16 = 80;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    }
}

/// Hanzi Cards - page through Chinese character cards in the terminal
#[derive(Parser, Debug)]
#[command(name = "hanzi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Page through Chinese character cards in the terminal", long_about = None)]
struct Args {
    /// Preset bundle of dataset, controls and page size
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// Character list to load, overriding the preset
    #[arg(short, long, value_enum)]
    dataset: Option<Dataset>,

    /// Cards per page: "auto" or a number
    #[arg(long, value_name = "SIZE")]
    page_size: Option<PageSizeMode>,

    /// Colour theme name
    #[arg(long)]
    theme: Option<String>,

    /// Pixel width of one terminal column
    #[arg(long, value_name = "PX")]
    cell_width: Option<u16>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the resolved pages and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    init_logging(args.log_file.as_deref())?;

    let (file_config, file_writable) = Config::load(args.config.as_deref());
    let config = apply_overrides(file_config.clone(), &args);

    let mut app = App::from_config(&config);
    let initial_theme = app.theme.name;

    if args.list {
        let columns = crossterm::terminal::size().map_or(FALLBACK_COLUMNS, |(w, _)| w);
        app.handle_terminal_resize(columns);
        print_pages(&mut app);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let size = terminal.size().context("Failed to read terminal size")?;
    app.handle_terminal_resize(size.width);

    tracing::info!(
        variant = ?config.variant,
        dataset = ?app.dataset,
        cards = app.len(),
        page_size = app.page_size(),
        "starting viewer"
    );

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader);

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    if app.theme.name != initial_theme {
        save_theme(
            file_config,
            app.theme.name,
            args.config.as_deref(),
            file_writable,
        );
    }

    run_result?;
    cleanup_result?;

    Ok(())
}

/// Send `tracing` output to a log file; the terminal is busy with the UI.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

fn default_log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "hanzi-cards")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("hanzi.log"))
}

/// Command-line flags win over the config file.
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    if let Some(dataset) = args.dataset {
        config.dataset = Some(dataset);
    }
    if let Some(page_size) = args.page_size {
        config.page_size = Some(page_size);
    }
    if let Some(theme) = &args.theme {
        config.theme.clone_from(theme);
    }
    if let Some(cell_width) = args.cell_width {
        config.cell_width_px = cell_width;
    }
    config
}

/// Persist a theme change. A config file that failed to load is left alone.
fn save_theme(mut config: Config, theme: &str, path: Option<&Path>, writable: bool) {
    if !writable {
        tracing::warn!("Config file could not be loaded, not saving theme '{}'", theme);
        return;
    }
    config.theme = theme.to_string();
    let result = match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    };
    if let Err(e) = result {
        tracing::warn!("Failed to save theme: {:#}", e);
    }
}

fn print_pages(app: &mut App) {
    println!(
        "{} - {} cards, {} per page ({})",
        app.dataset.title(),
        app.len(),
        app.page_size(),
        app.page_size_mode
    );

    for page in 0..app.total_pages() {
        app.go_to_page(page as isize);
        let cards: Vec<String> = app
            .visible_records()
            .iter()
            .map(|r| match &r.gloss {
                Some(gloss) => format!("{} ({})", r.glyph, gloss),
                None => r.glyph.clone(),
            })
            .collect();
        println!("  [{}] {}", app.page_label(), cards.join("  "));
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let Some(event) = event_reader.read_event(POLL_TIMEOUT)? else {
            continue;
        };

        // Same geometry the renderer used, for mouse hit testing.
        let size = terminal.size().context("Failed to read terminal size")?;
        let layout = ScreenLayout::new(Rect::new(0, 0, size.width, size.height), &app.features);
        input::handle_event(app, &layout, &event);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
