use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod api;
mod app;
mod config;
mod help;
mod input;
mod loadmore;
mod results;
mod search;
#[cfg(test)]
mod test_utils;
mod theme;

use api::SearchClient;
use app::App;

/// Interactive Hacker News search
#[derive(Parser, Debug)]
#[command(version, about = "Search Hacker News stories from the terminal")]
struct Args {
    /// Initial search query, submitted as soon as the worker is up
    query: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/hns-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/hns-debug.log")
            .expect("Failed to open /tmp/hns-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== HNS DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let initial_query = args
        .query
        .unwrap_or_else(|| config_result.config.search.default_query.clone());

    let terminal = init_terminal()?;

    let app = App::new(&initial_query);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== HNS DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<()> {
    setup_search_worker(&mut app, &config_result.config)?;
    app.start(&config_result);

    loop {
        // Apply worker responses before drawing so the frame is current
        app.poll_search();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the fetch worker thread and its channels
fn setup_search_worker(app: &mut App, config: &config::Config) -> Result<()> {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.search.set_channels(request_tx, response_rx);

    let client = SearchClient::new(config.api.endpoint.clone());
    api::worker::spawn_worker(client, request_rx, response_tx)?;

    Ok(())
}
