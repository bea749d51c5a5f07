use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use finbank_wizard::application::{ApplicationAction, ApplicationApp, ApplicationConfig};
use finbank_wizard::error::{AppError, Result};
use finbank_wizard::event::{Event, EventHandler};
use ratatui::prelude::*;
use std::io::stdout;
use std::panic;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "finbank-apply")]
#[command(author, version, about = "Guided joint account application")]
struct Args {
    /// Path to config file (default: <config dir>/finbank/apply.toml)
    #[arg(long)]
    config: Option<String>,

    /// Allow jumping to any step with the number keys
    #[arg(long)]
    allow_jump: bool,

    /// Log file path (logging disabled if not specified)
    #[arg(long)]
    log_file: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // The TUI owns stdout, so logs only go to a file
    if let Some(ref log_path) = args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .ok();

        if let Some(file) = file {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init();

            info!("Starting finbank-apply");
        }
    }

    let mut config = match args.config.as_deref() {
        Some(path) => ApplicationConfig::load_from(path)?,
        None => ApplicationConfig::load()?,
    };

    // --allow-jump overrides config
    if args.allow_jump {
        config.flow.allow_step_jump = true;
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run_application(&mut terminal, config).await;
    restore_terminal()?;

    match result {
        Ok(ApplicationAction::Submitted(summary)) => {
            println!("Application submitted: {summary}");
            Ok(())
        }
        Ok(ApplicationAction::Cancelled) => {
            println!("Application cancelled.");
            Ok(())
        }
        Err(e) => {
            error!("Application error: {}", e);
            Err(e)
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| AppError::Terminal(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).map_err(|e| AppError::Terminal(e.to_string()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| AppError::Terminal(e.to_string()))?;
    execute!(stdout(), LeaveAlternateScreen).map_err(|e| AppError::Terminal(e.to_string()))?;
    Ok(())
}

async fn run_application(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    config: ApplicationConfig,
) -> Result<ApplicationAction> {
    let mut events = EventHandler::new(Duration::from_millis(250));
    let mut app = ApplicationApp::new(config)?;

    loop {
        terminal
            .draw(|frame| finbank_wizard::application::ui::draw(frame, &app))
            .map_err(|e| AppError::Terminal(e.to_string()))?;

        match events.next().await {
            Some(Event::Key(key)) => {
                if let Some(action) = app.handle_key(key) {
                    if matches!(action, ApplicationAction::Submitted(_)) {
                        // Show the confirmation once before leaving
                        terminal
                            .draw(|frame| finbank_wizard::application::ui::draw(frame, &app))
                            .map_err(|e| AppError::Terminal(e.to_string()))?;
                        tokio::time::sleep(Duration::from_secs(1)).await;
                    }
                    return Ok(action);
                }
            }
            Some(Event::Resize) | Some(Event::Tick) => {}
            None => return Ok(ApplicationAction::Cancelled),
        }
    }
}
