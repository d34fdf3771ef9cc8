// src/main.rs
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::Duration,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use clap::Parser;

use vivascroll::app::{self, contacts, App, Contact};
use vivascroll::config::AppConfig;
use vivascroll::input::map_event;
use vivascroll::ui::Renderer;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Contacts file, one `name,company,email` per line
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of sample contacts to generate when no file is given
    #[arg(short = 'n', long, default_value_t = 10_000)]
    count: usize,

    /// Row height in lines (overrides config)
    #[arg(long)]
    item_height: Option<u32>,

    /// Extra rows rendered beyond each edge (overrides config)
    #[arg(short, long)]
    buffer_size: Option<usize>,

    /// Print the rendered window instead of opening the terminal UI
    #[arg(long)]
    headless: bool,

    /// Scroll offset for headless mode
    #[arg(long, default_value_t = 0, requires = "headless")]
    offset: u64,

    /// Container height for headless mode
    #[arg(long, default_value_t = 20, requires = "headless")]
    height: u64,
}

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.headless);

    // Load configuration
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from_file(path),
        None => AppConfig::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}", e);
        AppConfig::default()
    });
    if let Some(item_height) = args.item_height {
        config.list.item_height = item_height;
    }
    if let Some(buffer_size) = args.buffer_size {
        config.list.buffer_size = buffer_size;
    }

    let contacts = match load_contacts(&args) {
        Ok(contacts) => contacts,
        Err(e) => {
            eprintln!("Error opening file: {}", e);
            return Ok(());
        }
    };
    log::info!("Loaded {} contacts", contacts.len());

    if args.headless {
        return match app::render_headless(contacts, &config.list, args.height, args.offset) {
            Ok(lines) => {
                for line in lines {
                    println!("{}", line);
                }
                Ok(())
            }
            Err(e) => Err(io::Error::new(io::ErrorKind::InvalidInput, e)),
        };
    }

    // Initialize renderer
    let mut renderer = Renderer::new(config.theme.clone())?;
    let mut app = App::new(contacts, &config.list, &config.theme, renderer.size()?.height)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    // Main event loop
    let result = run_event_loop(&mut app, &mut renderer);

    // Cleanup
    cleanup()?;

    result
}

fn init_logging(headless: bool) {
    if let Ok(log_path) = std::env::var("VIVASCROLL_LOG") {
        if let Err(e) = simple_logging::log_to_file(log_path, log::LevelFilter::Debug) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }
    } else if headless {
        // Stderr would draw over the terminal UI, so only headless runs get it
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
}

fn load_contacts(args: &Args) -> io::Result<Vec<Contact>> {
    match &args.file {
        Some(path) => contacts::load(path),
        None => Ok(contacts::generate(args.count)),
    }
}

fn run_event_loop(app: &mut App, renderer: &mut Renderer) -> io::Result<()> {
    let frame_duration = Duration::from_millis(16); // ~60 FPS
    let mut dirty = true;

    while !app.should_quit() {
        if dirty {
            renderer.render(app)?;
            dirty = false;
        }

        // Handle input events, one scroll action per event
        if event::poll(frame_duration)? {
            if let Some(action) = map_event(event::read()?) {
                app.apply(action);
                dirty = true;
            }
        }
    }

    Ok(())
}

fn cleanup() -> io::Result<()> {
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
