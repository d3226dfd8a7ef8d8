mod app;
mod domain;
mod engine;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, load_settings, load_tasks, settings_file, tasks_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tickdown")]
#[command(about = "A terminal countdown timer for named tasks, with deadline notifications", long_about = None)]
struct Cli {
    /// Open the edit form for the task with this id on launch
    #[arg(long, value_name = "ID")]
    edit_task: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export all tasks to a JSON file
    Export {
        /// Destination path
        path: PathBuf,
    },
    /// Import tasks from a JSON file, replacing the current collection
    Import {
        /// Source path
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Export { path }) => {
            let tasks = load_tasks(tasks_file()?);
            persistence::export_tasks(&path, &tasks)?;
            println!("Exported {} task(s) to {}", tasks.len(), path.display());
            Ok(())
        }
        Some(Commands::Import { path }) => {
            match persistence::import_tasks(&path) {
                Ok(tasks) => {
                    persistence::save_tasks(tasks_file()?, &tasks)?;
                    println!("Imported {} task(s) from {}", tasks.len(), path.display());
                }
                Err(e) => {
                    eprintln!("Import failed: {}", e);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        None => run_tui(cli.edit_task),
    }
}

fn run_tui(edit_task: Option<String>) -> Result<()> {
    ensure_data_dir()?;

    let tasks_path = tasks_file()?;
    let settings_path = settings_file()?;

    // Loads never fail: malformed data degrades to defaults
    let tasks = load_tasks(&tasks_path);
    let settings = load_settings(&settings_path);

    let mut app = AppState::new(tasks, settings, tasks_path, settings_path);

    // Recover deadlines that passed while the process was down; the
    // notified flag keeps this from double-firing
    app.tick(AppState::now());

    // Pre-select a task for editing when launched with --edit-task
    if let Some(id) = edit_task {
        app.open_edit_by_id(&id);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if let Err(e) = app.save() {
        eprintln!("Error saving tasks: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Due-sweep
        app.tick(AppState::now());

        // Autosave if needed; a failed write is not fatal, in-memory state
        // stays authoritative until the next attempt
        if app.needs_save {
            let _ = app.save();
        }
    }
}
