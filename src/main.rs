use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use qtedit::config;
use qtedit::editor::Editor;
use qtedit::input::keybindings::{self, EditorEvent};
use qtedit::services::terminal_modes::{self, TerminalModes};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "qtedit")]
#[command(about = "A small terminal text editor with syntax highlighting", long_about = None)]
#[command(version)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

/// Send logs to a file so they never land on the editor's screen
fn init_tracing(log_file: &Path) -> AnyhowResult<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qtedit=info"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::sync::Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init();
    Ok(())
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("qtedit.log"));
    init_tracing(&log_file)?;
    tracing::info!("Editor starting");

    let config = config::resolve_config(args.config.as_deref(), config::default_config_dir())
        .context("Failed to load configuration")?;

    if args.dump_config {
        println!(
            "{}",
            serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?
        );
        return Ok(());
    }

    let (width, height) = crossterm::terminal::size().context("Failed to read terminal size")?;
    let mut editor = Editor::new(&config, width, height);
    if let Some(path) = &args.file {
        editor.open_file(path)?;
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut terminal_modes = TerminalModes::enable()?;
    let result = run_event_loop(&mut editor);
    terminal_modes.undo();

    if let Err(e) = &result {
        tracing::error!("Editor exited with error: {:#}", e);
    }
    tracing::info!("Editor exiting");
    result
}

fn run_event_loop(editor: &mut Editor) -> AnyhowResult<()> {
    let mut stdout = io::stdout();
    let mut needs_render = true;

    loop {
        if editor.should_quit() {
            break;
        }

        if needs_render {
            stdout.write_all(&editor.render_frame())?;
            stdout.flush()?;
            needs_render = false;
        }

        // Poll with a timeout so an expiring status message gets redrawn
        if !event::poll(Duration::from_millis(500))? {
            needs_render = true;
            continue;
        }

        match event::read()? {
            CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                editor.handle_event(keybindings::resolve(&key_event));
                needs_render = true;
            }
            CrosstermEvent::Resize(width, height) => {
                editor.handle_event(EditorEvent::Resize(width, height));
                needs_render = true;
            }
            _ => {}
        }
    }

    // Leave the screen clean for the shell
    crossterm::execute!(
        stdout,
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    )?;
    Ok(())
}
