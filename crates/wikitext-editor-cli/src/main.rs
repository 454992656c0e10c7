mod app;
mod classify;
mod text;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use wikitext_editor_config::Config;
use wikitext_editor_engine::DataStore;

use crate::app::{Action, App};

fn usage(program: &str) {
    eprintln!("Usage: {program} [FILE]");
    eprintln!("       {program} --classify FILE");
}

fn init_logging() {
    let dir = Config::config_dir();
    let log_path = dir.join("wikitext-editor.log");
    let file = fs::create_dir_all(&dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
    });
    match file {
        Ok(file) => env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init(),
        Err(e) => eprintln!(
            "Warning: logging disabled, cannot open {}: {e}",
            log_path.display()
        ),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("wikitext-editor-cli");

    init_logging();

    let file = match args.get(1..).unwrap_or_default() {
        [flag, path] if flag == "--classify" => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            for line in classify::classify_text(&text) {
                println!("{line}");
            }
            return Ok(());
        }
        [flag] if flag == "-h" || flag == "--help" => {
            usage(program);
            return Ok(());
        }
        [path] => Some(PathBuf::from(path)),
        [] => None,
        _ => {
            usage(program);
            process::exit(1);
        }
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let store = match DataStore::open(&config.drafts_path) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!(
                "draft store at {} unavailable: {e}",
                config.drafts_path.display()
            );
            None
        }
    };

    let title = file
        .as_deref()
        .and_then(Path::file_stem)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string());
    let (text, restored) = initial_text(file.as_deref(), store.as_ref(), &title)?;

    let mut app = App::new(&text, title, store);
    app.session.set_syntax_highlighting(config.syntax_highlighting);
    if restored {
        app.status = "Restored saved draft".to_string();
    }
    log::info!("editing {:?} ({} bytes)", app.title, text.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// A saved draft for `title` wins over the file on disk.
fn initial_text(
    file: Option<&Path>,
    store: Option<&DataStore>,
    title: &str,
) -> Result<(String, bool)> {
    if let Some(store) = store
        && store.has_draft(title)
    {
        match store.load_draft(title) {
            Ok(text) => return Ok((text, true)),
            Err(e) => log::warn!("ignoring draft {title:?}: {e}"),
        }
    }
    match file {
        Some(path) if path.exists() => Ok((
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
            false,
        )),
        _ => Ok((String::new(), false)),
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == Action::Quit
        {
            return Ok(());
        }
    }
}
