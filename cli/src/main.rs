//! Valman CLI - binary entry point.
//!
//! ```text
//! main() -> config + args -> Session::open / Session::new
//!                                  |
//!              --exec lines        v        interactive
//!        Editor::execute_line  <- Editor ->  Editor::run (stdin/stdout)
//! ```
//!
//! Nothing is saved implicitly on exit; `store` writes the registry.

mod logging;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;

use valman_config::ValmanConfig;
use valman_core::{Editor, Flow, OpenOutcome, Session};
use valman_types::{EditorSettings, Marker, MatchMode};

#[derive(Debug, Parser)]
#[command(name = "valman", version, about = "Edit a persistent registry of named values")]
struct Args {
    /// Registry file to open; a missing file starts an empty registry.
    file: Option<PathBuf>,

    /// Two-character marker between names and values.
    #[arg(long, value_name = "MARKER")]
    marker: Option<String>,

    /// Complete partial names anywhere in a name, not just as a prefix.
    #[arg(long)]
    substring: bool,

    /// Execute LINE and exit instead of starting the editor. Repeatable.
    #[arg(short = 'e', long = "exec", value_name = "LINE")]
    exec: Vec<String>,
}

impl Args {
    fn settings(&self, config: &ValmanConfig) -> Result<EditorSettings> {
        let mut settings = config.editor_settings();
        if let Some(raw) = &self.marker {
            let marker = Marker::new(raw.as_str())
                .with_context(|| format!("invalid --marker {raw:?}"))?;
            settings = settings.with_marker(marker);
        }
        if self.substring {
            settings = settings.with_matching(MatchMode::Substring);
        }
        Ok(settings)
    }
}

fn load_config() -> ValmanConfig {
    match ValmanConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("warning: {err}; using default settings");
            ValmanConfig::default()
        }
    }
}

fn open_session(path: Option<PathBuf>, settings: EditorSettings, announce: bool) -> Result<Session> {
    let Some(path) = path else {
        return Ok(Session::new(settings));
    };
    let (session, outcome) = Session::open(&path, settings)
        .with_context(|| format!("failed to open {}", path.display()))?;
    if announce {
        match outcome {
            OpenOutcome::Opened(report) => {
                eprintln!("opened {} ({} entries)", path.display(), report.loaded);
                if report.skipped > 0 {
                    eprintln!("skipped {} malformed lines", report.skipped);
                }
            }
            OpenOutcome::Created => eprintln!("new registry at {}", path.display()),
        }
    }
    Ok(session)
}

fn run_exec(session: Session, lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut editor = Editor::new(session, io::empty(), stdout.lock());
    for line in lines {
        if editor.execute_line(line)? == Flow::Quit {
            break;
        }
    }
    let (_, _, mut output) = editor.into_parts();
    output.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    logging::init_tracing();

    let args = Args::parse();
    let config = load_config();
    let settings = args.settings(&config)?;
    let path = args.file.clone().or_else(|| config.registry_path());
    let interactive = args.exec.is_empty();

    let session = open_session(path, settings, interactive)?;

    if !interactive {
        return run_exec(session, &args.exec);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut editor = Editor::new(session, stdin.lock(), stdout.lock());
    let reason = editor.run()?;
    tracing::info!(?reason, "Editor finished");

    Ok(())
}
