//! Edit entrypoint.
use anyhow::{Context, Result, ensure};
use clap::Parser;
use core_actions::{Session, run_guarded};
use core_config::{LeftMargin, VERSION_BANNER, ViewerConfig};
use core_input::ReaderSource;
use core_state::Geometry;
use core_terminal::{CrosstermBackend, TerminalBackend};
use core_text::Document;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "edit", version, about = "Edit is a simple text editor.")]
struct Args {
    /// File to view.
    pub path: Option<PathBuf>,
    /// Reserve a two column gutter left of the cursor.
    #[arg(long)]
    pub gutter: bool,
    /// Write diagnostics to this file (nothing is logged without it).
    #[arg(long = "log", value_name = "FILE")]
    pub log: Option<PathBuf>,
    /// Filter directive for the log file, e.g. `debug` or `render=trace`.
    #[arg(long = "log-level", default_value = "debug")]
    pub log_level: String,
}

fn usage() -> String {
    format!(
        "Usage: edit <file>\nVersion: {VERSION_BANNER}\nEdit is a simple text editor.\nPress Ctrl-Q to exit."
    )
}

fn configure_logging(args: &Args) -> Result<Option<WorkerGuard>> {
    let Some(log_path) = args.log.as_deref() else {
        return Ok(None);
    };
    let dir = match log_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = log_path
        .file_name()
        .with_context(|| format!("invalid log path {}", log_path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log level {:?}", args.log_level))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Ok(Some(guard)),
        // Global subscriber already installed; drop guard so writer shuts down.
        Err(_) => Ok(None),
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(path: &Path, config: &ViewerConfig) -> Result<()> {
    let doc = Document::load(path)?;

    let mut backend = CrosstermBackend::new();
    let (rows, cols) = backend.size()?;
    ensure!(rows > 0 && cols > 0, "terminal reports an empty window ({rows}x{cols})");
    config.apply_context(cols);

    info!(
        target: "runtime.startup",
        file = %path.display(),
        line_count = doc.line_count(),
        rows,
        cols,
        min_x = config.min_x(),
        "bootstrap_complete"
    );

    let mut session = Session::new(&doc, config, Geometry::new(rows, cols));
    let mut input = ReaderSource::stdin();
    let mut out = io::stdout().lock();
    let guard = backend.enter_guard()?;
    run_guarded(guard, &mut session, &mut input, &mut out)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let Some(path) = args.path.as_deref() else {
        println!("{}", usage());
        std::process::exit(1);
    };

    let _log_guard = configure_logging(&args)?;
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = ViewerConfig::default().with_left_margin(LeftMargin::from_gutter_flag(args.gutter));
    let result = run(path, &config);
    if let Err(e) = &result {
        tracing::error!(target: "runtime", error = %format!("{e:#}"), "fatal");
    }
    result
}
