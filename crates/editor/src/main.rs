use std::io::{BufRead, Write};
use std::path::PathBuf;

use paint_editor_lib::command::{execute_json, CommandResponse};
use paint_editor_lib::harness::TestHarness;
use paint_editor_lib::state::{AppSettings, DocumentState};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paint_editor=info,paint_editor_lib=info,history=info".into()),
        )
        .init();

    let settings = AppSettings::load();

    // Parse --image <path> argument
    let harness = match parse_image_arg() {
        Some(path) => TestHarness::open(settings, &path).map_err(|e| {
            format!("Failed to open {}: {e}", path.display())
        }),
        None => match DocumentState::load_autosave() {
            Some(document) => {
                tracing::info!("Restored autosaved document");
                Ok(TestHarness::from_document(settings, document))
            }
            None => TestHarness::from_settings(settings)
                .map_err(|e| format!("Invalid canvas settings: {e}")),
        },
    };
    let mut harness = match harness {
        Ok(h) => match AppSettings::config_path() {
            Some(path) => h.with_settings_file(path),
            None => h,
        },
        Err(msg) => {
            tracing::error!("{msg}");
            std::process::exit(1);
        }
    };

    let result = run(&mut harness);
    harness.app.document.autosave();
    if let Err(e) = result {
        tracing::error!("I/O error: {e}");
        std::process::exit(1);
    }
}

/// Execute one JSON command per input line, printing one JSON response per line.
fn run(harness: &mut TestHarness) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = execute_json(harness, &line).unwrap_or_else(CommandResponse::err);
        match serde_json::to_string(&response) {
            Ok(json) => writeln!(stdout, "{json}")?,
            Err(e) => tracing::error!("Failed to encode response: {e}"),
        }
        stdout.flush()?;
    }
    Ok(())
}

fn parse_image_arg() -> Option<PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--image" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
        i += 1;
    }
    None
}
