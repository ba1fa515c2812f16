mod app_dir;
mod settings;
mod summary;

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use quadbrot_render::compute_grid_stats;

use settings::Settings;
use summary::Summary;

/// Resolve the view, compute one grid and summarise it.
fn run(settings: &Settings) -> Result<Summary, String> {
    let view = settings.resolved_view();
    let report = compute_grid_stats(
        &view,
        settings.width,
        settings.height,
        settings.max_iterations,
        &settings.compute_options(),
    )
    .map_err(|e| e.to_string())?;
    Ok(Summary::new(settings.mode, &report))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting QuadBrot");

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(app_dir::default_settings_path);

    let settings = match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = match run(&settings) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Computation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to serialize summary: {e}");
            ExitCode::FAILURE
        }
    }
}
