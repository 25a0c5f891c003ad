use clap::Parser;
use log::{debug, info, warn};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use nova::core::config::{self, CliOverrides, NovaConfig};

#[derive(Parser)]
#[command(name = "nova", about = "Secure messenger mock-up for the terminal")]
struct Args {
    /// Config file to read instead of ~/.nova/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Don't capture the mouse
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The log file and level come from the config, so everything up to
    // WriteLogger::init is collected and logged afterwards.
    let config_path = args.config.clone().or_else(config::config_path);
    let mut problems = Vec::new();
    let file_config = match &config_path {
        Some(path) => config::load_config_from(path).unwrap_or_else(|e| {
            problems.push(e);
            NovaConfig::default()
        }),
        None => NovaConfig::default(),
    };

    let cli = CliOverrides {
        log_level: args.log_level,
        no_mouse: args.no_mouse,
    };
    let mut resolved = config::resolve(&file_config, &cli);
    problems.append(&mut resolved.problems);
    for problem in &problems {
        eprintln!("nova: {problem}; using the default instead");
    }

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match &config_path {
        Some(path) if path.exists() => info!("Loaded config from {}", path.display()),
        Some(path) => info!("No config file at {}, using defaults", path.display()),
        None => warn!("Could not determine home directory, using default config"),
    }
    debug!("Config: {:?}", file_config);
    for problem in &problems {
        warn!("Config problem: {problem}");
    }
    info!(
        "Nova starting up as {} (mouse: {})",
        resolved.profile.display_name, resolved.mouse
    );

    nova::tui::run(resolved)
}
