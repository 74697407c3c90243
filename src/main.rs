#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Replay the navigation toggle against a simulated document.
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "navslide", version)]
struct Args {
    /// JSON app config (version, log level, toggle settings)
    config: Option<PathBuf>,

    /// Natural height of the panel content in pixels
    #[arg(
        default_value_t = navslide::DEMO_CONTENT_HEIGHT,
        allow_negative_numbers = true,
        value_parser = navslide::demo::parse_content_height
    )]
    content_height: f32,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use navslide::config::AppConfig;
    use navslide::demo::run_demo;

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => match AppConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    log::info!(
        "Replaying {} -> {} (content height {})",
        config.toggle.trigger,
        config.toggle.panel,
        args.content_height
    );

    match run_demo(&config.toggle, args.content_height) {
        Ok(snapshots) => {
            for snapshot in snapshots {
                println!("{}", snapshot);
            }
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
