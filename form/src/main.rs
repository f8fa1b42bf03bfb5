//! Main entry point for the place form.
//!
//! Loads configuration (defaults, or overrides from the JSON file given as
//! the first argument), sets up logging, shows the seed place, and runs the
//! input loop on the terminal until the user quits.

use std::env;
use std::path::PathBuf;

use place::PlaceDecoder;
use place_form::{session, FormConfig};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> place_form::Result<()> {
    let config_path = env::args().nth(1).map(PathBuf::from);
    let config = FormConfig::load(config_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(prompt = %config.prompt, "starting place form");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout().lock();
    session::run(&config, PlaceDecoder::new(), stdin, &mut stdout).await
}
