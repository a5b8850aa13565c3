//! wgcf - command-line client for a WARP device identity.
//!
//! ```bash
//! # Decode the reserved bytes of a client id
//! wgcf reserved AAAA
//!
//! # Rename the registered device (random name when --name is omitted)
//! export WGCF_DEVICE_ID=... WGCF_ACCESS_TOKEN=... WGCF_PRIVATE_KEY=...
//! wgcf rename --name laptop
//!
//! # Show the device summary
//! wgcf status
//! ```

mod cli;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wgcf_core::utils::format_message;

use cli::Cli;

/// `RUST_LOG` wins; otherwise `info`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Flattens an error chain into `outermost. cause cause ...`.
fn error_message(err: &eyre::Report) -> String {
    let mut chain = err.chain().map(ToString::to_string);
    let short = chain.next().unwrap_or_default();
    let long = chain.collect::<Vec<_>>().join("\n");
    format_message(&short, &long)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    if let Err(err) = cli.run().await {
        tracing::error!("{}", error_message(&err));
        std::process::exit(1);
    }
}
