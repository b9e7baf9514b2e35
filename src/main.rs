use clap::Parser;
use log::*;
use std::process;

use releasedit::{Result, cli, command};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("releasedit")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli_args = cli::Args::parse();

    if let Err(err) = initialize_logger(cli_args.debug) {
        eprintln!("failed to initialize logger: {err}");
        process::exit(1);
    }

    if let Err(err) = command::update::execute(&cli_args).await {
        error!("{err}");
        process::exit(1);
    }
}
