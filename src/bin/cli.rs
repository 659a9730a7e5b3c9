// src/bin/cli.rs
use cftv_dash::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
