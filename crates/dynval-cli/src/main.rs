//! dynval CLI - builds an object from argument pairs and prints it

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use dynval::driver;

mod config;
mod logging;

use crate::config::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let ctx = cli.driver_context();
    tracing::debug!(?ctx, pairs = cli.args.len() / 2, "building object");
    let top = driver::build_from_args(&cli.args, &ctx);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", driver::render_line(&top)).context("failed to write result")?;
    stdout.flush().context("failed to flush stdout")?;

    top.delete();
    Ok(())
}
