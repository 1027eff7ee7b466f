extern crate clist;

use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

mod logger;

/// Builds the list 1..=5 by prepending and prints it after a banner.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Log more to stderr; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Anything else on the command line; it never changes the output.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<OsString>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::install(cli.verbose).context("failed to install logger")?;
    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "ignoring extra arguments");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    clist::write_demo(&mut out)?;
    out.flush().context("failed to flush stdout")?;

    info!("done");
    Ok(())
}
