use std::io;

use tracing::{Dispatch, Level};
use tracing_subscriber::{filter::Targets, fmt::writer::BoxMakeWriter, prelude::*, Registry};

/// Maps the number of `-v` flags to the most verbose level that is logged.
fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Sends `clist` events to stderr so stdout carries only program output.
pub fn install(verbose: u8) -> anyhow::Result<()> {
    let writer = BoxMakeWriter::new(io::stderr);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(Targets::new().with_target("clist", level_for(verbose)));
    let dispatch = Dispatch::new(Registry::default().with(fmt_layer));
    dispatch.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_flags_log_more() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(9), Level::TRACE);
    }
}
