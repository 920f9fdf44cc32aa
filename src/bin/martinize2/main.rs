use std::process::ExitCode;

use log::LevelFilter;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod pipeline;
mod util;

fn main() -> ExitCode {
    let invocation = cli::parse();
    let misc = &invocation.cli.misc;

    init_logging(misc.verbose, misc.quiet);

    let ctx = display::Context::detect().with_quiet(misc.quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::run(invocation, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG`, when set, overrides the level chosen by `-v`/`-q`.
fn init_logging(verbose: u8, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose, quiet))
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match martinize::normalize_verbosity(verbose) {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_log_levels() {
        assert_eq!(log_level(0, false), LevelFilter::Info);
        assert_eq!(log_level(1, false), LevelFilter::Debug);
        assert_eq!(log_level(2, false), LevelFilter::Trace);
        assert_eq!(log_level(7, false), LevelFilter::Trace);
        assert_eq!(log_level(2, true), LevelFilter::Warn);
    }
}
