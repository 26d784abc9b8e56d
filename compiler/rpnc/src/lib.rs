//! Command-line front end for the rpnc infix to postfix converter.
//!
//! [`ReplSession`] holds the prompt loop state so it can be driven from a
//! terminal or from tests; [`init_logger`] wires `env_logger` to `-v`.

pub mod repl;

use log::LevelFilter;

pub use repl::{run_repl, ReplSession};

/// Install the process logger. `RUST_LOG` wins over the verbosity count.
pub fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .try_init();
}
