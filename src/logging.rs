// src/logging.rs
//! Process-wide logger setup.
//!
//! Everything in the crate logs through the `log` facade (`log::info!` etc).
//! `init` installs an `env_logger` backend with the same line shape the
//! desktop app has always written: `[hh:mm:ss.mmm][LEVEL] message`, where
//! the clock starts at the first log call.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Target};
use log::LevelFilter;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Where log lines go.
pub enum LogTarget<'a> {
    Stderr,
    /// Append to a file (GUI builds have no console on Windows).
    File(&'a Path),
}

/// Install the global logger. `RUST_LOG` still wins over `level` when set.
/// Calling twice is harmless; the second call is ignored.
pub fn init(level: LevelFilter, target: LogTarget<'_>) {
    start();

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        });

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => {
                    builder.target(Target::Pipe(Box::new(file)));
                }
                Err(e) => {
                    eprintln!("Could not open log file {}: {e}", path.display());
                    builder.target(Target::Stderr);
                }
            }
        }
    }

    let _ = builder.try_init();
}

/// Map `-v` occurrences to a level filter.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
