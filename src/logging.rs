// SPDX-License-Identifier: MPL-2.0
//! Terminal logging setup.
//!
//! Messages go to stderr through `simplelog`. GPU and windowing crates are
//! filtered out, they are very chatty at `info` and below.

use crate::error::{Error, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Level used when `--log-level` is not given.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

const IGNORED_TARGETS: [&str; 6] = ["wgpu", "naga", "iced_wgpu", "cosmic_text", "winit", "calloop"];

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Logging(format!("unknown log level '{value}'")))
}

/// Installs the global logger. Fails if one is already installed.
pub fn init(level: LevelFilter) -> Result<()> {
    let mut builder = ConfigBuilder::new();
    for target in IGNORED_TARGETS {
        builder.add_filter_ignore_str(target);
    }

    TermLogger::init(
        level,
        builder.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
