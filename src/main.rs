// SPDX-License-Identifier: MPL-2.0
use iced_pager::app::{self, paths, Flags};
use iced_pager::logging;
use std::process::ExitCode;

const HELP: &str = "\
Usage: iced_pager [OPTIONS] [FILE]

Options:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --pdfium-lib <DIR>     Directory holding the PDFium library
  --log-level <LEVEL>    off, error, warn, info, debug or trace [default: warn]
  -h, --help             Print this help
";

struct Cli {
    flags: Flags,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Cli>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let pdfium_lib = args.opt_value_from_str("--pdfium-lib")?;
    let log_level = args.opt_value_from_str("--log-level")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Cli {
        flags: Flags {
            lang,
            file_path,
            config_dir,
            pdfium_lib,
        },
        log_level,
    }))
}

fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let level = match cli.log_level.as_deref().map(logging::parse_level) {
        None => logging::DEFAULT_LOG_LEVEL,
        Some(Ok(level)) => level,
        Some(Err(err)) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = logging::init(level) {
        eprintln!("warning: {err}");
    }

    paths::init_cli_overrides(cli.flags.config_dir.clone());

    match app::run(cli.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
