// SPDX-License-Identifier: MPL-2.0
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use print_gallery::app::{self, paths, Flags};

const USAGE: &str = "\
Usage: print_gallery [OPTIONS]

Options:
  --lang <id>          UI language (e.g. en-US, fr)
  --catalog <location> Catalog directory or http(s) base URL
  --category <key>     Open a gallery: mural, multi-panel-canvas, single-panel-canvas
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory holding logs and the default catalog
  -h, --help           Print this help";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    data_dir: Option<String>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        std::process::exit(0);
    }

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            catalog: args.opt_value_from_str("--catalog")?,
            category: args.opt_value_from_str("--category")?,
        },
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }
    Ok(parsed)
}

/// Starts file logging in the data directory. The handle must stay alive
/// for the whole run or buffered records are lost.
fn init_logging() -> Option<LoggerHandle> {
    let Some(log_dir) = paths::get_log_dir() else {
        eprintln!("No data directory available, logging to stderr only");
        return None;
    };
    if let Err(err) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {err}", log_dir.display());
        return None;
    }

    let logger = Logger::try_with_env_or_str("info, iced=error, wgpu_hal=error, wgpu_core=error")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(&log_dir)
                        .basename("print_gallery")
                        .suffix("log")
                        .suppress_timestamp(),
                )
                .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                .duplicate_to_stderr(Duplicate::Warn)
                .start()
        });

    match logger {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    paths::init_cli_overrides(args.data_dir, args.config_dir);

    let _logger = init_logging();
    log::info!("Starting Print Gallery {}", env!("CARGO_PKG_VERSION"));

    app::run(args.flags)
}
