// SPDX-License-Identifier: MPL-2.0
use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use iiif_gallery::app::{self, paths, Flags};

const HELP: &str = "\
iiif_gallery - browse the pages of a IIIF manifest

USAGE:
    iiif_gallery [OPTIONS] [MANIFEST]

OPTIONS:
    --lang <LANG>         UI language (e.g. en-US, de)
    --config-dir <DIR>    Directory for settings and logs
    -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let (lang, config_dir) = match parse_options(&mut args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };
    let manifest_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir);
    let _logger = start_logger();

    log::info!("Starting iiif_gallery {}", env!("CARGO_PKG_VERSION"));

    app::run(Flags {
        lang,
        manifest_path,
    })
}

/// Logs to a rotating file in the config directory, and to stderr when no
/// such directory is available. Warnings are always duplicated to stderr.
/// Reads `--lang` and `--config-dir`. A flag given without a usable value
/// is an error rather than being ignored.
fn parse_options(
    args: &mut pico_args::Arguments,
) -> Result<(Option<String>, Option<String>), pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    Ok((lang, config_dir))
}

fn start_logger() -> Option<LoggerHandle> {
    let spec = "info, iced=error, wgpu_hal=error, wgpu_core=error";
    let logger = Logger::try_with_env_or_str(spec).ok()?;

    let logger = match paths::get_app_config_dir() {
        Some(dir) => logger
            .log_to_file(
                FileSpec::default()
                    .directory(dir)
                    .basename("iiif_gallery")
                    .suffix("log")
                    .suppress_timestamp(),
            )
            .rotate(
                Criterion::Size(64 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .duplicate_to_stderr(Duplicate::Warn),
        None => logger,
    };

    match logger.start() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Logging disabled: {err}");
            None
        }
    }
}
