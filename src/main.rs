// SPDX-License-Identifier: MPL-2.0
use iced_food::app::{self, paths, Flags};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "iced_food=info";

const HELP: &str = "\
IcedFood - browse foods, pick extras and keep favorites

USAGE:
  iced_food [OPTIONS]

OPTIONS:
  -h, --help              Print this help and exit
  --lang <id>             UI language (e.g. en-US, pt-BR)
  --api-url <url>         Backend base URL, overrides [api].base_url
  --config-dir <dir>      Directory holding settings.toml

ENVIRONMENT:
  ICED_FOOD_CONFIG_DIR    Config directory when --config-dir is absent
  RUST_LOG                Log filter (default: iced_food=info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting IcedFood");

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
