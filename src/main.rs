// SPDX-License-Identifier: MPL-2.0
use portfolio::app::paths;
use portfolio::config;
use portfolio::server;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "\
Usage: portfolio [OPTIONS]

Options:
  --port <PORT>        Port to listen on (default from settings, 80)
  --root <DIR>         Directory to serve files from
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

struct Args {
    help: bool,
    port: Option<u16>,
    root: Option<PathBuf>,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        help: args.contains(["-h", "--help"]),
        port: args.opt_value_from_str("--port")?,
        root: args.opt_value_from_os_str("--root", |s| {
            Ok::<PathBuf, std::convert::Infallible>(PathBuf::from(s))
        })?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(parsed)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_filter(env_filter))
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "server failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> portfolio::error::Result<()> {
    paths::init_cli_overrides(args.config_dir);

    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!(%warning, "invalid settings file, using defaults");
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(root) = args.root {
        config.server.root = root;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(&config.server))
}
