mod config;

use anyhow::{Context, Result, anyhow};
use std::ffi::OsString;
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Settings;

/// Print the program arguments as a JSON object.
///
/// No flags are interpreted here: `--help`, `--version` and a leading `--`
/// are all handed to the parser like any other token.
fn main() -> Result<()> {
    let dotenv = config::load_dotenv()?;
    init_tracing();
    if let Some(path) = &dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let settings = Settings::from_env();
    let argv = collect_args(std::env::args_os().skip(1))?;
    tracing::debug!(
        count = argv.len(),
        camel_case = settings.camel_case,
        "converting arguments"
    );

    let json = args2userparams::parse_args_json(&argv, settings.camel_case)
        .context("failed to serialize arguments")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write to stdout")?;
    stdout.flush().context("failed to write to stdout")?;
    Ok(())
}

fn collect_args(args: impl IntoIterator<Item = OsString>) -> Result<Vec<String>> {
    args.into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            arg.into_string().map_err(|raw| {
                anyhow!(
                    "argument #{} is not valid UTF-8: {}",
                    idx + 1,
                    raw.to_string_lossy()
                )
            })
        })
        .collect()
}

// Logs go to stderr; stdout carries only the JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
