//! Command-line argument parsing.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const USAGE: &str = "\
Usage: folio [OPTIONS]

Show the featured GitHub repositories of a portfolio profile.

Options:
  --config <PATH>   Read settings from PATH instead of ~/.config/folio/config.json
  --json            Print the batch result as JSON
  --watch <SECS>    Re-run the batch every SECS seconds
  -h, --help        Print this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub json: bool,
    pub watch: Option<Duration>,
    pub help: bool,
}

impl CliArgs {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().context("--config requires a path")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--json" => parsed.json = true,
                "--watch" => {
                    let secs = args.next().context("--watch requires a number of seconds")?;
                    let secs: u64 = secs
                        .parse()
                        .with_context(|| format!("Invalid --watch interval: {}", secs))?;
                    if secs == 0 {
                        bail!("--watch interval must be at least 1 second");
                    }
                    parsed.watch = Some(Duration::from_secs(secs));
                }
                "-h" | "--help" => parsed.help = true,
                other => bail!("Unknown argument: {}\n\n{}", other, USAGE),
            }
        }

        Ok(parsed)
    }
}
