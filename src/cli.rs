use crate::config::{WatchConfig, UNSET_PRICE};
use crate::error::ConfigError;

#[derive(Debug, PartialEq)]
pub enum CliCommand {
    Watch(WatchConfig),
    Help,
    Version,
}

pub fn version_text() -> String {
    format!("quote-monitor {}", env!("CARGO_PKG_VERSION"))
}

pub fn usage_text() -> String {
    format!(
        "{version}

  Usage: quote-monitor [options]

  -se <stock exchange>     The code of stock exchange
  -ss <stock symbol>       The unique series of letters of a security
  -min <number>            The minimum price watching for
  -max <number>            The maximum price watching for
  -h, --help               Show this help text
  -V, --version            Show version",
        version = version_text()
    )
}

fn take_value<I, S>(flag: &str, inline: Option<&str>, iter: &mut I) -> Result<String, ConfigError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    match inline {
        Some(value) => Ok(value.to_string()),
        None => iter
            .next()
            .map(|value| value.as_ref().to_string())
            .ok_or_else(|| ConfigError::MissingValue(flag.to_string())),
    }
}

fn parse_price_arg(flag: &str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConfigError::InvalidNumber {
            flag: flag.to_string(),
            value: raw.to_string(),
        })
}

/// Parse the full argument list, program name first.
///
/// Flags take their value either as the next argument or inline
/// (`-min=5`), with one or two leading dashes. No arguments at all means
/// help.
pub fn parse_cli_args<I, S>(args: I) -> Result<CliCommand, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = args.into_iter().peekable();
    let _program_name = iter.next();

    if iter.peek().is_none() {
        return Ok(CliCommand::Help);
    }

    let mut exchange: Option<String> = None;
    let mut symbol: Option<String> = None;
    let mut min: Option<f64> = None;
    let mut max: Option<f64> = None;

    while let Some(arg) = iter.next() {
        let arg = arg.as_ref();
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (arg, None),
        };

        match flag {
            "-h" | "-help" | "--help" => return Ok(CliCommand::Help),
            "-V" | "-version" | "--version" => return Ok(CliCommand::Version),
            "-se" | "--se" => exchange = Some(take_value("-se", inline, &mut iter)?),
            "-ss" | "--ss" => symbol = Some(take_value("-ss", inline, &mut iter)?),
            "-min" | "--min" => {
                let raw = take_value("-min", inline, &mut iter)?;
                min = Some(parse_price_arg("-min", &raw)?);
            }
            "-max" | "--max" => {
                let raw = take_value("-max", inline, &mut iter)?;
                max = Some(parse_price_arg("-max", &raw)?);
            }
            _ => return Err(ConfigError::UnknownArgument(arg.to_string())),
        }
    }

    let exchange = exchange.filter(|v| !v.trim().is_empty());
    let symbol = symbol.filter(|v| !v.trim().is_empty());
    let min = min.filter(|v| *v != UNSET_PRICE);
    let max = max.filter(|v| *v != UNSET_PRICE);

    match (exchange, symbol, min, max) {
        (Some(exchange), Some(symbol), Some(min), Some(max)) => {
            WatchConfig::new(&exchange, &symbol, min, max).map(CliCommand::Watch)
        }
        (exchange, symbol, min, max) => {
            let mut missing = Vec::new();
            if exchange.is_none() {
                missing.push("-se");
            }
            if symbol.is_none() {
                missing.push("-ss");
            }
            if min.is_none() {
                missing.push("-min");
            }
            if max.is_none() {
                missing.push("-max");
            }
            Err(ConfigError::MissingArguments(missing))
        }
    }
}
