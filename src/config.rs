use crate::interrupt::InterruptMode;
use crate::output::OutputFormat;
use clap::Parser;
use std::num::NonZeroUsize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Obtain a random fixed sized sample from a potentially infinite stream of lines.
#[derive(Parser, Debug)]
#[command(name = "rsampling")]
#[command(version)]
pub struct Cli {
    /// Number of samples to obtain
    #[arg(short = 'n', long = "size", default_value = "16")]
    pub size: NonZeroUsize,

    /// Random seed [default: derived from the current time]
    #[arg(short = 'r', long)]
    pub seed: Option<u64>,

    /// Keep records exactly as read instead of trimming surrounding whitespace
    #[arg(long)]
    pub raw: bool,

    /// How to print the sample
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// What Ctrl-C does while input is still being read
    #[arg(long, value_enum, default_value_t)]
    pub on_interrupt: InterruptMode,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub size: NonZeroUsize,
    pub seed: u64,
    pub trim: bool,
    pub format: OutputFormat,
    pub on_interrupt: InterruptMode,
    pub verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Config {
        Config {
            size: cli.size,
            seed: cli.seed.unwrap_or_else(time_seed),
            trim: !cli.raw,
            format: cli.format,
            on_interrupt: cli.on_interrupt,
            verbose: cli.verbose,
        }
    }
}

/// Sub-second nanoseconds of the wall clock.
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults() {
        let config = Config::from(Cli::try_parse_from(["rsampling", "-r", "99"]).unwrap());
        assert_eq!(config.size.get(), 16);
        assert_eq!(config.seed, 99);
        assert!(config.trim);
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.on_interrupt, InterruptMode::Peek);
    }

    #[test]
    fn all_options() {
        let cli = Cli::try_parse_from([
            "rsampling",
            "-n",
            "3",
            "--seed",
            "7",
            "--raw",
            "--format",
            "json",
            "--on-interrupt",
            "exit",
            "-v",
        ])
        .unwrap();
        let config = Config::from(cli);

        assert_eq!(config.size.get(), 3);
        assert_eq!(config.seed, 7);
        assert!(!config.trim);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.on_interrupt, InterruptMode::Exit);
        assert!(config.verbose);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = Cli::try_parse_from(["rsampling", "-n", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = Cli::try_parse_from(["rsampling", "--version", "-n", "5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
        assert_eq!(err.to_string().trim(), format!("rsampling {}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn time_seed_is_sub_second() {
        assert!(time_seed() < 1_000_000_000);
    }
}
