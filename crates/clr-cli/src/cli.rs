//! CLI argument definitions for clr2json.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use clr_cli::config::DEFAULT_BATCH_OUTPUT;
use clr_cli::logging::{LogConfig, LogFormat};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "clr2json",
    version,
    about = "Convert color palette files to JSON",
    long_about = "Convert color palette files to a deterministic, diffable JSON document.\n\n\
                  Without arguments, every palette file in the colors directory\n\
                  (~/Library/Colors by default) is converted into 'palettes.json'.\n\
                  With <INPUT> <OUTPUT>, a single palette file is converted.",
    after_help = "Examples:\n  \
                  clr2json MyPalette.gpl MyPalette.json\n  \
                  clr2json MyPalette.csv -\n  \
                  clr2json --colors-dir ./palettes"
)]
pub struct Cli {
    /// Palette file to convert (single-file mode).
    #[arg(value_name = "INPUT", requires = "output")]
    pub input: Option<PathBuf>,

    /// JSON file to write, or '-' for stdout (single-file mode).
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Directory scanned in batch mode (default: $CLR2JSON_COLORS_DIR or ~/Library/Colors).
    #[arg(long = "colors-dir", value_name = "DIR", conflicts_with = "input")]
    pub colors_dir: Option<PathBuf>,

    /// File written in batch mode.
    #[arg(
        long = "batch-output",
        value_name = "PATH",
        default_value = DEFAULT_BATCH_OUTPUT,
        conflicts_with = "input"
    )]
    pub batch_output: PathBuf,

    /// List the supported palette file formats and exit.
    #[arg(long = "list-formats", conflicts_with_all = ["input", "colors_dir"])]
    pub list_formats: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// What the invocation asks for.
pub enum Mode<'a> {
    ListFormats,
    Batch {
        colors_dir: Option<&'a Path>,
        output: &'a Path,
    },
    Single {
        input: &'a Path,
        output: &'a Path,
    },
}

impl Cli {
    pub fn mode(&self) -> Mode<'_> {
        if self.list_formats {
            return Mode::ListFormats;
        }
        match (&self.input, &self.output) {
            (Some(input), Some(output)) => Mode::Single { input, output },
            _ => Mode::Batch {
                colors_dir: self.colors_dir.as_deref(),
                output: &self.batch_output,
            },
        }
    }

    /// Logging setup for this invocation.
    ///
    /// `--log-level` beats `-v`/`-q`; `RUST_LOG` is honored only when
    /// neither was given. ANSI output follows `--color`, and in `auto`
    /// mode only a terminal stderr gets colors.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.log_level.map(LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: explicit.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !self.verbosity.is_present(),
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_batch() {
        let cli = Cli::try_parse_from(["clr2json"]).unwrap();
        assert!(matches!(
            cli.mode(),
            Mode::Batch { colors_dir: None, output } if output == Path::new("palettes.json")
        ));
    }

    #[test]
    fn two_positionals_is_single() {
        let cli = Cli::try_parse_from(["clr2json", "Brand.gpl", "brand.json"]).unwrap();
        assert!(matches!(
            cli.mode(),
            Mode::Single { input, output }
                if input == Path::new("Brand.gpl") && output == Path::new("brand.json")
        ));
    }

    #[test]
    fn other_shapes_are_rejected() {
        assert!(Cli::try_parse_from(["clr2json", "Brand.gpl"]).is_err());
        assert!(Cli::try_parse_from(["clr2json", "a.gpl", "b.json", "c"]).is_err());
        assert!(Cli::try_parse_from(["clr2json", "a.gpl", "b.json", "--colors-dir", "x"]).is_err());
    }

    #[test]
    fn explicit_log_level_disables_env_filter() {
        let cli = Cli::try_parse_from(["clr2json", "--log-level", "debug", "--log-format", "json"])
            .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);

        let config = Cli::try_parse_from(["clr2json"]).unwrap().log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }

    #[test]
    fn help_is_a_display_request() {
        let err = Cli::try_parse_from(["clr2json", "--help"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = Cli::try_parse_from(["clr2json", "-h"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
