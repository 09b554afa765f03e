use crate::cli::{Cli, Commands, ReportFormat};
use crate::report::OutputFormat;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings; everything comes from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: &'static str,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        let format = match &cli.command {
            Some(Commands::Combine(cmd)) => cmd.format.into(),
            Some(Commands::Compare(cmd)) => cmd.format.into(),
            Some(Commands::Interactive) | None => OutputFormat::Text,
        };
        Self {
            log_level: log_level(cli.verbose, cli.quiet),
            format,
        }
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => DEFAULT_LOG_LEVEL,
        1 => "info",
        _ => "debug",
    }
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn default_settings_log_warnings() {
        let cli = Cli::try_parse_from(["va-calc"]).expect("bare invocation should parse");
        assert_eq!(Settings::from_cli(&cli), Settings::default());
    }

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(3, false), "debug");
        assert_eq!(log_level(0, true), "error");
    }

    #[test]
    fn format_comes_from_report_subcommands() {
        let cli = Cli::try_parse_from(["va-calc", "combine", "10", "--format", "json"])
            .expect("combine should parse");
        assert_eq!(Settings::from_cli(&cli).format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["va-calc", "-v", "compare", "--current", "10"])
            .expect("compare should parse");
        let settings = Settings::from_cli(&cli);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.log_level, "info");
    }
}
