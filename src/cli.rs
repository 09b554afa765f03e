use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "va-calc",
    version,
    about = "Combined disability rating and sample compensation calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the menu-driven calculator (default)
    Interactive,
    /// Show the combined rating and estimated pay for one set of ratings
    Combine(CombineCommand),
    /// Compare current and proposed ratings
    Compare(CompareCommand),
}

#[derive(Args)]
pub struct CombineCommand {
    /// Individual ratings; values outside 0-100 are stored as 0
    #[arg(allow_negative_numbers = true)]
    pub ratings: Vec<i64>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct CompareCommand {
    /// Comma-separated current ratings
    #[arg(long, value_delimiter = ',', num_args = 0.., allow_negative_numbers = true)]
    pub current: Vec<i64>,
    /// Comma-separated proposed ratings
    #[arg(long, value_delimiter = ',', num_args = 0.., allow_negative_numbers = true)]
    pub proposed: Vec<i64>,
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["va-calc"]).expect("bare invocation should parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn compare_splits_comma_separated_lists() {
        let cli = Cli::try_parse_from(["va-calc", "compare", "--current", "30,20", "--proposed=-5,50"])
            .expect("compare should parse");
        let Some(Commands::Compare(cmd)) = cli.command else {
            panic!("expected compare command");
        };
        assert_eq!(cmd.current, vec![30, 20]);
        assert_eq!(cmd.proposed, vec![-5, 50]);
    }

    #[test]
    fn combine_accepts_negative_ratings() {
        let cli = Cli::try_parse_from(["va-calc", "combine", "150", "-5", "--format", "json"])
            .expect("combine should parse");
        let Some(Commands::Combine(cmd)) = cli.command else {
            panic!("expected combine command");
        };
        assert_eq!(cmd.ratings, vec![150, -5]);
        assert!(matches!(cmd.format, ReportFormat::Json));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["va-calc", "-q", "-v"]).is_err());
    }
}
