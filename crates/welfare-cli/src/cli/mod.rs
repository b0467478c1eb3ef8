use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `welfare` binary.
#[derive(Debug, Parser)]
#[command(
    name = "welfare",
    version,
    about = "Animal welfare tracker - evaluations, scores and alerts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory holding `.welfare/` (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{AnimalCommands, EvaluationCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "welfare",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["welfare", "alerts", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Alerts));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["welfare", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["welfare", "--project", "/tmp/zoo", "dashboard"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project, Some(std::path::PathBuf::from("/tmp/zoo")));
    }

    #[test]
    fn submit_collects_repeated_answers() {
        let cli = Cli::try_parse_from([
            "welfare",
            "evaluation",
            "submit",
            "--animal",
            "ani-1a2b3c4d",
            "--answer",
            "q01=A",
            "--answer",
            "q02=4:slightly thin",
            "--allow-incomplete",
        ])
        .expect("cli should parse");

        let Commands::Evaluation {
            action:
                EvaluationCommands::Submit {
                    animal,
                    answers,
                    allow_incomplete,
                    ..
                },
        } = cli.command
        else {
            panic!("expected evaluation submit");
        };
        assert_eq!(animal, "ani-1a2b3c4d");
        assert_eq!(answers, vec!["q01=A", "q02=4:slightly thin"]);
        assert!(allow_incomplete);
    }

    #[test]
    fn confidence_outside_one_to_five_rejected_by_parser() {
        let parsed = Cli::try_parse_from([
            "welfare",
            "evaluation",
            "submit",
            "--animal",
            "ani-1",
            "--confidence",
            "9",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn animal_add_parses_birth_date() {
        let cli = Cli::try_parse_from([
            "welfare",
            "animal",
            "add",
            "--name",
            "Kiara",
            "--species",
            "Panthera leo",
            "--birth-date",
            "2016-11-03",
        ])
        .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Animal {
                action: AnimalCommands::Add { .. }
            }
        ));

        let bad = Cli::try_parse_from([
            "welfare",
            "animal",
            "add",
            "--name",
            "Kiara",
            "--species",
            "Panthera leo",
            "--birth-date",
            "03/11/2016",
        ]);
        assert!(bad.is_err());
    }
}
