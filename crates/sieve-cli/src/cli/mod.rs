use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{BatchArgs, CanonArgs, CanonFlags, Commands};

/// Top-level CLI parser for the `sieve` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sieve",
    version,
    about = "sieve - deterministic HTML canonicalization"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Summary format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress bar)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use sieve_core::{EmptyPolicy, Mode};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn batch_parses_directories_and_overrides() {
        let cli = Cli::try_parse_from([
            "sieve",
            "--format",
            "raw",
            "batch",
            "in",
            "out",
            "--mode",
            "structured",
            "--empty-policy",
            "placeholder",
            "-j",
            "4",
            "--extensions",
            "html,htm",
            "--create-output",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        let Commands::Batch(args) = cli.command else {
            panic!("expected batch command");
        };
        assert_eq!(args.input_dir, Path::new("in"));
        assert_eq!(args.output_dir, Path::new("out"));
        assert_eq!(args.canon.mode, Some(Mode::Structured));
        assert_eq!(args.canon.empty_policy, Some(EmptyPolicy::Placeholder));
        assert_eq!(args.workers, Some(4));
        assert_eq!(
            args.extensions,
            Some(vec!["html".to_string(), "htm".to_string()])
        );
        assert!(args.create_output);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sieve", "canon", "page.html", "--quiet", "--verbose"])
            .expect("cli should parse");

        assert!(cli.quiet);
        assert!(cli.verbose);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Canon(_)));
    }

    #[test]
    fn strip_tags_without_values_means_strip_nothing() {
        let cli = Cli::try_parse_from(["sieve", "canon", "page.html", "--strip-tags"])
            .expect("cli should parse");
        let Commands::Canon(args) = cli.command else {
            panic!("expected canon command");
        };
        assert_eq!(args.canon.strip_tags, Some(Vec::new()));

        let cli = Cli::try_parse_from(["sieve", "canon", "page.html", "--strip-tags", "nav,style"])
            .expect("cli should parse");
        let Commands::Canon(args) = cli.command else {
            panic!("expected canon command");
        };
        assert_eq!(
            args.canon.strip_tags,
            Some(vec!["nav".to_string(), "style".to_string()])
        );
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["sieve", "canon", "x.html", "--mode", "json"]).is_err());
        assert!(Cli::try_parse_from(["sieve", "--format", "table", "canon", "x.html"]).is_err());
    }
}
