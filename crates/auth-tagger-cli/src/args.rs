use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use auth_tagger_core::DEFAULT_OUTPUT_DIR;

#[derive(Parser, Debug)]
#[command(name = "auth-tagger")]
#[command(about = "Tag and classify authentication-related endpoints from a URL list")]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Newline-delimited file of URLs or paths
    #[arg(
        short,
        long,
        value_name = "PATH",
        required_unless_present = "list_categories"
    )]
    pub input: Option<PathBuf>,

    /// Folder to save results
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Print the category table and exit
    #[arg(long)]
    pub list_categories: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_with_default_output() {
        let cli = Cli::try_parse_from(["auth-tagger", "-i", "urls.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("urls.txt")));
        assert_eq!(cli.output, PathBuf::from("auth_tags"));
        assert!(!cli.json);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::try_parse_from([
            "auth-tagger",
            "--input",
            "urls.txt",
            "--output",
            "out/tags",
            "--json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.output, PathBuf::from("out/tags"));
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn missing_input_is_an_error() {
        let result = Cli::try_parse_from(["auth-tagger", "-o", "out"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_categories_needs_no_input() {
        let cli = Cli::try_parse_from(["auth-tagger", "--list-categories"]).unwrap();
        assert!(cli.list_categories);
        assert!(cli.input.is_none());
    }

    #[test]
    fn completions_needs_no_input() {
        let cli = Cli::try_parse_from(["auth-tagger", "completions", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["auth-tagger", "-i", "urls.txt", "-v", "-q"]);
        assert!(result.is_err());
    }
}
