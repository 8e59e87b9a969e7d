use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth_tagger_core::{
    CategoryTable, Result, Summary, Tagger, TaggerOptions, FALLBACK_CATEGORY, SUMMARY_HEADER,
};

mod args;
use args::{Cli, Commands, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);
    debug!("Arguments: {:?}", cli);

    let result = match cli.command {
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None if cli.list_categories => {
            handle_list_categories(&CategoryTable::builtin());
            Ok(())
        }
        None => match cli.input.as_deref() {
            Some(input) => handle_tag(input, &cli.output, cli.json),
            None => {
                Cli::command().print_help().ok();
                Ok(())
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("auth_tagger={level},auth_tagger_core={level}"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "auth-tagger", &mut io::stdout());
}

fn handle_list_categories(table: &CategoryTable) {
    println!();
    for cat in table.all() {
        println!("{} {}", cat.name.cyan().bold(), cat.description.dimmed());
        for pattern in &cat.patterns {
            println!("  {}", pattern);
        }
    }
    println!(
        "{} {}",
        FALLBACK_CATEGORY.cyan().bold(),
        "Lines matching no pattern".dimmed()
    );
    println!();
}

fn handle_tag(input: &Path, output: &Path, json: bool) -> Result<()> {
    let tagger = Tagger::builtin()?;
    let options = TaggerOptions::new(input, output);
    let summary = tagger.process(&options)?;

    if json {
        println!("{}", summary.to_json()?);
    } else {
        write_summary(&mut io::stdout().lock(), &summary).ok();
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, summary: &Summary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", SUMMARY_HEADER.green().bold())?;
    write!(out, "{}", summary.counts_text())
}
