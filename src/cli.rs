use crate::repl::{self, ReplMode};
use crate::{evaluate, parse};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const ABOUT: &str = "Monkey - lexer, Pratt parser and tree-walking evaluator";

#[derive(Parser, Debug)]
#[command(name = "monkey", version, about = ABOUT, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive read-parse-print loop
    Repl {
        /// Evaluate each line instead of printing its parse tree
        #[arg(long)]
        eval: bool,
    },
    /// Print the canonical rendering of a source file
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Evaluate a source file and print the result
    Run {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Repl { eval: false }) {
        Commands::Repl { eval } => {
            let mode = if eval { ReplMode::Eval } else { ReplMode::Parse };
            println!("This is the Monkey programming language!");
            println!("Feel free to type in commands.");
            repl::start(io::stdin().lock(), io::stdout().lock(), mode)
                .context("REPL I/O failed")?;
        }
        Commands::Parse { file } => {
            let program = parse_file(&file)?;
            println!("{}", program);
        }
        Commands::Run { file } => {
            let program = parse_file(&file)?;
            if let Some(object) = evaluate(&program) {
                println!("{}", object);
            }
        }
    }
    Ok(())
}

fn parse_file(file: &Path) -> Result<crate::ast::Program> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    tracing::debug!(file = %file.display(), bytes = source.len(), "parsing");

    let (program, errors) = parse(&source);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("\t{}", error);
        }
        bail!("{} parse error(s) in {}", errors.len(), file.display());
    }
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["monkey"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_subcommands_and_verbosity() {
        let cli = Cli::try_parse_from(["monkey", "-vv", "repl", "--eval"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Repl { eval: true })));

        let cli = Cli::try_parse_from(["monkey", "run", "main.mk"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run { ref file }) if file == Path::new("main.mk")));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = parse_file(Path::new("does/not/exist.mk")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
