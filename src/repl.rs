// repl.rs

use crate::evaluator::Evaluator;
use crate::lexer::Lexer;
use crate::parser::{ParseError, Parser};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";
pub const FAREWELL: &str = "Sayonara...(_ _)m";
const EXIT_KEYWORDS: [&str; 2] = ["exit", "q"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplMode {
    /// Print the canonical rendering of each parsed line.
    #[default]
    Parse,
    /// Print the evaluated object of each line, if any.
    Eval,
}

pub fn start<R: BufRead, W: Write>(input: R, mut output: W, mode: ReplMode) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let line = line.trim_end_matches('\r');

        if EXIT_KEYWORDS.contains(&line) {
            writeln!(output, "\n{}", FAREWELL)?;
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(line));
        let program = parser.parse_program();

        if !parser.errors.is_empty() {
            print_parse_errors(&mut output, &parser.errors)?;
            continue;
        }

        match mode {
            ReplMode::Parse => writeln!(output, "{}", program)?,
            ReplMode::Eval => {
                if let Some(object) = Evaluator::new().eval(&program) {
                    writeln!(output, "{}", object)?;
                }
            }
        }
    }
}

fn print_parse_errors<W: Write>(output: &mut W, errors: &[ParseError]) -> io::Result<()> {
    for error in errors {
        writeln!(output, "\t{}", error)?;
    }
    Ok(())
}
