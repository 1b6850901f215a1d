//! Lexer, Pratt parser and tree-walking evaluator for the Monkey language.
//!
//! ```
//! let (program, errors) = monkey::parse("a + b * c");
//! assert!(errors.is_empty());
//! assert_eq!(program.to_string(), "(a + (b * c))");
//! ```

pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod logger;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;

use ast::Program;
use evaluator::Evaluator;
use lexer::Lexer;
use object::Object;
use parser::{ParseError, Parser};

/// Parses `source` into a possibly partial program. A non-empty error list
/// means the tree is only partially reliable.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.errors)
}

pub fn evaluate(program: &Program) -> Option<Object> {
    Evaluator::new().eval(program)
}
