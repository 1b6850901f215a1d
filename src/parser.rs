use crate::ast::*;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // add(x)
}

const PRECEDENCES: [(TokenKind, Precedence); 9] = [
    (TokenKind::Eq, Precedence::Equals),
    (TokenKind::NotEq, Precedence::Equals),
    (TokenKind::Lt, Precedence::LessGreater),
    (TokenKind::Gt, Precedence::LessGreater),
    (TokenKind::Plus, Precedence::Sum),
    (TokenKind::Minus, Precedence::Sum),
    (TokenKind::Asterisk, Precedence::Product),
    (TokenKind::Slash, Precedence::Product),
    (TokenKind::LParen, Precedence::Call),
];

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("expected next token type to be {want}, but got {got}")]
    UnexpectedToken { want: TokenKind, got: TokenKind },
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}

pub type ParseErrors = Vec<ParseError>;

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

pub struct Parser {
    lexer: Lexer,
    pub curr: Token,
    pub peek: Token,
    pub errors: ParseErrors,
    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn>,
    precedences: HashMap<TokenKind, Precedence>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            curr: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
            precedences: PRECEDENCES.into_iter().collect(),
        };

        parser.register_prefix(TokenKind::Ident, Parser::parse_identifier);
        parser.register_prefix(TokenKind::Int, Parser::parse_integer_literal);
        parser.register_prefix(TokenKind::True, Parser::parse_boolean);
        parser.register_prefix(TokenKind::False, Parser::parse_boolean);
        parser.register_prefix(TokenKind::Bang, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::Minus, Parser::parse_prefix_expression);
        parser.register_prefix(TokenKind::LParen, Parser::parse_grouped_expression);
        parser.register_prefix(TokenKind::If, Parser::parse_if_expression);
        parser.register_prefix(TokenKind::Function, Parser::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            parser.register_infix(kind, Parser::parse_infix_expression);
        }
        parser.register_infix(TokenKind::LParen, Parser::parse_call_expression);

        // Fill curr and peek.
        parser.next_token();
        parser.next_token();
        parser
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    fn register_prefix(&mut self, kind: TokenKind, f: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, f);
    }

    fn register_infix(&mut self, kind: TokenKind, f: InfixParseFn) {
        self.infix_parse_fns.insert(kind, f);
    }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.curr = std::mem::replace(&mut self.peek, next);
    }

    fn push_error(&mut self, error: ParseError) {
        tracing::debug!(%error, "parse error");
        self.errors.push(error);
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();
        while !self.curr_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }
        tracing::trace!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.curr.clone();
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.curr_identifier();

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Let(LetStatement {
            token,
            name,
            value: value?,
        }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.curr.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Return(ReturnStatement {
            token,
            value: value?,
        }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.curr.clone();
        let expression = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Expression(ExpressionStatement {
            token,
            expression: expression?,
        }))
    }

    /// Consumes an optional statement terminator, also after a failed
    /// expression so the `;` is not parsed as the next statement.
    fn skip_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    fn curr_token_is(&self, kind: TokenKind) -> bool {
        self.curr.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    fn peek_error(&mut self, kind: TokenKind) {
        self.push_error(ParseError::UnexpectedToken {
            want: kind,
            got: self.peek.kind,
        });
    }

    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek.kind)
    }

    fn curr_precedence(&self) -> Precedence {
        self.precedence_of(self.curr.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedences
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.curr.kind).copied() else {
            self.push_error(ParseError::NoPrefixParseFn(self.curr.kind));
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns.get(&self.peek.kind).copied() else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn curr_identifier(&self) -> Identifier {
        Identifier {
            token: self.curr.clone(),
            value: self.curr.literal.clone(),
        }
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.curr_identifier()))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.curr.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(IntegerLiteral {
                token: self.curr.clone(),
                value,
            })),
            Err(_) => {
                self.push_error(ParseError::InvalidInteger(self.curr.literal.clone()));
                None
            }
        }
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(BooleanLiteral {
            token: self.curr.clone(),
            value: self.curr_token_is(TokenKind::True),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest);
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        expression
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.curr.clone();
        let operator = token.literal.clone();

        self.next_token();
        self.parse_expression(Precedence::Prefix).map(|right| {
            Expression::Prefix(PrefixExpression {
                token,
                operator,
                right: Box::new(right),
            })
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.curr.clone();
        let operator = token.literal.clone();
        let precedence = self.curr_precedence();

        self.next_token();
        self.parse_expression(precedence).map(|right| {
            Expression::Infix(InfixExpression {
                token,
                left: Box::new(left),
                operator,
                right: Box::new(right),
            })
        })
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.curr.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let mut alternative = None;
        if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            alternative = Some(self.parse_block_statement());
        }

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    /// Expects `curr` on the opening `{` and leaves it on the closing `}`
    /// (or `Eof`).
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.curr.clone();
        let mut statements = vec![];
        self.next_token();

        while !self.curr_token_is(TokenKind::RBrace) && !self.curr_token_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.curr.clone();
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut params = vec![];
        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(params);
        }

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        params.push(self.curr_identifier());

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(self.curr_identifier());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.curr.clone();
        let arguments = self.parse_call_arguments()?;
        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut arguments = vec![];
        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Some(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token(); // consume comma
            self.next_token(); // move to next argument
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(arguments)
    }
}
