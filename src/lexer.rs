use crate::token::{Token, TokenKind};

#[derive(Debug)]
pub struct Lexer {
    input: Vec<char>,
    cur: usize,
    next_cur: usize,
    ch: char,
    finished: bool,
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl Lexer {
    pub fn new(input: &str) -> Lexer {
        let mut lexer = Lexer {
            input: input.chars().collect(),
            cur: 0,
            next_cur: 0,
            ch: '\0',
            finished: false,
        };
        lexer.read();
        lexer
    }

    fn read(&mut self) {
        if self.next_cur >= self.input.len() {
            self.ch = '\0';
        } else {
            self.ch = self.input[self.next_cur];
        }
        self.cur = self.next_cur;
        self.next_cur += 1;
    }

    fn peek(&self) -> char {
        self.input.get(self.next_cur).copied().unwrap_or('\0')
    }

    fn at_end(&self) -> bool {
        self.cur >= self.input.len()
    }

    fn read_number(&mut self) -> Token {
        let current = self.cur;
        while is_numeric(self.ch) {
            self.read();
        }
        let literal = self.input[current..self.cur].iter().collect::<String>();
        Token::new(TokenKind::Int, literal)
    }

    fn read_identifier(&mut self) -> Token {
        let current = self.cur;
        while is_letter(self.ch) {
            self.read();
        }
        let literal = self.input[current..self.cur].iter().collect::<String>();
        Token::new(TokenKind::lookup_ident(&literal), literal)
    }

    /// `=` or `!` optionally followed by `=`.
    fn read_two_char(&mut self, single: TokenKind, double: TokenKind) -> Token {
        if self.peek() == '=' {
            let first = self.ch;
            self.read();
            Token::new(double, format!("{}{}", first, self.ch))
        } else {
            Token::new(single, self.ch.to_string())
        }
    }

    pub fn next_token(&mut self) -> Token {
        while is_whitespace(self.ch) {
            self.read();
        }

        let single = |kind: TokenKind, ch: char| Token::new(kind, ch.to_string());
        let token = match self.ch {
            '=' => self.read_two_char(TokenKind::Assign, TokenKind::Eq),
            '!' => self.read_two_char(TokenKind::Bang, TokenKind::NotEq),
            ';' => single(TokenKind::Semicolon, self.ch),
            '(' => single(TokenKind::LParen, self.ch),
            ')' => single(TokenKind::RParen, self.ch),
            '{' => single(TokenKind::LBrace, self.ch),
            '}' => single(TokenKind::RBrace, self.ch),
            ',' => single(TokenKind::Comma, self.ch),
            '+' => single(TokenKind::Plus, self.ch),
            '-' => single(TokenKind::Minus, self.ch),
            '/' => single(TokenKind::Slash, self.ch),
            '*' => single(TokenKind::Asterisk, self.ch),
            '<' => single(TokenKind::Lt, self.ch),
            '>' => single(TokenKind::Gt, self.ch),
            c if is_numeric(c) => return self.read_number(),
            c if is_letter(c) => return self.read_identifier(),
            '\0' if self.at_end() => return Token::eof(),
            c => single(TokenKind::Illegal, c),
        };

        self.read();
        tracing::trace!(token = %token, "lexed");
        token
    }
}

/// Yields every token up to and including the first `Eof`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}
