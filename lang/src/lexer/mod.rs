pub mod token;

pub use token::{Position, Token, TokenKind};


/// Tokenize source text into a flat token sequence.
///
/// Total function: malformed input is encoded as `InvalidIdentifier` or
/// `Unknown` tokens instead of errors, so validity checks stay with the
/// parser. The sequence ends with a single `Eof` token, with one exception:
/// a numeric literal containing a second decimal point stops the scan
/// immediately and the truncated sequence carries no `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).run()
}

struct Tokenizer {
    input: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
    truncated: bool,
}

impl Tokenizer {
    fn new(source: &str) -> Self {
        Self {
            input: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            truncated: false,
        }
    }

    fn run(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                break;
            }

            tokens.push(self.next_token());

            if self.truncated {
                return tokens;
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.current_position()));
        tokens
    }

    fn next_token(&mut self) -> Token {
        let start = self.current_position();
        let ch = self.peek();

        if is_identifier_start(ch) {
            return self.scan_identifier(start);
        }
        if ch.is_ascii_digit() {
            return self.scan_number(start);
        }
        if ch == '"' {
            return self.scan_string(start);
        }
        if ch == '/' && self.peek_next() == Some('/') {
            return self.scan_line_comment(start);
        }
        if ch == '/' && self.peek_next() == Some('*') {
            return self.scan_block_comment(start);
        }

        self.scan_symbol(start)
    }

    fn scan_identifier(&mut self, start: Position) -> Token {
        let mut text = String::new();

        while !self.is_at_end() && is_identifier_continue(self.peek()) {
            text.push(self.advance());
        }

        let kind = match text.as_str() {
            "true" | "false" => TokenKind::BoolLit,
            "fn" => TokenKind::Fn,
            "int" => TokenKind::Int,
            "float" => TokenKind::Float,
            "string" => TokenKind::String,
            "bool" => TokenKind::Bool,
            "return" => TokenKind::Return,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "while" => TokenKind::While,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            _ => TokenKind::Identifier,
        };

        Token::new(kind, text, start)
    }

    fn scan_number(&mut self, start: Position) -> Token {
        let mut text = String::new();
        let mut dot_seen = false;

        while !self.is_at_end() {
            match self.peek() {
                '0'..='9' => text.push(self.advance()),
                '.' => {
                    if dot_seen {
                        // Second decimal point: emit what was accumulated and
                        // stop the scan entirely; no trailing Eof is emitted.
                        self.truncated = true;
                        return Token::new(TokenKind::InvalidIdentifier, text, start);
                    }
                    dot_seen = true;
                    text.push(self.advance());
                }
                _ => break,
            }
        }

        // A letter or underscore glued to the digits makes the whole run an
        // invalid identifier (e.g. `123abc`).
        if !self.is_at_end() && (self.peek().is_ascii_alphabetic() || self.peek() == '_') {
            while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '_') {
                text.push(self.advance());
            }
            return Token::new(TokenKind::InvalidIdentifier, text, start);
        }

        let kind = if dot_seen {
            TokenKind::FloatLit
        } else {
            TokenKind::IntLit
        };
        Token::new(kind, text, start)
    }

    fn scan_string(&mut self, start: Position) -> Token {
        self.advance(); // opening quote

        let mut value = String::new();

        while !self.is_at_end() && self.peek() != '"' {
            let ch = self.advance();

            if ch == '\\' && !self.is_at_end() {
                let escaped = self.advance();
                match escaped {
                    'n' => value.push('\n'),
                    't' => value.push('\t'),
                    'r' => value.push('\r'),
                    '\\' => value.push('\\'),
                    '"' => value.push('"'),
                    // Unrecognized escapes keep the character, drop the backslash
                    other => value.push(other),
                }
            } else {
                value.push(ch);
            }
        }

        // Unterminated strings close silently at end of input
        if !self.is_at_end() {
            self.advance(); // closing quote
        }

        Token::new(TokenKind::StringLit, value, start)
    }

    fn scan_line_comment(&mut self, start: Position) -> Token {
        self.advance();
        self.advance();

        let mut text = String::new();
        while !self.is_at_end() && self.peek() != '\n' {
            text.push(self.advance());
        }

        Token::new(TokenKind::Comment, text, start)
    }

    fn scan_block_comment(&mut self, start: Position) -> Token {
        self.advance();
        self.advance();

        let mut text = String::new();
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == Some('/') {
                self.advance();
                self.advance();
                return Token::new(TokenKind::Comment, text, start);
            }
            text.push(self.advance());
        }

        // Unterminated block comments keep whatever was captured
        Token::new(TokenKind::Comment, text, start)
    }

    fn scan_symbol(&mut self, start: Position) -> Token {
        let ch = self.advance();

        // Multi-character operators first
        if ch == '=' && self.peek() == '=' {
            self.advance();
            return Token::new(TokenKind::EqualEqual, "==", start);
        }
        if ch == '+' && self.peek() == '+' {
            self.advance();
            return Token::new(TokenKind::Increment, "++", start);
        }
        if ch == '+' && self.peek() == '=' {
            self.advance();
            return Token::new(TokenKind::PlusAssign, "+=", start);
        }

        let kind = match ch {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '<' => TokenKind::Less,
            '>' => TokenKind::Greater,
            '!' => TokenKind::Bang,
            '&' => TokenKind::BitAnd,
            '|' => TokenKind::BitOr,
            '^' => TokenKind::BitXor,
            '~' => TokenKind::BitNot,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '?' => TokenKind::Question,
            '.' => TokenKind::Dot,
            _ => TokenKind::Unknown,
        };

        Token::new(kind, ch.to_string(), start)
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_ascii_whitespace() {
            self.advance();
        }
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn peek(&self) -> char {
        self.input.get(self.position).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn advance(&mut self) -> char {
        let ch = self.peek();
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        ch
    }
}

/// Non-ASCII characters are opaque identifier characters, so non-ASCII
/// identifiers work without any Unicode normalization.
fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || !ch.is_ascii()
}

fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || !ch.is_ascii()
}
