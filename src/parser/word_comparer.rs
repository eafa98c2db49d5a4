use crate::parser::QueryParser;

/// Case-insensitive keyword matcher. A comparer matches when its word sits at
/// the cursor and the character after the word satisfies one of the
/// configured postfix constraints (or the input ends there, when `eof` is
/// allowed).
#[derive(Debug, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    whitespace_postfix: bool,
    eof: bool,
    optional_postfix: Vec<char>,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        Self {
            length: word.chars().count(),
            word: word.to_uppercase().chars().collect(),
            whitespace_postfix: false,
            eof: false,
            optional_postfix: vec![],
        }
    }

    pub fn with_whitespace_postfix(mut self) -> Self {
        self.whitespace_postfix = true;
        self
    }

    pub fn with_eof(mut self) -> Self {
        self.eof = true;
        self
    }

    pub fn with_optional_postfix(mut self, value: char) -> Self {
        self.optional_postfix.push(value);
        self
    }

    pub fn is_break_line(ch: char) -> bool {
        ch == '\r' || ch == '\n'
    }

    pub fn is_current_break_line(parser: &QueryParser) -> bool {
        Self::is_break_line(parser.current())
    }

    pub fn reach_eof(&self, parser: &QueryParser) -> bool {
        parser.position + self.length >= parser.length
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        let mut position = 0;
        while position < self.length {
            if (parser.position + position) >= parser.length
                || self.word[position] != parser.text_v[parser.position + position].to_ascii_uppercase()
            {
                return false;
            }
            position += 1;
        }

        if self.reach_eof(parser) {
            return self.eof;
        }

        if !self.whitespace_postfix && self.optional_postfix.is_empty() {
            return true;
        }

        let next = parser.text_v[parser.position + position];

        if self.whitespace_postfix && next.is_whitespace() {
            return true;
        }

        self.optional_postfix.iter().any(|value| *value == next)
    }
}
