use crate::parser::{Phase, QueryComparers};

/// Character cursor over a query string. Tracks the clause the scan has
/// reached so clause keywords are only accepted in grammar order.
#[derive(Debug)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub phase: Phase,
    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            phase: Phase::default(),
            comparers: QueryComparers::new(),
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        if self.eof() {
            return '\0';
        }
        self.text_v[self.position]
    }

    pub fn next(&mut self) -> char {
        let ch = self.current();
        self.position += 1;
        ch
    }

    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && self.current().is_whitespace() {
            self.position += 1;
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position += ahead;
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        if start >= end {
            return String::new();
        }
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// Looks for the keyword that opens the next clause. A clause keyword is
    /// only accepted while the scan has not passed its phase yet, so repeated
    /// or out-of-order clauses fail the check.
    pub fn check_next_phase(&mut self) -> bool {
        self.next_non_whitespace();

        if self.eof() {
            self.phase = Phase::Eof;
            return true;
        }

        if self.phase < Phase::LimitOffset && self.comparers.limit.compare(self) {
            self.phase = Phase::LimitOffset;
            return true;
        }

        if self.phase < Phase::OrderBy && self.comparers.order_by.compare(self) {
            self.phase = Phase::OrderBy;
            return true;
        }

        if self.phase < Phase::Where && self.comparers.r#where.compare(self) {
            self.phase = Phase::Where;
            return true;
        }

        if self.phase < Phase::From && self.comparers.from.compare(self) {
            self.phase = Phase::From;
            return true;
        }

        false
    }
}
