use crate::parser::{ParseError, QueryParser};

pub struct NumberParser;

impl NumberParser {
    pub fn is_number(parser: &QueryParser) -> bool {
        parser.current().is_ascii_digit()
    }

    /// Unsigned decimal integer, the only number form LIMIT and OFFSET take.
    /// The digits must end at whitespace or at the end of the input.
    pub fn parse(parser: &mut QueryParser) -> Result<usize, ParseError> {
        let pivot = parser.position;

        if !Self::is_number(parser) {
            return ParseError::new("Invalid number value", pivot, parser).err();
        }

        while !parser.eof() && parser.current().is_ascii_digit() {
            parser.next();
        }

        if !parser.eof() && !parser.current().is_whitespace() {
            return ParseError::new("Invalid number value", pivot, parser).err();
        }

        let number = parser.text_from_pivot(pivot);

        number
            .parse::<usize>()
            .map_err(|_| ParseError::new("Number value out of range", pivot, parser))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{tokens::NumberParser, QueryParser};

    #[test]
    pub fn test_number_parser() {
        let text = "42 rest";

        let mut parser = QueryParser::new(text);

        let result = NumberParser::parse(&mut parser).expect("Failed to parse number");

        assert_eq!(result, 42);
        assert_eq!(parser.current(), ' ');
    }

    #[test]
    pub fn test_number_parser_at_eof() {
        let text = "007";

        let mut parser = QueryParser::new(text);

        let result = NumberParser::parse(&mut parser).expect("Failed to parse number");

        assert_eq!(result, 7);
        assert!(parser.eof());
    }

    #[test]
    pub fn test_number_parser_rejects_trailing_garbage() {
        let text = "12abc";

        let mut parser = QueryParser::new(text);

        let result = NumberParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => {
                assert_eq!(err.message, "Invalid number value");
                assert_eq!(err.start, 0);
            }
        }
    }

    #[test]
    pub fn test_number_parser_rejects_non_digit() {
        let text = "abc";

        let mut parser = QueryParser::new(text);

        let result = NumberParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Invalid number value"),
        }
    }

    #[test]
    pub fn test_number_parser_rejects_out_of_range() {
        let text = "99999999999999999999999999999999";

        let mut parser = QueryParser::new(text);

        let result = NumberParser::parse(&mut parser);

        match result {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err.message, "Number value out of range"),
        }
    }
}
