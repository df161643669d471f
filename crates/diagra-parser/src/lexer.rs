//! Lexical analyzer for Diagra source text.
//!
//! The lexer converts source text into a sequence of [`Token`]s. It never
//! fails: whitespace and characters outside the token vocabulary are skipped,
//! and an unterminated string runs to the end of input. The sequence always
//! ends with exactly one [`TokenKind::Eof`] token.
//!
//! The public entry point is [`tokenize`].

use log::trace;
use winnow::{
    Parser as _,
    combinator::{alt, delimited, opt},
    error::ModalResult,
    stream::Stream,
    token::{any, literal, one_of, take_while},
};

use crate::tokens::{Token, TokenKind};

type Input<'a> = &'a str;
/// Every rule yields `None` for input that is consumed without a token.
type IResult<'a> = ModalResult<Option<Token<'a>>>;

/// Skip a run of whitespace
fn whitespace<'a>(input: &mut Input<'a>) -> IResult<'a> {
    take_while(1.., char::is_whitespace)
        .value(None)
        .parse_next(input)
}

/// Parse a word: a letter followed by letters and digits
///
/// Letters are Unicode `Alphabetic` and digits Unicode `Numeric`, so letter
/// numbers such as `Ⅻ` start a word.
fn word<'a>(input: &mut Input<'a>) -> IResult<'a> {
    (
        one_of(|c: char| c.is_alphabetic()),
        take_while(0.., |c: char| c.is_alphabetic() || c.is_numeric()),
    )
        .take()
        .map(|text: &'a str| Some(Token::word(text)))
        .parse_next(input)
}

/// Parse a run of digits. Digits are not a numeric kind of their own.
///
/// Any Unicode `Numeric` character counts, including `½` and `²`.
fn digits<'a>(input: &mut Input<'a>) -> IResult<'a> {
    take_while(1.., |c: char| c.is_numeric())
        .map(|text: &'a str| Some(Token::new(TokenKind::Identifier, text)))
        .parse_next(input)
}

/// Parse a string literal. There are no escapes, and a missing closing quote
/// is not an error.
fn string_literal<'a>(input: &mut Input<'a>) -> IResult<'a> {
    delimited('"', take_while(0.., |c: char| c != '"'), opt('"'))
        .map(|text: &'a str| Some(Token::new(TokenKind::String, text)))
        .parse_next(input)
}

/// Parse `->`
fn arrow<'a>(input: &mut Input<'a>) -> IResult<'a> {
    literal("->")
        .map(|text: &'a str| Some(Token::new(TokenKind::Arrow, text)))
        .parse_next(input)
}

/// Parse `{` or `}`
fn brace<'a>(input: &mut Input<'a>) -> IResult<'a> {
    alt((
        literal("{").map(|text: &'a str| Some(Token::new(TokenKind::LeftBrace, text))),
        literal("}").map(|text: &'a str| Some(Token::new(TokenKind::RightBrace, text))),
    ))
    .parse_next(input)
}

/// Parse one of the symbols `=`, `(`, `)`, `,`
fn symbol<'a>(input: &mut Input<'a>) -> IResult<'a> {
    one_of(['=', '(', ')', ','])
        .take()
        .map(|text: &'a str| Some(Token::new(TokenKind::Symbol, text)))
        .parse_next(input)
}

/// Consume any other character without producing a token
fn unrecognized<'a>(input: &mut Input<'a>) -> IResult<'a> {
    any.map(|character: char| {
        trace!(character:?; "Skipping unrecognized character");
        None
    })
    .parse_next(input)
}

/// Parse a single token, or skip input that does not form one
fn token<'a>(input: &mut Input<'a>) -> IResult<'a> {
    alt((
        whitespace,
        word,           // Must come before digits
        digits,
        string_literal,
        arrow,          // Must come before unrecognized, which would eat `-`
        brace,
        symbol,
        unrecognized,
    ))
    .parse_next(input)
}

/// Convert source text into tokens.
///
/// Tokens borrow their text from `source`. The last token is always
/// [`TokenKind::Eof`].
///
/// # Examples
///
/// ```
/// # use diagra_parser::{tokenize, TokenKind};
/// let tokens = tokenize(r#"node A "Start""#);
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Keyword, TokenKind::Identifier, TokenKind::String, TokenKind::Eof]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut input = source;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        match token(&mut input) {
            Ok(Some(token)) => tokens.push(token),
            Ok(None) => {}
            Err(_) => {
                // `unrecognized` accepts any character, so only skip ahead
                input.next_token();
            }
        }
    }

    tokens.push(Token::eof());
    trace!(tokens_count = tokens.len(); "Lexing finished");
    tokens
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn kinds_and_texts(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source)
            .into_iter()
            .map(|token| (token.kind(), token.text()))
            .collect()
    }

    #[test]
    fn test_simple_diagram() {
        let source = r#"
            diagram flowchart {
                node A "Start"
                node B "Bearbeta"
                A -> B "Går vidare"
            }
        "#;

        let expected = vec![
            (TokenKind::Keyword, "diagram"),
            (TokenKind::Identifier, "flowchart"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::Keyword, "node"),
            (TokenKind::Identifier, "A"),
            (TokenKind::String, "Start"),
            (TokenKind::Keyword, "node"),
            (TokenKind::Identifier, "B"),
            (TokenKind::String, "Bearbeta"),
            (TokenKind::Identifier, "A"),
            (TokenKind::Arrow, "->"),
            (TokenKind::Identifier, "B"),
            (TokenKind::String, "Går vidare"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Eof, ""),
        ];

        assert_eq!(kinds_and_texts(source), expected);
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        assert_eq!(kinds_and_texts(""), vec![(TokenKind::Eof, "")]);
        assert_eq!(kinds_and_texts(" \t\n "), vec![(TokenKind::Eof, "")]);
    }

    #[test]
    fn test_keywords_need_whole_word() {
        assert_eq!(
            kinds_and_texts("node nodeA diagram2"),
            vec![
                (TokenKind::Keyword, "node"),
                (TokenKind::Identifier, "nodeA"),
                (TokenKind::Identifier, "diagram2"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_digits_are_identifiers() {
        assert_eq!(
            kinds_and_texts("width=3 42abc"),
            vec![
                (TokenKind::Identifier, "width"),
                (TokenKind::Symbol, "="),
                (TokenKind::Identifier, "3"),
                // A digit run stops at the first letter
                (TokenKind::Identifier, "42"),
                (TokenKind::Identifier, "abc"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_letters_then_digits_form_one_word() {
        assert_eq!(
            kinds_and_texts("step12"),
            vec![(TokenKind::Identifier, "step12"), (TokenKind::Eof, "")]
        );
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(
            kinds_and_texts(r#"node A "never closed }"#),
            vec![
                (TokenKind::Keyword, "node"),
                (TokenKind::Identifier, "A"),
                (TokenKind::String, "never closed }"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(
            kinds_and_texts(r#""""#),
            vec![(TokenKind::String, ""), (TokenKind::Eof, "")]
        );
    }

    #[test]
    fn test_strings_have_no_escapes() {
        // The backslash is kept and the second quote closes the string
        assert_eq!(
            kinds_and_texts(r#""a\"b""#),
            vec![
                (TokenKind::String, "a\\"),
                (TokenKind::Identifier, "b"),
                (TokenKind::String, ""),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_symbols_and_braces() {
        assert_eq!(
            kinds_and_texts("(color=red, shape=ellipse){}"),
            vec![
                (TokenKind::Symbol, "("),
                (TokenKind::Identifier, "color"),
                (TokenKind::Symbol, "="),
                (TokenKind::Identifier, "red"),
                (TokenKind::Symbol, ","),
                (TokenKind::Identifier, "shape"),
                (TokenKind::Symbol, "="),
                (TokenKind::Identifier, "ellipse"),
                (TokenKind::Symbol, ")"),
                (TokenKind::LeftBrace, "{"),
                (TokenKind::RightBrace, "}"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_unrecognized_characters_are_skipped() {
        // `#` is not part of the vocabulary, so `#e0f7fa` loses its hash
        assert_eq!(
            kinds_and_texts("A - > B ; #e0f7fa @"),
            vec![
                (TokenKind::Identifier, "A"),
                (TokenKind::Identifier, "B"),
                (TokenKind::Identifier, "e0f7fa"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_arrow_without_spaces() {
        assert_eq!(
            kinds_and_texts("A->B"),
            vec![
                (TokenKind::Identifier, "A"),
                (TokenKind::Arrow, "->"),
                (TokenKind::Identifier, "B"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(
            kinds_and_texts("nod Ärende"),
            vec![
                (TokenKind::Identifier, "nod"),
                (TokenKind::Identifier, "Ärende"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_unicode_numerics_are_identifiers() {
        assert_eq!(
            kinds_and_texts("½ ² Ⅻ"),
            vec![
                (TokenKind::Identifier, "½"),
                (TokenKind::Identifier, "²"),
                (TokenKind::Identifier, "Ⅻ"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_always_ends_with_single_eof(source in "\\PC*") {
            let tokens = tokenize(&source);
            prop_assert!(tokens.last().is_some_and(Token::is_eof));
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        }

        #[test]
        fn prop_whitespace_never_tokenized(source in "[a-z \\t\\n(){}=,\"-]*") {
            for token in tokenize(&source) {
                if token.kind() != TokenKind::String {
                    prop_assert!(!token.text().chars().any(char::is_whitespace));
                }
            }
        }
    }
}
