//! Token vocabulary of the Diagra language.

use std::fmt;

/// Reserved words. Any other word is an identifier.
pub const KEYWORDS: [&str; 2] = ["diagram", "node"];

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `diagram` or `node`
    Keyword,
    /// A word, or a run of digits
    Identifier,
    /// Text between double quotes, without the quotes
    String,
    /// `->`
    Arrow,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// One of `=`, `(`, `)`, `,`
    Symbol,
    /// End of input; always the last token
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Keyword => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Arrow => "ARROW",
            Self::LeftBrace => "LBRACE",
            Self::RightBrace => "RBRACE",
            Self::Symbol => "SYMBOL",
            Self::Eof => "EOF",
        };
        f.write_str(s)
    }
}

/// A token: its kind and the literal text it was lexed from.
///
/// The text borrows from the source. For strings it excludes the quotes; for
/// [`TokenKind::Eof`] it is empty. No position information is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    kind: TokenKind,
    text: &'src str,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str) -> Self {
        Self { kind, text }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// A word token, classified as keyword or identifier.
    pub fn word(text: &'src str) -> Self {
        if KEYWORDS.contains(&text) {
            Self::new(TokenKind::Keyword, text)
        } else {
            Self::new(TokenKind::Identifier, text)
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Returns `true` if this is the keyword `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == word
    }

    /// Returns `true` if this is the symbol `symbol`.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == symbol
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "`{}`", self.text),
        }
    }
}
