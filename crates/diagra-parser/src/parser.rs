//! Parser for Diagra source tokens.
//!
//! This module transforms a token stream from the [`lexer`](super::lexer) into
//! the declarations defined in [`parser_types`](super::parser_types). The
//! public entry point is [`build_diagram`].
//!
//! The grammar is small and the parser is deliberately lenient: positions
//! that expect an identifier or a label take the text of whatever token is
//! there, and unexpected tokens in the body are skipped. Only the violations
//! listed in [`ParseError`] abort parsing.

use log::trace;
use winnow::stream::{Stream, TokenSlice};

use diagra_core::{attribute::AttributeScope, diagram::DiagramKind};

use crate::{
    error::{ParseError, Result},
    parser_types as types,
    tokens::{Token, TokenKind},
};

type Input<'t, 'src> = TokenSlice<'t, Token<'src>>;

/// The current token without consuming it. Past the end this is EOF.
fn peek<'src>(input: &Input<'_, 'src>) -> Token<'src> {
    input.peek_token().copied().unwrap_or_else(Token::eof)
}

/// Consume and return the current token. Past the end this is EOF.
fn advance<'src>(input: &mut Input<'_, 'src>) -> Token<'src> {
    input.next_token().copied().unwrap_or_else(Token::eof)
}

/// Consume the current token if it is the symbol `symbol`.
fn eat_symbol(input: &mut Input<'_, '_>, symbol: &str) -> bool {
    if peek(input).is_symbol(symbol) {
        advance(input);
        true
    } else {
        false
    }
}

/// Parse `"(" (KEY "=" VALUE ","?)* ")"` if the next token opens a list.
///
/// Keys and values take the text of any token. A missing closing paren at
/// end of input is not an error.
fn attributes<'src>(
    input: &mut Input<'_, 'src>,
    scope: AttributeScope,
) -> Result<types::Attributes<'src>> {
    let mut attributes = types::Attributes::new();

    if !eat_symbol(input, "(") {
        return Ok(attributes);
    }

    loop {
        let current = peek(input);
        if current.is_symbol(")") || current.is_eof() {
            break;
        }

        let key = advance(input).text();

        if !eat_symbol(input, "=") {
            return Err(ParseError::MissingEquals {
                scope,
                key: key.to_string(),
                found: peek(input).to_string(),
            });
        }

        let value = advance(input).text();
        attributes.insert(key, value);

        eat_symbol(input, ",");
    }

    eat_symbol(input, ")");
    Ok(attributes)
}

/// Parse `"node" ID LABEL attrs?`; the `node` keyword is already consumed.
fn node_decl<'src>(input: &mut Input<'_, 'src>) -> Result<types::NodeDecl<'src>> {
    let id = advance(input).text();
    let label = advance(input).text();
    let attributes = attributes(input, AttributeScope::Node)?;

    Ok(types::NodeDecl {
        id,
        label,
        attributes,
    })
}

/// Parse `FROM "->" TO STRING? attrs?`; `from` is already consumed.
fn edge_decl<'src>(input: &mut Input<'_, 'src>, from: &'src str) -> Result<types::EdgeDecl<'src>> {
    let arrow = peek(input);
    if arrow.kind() != TokenKind::Arrow {
        return Err(ParseError::MissingArrow {
            from: from.to_string(),
            found: arrow.to_string(),
        });
    }
    advance(input);

    let to = advance(input).text();

    let label = if peek(input).kind() == TokenKind::String {
        Some(advance(input).text())
    } else {
        None
    };

    let attributes = attributes(input, AttributeScope::Edge)?;

    Ok(types::EdgeDecl {
        from,
        to,
        label,
        attributes,
    })
}

/// Parse body items until `}` or end of input.
fn items<'src>(input: &mut Input<'_, 'src>) -> Result<Vec<types::Item<'src>>> {
    let mut items = Vec::new();

    loop {
        let current = peek(input);
        match current.kind() {
            TokenKind::RightBrace | TokenKind::Eof => break,
            TokenKind::Keyword if current.is_keyword("node") => {
                advance(input);
                items.push(types::Item::Node(node_decl(input)?));
            }
            TokenKind::Identifier => {
                advance(input);
                items.push(types::Item::Edge(edge_decl(input, current.text())?));
            }
            _ => {
                trace!(kind:? = current.kind(), text = current.text(); "Skipping token in diagram body");
                advance(input);
            }
        }
    }

    Ok(items)
}

/// Parse `"diagram" TYPE`.
fn diagram_header(input: &mut Input<'_, '_>) -> Result<DiagramKind> {
    let keyword = peek(input);
    if !keyword.is_keyword("diagram") {
        return Err(ParseError::MissingDiagramKeyword {
            found: keyword.to_string(),
        });
    }
    advance(input);

    let name = peek(input);
    if name.kind() != TokenKind::Identifier {
        return Err(ParseError::MissingDiagramType {
            found: name.to_string(),
        });
    }
    advance(input);

    name.text()
        .parse()
        .map_err(|_| ParseError::UnknownDiagramType {
            name: name.text().to_string(),
        })
}

fn diagram<'src>(input: &mut Input<'_, 'src>) -> Result<types::DiagramDecl<'src>> {
    let kind = diagram_header(input)?;
    let attributes = attributes(input, AttributeScope::Diagram)?;

    let open = peek(input);
    if open.kind() != TokenKind::LeftBrace {
        return Err(ParseError::MissingBody {
            found: open.to_string(),
        });
    }
    advance(input);

    let items = items(input)?;

    // The closing brace is optional
    if peek(input).kind() == TokenKind::RightBrace {
        advance(input);
    }

    Ok(types::DiagramDecl {
        kind,
        attributes,
        items,
    })
}

/// Build diagram declarations from tokens.
///
/// Stops at the first structural error. Tokens after the body are ignored.
pub fn build_diagram<'src>(tokens: &[Token<'src>]) -> Result<types::DiagramDecl<'src>> {
    let mut input = TokenSlice::new(tokens);
    let decl = diagram(&mut input)?;

    trace!(items_count = decl.items.len(); "Parsing finished");
    Ok(decl)
}
