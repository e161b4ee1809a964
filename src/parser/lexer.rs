//! Lexer for component templates using logos
//!
//! The raw lexer only separates markup from `{% %}`, `{{ }}` and `{# #}`
//! delimiters. [`lex`] then classifies each tag as a block opener, a block end
//! marker or a standalone directive so the grammar can match on token kinds.

use logos::Logos;

use super::ast::{end_marker_of, DirectiveKind};
use super::invocation::split_contents;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
enum RawToken {
    #[regex(r"\{%([^%]|%[^}])*%\}", |lex| inner(lex.slice()))]
    Tag(String),

    #[regex(r"\{\{([^}]|\}[^}])*\}\}", |lex| inner(lex.slice()))]
    Variable(String),

    #[regex(r"\{#([^#]|#[^}])*#\}", logos::skip)]
    Comment,

    // A lone `{` that opens nothing is ordinary text
    #[regex(r"[^{]+", |lex| lex.slice().to_string())]
    #[token("{", |lex| lex.slice().to_string())]
    Text(String),
}

/// Strip the two-character delimiters and surrounding whitespace
fn inner(slice: &str) -> String {
    slice[2..slice.len() - 2].trim().to_string()
}

/// Token stream consumed by the grammar
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Literal markup
    Text(String),
    /// Contents of `{{ ... }}`
    Variable(String),
    /// Contents of a `{% ... %}` tag opening a block directive
    BlockOpen(String),
    /// Name of the block closed by an `{% end... %}` tag
    BlockEnd(String),
    /// Contents of any other `{% ... %}` tag
    Tag(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Text(_) => write!(f, "text"),
            Token::Variable(v) => write!(f, "{{{{ {} }}}}", v),
            Token::BlockOpen(t) | Token::Tag(t) => write!(f, "{{% {} %}}", t),
            Token::BlockEnd(name) => write!(f, "{{% end{} %}}", name),
        }
    }
}

fn classify(contents: String) -> Token {
    let name = split_contents(&contents).into_iter().next().unwrap_or_default();
    if end_marker_of(&name).is_some() {
        // Keep the block name as written after `end`
        return Token::BlockEnd(name[3..].to_string());
    }
    if DirectiveKind::from_name(&name).is_block() {
        Token::BlockOpen(contents)
    } else {
        Token::Tag(contents)
    }
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    RawToken::lexer(input)
        .spanned()
        .filter_map(move |(tok, span)| {
            let tok = match tok {
                Ok(RawToken::Tag(contents)) => classify(contents),
                Ok(RawToken::Variable(name)) => Token::Variable(name),
                Ok(RawToken::Text(text)) => Token::Text(text),
                Ok(RawToken::Comment) => return None,
                // Unterminated delimiters stay in the output as written
                Err(()) => Token::Text(input[span.clone()].to_string()),
            };
            Some((tok, span))
        })
}
