//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::invocation::DirectiveInvocation;
use crate::parser::lexer::Token;

/// Parse template source into a node tree
pub fn parse(input: &str) -> Result<Document, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    document_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn document_parser<'a, I>() -> impl Parser<'a, I, Document, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let node = recursive(|node| {
        let text = select! {
            Token::Text(s) => Node::Text(s),
        };

        let variable = select! {
            Token::Variable(name) => Node::Variable(name),
        };

        let standalone = select! {
            Token::Tag(contents) => contents,
        }
        .map(|contents| Node::Directive(Directive::new(DirectiveInvocation::parse(&contents), Vec::new())));

        let block_open = select! {
            Token::BlockOpen(contents) => DirectiveInvocation::parse(&contents),
        };

        let block_end = select! {
            Token::BlockEnd(name) => name,
        }
        .labelled("end tag");

        // A block directive owns every node up to its end marker; the end
        // marker must name the same directive.
        let block = block_open
            .then(node.repeated().collect::<Vec<_>>())
            .then(block_end)
            .try_map(|((invocation, body), end_name), span: SimpleSpan| {
                if invocation.name.eq_ignore_ascii_case(&end_name) {
                    Ok(Node::Directive(Directive::new(invocation, body)))
                } else {
                    Err(Rich::custom(
                        span,
                        format!(
                            "'{{% {} %}}' is closed by '{{% end{} %}}', expected '{{% end{} %}}'",
                            invocation.name, end_name, invocation.name
                        ),
                    ))
                }
            });

        choice((text, variable, block, standalone))
            .map_with(|n, e| Spanned::new(n, span_range(&e.span())))
            .boxed()
    });

    // Document is a list of nodes
    node.repeated()
        .collect()
        .then_ignore(end())
        .map(|nodes| Document { nodes })
}
