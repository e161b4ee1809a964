//! Named-slot fragment templates
//!
//! A slot template is markup with `{{ slot }}` substitutions and
//! `{% if slot %} ... {% endif %}` sections. Slot values are either trusted
//! markup, inserted verbatim, or boolean flags. A slot that was never filled
//! renders as empty and counts as false.

use std::collections::BTreeMap;

use crate::parser::invocation::split_contents;
use crate::parser::lexer::{lex, Token};

use super::registry::TemplateError;

/// Value bound to a slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    /// Pre-rendered HTML
    Markup(String),
    Flag(bool),
}

impl SlotValue {
    /// Non-empty markup or a `true` flag
    pub fn is_truthy(&self) -> bool {
        match self {
            SlotValue::Markup(m) => !m.trim().is_empty(),
            SlotValue::Flag(f) => *f,
        }
    }
}

/// Slot bindings for one template render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots(BTreeMap<String, SlotValue>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to markup, replacing any previous value
    pub fn with_markup(mut self, name: impl Into<String>, markup: impl Into<String>) -> Self {
        self.0.insert(name.into(), SlotValue::Markup(markup.into()));
        self
    }

    pub fn with_flag(mut self, name: impl Into<String>, flag: bool) -> Self {
        self.set_flag(name, flag);
        self
    }

    pub fn set_flag(&mut self, name: impl Into<String>, flag: bool) {
        self.0.insert(name.into(), SlotValue::Flag(flag));
    }

    /// Append markup to `name`, creating the slot if needed
    pub fn append(&mut self, name: &str, markup: &str) {
        match self.0.get_mut(name) {
            Some(SlotValue::Markup(existing)) => existing.push_str(markup),
            _ => {
                self.0
                    .insert(name.to_string(), SlotValue::Markup(markup.to_string()));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&SlotValue> {
        self.0.get(name)
    }

    fn is_truthy(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(SlotValue::is_truthy)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Slot(String),
    Section { slot: String, body: Vec<Segment> },
}

/// A parsed slot template
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTemplate {
    segments: Vec<Segment>,
}

impl SlotTemplate {
    /// Parse template text; `name` is only used in error messages
    pub fn parse(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut open: Vec<(String, Vec<Segment>)> = Vec::new();
        let mut current: Vec<Segment> = Vec::new();

        for (token, span) in lex(source) {
            match token {
                Token::Text(text) => current.push(Segment::Literal(text)),
                Token::Variable(slot) => current.push(Segment::Slot(slot)),
                Token::Tag(contents) => {
                    let bits = split_contents(&contents);
                    match bits.first().map(String::as_str) {
                        Some("if") => {
                            let slot = bits.get(1).cloned().ok_or_else(|| TemplateError::MalformedTag {
                                template: name.to_string(),
                                tag: contents.clone(),
                            })?;
                            open.push((slot, std::mem::take(&mut current)));
                        }
                        Some("endif") => {
                            let (slot, parent) = open.pop().ok_or_else(|| TemplateError::UnexpectedEnd {
                                template: name.to_string(),
                                offset: span.start,
                            })?;
                            let body = std::mem::replace(&mut current, parent);
                            current.push(Segment::Section { slot, body });
                        }
                        // Anything else is passed through untouched
                        _ => current.push(Segment::Literal(source[span].to_string())),
                    }
                }
                Token::BlockOpen(_) | Token::BlockEnd(_) => {
                    current.push(Segment::Literal(source[span].to_string()))
                }
            }
        }

        if let Some((slot, _)) = open.pop() {
            return Err(TemplateError::UnclosedSection {
                template: name.to_string(),
                slot,
            });
        }

        Ok(Self { segments: current })
    }

    /// Fill the template
    pub fn render(&self, slots: &Slots) -> String {
        let mut out = String::new();
        render_segments(&self.segments, slots, &mut out);
        out
    }
}

fn render_segments(segments: &[Segment], slots: &Slots, out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Slot(name) => match slots.get(name) {
                Some(SlotValue::Markup(m)) => out.push_str(m),
                Some(SlotValue::Flag(f)) => out.push_str(if *f { "true" } else { "false" }),
                None => {}
            },
            Segment::Section { slot, body } => {
                if slots.is_truthy(slot) {
                    render_segments(body, slots, out);
                }
            }
        }
    }
}
