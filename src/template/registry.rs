//! Template registry for storing and retrieving named slot templates

use std::collections::HashMap;

use thiserror::Error;

use super::defaults::BUILTIN_TEMPLATES;
use super::slots::{SlotTemplate, Slots};

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found in registry
    #[error("template not found: {name}")]
    NotFound { name: String },

    /// `{% if %}` without a matching `{% endif %}`
    #[error("unclosed section '{slot}' in template {template}")]
    UnclosedSection { template: String, slot: String },

    /// `{% endif %}` with nothing open
    #[error("unexpected endif at byte {offset} in template {template}")]
    UnexpectedEnd { template: String, offset: usize },

    /// A section tag missing its slot name
    #[error("malformed tag '{tag}' in template {template}")]
    MalformedTag { template: String, tag: String },
}

/// Registry of named slot templates
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, SlotTemplate>,
}

impl TemplateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in component templates
    pub fn with_builtins() -> Result<Self, TemplateError> {
        let mut registry = Self::new();
        for (name, source) in BUILTIN_TEMPLATES {
            registry.register(name, source)?;
        }
        Ok(registry)
    }

    /// Parse and register a template, replacing any existing one of that name
    pub fn register(&mut self, name: &str, source: &str) -> Result<(), TemplateError> {
        let template = SlotTemplate::parse(name, source)?;
        if self.templates.insert(name.to_string(), template).is_some() {
            log::debug!("template '{}' overridden", name);
        }
        Ok(())
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Option<&SlotTemplate> {
        self.templates.get(name)
    }

    /// Check if a template exists
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Get all template names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(|s| s.as_str())
    }

    /// Fill the named template with `slots`
    pub fn render(&self, name: &str, slots: &Slots) -> Result<String, TemplateError> {
        self.get(name)
            .map(|t| t.render(slots))
            .ok_or_else(|| TemplateError::NotFound {
                name: name.to_string(),
            })
    }
}
