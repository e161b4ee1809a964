//! Icon resolver
//!
//! Icons are Font Awesome glyphs. Each name maps to a style family prefix
//! (`fab` for brands, `fas` for solid); names missing from the table get an
//! empty prefix. Rendering any icon registers the icon kit loader with the
//! page's resource registry, so the kit script appears exactly once no matter
//! how many icons a page uses.

use std::collections::HashMap;

use crate::html::escape_attr;
use crate::resources::{ApiDeclaration, ResourceRegistry};

/// Default Font Awesome kit loader
pub const DEFAULT_KIT_URL: &str = "https://kit.fontawesome.com/791417c75e.js";

/// Built-in icon name to style prefix table
const ICON_PREFIXES: &[(&str, &str)] = &[
    // Brands
    ("facebook-f", "fab"),
    ("twitter", "fab"),
    ("instagram", "fab"),
    ("youtube", "fab"),
    ("linkedin-in", "fab"),
    // Navigation
    ("bars", "fas"),
    ("times", "fas"),
    ("tools", "fas"),
    // Accounts
    ("user", "fas"),
    ("user-plus", "fas"),
    ("sign-in-alt", "fas"),
    ("sign-out-alt", "fas"),
];

/// Icon prefix table plus the kit script that styles it
#[derive(Debug, Clone)]
pub struct IconSet {
    prefixes: HashMap<String, String>,
    kit_url: String,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(DEFAULT_KIT_URL)
    }
}

impl IconSet {
    /// Built-in table with the given kit URL
    pub fn new(kit_url: impl Into<String>) -> Self {
        Self {
            prefixes: ICON_PREFIXES
                .iter()
                .map(|(name, prefix)| (name.to_string(), prefix.to_string()))
                .collect(),
            kit_url: kit_url.into(),
        }
    }

    /// Add or replace table entries
    pub fn with_prefixes<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.prefixes
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn kit_url(&self) -> &str {
        &self.kit_url
    }

    /// Style prefix for `name`, empty when unknown
    pub fn prefix(&self, name: &str) -> &str {
        self.prefixes.get(name).map(|s| s.as_str()).unwrap_or("")
    }

    /// Render `<i class="PREFIX fa-NAME"></i>` and register the kit loader
    pub fn render(&self, name: &str, resources: &mut ResourceRegistry) -> String {
        resources.register_api(ApiDeclaration::new(self.kit_url.clone()));
        format!(
            "<i class=\"{} fa-{}\"></i>",
            escape_attr(self.prefix(name)),
            escape_attr(name)
        )
    }
}
