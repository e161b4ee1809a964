//! HTML Components - reusable page fragments as template directives
//!
//! This library provides a parser and renderer for `{% directive %}` page
//! templates: navigation bars, footers, newsletter forms, product cards,
//! icons, inline SVG and deduplicated script includes.
//!
//! # Example
//!
//! ```rust
//! use html_components::render;
//!
//! let html = render("{% navbar %}{% navlink href=/about %}About{% endnavlink %}{% endnavbar %}").unwrap();
//! assert!(html.contains("<nav class=\"navbar\">"));
//! assert!(html.contains("<a href=\"/about\">About</a>"));
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod html;
pub mod icon;
pub mod library;
pub mod parser;
pub mod renderer;
pub mod resources;
pub mod svg;
pub mod template;

pub use config::{ComponentConfig, ConfigError};
pub use context::{AssetResolver, CurrentUser, RenderContext, StaticAssets, User};
pub use error::ParseError;
pub use library::ComponentLibrary;
pub use parser::{parse, Document};
pub use resources::{ApiDeclaration, ResourceRegistry};
pub use svg::SvgError;
pub use template::TemplateError;

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during parsing
    #[error("parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    /// An inline SVG could not be produced
    #[error("svg error: {0}")]
    Svg(#[from] SvgError),

    /// Template lookup failed
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<Vec<ParseError>> for RenderError {
    fn from(errors: Vec<ParseError>) -> Self {
        RenderError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Configuration for a one-shot render
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Library configuration
    pub components: ComponentConfig,
    /// User the page is rendered for
    pub user: User,
    /// Values for `{{ name }}` lookups
    pub variables: BTreeMap<String, String>,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the library configuration
    pub fn with_components(mut self, config: ComponentConfig) -> Self {
        self.components = config;
        self
    }

    /// Set the user the page is rendered for
    pub fn with_user(mut self, user: User) -> Self {
        self.user = user;
        self
    }

    /// Add a template variable
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// Render a page template for an anonymous user with default configuration
///
/// This is the main entry point for one-off rendering. Applications
/// rendering many pages should build a [`ComponentLibrary`] once instead.
///
/// # Example
///
/// ```rust
/// use html_components::render;
///
/// let html = render(r#"
///     {% icon bars %}
///     {% loadapis %}
/// "#).unwrap();
///
/// assert!(html.contains("fa-bars"));
/// assert!(html.contains("kit.fontawesome.com"));
/// ```
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render a page template with custom configuration
///
/// # Example
///
/// ```rust
/// use html_components::{render_with_config, RenderConfig, User};
///
/// let config = RenderConfig::new()
///     .with_user(User::staff())
///     .with_variable("shop", "Lamps & Co");
///
/// let html = render_with_config("{{ shop }} {% navadmin %}", config).unwrap();
/// assert!(html.starts_with("Lamps &amp; Co"));
/// assert!(html.contains("/admin"));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let library = ComponentLibrary::new(config.components)?;

    let mut ctx = library.context(&config.user);
    for (name, value) in config.variables {
        ctx.set_variable(name, value);
    }

    library.render_in(source, &mut ctx)
}
