//! Collaborators supplied by the surrounding application, and per-pass state
//!
//! The host framework provides the current user and the mapping from asset
//! paths to public URLs. Everything that must not outlive one page render
//! lives in [`RenderContext`].

use std::collections::HashMap;

use crate::resources::ResourceRegistry;

/// Identity of the user the page is rendered for
pub trait CurrentUser {
    fn is_authenticated(&self) -> bool;
    fn is_staff(&self) -> bool;
    fn is_superuser(&self) -> bool;
}

/// Maps a relative asset path to the URL a browser should fetch
pub trait AssetResolver {
    fn resolve(&self, path: &str) -> String;
}

/// Plain-data user suitable for tests and the CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct User {
    pub authenticated: bool,
    pub staff: bool,
    pub superuser: bool,
}

impl User {
    /// Not logged in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Logged in, no extra permissions
    pub fn member() -> Self {
        Self {
            authenticated: true,
            ..Self::default()
        }
    }

    pub fn staff() -> Self {
        Self {
            authenticated: true,
            staff: true,
            superuser: false,
        }
    }

    pub fn superuser() -> Self {
        Self {
            authenticated: true,
            staff: false,
            superuser: true,
        }
    }
}

impl CurrentUser for User {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn is_staff(&self) -> bool {
        self.staff
    }

    fn is_superuser(&self) -> bool {
        self.superuser
    }
}

/// Serves assets from a fixed URL prefix, e.g. `/static/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssets {
    base_url: String,
}

impl StaticAssets {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self::new("/static/")
    }
}

impl AssetResolver for StaticAssets {
    fn resolve(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// State for a single render pass.
///
/// Created fresh for every page; the resource registry it carries starts
/// empty and is dropped with the context, so concurrent renders never share
/// declarations.
pub struct RenderContext<'a> {
    user: &'a dyn CurrentUser,
    variables: HashMap<String, String>,
    resources: ResourceRegistry,
}

impl<'a> RenderContext<'a> {
    pub fn new(user: &'a dyn CurrentUser) -> Self {
        Self {
            user,
            variables: HashMap::new(),
            resources: ResourceRegistry::new(),
        }
    }

    /// Add a value for `{{ name }}` lookups
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_variable(name, value);
        self
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|s| s.as_str())
    }

    pub fn user(&self) -> &dyn CurrentUser {
        self.user
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut ResourceRegistry {
        &mut self.resources
    }
}
