//! Component library: configuration plus the collaborators every pass reads

use crate::config::{ComponentConfig, ConfigError};
use crate::context::{AssetResolver, CurrentUser, RenderContext, StaticAssets};
use crate::icon::IconSet;
use crate::parser::{parse, Document};
use crate::renderer::Renderer;
use crate::template::TemplateRegistry;
use crate::RenderError;

/// Long-lived, read-only half of rendering.
///
/// Build one per application and call [`ComponentLibrary::render`] (or
/// [`ComponentLibrary::render_in`] with your own [`RenderContext`]) per page.
pub struct ComponentLibrary {
    config: ComponentConfig,
    icons: IconSet,
    templates: TemplateRegistry,
    assets: Box<dyn AssetResolver>,
}

impl ComponentLibrary {
    /// Build a library from configuration.
    ///
    /// Template overrides are parsed here, so a broken override fails now
    /// rather than on first render.
    pub fn new(config: ComponentConfig) -> Result<Self, ConfigError> {
        let mut templates = TemplateRegistry::with_builtins()?;
        for (name, source) in &config.templates {
            templates.register(name, source)?;
        }

        let icons = IconSet::new(config.icons.kit_url.clone())
            .with_prefixes(config.icons.prefixes.clone());
        let assets = Box::new(StaticAssets::new(config.assets.base_url.clone()));

        Ok(Self {
            config,
            icons,
            templates,
            assets,
        })
    }

    /// Replace the asset URL resolver
    pub fn with_assets(mut self, assets: impl AssetResolver + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    /// Fresh per-pass context for `user`
    pub fn context<'u>(&self, user: &'u dyn CurrentUser) -> RenderContext<'u> {
        RenderContext::new(user)
    }

    /// Parse and render `source` in a new render pass
    pub fn render(&self, source: &str, user: &dyn CurrentUser) -> Result<String, RenderError> {
        let mut ctx = self.context(user);
        self.render_in(source, &mut ctx)
    }

    /// Parse and render `source` within an existing pass
    pub fn render_in(&self, source: &str, ctx: &mut RenderContext<'_>) -> Result<String, RenderError> {
        let document = parse(source)?;
        self.render_document(&document, ctx)
    }

    /// Render an already parsed document
    pub fn render_document(
        &self,
        document: &Document,
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        self.renderer().render_document(document, ctx)
    }

    fn renderer(&self) -> Renderer<'_> {
        Renderer {
            icons: &self.icons,
            templates: &self.templates,
            assets: self.assets.as_ref(),
            links: &self.config.links,
            base_dir: &self.config.assets.base_dir,
        }
    }
}

impl std::fmt::Debug for ComponentLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentLibrary")
            .field("config", &self.config)
            .field("icons", &self.icons)
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}
