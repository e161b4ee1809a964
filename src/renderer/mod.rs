//! HTML renderer for parsed component templates
//!
//! Walks a [`Document`] in order: text is copied verbatim, `{{ var }}` is
//! looked up in the render context and escaped, and every directive is
//! dispatched on its [`DirectiveKind`]. Leaf directives live in [`leaf`],
//! the slot-filling composites in [`composite`].

mod composite;
mod leaf;

use std::path::Path;

use crate::config::LinkConfig;
use crate::context::{AssetResolver, RenderContext};
use crate::html::escape_attr;
use crate::icon::IconSet;
use crate::parser::{Directive, DirectiveKind, Document, Node, Spanned};
use crate::template::TemplateRegistry;
use crate::RenderError;

/// Everything a render pass reads but never changes
pub struct Renderer<'a> {
    pub icons: &'a IconSet,
    pub templates: &'a TemplateRegistry,
    pub assets: &'a dyn AssetResolver,
    pub links: &'a LinkConfig,
    /// Directory static SVG sources are read from
    pub base_dir: &'a Path,
}

impl<'a> Renderer<'a> {
    /// Render a whole document
    pub fn render_document(
        &self,
        document: &Document,
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        self.render_nodes(&document.nodes, ctx)
    }

    /// Render a node list, concatenating the output in order
    pub fn render_nodes(
        &self,
        nodes: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&self.render_node(&node.node, ctx)?);
        }
        Ok(out)
    }

    fn render_node(&self, node: &Node, ctx: &mut RenderContext<'_>) -> Result<String, RenderError> {
        match node {
            Node::Text(text) => Ok(text.clone()),
            Node::Variable(name) => Ok(ctx.variable(name).map(escape_attr).unwrap_or_default()),
            Node::Directive(directive) => self.render_directive(directive, ctx),
        }
    }

    /// Render one directive by kind
    pub fn render_directive(
        &self,
        directive: &Directive,
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let inv = &directive.invocation;
        let body = &directive.body;

        let html = match &directive.kind {
            // Composites
            DirectiveKind::Navbar => self.navbar(body, ctx)?,
            DirectiveKind::Footer => self.footer(body, ctx)?,
            DirectiveKind::NewsletterSignup => self.newsletter_signup(body, ctx)?,
            DirectiveKind::ProductCard => self.product_card(body, ctx)?,

            // Navigation
            DirectiveKind::NavLink => self.nav_link(inv, body, ctx)?,
            DirectiveKind::NavLogo => self.nav_logo(inv, body, ctx)?,
            DirectiveKind::NavButton => self.nav_button(inv, body, ctx)?,
            DirectiveKind::NavUser => self.nav_user(inv, ctx),
            DirectiveKind::NavAdmin => self.nav_admin(inv, ctx),

            // Footer
            DirectiveKind::FooterLink => self.footer_link(inv, body, ctx)?,
            DirectiveKind::FooterLogo => self.footer_logo(inv, body, ctx)?,
            DirectiveKind::FooterSocial => self.wrap("<div class=\"social-media\">", body, "</div>", ctx)?,
            DirectiveKind::FooterRights => self.wrap("<p class=\"rights-text\">", body, "</p>", ctx)?,

            // Newsletter
            DirectiveKind::NewsletterTitle => self.wrap("<h1>", body, "</h1>", ctx)?,
            DirectiveKind::NewsletterDesc => self.wrap("<p>", body, "</p>", ctx)?,

            // Product card
            DirectiveKind::ProductName => self.product_name(inv),
            DirectiveKind::ProductDesc => self.wrap("<p>", body, "</p>", ctx)?,
            DirectiveKind::ProductVariants => {
                self.wrap("<div class=\"product-variants\">", body, "</div>", ctx)?
            }
            DirectiveKind::ProductVariant => self.product_variant(inv),
            DirectiveKind::ProductPrice => self.product_price(inv),

            // Icons and graphics
            DirectiveKind::Icon => self.icon(inv, ctx),
            DirectiveKind::Social(network) => self.social(*network, inv, ctx),
            DirectiveKind::Svg => self.svg(inv)?,
            DirectiveKind::Static => self.static_url(inv),

            // Resources
            DirectiveKind::RegisterApi => self.register_api(inv, ctx),
            DirectiveKind::RegisterScript => self.register_script(inv, ctx),
            DirectiveKind::LoadApis => ctx.resources().flush(self.assets),

            DirectiveKind::Unknown(name) => {
                log::debug!("skipping unknown directive '{}'", name);
                String::new()
            }
        };
        Ok(html)
    }

    /// Render `body` between fixed opening and closing markup
    fn wrap(
        &self,
        open: &str,
        body: &[Spanned<Node>],
        close: &str,
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        Ok(format!("{}{}{}", open, self.render_nodes(body, ctx)?, close))
    }
}
