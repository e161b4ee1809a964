//! Single-fragment directives
//!
//! Each reads a few attributes or flags from its invocation, renders any body
//! through the generic node renderer and returns one fixed-shape fragment.

use std::path::Path;

use crate::context::RenderContext;
use crate::html::{class_list, escape_attr};
use crate::parser::{Argument, DirectiveInvocation, Node, SocialNetwork, Spanned};
use crate::resources::ApiDeclaration;
use crate::svg::{inline_svg, SvgError, SvgOptions};
use crate::RenderError;

use super::Renderer;

/// Link target when no `href` is given
const DEFAULT_HREF: &str = "/";

impl<'a> Renderer<'a> {
    pub(super) fn nav_link(
        &self,
        inv: &DirectiveInvocation,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let href = inv.attr("href").unwrap_or(DEFAULT_HREF);
        Ok(format!(
            "<li class=\"{}\"><a href=\"{}\">{}</a></li>",
            class_list("item", inv.attrs("class")),
            escape_attr(href),
            self.render_nodes(body, ctx)?
        ))
    }

    pub(super) fn nav_logo(
        &self,
        inv: &DirectiveInvocation,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let href = inv.attr("href").unwrap_or(DEFAULT_HREF);
        Ok(format!(
            "<li class=\"logo\"><a href=\"{}\">{}</a></li>",
            escape_attr(href),
            self.render_nodes(body, ctx)?
        ))
    }

    pub(super) fn nav_button(
        &self,
        inv: &DirectiveInvocation,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let href = inv.attr("href").unwrap_or(DEFAULT_HREF);
        let label = self.render_nodes(body, ctx)?;
        Ok(button_item(href, inv.has_flag("secondary"), &label))
    }

    /// Log in / Sign up for anonymous users, Profile / Log out otherwise
    pub(super) fn nav_user(&self, inv: &DirectiveInvocation, ctx: &mut RenderContext<'_>) -> String {
        let with_icons = inv.has_flag("icons");
        let buttons = if ctx.user().is_authenticated() {
            [
                (self.links.profile.as_str(), false, "user", "Profile"),
                (self.links.logout.as_str(), true, "sign-out-alt", "Log out"),
            ]
        } else {
            [
                (self.links.login.as_str(), false, "sign-in-alt", "Log in"),
                (self.links.signup.as_str(), true, "user-plus", "Sign up"),
            ]
        };

        buttons
            .iter()
            .map(|(href, secondary, icon, label)| {
                let icon = if with_icons {
                    self.icons.render(icon, ctx.resources_mut())
                } else {
                    String::new()
                };
                button_item(href, *secondary, &format!("{}{}", icon, label))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Admin button, only for staff and superusers
    pub(super) fn nav_admin(&self, inv: &DirectiveInvocation, ctx: &mut RenderContext<'_>) -> String {
        let user = ctx.user();
        if !(user.is_staff() || user.is_superuser()) {
            return String::new();
        }
        let icon = if inv.has_flag("icons") {
            self.icons.render("tools", ctx.resources_mut())
        } else {
            String::new()
        };
        button_item(&self.links.admin, true, &format!("{}Admin", icon))
    }

    pub(super) fn footer_link(
        &self,
        inv: &DirectiveInvocation,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let href = inv.attr("href").unwrap_or(DEFAULT_HREF);
        Ok(format!(
            "<li class=\"{}\"><a href=\"{}\">{}</a></li>",
            escape_attr(inv.attr("class").unwrap_or("")),
            escape_attr(href),
            self.render_nodes(body, ctx)?
        ))
    }

    pub(super) fn footer_logo(
        &self,
        inv: &DirectiveInvocation,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        Ok(format!(
            "<h1 class=\"{}\">{}</h1>",
            class_list("logo", inv.attr("class")),
            self.render_nodes(body, ctx)?
        ))
    }

    pub(super) fn social(
        &self,
        network: SocialNetwork,
        inv: &DirectiveInvocation,
        ctx: &mut RenderContext<'_>,
    ) -> String {
        let href = inv.attr_or_positional("href", 0).unwrap_or(DEFAULT_HREF);
        format!(
            "<a href=\"{}\">{}</a>",
            escape_attr(href),
            self.icons.render(network.icon_name(), ctx.resources_mut())
        )
    }

    pub(super) fn icon(&self, inv: &DirectiveInvocation, ctx: &mut RenderContext<'_>) -> String {
        match inv.positional(0) {
            Some(name) => self.icons.render(name, ctx.resources_mut()),
            None => String::new(),
        }
    }

    pub(super) fn product_name(&self, inv: &DirectiveInvocation) -> String {
        let name = inv.attr_or_positional("name", 0).unwrap_or("");
        format!("<h1>{}</h1>", escape_attr(name))
    }

    /// Colour swatch; `color` and `img` may also be given positionally
    pub(super) fn product_variant(&self, inv: &DirectiveInvocation) -> String {
        let mut values = inv.flags().filter(|f| *f != "active");
        let color = inv.attr("color").or_else(|| values.next()).unwrap_or("");
        let img = inv.attr("img").or_else(|| values.next());

        let mut extras: Vec<&str> = inv.attr("class").into_iter().collect();
        if inv.has_flag("active") {
            extras.push("active");
        }
        let image = img
            .map(|path| format!("url({})", self.assets.resolve(path)))
            .unwrap_or_default();

        format!(
            "<span class=\"{}\" data-color=\"{}\" data-img=\"{}\"></span>",
            class_list("variant", extras),
            escape_attr(color),
            escape_attr(&image)
        )
    }

    pub(super) fn product_price(&self, inv: &DirectiveInvocation) -> String {
        let amount = inv.positional(0).unwrap_or("");
        let currency = inv.positional(1).unwrap_or("");
        format!(
            "<div class=\"product-price\">{}{}</div>",
            escape_attr(currency),
            escape_attr(amount)
        )
    }

    pub(super) fn static_url(&self, inv: &DirectiveInvocation) -> String {
        inv.first_token()
            .map(|path| escape_attr(&self.assets.resolve(&path)))
            .unwrap_or_default()
    }

    pub(super) fn svg(&self, inv: &DirectiveInvocation) -> Result<String, RenderError> {
        let source = match inv.args.first() {
            Some(Argument::Attribute { key, .. }) if SvgOptions::KEYS.contains(&key.as_str()) => None,
            Some(arg) => Some(arg.as_token()),
            None => None,
        }
        .ok_or(SvgError::MissingSource)?;
        let options = SvgOptions::from_invocation(inv);
        Ok(inline_svg(Path::new(&*source), &options, self.base_dir)?)
    }

    /// Queue an external API; renders nothing
    pub(super) fn register_api(&self, inv: &DirectiveInvocation, ctx: &mut RenderContext<'_>) -> String {
        match inv.first_token() {
            Some(src) => {
                let decl = ApiDeclaration::with_options(src, inv.options_after_first());
                ctx.resources_mut().register_api(decl);
            }
            None => log::debug!("registerapi without a URL"),
        }
        String::new()
    }

    /// Queue a local script; renders nothing
    pub(super) fn register_script(&self, inv: &DirectiveInvocation, ctx: &mut RenderContext<'_>) -> String {
        match inv.first_token() {
            Some(path) => {
                ctx.resources_mut().register_script(path);
            }
            None => log::debug!("registerscript without a path"),
        }
        String::new()
    }
}

fn button_item(href: &str, secondary: bool, label: &str) -> String {
    format!(
        "<li class=\"{}\"><a href=\"{}\">{}</a></li>",
        class_list("item button", secondary.then_some("secondary")),
        escape_attr(href),
        label
    )
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_as};
    use crate::context::User;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nav_link_accumulates_classes() {
        assert_eq!(
            render("{% navlink href=/about class=active class=wide %}About{% endnavlink %}"),
            "<li class=\"item active wide\"><a href=\"/about\">About</a></li>"
        );
    }

    #[test]
    fn test_nav_link_defaults() {
        assert_eq!(
            render("{% navlink bogus %}Home{% endnavlink %}"),
            "<li class=\"item\"><a href=\"/\">Home</a></li>"
        );
    }

    #[test]
    fn test_nav_logo_strips_quotes() {
        assert_eq!(
            render("{% navlogo href=\"/home\" %}Shop{% endnavlogo %}"),
            "<li class=\"logo\"><a href=\"/home\">Shop</a></li>"
        );
    }

    #[test]
    fn test_nav_button_secondary() {
        assert_eq!(
            render("{% navbutton href=/go secondary %}Go{% endnavbutton %}"),
            "<li class=\"item button secondary\"><a href=\"/go\">Go</a></li>"
        );
        assert_eq!(
            render("{% NavButton href=/go %}Go{% endNavButton %}"),
            "<li class=\"item button\"><a href=\"/go\">Go</a></li>"
        );
    }

    #[test]
    fn test_nav_user_anonymous() {
        assert_eq!(
            render("{% navuser %}"),
            "<li class=\"item button\"><a href=\"/components/user/login\">Log in</a></li>\n\
             <li class=\"item button secondary\"><a href=\"/components/user/signup\">Sign up</a></li>"
        );
    }

    #[test]
    fn test_nav_user_authenticated_with_icons() {
        let html = render_as("{% navuser icons %}", &User::member());
        assert_eq!(
            html,
            "<li class=\"item button\"><a href=\"/components/user/profile\"><i class=\"fas fa-user\"></i>Profile</a></li>\n\
             <li class=\"item button secondary\"><a href=\"/components/user/logout\"><i class=\"fas fa-sign-out-alt\"></i>Log out</a></li>"
        );
    }

    #[test]
    fn test_nav_admin_permissions() {
        assert_eq!(render_as("{% navadmin %}", &User::anonymous()), "");
        assert_eq!(render_as("{% navadmin %}", &User::member()), "");
        let expected = "<li class=\"item button secondary\"><a href=\"/admin\">Admin</a></li>";
        assert_eq!(render_as("{% navadmin %}", &User::staff()), expected);
        assert_eq!(render_as("{% navadmin %}", &User::superuser()), expected);
        assert_eq!(
            render_as("{% navadmin icons %}", &User::staff()),
            "<li class=\"item button secondary\"><a href=\"/admin\"><i class=\"fas fa-tools\"></i>Admin</a></li>"
        );
    }

    #[test]
    fn test_footer_link_last_class_wins() {
        assert_eq!(
            render("{% footerlink href=/faq class=a class=b %}FAQ{% endfooterlink %}"),
            "<li class=\"b\"><a href=\"/faq\">FAQ</a></li>"
        );
    }

    #[test]
    fn test_footer_logo() {
        assert_eq!(
            render("{% footerlogo class=big %}Brand{% endfooterlogo %}"),
            "<h1 class=\"logo big\">Brand</h1>"
        );
        assert_eq!(render("{% footerlogo %}B{% endfooterlogo %}"), "<h1 class=\"logo\">B</h1>");
    }

    #[test]
    fn test_social_links() {
        insta::assert_snapshot!(
            render("{% facebook https://fb.test/shop %}"),
            @r#"<a href="https://fb.test/shop"><i class="fab fa-facebook-f"></i></a>"#
        );
        assert_eq!(
            render("{% linkedin href=/in %}"),
            "<a href=\"/in\"><i class=\"fab fa-linkedin-in\"></i></a>"
        );
    }

    #[test]
    fn test_icon_without_name() {
        assert_eq!(render("{% icon %}"), "");
        assert_eq!(render("{% icon bars %}"), "<i class=\"fas fa-bars\"></i>");
    }

    #[test]
    fn test_product_leaves() {
        assert_eq!(render("{% productname \"Product 1\" %}"), "<h1>Product 1</h1>");
        assert_eq!(render("{% productname name=Chair %}"), "<h1>Chair</h1>");
        assert_eq!(
            render("{% productprice 49.99 $ %}"),
            "<div class=\"product-price\">$49.99</div>"
        );
        assert_eq!(
            render("{% productprice 10 %}"),
            "<div class=\"product-price\">10</div>"
        );
    }

    #[test]
    fn test_product_variant() {
        assert_eq!(
            render("{% productvariant color=red img=img/red.png class=round active %}"),
            "<span class=\"variant round active\" data-color=\"red\" data-img=\"url(/static/img/red.png)\"></span>"
        );
        assert_eq!(
            render("{% productvariant active blue img/blue.png %}"),
            "<span class=\"variant active\" data-color=\"blue\" data-img=\"url(/static/img/blue.png)\"></span>"
        );
    }

    #[test]
    fn test_static_url() {
        assert_eq!(render("{% static css/site.css %}"), "/static/css/site.css");
        assert_eq!(render("{% static %}"), "");
    }

    #[test]
    fn test_unquoted_urls_with_query_strings() {
        assert_eq!(
            render("{% registerapi https://maps.test/api/js?key=ABC Secure %}{% loadapis %}"),
            "<div class=\"apis\">\n\
             <script src=\"https://maps.test/api/js?key=ABC\" Secure></script>\n\
             </div>"
        );
        assert_eq!(
            render("{% registerscript js/app.js?v=2 %}{% loadapis %}"),
            "<div class=\"apis\">\n<script src=\"/static/js/app.js?v=2\"></script>\n</div>"
        );
        assert_eq!(render("{% static css/site.css?v=3 %}"), "/static/css/site.css?v=3");
    }

    #[test]
    fn test_svg_without_source_is_an_error() {
        use super::super::tests::try_render;
        use crate::svg::SvgError;
        use crate::RenderError;

        assert!(matches!(
            try_render("{% svg static=true width=10 %}"),
            Err(RenderError::Svg(SvgError::MissingSource))
        ));
    }

    #[test]
    fn test_register_then_load() {
        let html = render(
            "{% registerAPI https://api.test/a.js Secure SameSite=None %}\
             {% registerapi https://api.test/a.js %}\
             {% registerscript js/app.js %}\
             {% loadAPIs %}",
        );
        assert_eq!(
            html,
            "<div class=\"apis\">\n\
             <script src=\"https://api.test/a.js\" Secure SameSite=None></script>\n\
             <script src=\"/static/js/app.js\"></script>\n\
             </div>"
        );
    }
}
