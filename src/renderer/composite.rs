//! Slot-filling composite directives
//!
//! A composite renders each immediate child whose kind it recognises,
//! appends the output to that kind's slot and hands the slots to a named
//! template. Children of any other kind (text included) contribute nothing.

use crate::context::RenderContext;
use crate::parser::{DirectiveKind, Node, Spanned};
use crate::template::defaults::{FOOTER, NAVBAR, NEWSLETTER_SIGNUP, PRODUCT_CARD};
use crate::template::Slots;
use crate::RenderError;

use super::Renderer;

fn navbar_slot(kind: &DirectiveKind) -> Option<&'static str> {
    match kind {
        DirectiveKind::NavLink
        | DirectiveKind::NavLogo
        | DirectiveKind::NavButton
        | DirectiveKind::NavUser
        | DirectiveKind::NavAdmin => Some("links"),
        _ => None,
    }
}

fn footer_slot(kind: &DirectiveKind) -> Option<&'static str> {
    match kind {
        DirectiveKind::FooterLogo => Some("logo"),
        DirectiveKind::FooterSocial => Some("social"),
        DirectiveKind::FooterRights => Some("rights"),
        DirectiveKind::FooterLink => Some("links"),
        DirectiveKind::NewsletterSignup => Some("signup"),
        _ => None,
    }
}

fn newsletter_slot(kind: &DirectiveKind) -> Option<&'static str> {
    match kind {
        DirectiveKind::NewsletterTitle => Some("title"),
        DirectiveKind::NewsletterDesc => Some("description"),
        _ => None,
    }
}

fn product_card_slot(kind: &DirectiveKind) -> Option<&'static str> {
    match kind {
        DirectiveKind::ProductName | DirectiveKind::ProductDesc => Some("header"),
        DirectiveKind::ProductVariants => Some("variants"),
        DirectiveKind::ProductPrice => Some("footer"),
        _ => None,
    }
}

impl<'a> Renderer<'a> {
    /// Render recognised children of `body` into their slots, in order
    fn collect_slots(
        &self,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
        slot_for: fn(&DirectiveKind) -> Option<&'static str>,
    ) -> Result<Slots, RenderError> {
        let mut slots = Slots::new();
        for child in body {
            let Node::Directive(directive) = &child.node else {
                continue;
            };
            match slot_for(&directive.kind) {
                Some(slot) => {
                    let html = self.render_directive(directive, ctx)?;
                    slots.append(slot, &html);
                }
                None => log::trace!(
                    "ignoring '{}' inside composite at {:?}",
                    directive.invocation.name,
                    child.span
                ),
            }
        }
        Ok(slots)
    }

    pub(super) fn navbar(
        &self,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let slots = self.collect_slots(body, ctx, navbar_slot)?;
        Ok(self.templates.render(NAVBAR, &slots)?)
    }

    pub(super) fn footer(
        &self,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let mut slots = self.collect_slots(body, ctx, footer_slot)?;
        let newsletter = body
            .iter()
            .any(|child| child.node.kind() == Some(&DirectiveKind::NewsletterSignup));
        slots.set_flag("newsletter", newsletter);
        Ok(self.templates.render(FOOTER, &slots)?)
    }

    pub(super) fn newsletter_signup(
        &self,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let slots = self.collect_slots(body, ctx, newsletter_slot)?;
        Ok(self.templates.render(NEWSLETTER_SIGNUP, &slots)?)
    }

    pub(super) fn product_card(
        &self,
        body: &[Spanned<Node>],
        ctx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let slots = self.collect_slots(body, ctx, product_card_slot)?;
        Ok(self.templates.render(PRODUCT_CARD, &slots)?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{render, render_as};
    use crate::context::User;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_navbar_keeps_link_order() {
        let html = render(
            "{% navbar %}\n\
             {% navlink href=/a %}A{% endnavlink %}\n\
             {% navlink href=/b %}B{% endnavlink %}\n\
             {% endnavbar %}",
        );
        let a = html
            .find("<li class=\"item\"><a href=\"/a\">A</a></li>")
            .expect("first link");
        let b = html
            .find("<li class=\"item\"><a href=\"/b\">B</a></li>")
            .expect("second link");
        assert!(a < b);
        assert!(html.starts_with("<nav class=\"navbar\">"));
    }

    #[test]
    fn test_navbar_ignores_text_and_foreign_children() {
        let with = render(
            "{% navbar %}junk{% footerrights %}x{% endfooterrights %}\
             {% navlink href=/a %}A{% endnavlink %}{% endnavbar %}",
        );
        let without = render("{% navbar %}{% navlink href=/a %}A{% endnavlink %}{% endnavbar %}");
        assert_eq!(with, without);
    }

    #[test]
    fn test_navbar_admin_slot_depends_on_user() {
        let source = "{% navbar %}{% navadmin %}{% endnavbar %}";
        assert!(!render_as(source, &User::member()).contains("/admin"));
        assert!(render_as(source, &User::staff()).contains("/admin"));
    }

    #[test]
    fn test_footer_newsletter_flag() {
        let plain = render("{% footer %}{% footerlogo %}Brand{% endfooterlogo %}{% endfooter %}");
        assert!(plain.contains("<h1 class=\"logo\">Brand</h1>"));
        assert!(!plain.contains("footer-newsletter"));
        assert!(!plain.contains("footer-links"));

        let html = render(
            "{% footer %}\
             {% newslettersignup %}\
             {% newslettertitle %}Stay updated{% endnewslettertitle %}\
             {% newsletterdesc %}Weekly news{% endnewsletterdesc %}\
             {% endnewslettersignup %}\
             {% endfooter %}",
        );
        assert!(html.contains("footer-newsletter"));
        assert!(html.contains("<h1>Stay updated</h1>"));
        assert!(html.contains("<p>Weekly news</p>"));
        assert!(html.contains("action=\"/newsletter/signup\""));
    }

    #[test]
    fn test_footer_social_and_links() {
        let html = render(
            "{% footer %}\
             {% footersocial %}{% twitter /t %}{% youtube /y %}{% endfootersocial %}\
             {% footerlink href=/faq %}FAQ{% endfooterlink %}\
             {% footerlink href=/jobs %}Jobs{% endfooterlink %}\
             {% endfooter %}",
        );
        assert!(html.contains(
            "<div class=\"social-media\"><a href=\"/t\"><i class=\"fab fa-twitter\"></i></a>\
             <a href=\"/y\"><i class=\"fab fa-youtube\"></i></a></div>"
        ));
        assert!(html.contains(
            "<li class=\"\"><a href=\"/faq\">FAQ</a></li><li class=\"\"><a href=\"/jobs\">Jobs</a></li>"
        ));
    }

    #[test]
    fn test_product_card_slots() {
        let html = render(
            "{% productcard %}\
             {% productname \"Lamp\" %}\
             {% productdesc %}Bright{% endproductdesc %}\
             {% productvariants %}{% productvariant red %}{% endproductvariants %}\
             {% productprice 12 € %}\
             {% endproductcard %}",
        );
        assert!(html.contains("<h1>Lamp</h1><p>Bright</p>"));
        assert!(html.contains("<div class=\"product-variants\"><span class=\"variant\" data-color=\"red\" data-img=\"\"></span></div>"));
        assert!(html.contains("<div class=\"product-price\">€12</div>"));
        assert!(html.contains("Add to Cart"));
    }

    #[test]
    fn test_product_card_without_price_has_empty_footer() {
        let html = render("{% productcard %}{% productname Lamp %}{% endproductcard %}");
        assert!(!html.contains("product-price"));
    }
}
