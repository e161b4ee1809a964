//! Node tree types for component templates

use super::invocation::DirectiveInvocation;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Root of a parsed template
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub nodes: Vec<Spanned<Node>>,
}

/// One child of a node tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal markup, emitted verbatim
    Text(String),
    /// `{{ name }}` context lookup
    Variable(String),
    /// `{% name ... %}`, optionally with a nested body
    Directive(Directive),
}

impl Node {
    /// Directive kind of this node, if it is a directive
    pub fn kind(&self) -> Option<&DirectiveKind> {
        match self {
            Node::Directive(d) => Some(&d.kind),
            _ => None,
        }
    }
}

/// A parsed directive together with the children between its open and end tags
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub invocation: DirectiveInvocation,
    /// Empty for standalone directives
    pub body: Vec<Spanned<Node>>,
}

impl Directive {
    pub fn new(invocation: DirectiveInvocation, body: Vec<Spanned<Node>>) -> Self {
        Self {
            kind: DirectiveKind::from_name(&invocation.name),
            invocation,
            body,
        }
    }
}

/// Social network shorthands, each rendering a linked brand icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    Facebook,
    Twitter,
    Instagram,
    Youtube,
    Linkedin,
}

impl SocialNetwork {
    /// Icon identifier used for this network
    pub fn icon_name(self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "facebook-f",
            SocialNetwork::Twitter => "twitter",
            SocialNetwork::Instagram => "instagram",
            SocialNetwork::Youtube => "youtube",
            SocialNetwork::Linkedin => "linkedin-in",
        }
    }
}

/// Every directive the library understands.
///
/// Composite renderers classify their children by matching on this tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    // Navigation bar
    Navbar,
    NavLink,
    NavLogo,
    NavButton,
    NavUser,
    NavAdmin,

    // Footer
    Footer,
    FooterLink,
    FooterLogo,
    FooterSocial,
    FooterRights,

    // Newsletter
    NewsletterSignup,
    NewsletterTitle,
    NewsletterDesc,

    // Product card
    ProductCard,
    ProductName,
    ProductDesc,
    ProductVariants,
    ProductVariant,
    ProductPrice,

    // Icons and graphics
    Icon,
    Social(SocialNetwork),
    Svg,
    Static,

    // Resource registry
    RegisterApi,
    RegisterScript,
    LoadApis,

    /// Any other tag name; renders nothing
    Unknown(String),
}

impl DirectiveKind {
    /// Classify a tag name (case-insensitive)
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "navbar" => DirectiveKind::Navbar,
            "navlink" => DirectiveKind::NavLink,
            "navlogo" => DirectiveKind::NavLogo,
            "navbutton" => DirectiveKind::NavButton,
            "navuser" => DirectiveKind::NavUser,
            "navadmin" => DirectiveKind::NavAdmin,
            "footer" => DirectiveKind::Footer,
            "footerlink" => DirectiveKind::FooterLink,
            "footerlogo" => DirectiveKind::FooterLogo,
            "footersocial" => DirectiveKind::FooterSocial,
            "footerrights" => DirectiveKind::FooterRights,
            "newslettersignup" => DirectiveKind::NewsletterSignup,
            "newslettertitle" => DirectiveKind::NewsletterTitle,
            "newsletterdesc" => DirectiveKind::NewsletterDesc,
            "productcard" => DirectiveKind::ProductCard,
            "productname" => DirectiveKind::ProductName,
            "productdesc" => DirectiveKind::ProductDesc,
            "productvariants" => DirectiveKind::ProductVariants,
            "productvariant" => DirectiveKind::ProductVariant,
            "productprice" => DirectiveKind::ProductPrice,
            "icon" => DirectiveKind::Icon,
            "facebook" => DirectiveKind::Social(SocialNetwork::Facebook),
            "twitter" => DirectiveKind::Social(SocialNetwork::Twitter),
            "instagram" => DirectiveKind::Social(SocialNetwork::Instagram),
            "youtube" => DirectiveKind::Social(SocialNetwork::Youtube),
            "linkedin" => DirectiveKind::Social(SocialNetwork::Linkedin),
            "svg" => DirectiveKind::Svg,
            "static" => DirectiveKind::Static,
            "registerapi" => DirectiveKind::RegisterApi,
            "registerscript" => DirectiveKind::RegisterScript,
            "loadapis" => DirectiveKind::LoadApis,
            _ => DirectiveKind::Unknown(name.to_string()),
        }
    }

    /// Whether this directive consumes a body up to `end<name>`
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            DirectiveKind::Navbar
                | DirectiveKind::NavLink
                | DirectiveKind::NavLogo
                | DirectiveKind::NavButton
                | DirectiveKind::Footer
                | DirectiveKind::FooterLink
                | DirectiveKind::FooterLogo
                | DirectiveKind::FooterSocial
                | DirectiveKind::FooterRights
                | DirectiveKind::NewsletterSignup
                | DirectiveKind::NewsletterTitle
                | DirectiveKind::NewsletterDesc
                | DirectiveKind::ProductCard
                | DirectiveKind::ProductDesc
                | DirectiveKind::ProductVariants
        )
    }
}

/// If `name` is `end<block>` for a known block directive, return the block kind
pub fn end_marker_of(name: &str) -> Option<DirectiveKind> {
    let lower = name.to_ascii_lowercase();
    let opened = lower.strip_prefix("end")?;
    let kind = DirectiveKind::from_name(opened);
    kind.is_block().then_some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_case_insensitive() {
        assert_eq!(DirectiveKind::from_name("SVG"), DirectiveKind::Svg);
        assert_eq!(DirectiveKind::from_name("registerAPI"), DirectiveKind::RegisterApi);
        assert_eq!(DirectiveKind::from_name("loadAPIs"), DirectiveKind::LoadApis);
    }

    #[test]
    fn test_unknown_name_is_kept() {
        assert_eq!(
            DirectiveKind::from_name("carousel"),
            DirectiveKind::Unknown("carousel".to_string())
        );
    }

    #[test]
    fn test_end_markers_only_for_blocks() {
        assert_eq!(end_marker_of("endnavbar"), Some(DirectiveKind::Navbar));
        assert_eq!(end_marker_of("endFooter"), Some(DirectiveKind::Footer));
        assert_eq!(end_marker_of("endicon"), None);
        assert_eq!(end_marker_of("endcarousel"), None);
        assert_eq!(end_marker_of("navbar"), None);
    }

    #[test]
    fn test_social_icons() {
        assert_eq!(SocialNetwork::Facebook.icon_name(), "facebook-f");
        assert_eq!(SocialNetwork::Linkedin.icon_name(), "linkedin-in");
    }
}
