//! Resource registry for external scripts and APIs
//!
//! Directives that need a script on the page register it here while the page
//! renders; a single `loadapis` directive near the end of the body emits the
//! accumulated `<script>` tags. Entries are deduplicated by exact source
//! string and the first registration wins.

use crate::context::AssetResolver;
use crate::html::escape_attr;

/// An external script or API to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDeclaration {
    pub src: String,
    /// `SameSite` cookie policy, emitted verbatim when set
    pub same_site: Option<String>,
    pub secure: bool,
}

impl ApiDeclaration {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            same_site: None,
            secure: false,
        }
    }

    /// Build a declaration from option tokens such as `Secure` and `SameSite=Lax`.
    ///
    /// Unrecognised options are ignored.
    pub fn with_options<I, S>(src: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut decl = Self::new(src);
        for option in options {
            let option = option.as_ref();
            match option.split_once('=') {
                Some(("SameSite", value)) => decl.same_site = Some(value.to_string()),
                Some(_) => {}
                None if option == "Secure" => decl.secure = true,
                None => {}
            }
        }
        decl
    }

    fn to_script_tag(&self) -> String {
        let mut tag = format!("<script src=\"{}\"", escape_attr(&self.src));
        if self.secure {
            tag.push_str(" Secure");
        }
        if let Some(same_site) = &self.same_site {
            tag.push_str(&format!(" SameSite={}", escape_attr(same_site)));
        }
        tag.push_str("></script>");
        tag
    }
}

/// Append-only script lists for one render pass
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    apis: Vec<ApiDeclaration>,
    scripts: Vec<String>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an external API unless its URL is already present.
    ///
    /// Returns `true` if the declaration was appended.
    pub fn register_api(&mut self, decl: ApiDeclaration) -> bool {
        if self.apis.iter().any(|existing| existing.src == decl.src) {
            log::debug!("api already registered: {}", decl.src);
            return false;
        }
        log::debug!("registering api: {}", decl.src);
        self.apis.push(decl);
        true
    }

    /// Register a local script path unless already present
    pub fn register_script(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.scripts.contains(&path) {
            log::debug!("script already registered: {}", path);
            return false;
        }
        log::debug!("registering script: {}", path);
        self.scripts.push(path);
        true
    }

    pub fn apis(&self) -> &[ApiDeclaration] {
        &self.apis
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn is_empty(&self) -> bool {
        self.apis.is_empty() && self.scripts.is_empty()
    }

    /// Render every registered API followed by every local script.
    ///
    /// Meant to be called once per page. The lists are not cleared, so a
    /// second call in the same pass emits the same tags again.
    pub fn flush(&self, assets: &dyn AssetResolver) -> String {
        let mut out = String::from("<div class=\"apis\">\n");
        for api in &self.apis {
            out.push_str(&api.to_script_tag());
            out.push('\n');
        }
        for script in &self.scripts {
            out.push_str(&format!(
                "<script src=\"{}\"></script>\n",
                escape_attr(&assets.resolve(script))
            ));
        }
        out.push_str("</div>");
        out
    }
}
