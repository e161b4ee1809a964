//! Directive invocation parsing
//!
//! A tag body such as `navlink href=/about class=active` is split into a name
//! and argument tokens. Tokens containing `=` are attribute assignments, all
//! others are bare flags or positional values. Unrecognised tokens are kept
//! and simply never asked for.

use std::borrow::Cow;

/// One argument token of a directive invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A bare token such as `secondary` or `"Product 1"` (quotes stripped)
    Flag(String),
    /// A `key=value` assignment (quotes around the value stripped)
    Attribute {
        key: String,
        value: String,
        /// The value was written in quotes
        quoted: bool,
    },
}

/// Tag name plus ordered arguments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectiveInvocation {
    pub name: String,
    pub args: Vec<Argument>,
}

impl DirectiveInvocation {
    /// Parse the inside of a `{% ... %}` tag
    pub fn parse(contents: &str) -> Self {
        let mut bits = split_contents(contents).into_iter();
        let name = bits.next().unwrap_or_default();
        let args = bits.map(|bit| parse_argument(&bit)).collect();
        Self { name, args }
    }

    /// Last value assigned to `key`
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.args.iter().rev().find_map(|arg| match arg {
            Argument::Attribute { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Every value assigned to `key`, in order
    pub fn attrs<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.args.iter().filter_map(move |arg| match arg {
            Argument::Attribute { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether the bare flag `flag` was given
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags().any(|f| f == flag)
    }

    /// Bare tokens in order
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.args.iter().filter_map(|arg| match arg {
            Argument::Flag(f) => Some(f.as_str()),
            _ => None,
        })
    }

    /// The `index`th bare token
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.flags().nth(index)
    }

    /// Attribute `key`, falling back to the `index`th bare token
    pub fn attr_or_positional(&self, key: &str, index: usize) -> Option<&str> {
        self.attr(key).or_else(|| self.positional(index))
    }

    /// The first argument as written, whether it parsed as a flag or as an
    /// attribute. URLs with query strings (`a.js?v=1`) land here intact.
    pub fn first_token(&self) -> Option<Cow<'_, str>> {
        self.args.first().map(Argument::as_token)
    }

    /// Argument tokens after the first one, in their original form
    pub fn options_after_first(&self) -> Vec<String> {
        self.args
            .iter()
            .skip(1)
            .map(|arg| arg.as_token().into_owned())
            .collect()
    }
}

impl Argument {
    /// The token text, with quotes stripped
    pub fn as_token(&self) -> Cow<'_, str> {
        match self {
            Argument::Flag(f) => Cow::Borrowed(f.as_str()),
            Argument::Attribute { key, value, .. } => Cow::Owned(format!("{}={}", key, value)),
        }
    }
}

fn parse_argument(bit: &str) -> Argument {
    if !starts_quoted(bit) {
        if let Some((key, value)) = bit.split_once('=') {
            let unquoted = strip_quotes(value);
            return Argument::Attribute {
                key: key.to_string(),
                value: unquoted.to_string(),
                quoted: unquoted.len() != value.len(),
            };
        }
    }
    Argument::Flag(strip_quotes(bit).to_string())
}

fn starts_quoted(s: &str) -> bool {
    s.starts_with('"') || s.starts_with('\'')
}

/// Remove one pair of matching surrounding quotes
pub fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' || first == b'\'') && first == last {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Split on whitespace, keeping quoted runs (including embedded spaces) together
pub fn split_contents(contents: &str) -> Vec<String> {
    let mut bits = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in contents.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    bits.push(std::mem::take(&mut current));
                }
            }
            None => {
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
                current.push(c);
            }
        }
    }
    if !current.is_empty() {
        bits.push(current);
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_quoted_runs() {
        assert_eq!(
            split_contents(r#"productname "Product 1"  extra"#),
            vec!["productname", "\"Product 1\"", "extra"]
        );
        assert_eq!(
            split_contents(r##"productvariant color="#7ed6df" img='main/1 a.png'"##),
            vec!["productvariant", "color=\"#7ed6df\"", "img='main/1 a.png'"]
        );
    }

    #[test]
    fn test_flags_and_attributes_in_any_order() {
        let inv = DirectiveInvocation::parse("navbutton secondary href=/signup bogus");
        assert_eq!(inv.name, "navbutton");
        assert_eq!(inv.attr("href"), Some("/signup"));
        assert!(inv.has_flag("secondary"));
        assert!(inv.has_flag("bogus"));
        assert!(!inv.has_flag("primary"));

        let inv = DirectiveInvocation::parse("navbutton href=/signup secondary");
        assert_eq!(inv.attr("href"), Some("/signup"));
        assert!(inv.has_flag("secondary"));
    }

    #[test]
    fn test_repeated_attributes() {
        let inv = DirectiveInvocation::parse("navlink class=a href=/x class=b");
        assert_eq!(inv.attrs("class").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(inv.attr("class"), Some("b"));
        assert_eq!(inv.attr("missing"), None);
    }

    #[test]
    fn test_quoted_values_are_stripped() {
        let inv = DirectiveInvocation::parse(r#"navlogo href="/home" 'Brand'"#);
        assert_eq!(inv.attr("href"), Some("/home"));
        assert_eq!(inv.positional(0), Some("Brand"));
    }

    #[test]
    fn test_quoted_token_with_equals_is_positional() {
        let inv = DirectiveInvocation::parse(r#"productname "a=b""#);
        assert_eq!(inv.positional(0), Some("a=b"));
        assert_eq!(inv.attr("\"a"), None);
    }

    #[test]
    fn test_first_token_keeps_query_string() {
        let inv = DirectiveInvocation::parse("registerapi https://x.test/a.js?v=1&b=2 Secure");
        assert_eq!(inv.first_token().as_deref(), Some("https://x.test/a.js?v=1&b=2"));
        assert_eq!(inv.options_after_first(), vec!["Secure"]);
        assert_eq!(DirectiveInvocation::parse("loadapis").first_token(), None);
        let inv = DirectiveInvocation::parse(r#"registerapi "https://x.test/a.js?v=1" Secure"#);
        assert_eq!(inv.positional(0), Some("https://x.test/a.js?v=1"));
    }

    #[test]
    fn test_options_after_first() {
        let inv = DirectiveInvocation::parse(r#"registerapi "https://x.test/a.js" Secure SameSite=Lax"#);
        assert_eq!(inv.options_after_first(), vec!["Secure", "SameSite=Lax"]);

        let inv = DirectiveInvocation::parse("registerapi SameSite=Lax Secure");
        assert_eq!(inv.first_token().as_deref(), Some("SameSite=Lax"));
        assert_eq!(inv.options_after_first(), vec!["Secure"]);
    }

    #[test]
    fn test_empty_contents() {
        let inv = DirectiveInvocation::parse("   ");
        assert_eq!(inv.name, "");
        assert!(inv.args.is_empty());
    }
}
