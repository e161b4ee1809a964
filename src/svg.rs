//! Inline SVG rendering
//!
//! Reads an SVG file and rewrites its root element so it scales inside the
//! surrounding layout: the native width/height become a view box and the
//! requested display size becomes an inline style.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::parser::invocation::{strip_quotes, Argument, DirectiveInvocation};

/// Left padding applied to every inlined graphic
const PADDING_LEFT_PX: u32 = 15;

/// Errors that can occur while inlining an SVG file
#[derive(Debug, Error)]
pub enum SvgError {
    /// The file could not be read
    #[error("error reading SVG file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No `<svg` root element in the file
    #[error("no <svg> root element in {path}")]
    MissingRoot { path: PathBuf },

    /// `{% svg %}` written without a source path
    #[error("svg directive requires a source path")]
    MissingSource,
}

/// A loosely typed option value as written in a directive
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Str(String),
    Number(f64),
    Bool(bool),
    Missing,
}

impl OptionValue {
    /// Interpret a directive token: quoted text stays a string, `True`/`False`
    /// are booleans, numeric text is a number
    pub fn from_token(token: &str) -> Self {
        let unquoted = strip_quotes(token);
        if unquoted.len() != token.len() {
            return OptionValue::Str(unquoted.to_string());
        }
        match token {
            "True" => OptionValue::Bool(true),
            "False" => OptionValue::Bool(false),
            _ => token
                .parse::<f64>()
                .map(OptionValue::Number)
                .unwrap_or_else(|_| OptionValue::Str(token.to_string())),
        }
    }

    /// Strings compare case-insensitively to `"true"`, numbers are true when
    /// non-zero, booleans pass through, anything else is false
    pub fn as_bool(&self) -> bool {
        match self {
            OptionValue::Str(s) => s.eq_ignore_ascii_case("true"),
            OptionValue::Number(n) => *n != 0.0,
            OptionValue::Bool(b) => *b,
            OptionValue::Missing => false,
        }
    }

    /// Numeric value; unparseable or missing values are 0
    pub fn as_number(&self) -> f64 {
        match self {
            OptionValue::Str(s) => s.trim().parse().unwrap_or(0.0),
            OptionValue::Number(n) => *n,
            OptionValue::Bool(b) => f64::from(u8::from(*b)),
            OptionValue::Missing => 0.0,
        }
    }
}

/// Options for [`inline_svg`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgOptions {
    /// Resolve the source against the asset base directory
    pub is_static: bool,
    /// Display width in pixels, 0 for auto
    pub width: f64,
    /// Display height in pixels, 0 for auto
    pub height: f64,
}

impl SvgOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Attribute names read by [`SvgOptions::from_invocation`]
    pub const KEYS: [&'static str; 3] = ["static", "width", "height"];

    /// Read `static=`, `width=` and `height=` from a directive invocation
    pub fn from_invocation(invocation: &DirectiveInvocation) -> Self {
        // Last assignment wins; quoted values are always strings
        let raw = |key: &str| {
            invocation
                .args
                .iter()
                .rev()
                .find_map(|arg| match arg {
                    Argument::Attribute {
                        key: k,
                        value,
                        quoted,
                    } if k == key => Some(if *quoted {
                        OptionValue::Str(value.clone())
                    } else {
                        OptionValue::from_token(value)
                    }),
                    _ => None,
                })
                .unwrap_or(OptionValue::Missing)
        };
        Self {
            is_static: raw("static").as_bool(),
            width: raw("width").as_number(),
            height: raw("height").as_number(),
        }
    }
}

/// Read an SVG file and return markup ready to inline.
///
/// With `options.is_static` the source is joined onto `base_dir` first.
pub fn inline_svg(source: &Path, options: &SvgOptions, base_dir: &Path) -> Result<String, SvgError> {
    let path = if options.is_static {
        base_dir.join(source)
    } else {
        source.to_path_buf()
    };

    log::debug!("inlining svg {}", path.display());
    let data = std::fs::read_to_string(&path).map_err(|source| SvgError::Read {
        path: path.clone(),
        source,
    })?;

    rewrite_root(&data, options).ok_or(SvgError::MissingRoot { path })
}

/// Rewrite the root `<svg` element of `data`; `None` when there is none
pub fn rewrite_root(data: &str, options: &SvgOptions) -> Option<String> {
    let (native_width, native_height) = native_dimensions(data);

    let view_box = format!(
        "viewBox=\"0 0 {} {}\" preserveAspectRatio=\"xMidYMid meet\"",
        native_width, native_height
    );
    let style = format!(
        "style=\"width:{};height:{};padding-left:{}px;\"",
        css_length(options.width),
        css_length(options.height),
        PADDING_LEFT_PX
    );

    let (_, rest) = data.split_once("<svg")?;
    Some(format!("<svg {} {}\n{}", style, view_box, rest))
}

fn css_length(px: f64) -> String {
    if px > 0.0 {
        format!("{}px", px)
    } else {
        "auto".to_string()
    }
}

/// Native size from bare `width=` / `height=` assignments.
///
/// The first line (usually the XML declaration) is skipped and the first
/// assignment of each attribute wins. Missing values are 0.
fn native_dimensions(data: &str) -> (f64, f64) {
    let mut width = None;
    let mut height = None;

    for line in data.lines().skip(1) {
        for word in line.split_whitespace() {
            let Some((attr, value)) = word.split_once('=') else {
                continue;
            };
            let slot = match attr.trim() {
                "width" => &mut width,
                "height" => &mut height,
                _ => continue,
            };
            if slot.is_none() {
                *slot = parse_length(value);
            }
        }
        if width.is_some() && height.is_some() {
            break;
        }
    }

    (width.unwrap_or(0.0), height.unwrap_or(0.0))
}

/// Parse `"100"`, `'100px'` or `100>` into 100
fn parse_length(value: &str) -> Option<f64> {
    let numeric: String = value
        .trim()
        .trim_start_matches(['"', '\''])
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().ok()
}
