//! Inline SVG tests against files on disk

use std::fs;
use std::path::Path;

use html_components::svg::{inline_svg, SvgOptions};
use html_components::{ComponentConfig, ComponentLibrary, RenderError, SvgError, User};
use pretty_assertions::assert_eq;

const LOGO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50">
  <circle cx="25" cy="25" r="20"/>
</svg>
"#;

fn write_logo(dir: &Path) {
    fs::create_dir_all(dir.join("img")).unwrap();
    fs::write(dir.join("img/logo.svg"), LOGO).unwrap();
}

#[test]
fn test_inline_svg_sizes() {
    let dir = tempfile::tempdir().unwrap();
    write_logo(dir.path());

    let options = SvgOptions::new().with_width(200.0).with_height(0.0);
    let html = inline_svg(&dir.path().join("img/logo.svg"), &options, Path::new("/unused")).unwrap();

    assert!(html.contains(r#"viewBox="0 0 100 50""#));
    assert!(html.contains("width:200px;"));
    assert!(html.contains("height:auto;"));
    assert!(html.contains(r#"<circle cx="25" cy="25" r="20"/>"#));
    assert!(!html.contains("<?xml"));
}

#[test]
fn test_static_source_resolves_against_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_logo(dir.path());

    let config = ComponentConfig::default().with_base_dir(dir.path());
    let library = ComponentLibrary::new(config).unwrap();
    let html = library
        .render(
            "{% svg img/logo.svg static=true width=120 height=60 %}",
            &User::anonymous(),
        )
        .unwrap();

    assert_eq!(
        html.lines().next().unwrap(),
        r#"<svg style="width:120px;height:60px;padding-left:15px;" viewBox="0 0 100 50" preserveAspectRatio="xMidYMid meet""#
    );
}

#[test]
fn test_non_static_source_ignores_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_logo(dir.path());

    let config = ComponentConfig::default().with_base_dir("/nowhere");
    let library = ComponentLibrary::new(config).unwrap();
    let source = format!("{{% svg \"{}\" %}}", dir.path().join("img/logo.svg").display());
    let html = library.render(&source, &User::anonymous()).unwrap();
    assert!(html.contains("width:auto;height:auto;"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = ComponentConfig::default().with_base_dir(dir.path());
    let library = ComponentLibrary::new(config).unwrap();

    let err = library
        .render("{% svg missing.svg static=true %}", &User::anonymous())
        .unwrap_err();
    assert!(matches!(err, RenderError::Svg(SvgError::Read { .. })));
}

#[test]
fn test_file_without_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("plain.svg"), "just text\nwidth=1 height=1\n").unwrap();

    let err = inline_svg(&dir.path().join("plain.svg"), &SvgOptions::new(), dir.path()).unwrap_err();
    assert!(matches!(err, SvgError::MissingRoot { .. }));
}
