//! Configuration loaded from disk

use std::fs;

use html_components::{ComponentConfig, ComponentLibrary, ConfigError, User};

#[test]
fn test_config_file_drives_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("components.toml");
    fs::write(
        &path,
        r#"
[assets]
base_url = "https://cdn.test/assets"

[links]
login = "/accounts/login"

[templates]
newsletter_signup = "<section>{{ title }}{% if description %}<small>{{ description }}</small>{% endif %}</section>"
"#,
    )
    .unwrap();

    let config = ComponentConfig::from_file(&path).expect("Should load");
    let library = ComponentLibrary::new(config).unwrap();
    let html = library
        .render(
            "{% static css/a.css %}|{% navuser %}|\
             {% newslettersignup %}{% newslettertitle %}T{% endnewslettertitle %}{% endnewslettersignup %}",
            &User::anonymous(),
        )
        .unwrap();

    let parts: Vec<_> = html.split('|').collect();
    assert_eq!(parts[0], "https://cdn.test/assets/css/a.css");
    assert!(parts[1].contains("href=\"/accounts/login\""));
    assert!(parts[1].contains("href=\"/components/user/signup\""));
    assert_eq!(parts[2], "<section><h1>T</h1></section>");
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ComponentConfig::from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
