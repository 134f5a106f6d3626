use portico::{DefaultNavigation, MemoryHost, Shell, ShellConfig, config::ENV_NAVIGATION};
use portico_demo::{CustomNavigation, DemoModule, HelloPage, NavigationChoice};
use std::io::Write;
use tempfile::NamedTempFile;

fn composed(config: ShellConfig) -> MemoryHost {
    let module = DemoModule::from_config(config).unwrap();
    let mut host = MemoryHost::new();
    portico::compose(&module, &mut host).unwrap();
    host
}

#[test]
fn test_start_renders_welcome() {
    let host = composed(ShellConfig::default());

    let view = host.render("start").unwrap();
    assert_eq!(
        view.outlet.unwrap().as_str(),
        "<p>Welcome to Portofino 5!</p>"
    );
    assert!(view.entry.as_str().contains(r#"app-title="Demo-TT""#));
    assert!(view.navigation.as_str().starts_with("<nav"));
}

#[test]
fn test_missing_has_no_page() {
    let host = composed(ShellConfig::default());

    assert!(host.resolve_page("missing").unwrap().is_none());
    assert!(host.render("missing").unwrap().outlet.is_none());
    assert_eq!(
        host.resolve_page("start").unwrap().map(|p| p.id()),
        Some(HelloPage::ID)
    );
}

#[test]
fn test_default_never_instantiates_custom() {
    let host = composed(ShellConfig::default());
    host.render("start").unwrap();
    host.render("start").unwrap();

    assert_eq!(host.route_paths(), ["start"]);
    assert!(
        host.implementations()
            .iter()
            .any(|i| i.id() == CustomNavigation::ID)
    );
    assert_eq!(host.instantiations(DefaultNavigation::ID), 2);
    assert_eq!(host.instantiations(CustomNavigation::ID), 0);
    assert_eq!(host.instantiated(), [DefaultNavigation::ID]);
}

#[test]
fn test_custom_navigation_from_environment() {
    let config = ShellConfig::default()
        .with_overrides(|key| (key == ENV_NAVIGATION).then(|| "custom".to_string()));
    let default_host = composed(ShellConfig::default());
    let custom_host = composed(config);

    let view = custom_host.render("start").unwrap();
    assert_eq!(
        view.navigation.as_str(),
        r#"<h3>Custom navigation</h3><p><a href="/start">Start here</a></p>"#
    );
    assert_eq!(custom_host.active_navigation(), Some(CustomNavigation::ID));
    assert_eq!(default_host.route_paths(), custom_host.route_paths());
}

#[test]
fn test_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "app-title = \"Staging\"\nnavigation = \"custom\"").unwrap();

    let config = ShellConfig::load(file.path()).unwrap();
    let module = DemoModule::from_config(config).unwrap();
    assert_eq!(module.choice(), NavigationChoice::Custom);

    let mut host = MemoryHost::new();
    portico::compose(&module, &mut host).unwrap();
    assert_eq!(host.attributes().app_title(), Some("Staging"));
}

#[test]
fn test_unknown_navigation_is_rejected() {
    let config = ShellConfig::from_toml_str("navigation = \"sidebar\"").unwrap();
    assert!(DemoModule::from_config(config).is_err());
}
