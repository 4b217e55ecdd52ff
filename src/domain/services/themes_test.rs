use super::Themes;

#[test]
fn it_lists_default_themes() {
    let themes = Themes::list();
    assert!(themes.contains(&"base16-ocean.dark".to_string()));
}

#[test]
fn it_fails_on_unknown_theme() {
    let err = Themes::get("not-a-theme").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Theme not-a-theme does not exist");
}
