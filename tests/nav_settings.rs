use countries_rs::nav::{History, Route};
use countries_rs::settings::{Settings, Theme};

#[test]
fn parse_routes() {
    assert_eq!(Route::parse("/"), Some(Route::Index));
    assert_eq!(Route::parse(""), Some(Route::Index));
    assert_eq!(Route::parse("/country/FRA"), Some(Route::Country("FRA".into())));
    // Code segment is verbatim.
    assert_eq!(Route::parse("/country/fra%20"), Some(Route::Country("fra%20".into())));
    assert_eq!(Route::parse("/country/"), None);
    assert_eq!(Route::parse("/about"), None);
    assert_eq!(Route::Country("DEU".into()).path(), "/country/DEU");
}

#[test]
fn back_returns_to_prior_location() {
    let mut h = History::default();
    h.push(Route::Country("FRA".into()));
    h.push(Route::Country("DEU".into()));
    assert_eq!(h.back(), &Route::Country("FRA".into()));
    assert_eq!(h.back(), &Route::Index);
    assert!(!h.can_go_back());
    // No-op at the first entry.
    assert_eq!(h.back(), &Route::Index);
}

#[test]
fn theme_falls_back_to_system_preference() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert_eq!(Settings::load(&path, true).theme(), Theme::Dark);
    assert_eq!(Settings::load(&path, false).theme(), Theme::Light);

    std::fs::write(&path, "not json").unwrap();
    assert_eq!(Settings::load(&path, true).theme(), Theme::Dark);
}

#[test]
fn theme_writes_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut s = Settings::load(&path, false);
    s.toggle_theme().unwrap();
    assert_eq!(s.theme(), Theme::Dark);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"dark\""));
    // A later session sees the stored value regardless of system preference.
    assert_eq!(Settings::load(&path, false).theme(), Theme::Dark);
}
