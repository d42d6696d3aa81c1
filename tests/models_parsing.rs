use countries_rs::api::parse_records;
use countries_rs::models::{CountryRecord, PLACEHOLDER};

fn fixture() -> Vec<CountryRecord> {
    parse_records(include_bytes!("fixtures/data.json")).unwrap()
}

#[test]
fn parse_fixture_json() {
    let rows = fixture();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].name, "France");
    assert_eq!(rows[0].alpha3_code, "FRA");
    assert_eq!(rows[0].population, 67_000_000);
    assert_eq!(rows[0].borders, vec!["DEU", "ESP"]);
    assert_eq!(rows[1].native_name.as_deref(), Some("Deutschland"));
}

#[test]
fn display_rules_for_lists_and_placeholders() {
    let rows = fixture();
    let germany = &rows[1];
    // Empty language names are dropped before joining.
    assert_eq!(germany.languages_display(), "German");
    assert_eq!(germany.currencies_display(), "Euro");
    assert_eq!(rows[0].top_level_domain_display(), ".fr");

    let antarctica = &rows[3];
    assert_eq!(antarctica.capital_display(), PLACEHOLDER);
    assert_eq!(antarctica.languages_display(), PLACEHOLDER);
    assert_eq!(antarctica.region_str(), "");
}

#[test]
fn flag_fallbacks() {
    let rows = fixture();
    let (france, germany, brazil) = (&rows[0], &rows[1], &rows[4]);

    assert_eq!(france.detail_flag(), Some("https://flags.example/fra.svg"));
    assert_eq!(france.card_flag(), Some("https://flags.example/fra.png"));

    // Legacy `flag` only.
    assert_eq!(germany.detail_flag(), Some("https://flags.example/deu-legacy.svg"));
    assert_eq!(germany.card_flag(), Some("https://flags.example/deu-legacy.svg"));

    // PNG only: the detail page has no vector image and no legacy fallback.
    assert_eq!(brazil.card_flag(), Some("https://flags.example/bra.png"));
    assert_eq!(brazil.detail_flag(), None);
}

#[test]
fn missing_required_field_is_rejected() {
    let err = parse_records(br#"[{"alpha3Code":"FRA"}]"#);
    assert!(err.is_err());
}
