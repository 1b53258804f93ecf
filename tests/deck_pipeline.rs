use std::io::{Cursor, Read};
use std::path::PathBuf;

use stockdeck::deck::{DeckInput, SLIDE_COUNT, StockAnalysisDeck, Theme};
use stockdeck::ooxml::pptx::Package;
use stockdeck::{Error, InputError};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/sample_deck.json")
}

fn read_member(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[test]
fn json_to_pptx_round_trip() {
    let input = DeckInput::from_path(sample_path()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output/stock/test-analysis.pptx");

    let mut deck = StockAnalysisDeck::new();
    deck.build(&input).unwrap();
    let written = deck.save(&output).unwrap();
    assert_eq!(written, SLIDE_COUNT);

    let summary = Package::open(&output).unwrap().summary().unwrap();
    assert_eq!(summary.slide_count(), SLIDE_COUNT);
    assert_eq!(summary.slide_size, (12_191_695, 6_858_000));

    let peer = &summary.slides[5];
    assert!(peer.contains_text("Competitive Position"));
    assert_eq!(peer.table_count, 1);

    let sensitivity = &summary.slides[7];
    assert!(sensitivity.contains_text("FCF Scenario"));
    assert!(sensitivity.contains_text("Test sensitivity note."));

    // valuation note is null in the sample: banner, title and table only
    assert_eq!(summary.slides[6].shape_count, 3);
}

#[test]
fn package_parts_are_declared() {
    let input = DeckInput::from_path(sample_path()).unwrap();
    let mut deck = StockAnalysisDeck::new();
    deck.build(&input).unwrap();
    let bytes = deck.to_bytes().unwrap();

    let content_types = read_member(&bytes, "[Content_Types].xml");
    for n in 1..=SLIDE_COUNT {
        assert!(content_types.contains(&format!(r#"PartName="/ppt/slides/slide{}.xml""#, n)));
    }

    let core = read_member(&bytes, "docProps/core.xml");
    assert!(core.contains("<dc:title>Investment Analysis: Test Corp (TEST)</dc:title>"));

    let app = read_member(&bytes, "docProps/app.xml");
    assert!(app.contains("<Slides>11</Slides>"));
}

#[test]
fn missing_key_is_reported_by_name() {
    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(sample_path()).unwrap()).unwrap();
    value.as_object_mut().unwrap().remove("catalysts");

    let err = DeckInput::from_value(value).unwrap_err();
    assert!(matches!(err, Error::Input(InputError::MissingKey("catalysts"))));
}

#[test]
fn failed_build_is_not_saved() {
    let mut input = DeckInput::from_path(sample_path()).unwrap();
    input.sensitivity_matrix.pop();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deck.pptx");

    let mut deck = StockAnalysisDeck::new();
    let err = deck.build(&input).unwrap_err();
    assert!(matches!(err, Error::Input(InputError::ScenarioCount { .. })));
    assert!(!output.exists());
}

#[test]
fn theme_override_changes_palette() {
    let theme = Theme::from_json_str(r##"{"dark_blue": "#000000"}"##).unwrap();
    let input = DeckInput::from_path(sample_path()).unwrap();

    let mut deck = StockAnalysisDeck::with_theme(theme);
    deck.build(&input).unwrap();
    let summary = Package::from_bytes(deck.to_bytes().unwrap())
        .unwrap()
        .summary()
        .unwrap();

    assert_eq!(
        summary.slides[0].background,
        Some(stockdeck::common::RGBColor::new(0, 0, 0))
    );
}
