//! End-to-end pipeline tests.
//!
//! These tests run extraction payloads through the whole pipeline and into
//! a sink, with a tracing subscriber installed to exercise the log paths.

use ygo_decklist::core::{DecklistConfig, DecklistError};
use ygo_decklist::io::{ensure_english_url, CardSource, DeckPayload, DecklistSink, MemorySink};
use ygo_decklist::pipeline::{build_decklist, export_deck};

/// Sink that refuses every write.
struct RejectingSink;

impl DecklistSink for RejectingSink {
    fn write(&mut self, file_name: &str, _contents: &str) -> ygo_decklist::core::Result<()> {
        Err(DecklistError::Sink {
            file_name: file_name.to_string(),
            reason: "read-only".to_string(),
        })
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("ygo_decklist=trace"))
        .with_test_writer()
        .try_init();
}

const PAYLOAD: &str = r#"{
    "name": "  Tenpai\n Dragon  ",
    "main": [
        {"name": "Tenpai Dragon Paidra", "quantity": "3", "attribute": "FIRE", "typeText": "Dragon / Effect"},
        {"name": "Sangen Kaimen", "quantity": "3", "attribute": "SPELL", "effectText": "Field"},
        {"name": "Sangen Summoning", "quantity": "1", "attribute": "TRAP"}
    ],
    "extra": [
        {"name": "Chaos Angel", "quantity": "2", "attribute": "LIGHT", "typeText": "Dragon / Synchro / Effect"}
    ],
    "side": [
        {"quantity": "oops", "attribute": "EARTH", "typeText": "Rock / Effect"}
    ]
}"#;

/// Test a full payload export.
#[test]
fn test_export_payload() {
    init_tracing();
    let payload = DeckPayload::from_json(PAYLOAD).unwrap();
    let mut sink = MemorySink::new();

    let output = export_deck(&payload, &mut sink, &DecklistConfig::default()).unwrap();

    assert_eq!(output.deck_name, "Tenpai Dragon");
    assert_eq!(output.file_name, "Tenpai Dragon decklist.txt");
    assert_eq!(sink.files().len(), 1);

    let written = sink.get("Tenpai Dragon decklist.txt").unwrap();
    let expected = "{{Decklist|Tenpai Dragon
<!-- Main Deck -->
| total m = 3
| effect monsters =
* [[Tenpai Dragon Paidra]] x3
| total s = 3
| spells =
* [[Sangen Kaimen]] x3
| total t = 1
| traps =
* [[Sangen Summoning]]

<!-- Extra Deck -->
| total me = 2
| synchro monsters =
* [[Chaos Angel]] x2

<!-- Side Deck -->
| side effect monsters =
* [[Name not found]]
}}";
    assert_eq!(written, expected);
}

/// Test the spell subtype survives on the document even though it is not rendered.
#[test]
fn test_spell_subtype_kept_on_document() {
    let payload = DeckPayload::from_json(PAYLOAD).unwrap();
    let output = build_decklist(&payload, &DecklistConfig::default());

    let subtype = output.document.main.spells[0]
        .category
        .spell_trap()
        .and_then(|c| c.subtype.as_deref());
    assert_eq!(subtype, Some("Field"));
    assert!(!output.markup.contains("Field"));
}

/// Test Master Duel export driven by TOML configuration.
#[test]
fn test_export_master_duel_from_toml() {
    init_tracing();
    let config = DecklistConfig::from_toml_str("master_duel = true\nunnamed_deck = \"Untitled\"").unwrap();
    let payload = DeckPayload::from_json(r#"{"main": [{"name": "X", "quantity": 2, "attribute": "SPELL"}]}"#).unwrap();
    let mut sink = MemorySink::new();

    let output = export_deck(&payload, &mut sink, &config).unwrap();

    assert_eq!(output.file_name, "Untitled decklist.txt");
    assert!(output.markup.contains("* [[X (Master Duel)|X]] x2"));
}

/// Test that payload errors surface as `DecklistError::Payload`.
#[test]
fn test_bad_payload() {
    let err = DeckPayload::from_json(r#"{"main": "not a list"}"#).unwrap_err();
    assert!(matches!(err, DecklistError::Payload(_)));
}

/// Test that a failing sink stops the export with an error.
#[test]
fn test_sink_failure() {
    let payload = DeckPayload::from_json(PAYLOAD).unwrap();

    let err = export_deck(&payload, &mut RejectingSink, &DecklistConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Tenpai Dragon decklist.txt"));
}

/// Test the source trait on a payload and the URL helper used by extractors.
#[test]
fn test_source_and_url_helpers() {
    let payload = DeckPayload::from_json(PAYLOAD).unwrap();
    assert_eq!(payload.records().len(), 5);
    assert_eq!(
        ensure_english_url("https://www.db.yugioh-card.com/yugiohdb/member_deck.action?cgid=1&dno=2"),
        "https://www.db.yugioh-card.com/yugiohdb/member_deck.action?cgid=1&dno=2&request_locale=en"
    );
}
