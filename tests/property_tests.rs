//! Property tests for classification, aggregation and rendering.

use proptest::prelude::*;

use ygo_decklist::cards::{
    BucketCategory, CardAttribute, CardRecord, ExtraMonsterCategory, MonsterCategory,
    EXTRA_MONSTER_MARKERS, MONSTER_MARKERS,
};
use ygo_decklist::classify::classify;
use ygo_decklist::core::Zone;
use ygo_decklist::deck::DeckDocument;
use ygo_decklist::render::render;

fn arb_zone() -> impl Strategy<Value = Zone> {
    prop_oneof![Just(Zone::Main), Just(Zone::Extra), Just(Zone::Side)]
}

fn arb_attribute() -> impl Strategy<Value = CardAttribute> {
    prop_oneof![
        3 => Just(CardAttribute::Monster),
        1 => Just(CardAttribute::Spell),
        1 => Just(CardAttribute::Trap),
    ]
}

/// Type lines built from real markers mixed with filler words.
fn arb_type_text() -> impl Strategy<Value = String> {
    let words = prop::sample::select(vec![
        "Ritual", "Pendulum", "Tuner", "Gemini", "Union", "Spirit", "Toon", "Effect",
        "Fusion", "Synchro", "Xyz", "Link", "Dragon", "Spellcaster", "Normal", "Monster",
    ]);
    prop::collection::vec(words, 0..5).prop_map(|w| w.join(" / "))
}

fn arb_record() -> impl Strategy<Value = CardRecord> {
    (
        arb_zone(),
        "[A-Z][a-z]{1,10}( [A-Z][a-z]{1,10}){0,2}",
        1u32..=3,
        arb_attribute(),
        arb_type_text(),
    )
        .prop_map(|(zone, name, quantity, attribute, type_text)| {
            CardRecord::new(zone, name, quantity, attribute).with_type_text(type_text)
        })
}

fn quantity_sum(records: &[CardRecord], zone: Zone, attribute: Option<CardAttribute>) -> u64 {
    records
        .iter()
        .filter(|r| r.zone == zone && attribute.map_or(true, |a| r.attribute == a))
        .map(|r| u64::from(r.quantity))
        .sum()
}

fn expected_monster(type_text: &str) -> MonsterCategory {
    MONSTER_MARKERS
        .iter()
        .find(|(marker, _)| type_text.contains(*marker))
        .map(|&(_, c)| c)
        .unwrap_or(MonsterCategory::Normal)
}

fn expected_extra(type_text: &str) -> ExtraMonsterCategory {
    EXTRA_MONSTER_MARKERS
        .iter()
        .find(|(marker, _)| type_text.contains(*marker))
        .map(|&(_, c)| c)
        .unwrap_or(ExtraMonsterCategory::Fusion)
}

proptest! {
    #[test]
    fn prop_monster_first_marker_wins(zone in prop_oneof![Just(Zone::Main), Just(Zone::Side)], type_text in arb_type_text()) {
        let card = classify(&CardRecord::monster(zone, "M", 1, type_text.clone()));
        prop_assert_eq!(card.category.monster(), Some(expected_monster(&type_text)));
        prop_assert_eq!(card.zone(), zone);
    }

    #[test]
    fn prop_extra_first_marker_wins(type_text in arb_type_text()) {
        let card = classify(&CardRecord::monster(Zone::Extra, "X", 1, type_text.clone()));
        prop_assert_eq!(card.category.extra_monster(), Some(expected_extra(&type_text)));
    }

    #[test]
    fn prop_totals_are_quantity_sums(records in prop::collection::vec(arb_record(), 0..40)) {
        let deck = DeckDocument::from_records(&records);
        let totals = deck.totals();

        let monster = Some(CardAttribute::Monster);
        prop_assert_eq!(totals.total_monsters, quantity_sum(&records, Zone::Main, monster));
        prop_assert_eq!(
            totals.total_spells,
            quantity_sum(&records, Zone::Main, Some(CardAttribute::Spell))
        );
        prop_assert_eq!(
            totals.total_traps,
            quantity_sum(&records, Zone::Main, Some(CardAttribute::Trap))
        );
        prop_assert_eq!(totals.total_extra_monsters, quantity_sum(&records, Zone::Extra, None));
        prop_assert_eq!(deck.side.totals().monsters, quantity_sum(&records, Zone::Side, monster));
    }

    #[test]
    fn prop_every_card_rendered_once(records in prop::collection::vec(arb_record(), 0..40), master_duel in any::<bool>()) {
        let deck = DeckDocument::from_records(&records);
        prop_assert_eq!(deck.entry_count(), records.len());

        let out = render(&deck, "Prop", master_duel);
        let card_lines = out.lines().filter(|l| l.starts_with("* ")).count();
        prop_assert_eq!(card_lines, records.len());
    }

    #[test]
    fn prop_empty_buckets_never_rendered(records in prop::collection::vec(arb_record(), 0..40)) {
        let deck = DeckDocument::from_records(&records);
        let out = render(&deck, "Prop", false);
        let lines: Vec<_> = out.lines().collect();

        for bucket in deck.main.monsters.iter().filter(|b| b.is_empty()) {
            let field = format!("| {} =", bucket.label());
            prop_assert!(!lines.contains(&field.as_str()));
        }
        for bucket in deck.extra.monsters.iter().filter(|b| b.is_empty()) {
            let field = format!("| {} =", bucket.label());
            prop_assert!(!lines.contains(&field.as_str()));
        }
        for bucket in deck.side.monsters.iter().filter(|b| b.is_empty()) {
            let field = format!("| side {} =", bucket.label());
            prop_assert!(!lines.contains(&field.as_str()));
        }
        prop_assert_eq!(lines.contains(&"| spells ="), !deck.main.spells.is_empty());
        prop_assert_eq!(lines.contains(&"| side traps ="), !deck.side.traps.is_empty());
    }

    #[test]
    fn prop_render_idempotent(records in prop::collection::vec(arb_record(), 0..40)) {
        let first = render(&DeckDocument::from_records(&records), "Prop", false);
        let second = render(&DeckDocument::from_records(&records), "Prop", false);
        prop_assert_eq!(first, second);
    }
}

/// Every category label is distinct, so fields cannot collide.
#[test]
fn test_labels_distinct() {
    let mut labels: Vec<_> = MonsterCategory::TEMPLATE_ORDER
        .iter()
        .map(|c| c.label())
        .chain(ExtraMonsterCategory::TEMPLATE_ORDER.iter().map(|c| c.label()))
        .collect();
    let count = labels.len();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), count);
}
