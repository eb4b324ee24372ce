//! Property tests over generated deck lists.

use proptest::prelude::*;

use deck_engine::analysis::{AggregateStats, CardTypeCategory};
use deck_engine::cards::{CardMetadata, DeckEntry};
use deck_engine::core::Game;
use deck_engine::legality::{check_rule, FormatRule};
use deck_engine::playtest::{expand, PlaytestSimulator};

const COSTS: &[&str] = &[
    "", "{0}", "{R}", "{1}{G}", "{U}{U}", "{2}{W}{B}", "{W/U}", "{X}{R}", "{C}", "{7}", "{3}{G}{G}{G}", "junk",
];

const TYPE_LINES: &[&str] = &[
    "Basic Land — Forest",
    "Land",
    "Creature — Elf",
    "Instant",
    "Sorcery",
    "Artifact",
    "Legendary Planeswalker — Nissa",
    "",
];

prop_compose! {
    fn entry(index: usize)(
        cost in 0..COSTS.len(),
        type_line in 0..TYPE_LINES.len(),
        name in 0..6usize,
        quantity in 1..6u32,
        sideboard in proptest::bool::weighted(0.2),
    ) -> DeckEntry {
        let metadata = CardMetadata::named(format!("Card {}", name))
            .with_mana_cost(COSTS[cost])
            .with_type_line(TYPE_LINES[type_line]);
        let entry = DeckEntry::new(format!("e{}", index), format!("c{}", name), metadata, quantity);
        if sideboard { entry.in_sideboard() } else { entry }
    }
}

fn deck() -> impl Strategy<Value = Vec<DeckEntry>> {
    (0..25usize).prop_flat_map(|len| (0..len).map(entry).collect::<Vec<_>>())
}

fn is_land(entry: &DeckEntry) -> bool {
    CardTypeCategory::classify(entry.metadata.type_line()) == CardTypeCategory::Land
}

proptest! {
    #[test]
    fn curve_counts_every_non_land_main_card(entries in deck()) {
        let stats = AggregateStats::compute(&entries, Some(Game::Mtg));
        let lands: u32 = entries.iter().filter(|e| e.is_main() && is_land(e)).map(|e| e.quantity).sum();

        prop_assert_eq!(stats.curve.applicable().unwrap().total(), stats.total_main - lands);
    }

    #[test]
    fn colors_zero_iff_no_colored_pips(entries in deck()) {
        let stats = AggregateStats::compute(&entries, Some(Game::Mtg));
        let colors = stats.colors.applicable().unwrap();
        let any_pips = entries
            .iter()
            .filter(|e| e.is_main())
            .any(|e| deck_engine::ManaCost::parse(e.metadata.mana_cost()).total_pips() > 0);

        prop_assert_eq!(colors.total() > 0, any_pips);
    }

    #[test]
    fn aggregation_is_idempotent(entries in deck()) {
        let first = AggregateStats::compute(&entries, Some(Game::Mtg));
        let second = AggregateStats::compute(&entries, Some(Game::Mtg));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exact_minimum_is_legal_one_short_is_not(min_cards in 1..120u32, max_copies in 1..5u32) {
        // Distinct names so no copy limit is hit.
        let build = |size: u32| -> Vec<DeckEntry> {
            (0..size)
                .map(|i| DeckEntry::new(format!("e{}", i), format!("c{}", i), CardMetadata::named(format!("Card {}", i)), 1))
                .collect()
        };
        let rule = FormatRule::new(min_cards, max_copies);

        prop_assert!(check_rule(&build(min_cards), Game::Mtg, &rule).is_legal());

        let short = check_rule(&build(min_cards - 1), Game::Mtg, &rule);
        prop_assert_eq!(short.violations.len(), 1);
    }

    #[test]
    fn shuffle_preserves_main_deck(entries in deck(), seed in any::<u64>()) {
        let session = PlaytestSimulator::with_seed(seed).start_new_hand(&entries);

        let mut dealt: Vec<String> = session
            .hand()
            .iter()
            .chain(session.remaining().iter())
            .map(|u| u.unit_id.clone())
            .collect();
        let mut expected: Vec<String> = expand(&entries).into_iter().map(|u| u.unit_id).collect();
        dealt.sort();
        expected.sort();

        prop_assert_eq!(dealt, expected);
        prop_assert!(session.hand().len() <= 7);
    }

    #[test]
    fn drawing_exhausts_exactly(entries in deck(), seed in any::<u64>()) {
        let mut sim = PlaytestSimulator::with_seed(seed);
        let remaining = sim.start_new_hand(&entries).remaining_count();

        for _ in 0..remaining {
            sim.draw_one();
        }
        let done = sim.draw_one().unwrap();

        prop_assert!(done.remaining().is_empty());
        prop_assert_eq!(done.drawn().len(), remaining);
    }
}
