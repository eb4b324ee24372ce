//! Deck legality validation.
//!
//! Interprets a `FormatRule` against a deck list. Pure: takes entries in,
//! returns a verdict, touches nothing else.
//!
//! Check order is fixed so reports are stable across calls:
//! 1. Deck size floor, then ceiling
//! 2. Copy limits, one violation per card name in first-seen order

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::table::{FormatRule, FormatRuleTable};
use crate::cards::{main_deck, CardMetadata, DeckEntry};
use crate::core::Game;

/// One reason a deck is not legal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Main deck below the format minimum.
    TooFewCards { game: Game, total: u32, minimum: u32 },
    /// Main deck above the format maximum.
    TooManyCards { total: u32, maximum: u32 },
    /// Too many copies of one card name.
    TooManyCopies { name: String, count: u32, max_copies: u32 },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::TooFewCards { game, total, minimum } => {
                write!(f, "Deck has {} cards ({}: {})", total, game.minimum_label(), minimum)
            }
            Violation::TooManyCards { total, maximum } => {
                write!(f, "Deck has {} cards (maximum: {})", total, maximum)
            }
            Violation::TooManyCopies { name, count, max_copies } => {
                write!(f, "{}: {} copies (max: {})", name, count, max_copies)
            }
        }
    }
}

/// Violations found for an evaluated deck. Empty means legal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityReport {
    pub violations: Vec<Violation>,
}

impl LegalityReport {
    /// No violations.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.violations.is_empty()
    }

    /// Human-readable violation messages, in report order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Outcome of a legality check.
///
/// `NotEvaluated` (no format, or no rule for the game/format pair) is
/// neither legal nor illegal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "report", rename_all = "snake_case")]
pub enum Legality {
    NotEvaluated,
    Evaluated(LegalityReport),
}

impl Legality {
    /// The report, if the deck was evaluated.
    #[must_use]
    pub fn report(&self) -> Option<&LegalityReport> {
        match self {
            Legality::Evaluated(report) => Some(report),
            Legality::NotEvaluated => None,
        }
    }

    /// Evaluated and free of violations.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.report().is_some_and(LegalityReport::is_legal)
    }
}

/// Look up the rule for `(game, format)` and check the deck against it.
///
/// ## Example
///
/// ```
/// use deck_engine::cards::{CardMetadata, DeckEntry};
/// use deck_engine::core::Game;
/// use deck_engine::legality::{validate, FormatRuleTable, Legality};
///
/// let deck = vec![DeckEntry::new("e1", "c1", CardMetadata::named("Opt"), 4)];
/// let table = FormatRuleTable::builtin();
///
/// let report = validate(&deck, Some(Game::Mtg), Some("Modern"), table);
/// assert_eq!(report.report().unwrap().messages(), vec!["Deck has 4 cards (minimum: 60)"]);
///
/// assert_eq!(validate(&deck, Some(Game::Mtg), None, table), Legality::NotEvaluated);
/// ```
#[must_use]
pub fn validate(
    entries: &[DeckEntry],
    game: Option<Game>,
    format: Option<&str>,
    table: &FormatRuleTable,
) -> Legality {
    let (Some(game), Some(format)) = (game, format) else {
        return Legality::NotEvaluated;
    };
    let Some(rule) = table.get(game, format) else {
        tracing::debug!(%game, format, "no format rule, legality not evaluated");
        return Legality::NotEvaluated;
    };

    let report = check_rule(entries, game, rule);
    tracing::debug!(%game, format, violations = report.violations.len(), "evaluated deck legality");
    Legality::Evaluated(report)
}

/// Check a deck against a single rule.
#[must_use]
pub fn check_rule(entries: &[DeckEntry], game: Game, rule: &FormatRule) -> LegalityReport {
    let mut violations = Vec::new();

    let total = main_deck(entries).fold(0u32, |sum, e| sum.saturating_add(e.quantity));
    if total < rule.min_cards {
        violations.push(Violation::TooFewCards {
            game,
            total,
            minimum: rule.min_cards,
        });
    }
    if let Some(maximum) = rule.max_cards {
        if total > maximum {
            violations.push(Violation::TooManyCards { total, maximum });
        }
    }

    for group in group_by_name(entries) {
        if group.count > rule.max_copies && !rule.exempts(group.first) {
            violations.push(Violation::TooManyCopies {
                name: group.name.to_string(),
                count: group.count,
                max_copies: rule.max_copies,
            });
        }
    }

    LegalityReport { violations }
}

/// Main-deck copies sharing one card name.
struct NameGroup<'a> {
    name: &'a str,
    count: u32,
    /// Metadata of the first entry seen with this name.
    first: &'a CardMetadata,
}

/// Sum main-deck quantities per card name, keeping first-seen order.
fn group_by_name(entries: &[DeckEntry]) -> Vec<NameGroup<'_>> {
    let mut groups: Vec<NameGroup<'_>> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for entry in main_deck(entries) {
        let name = entry.display_name();
        match index.get(name).copied() {
            Some(i) => groups[i].count = groups[i].count.saturating_add(entry.quantity),
            None => {
                index.insert(name, groups.len());
                groups.push(NameGroup {
                    name,
                    count: entry.quantity,
                    first: &entry.metadata,
                });
            }
        }
    }

    groups
}
