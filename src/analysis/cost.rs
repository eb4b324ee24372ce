//! Mana cost tokenizer.
//!
//! Splits symbolic cost notation like `{2}{W}{U/B}` into brace-delimited
//! symbols, then folds them into a converted cost and per-color pip counts.
//!
//! | Symbol | Converted cost | Color pips |
//! |---|---|---|
//! | `{3}` | +3 | none |
//! | `{2/G}`, `{3.5}`, `{ 2}` | leading digits (+2, +3, +2) | none |
//! | `{W}` `{U}` `{B}` `{R}` `{G}` | +1 | +1 for that color |
//! | `{C}` | +1 | +1 colorless |
//! | `{W/U}`, `{R/P}` | +1 | none |
//! | anything else (`{X}`, `{S}`, ...) | +0 | none |
//!
//! Malformed or absent notation is not an error; it simply contributes
//! nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Mana color symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColorSymbol {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl ColorSymbol {
    /// All symbols in WUBRG order, colorless last.
    pub const ALL: [ColorSymbol; 6] = [
        ColorSymbol::White,
        ColorSymbol::Blue,
        ColorSymbol::Black,
        ColorSymbol::Red,
        ColorSymbol::Green,
        ColorSymbol::Colorless,
    ];

    /// Parse the single-letter symbol used inside braces.
    #[must_use]
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "W" => Some(ColorSymbol::White),
            "U" => Some(ColorSymbol::Blue),
            "B" => Some(ColorSymbol::Black),
            "R" => Some(ColorSymbol::Red),
            "G" => Some(ColorSymbol::Green),
            "C" => Some(ColorSymbol::Colorless),
            _ => None,
        }
    }

    /// The single-letter symbol.
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            ColorSymbol::White => "W",
            ColorSymbol::Blue => "U",
            ColorSymbol::Black => "B",
            ColorSymbol::Red => "R",
            ColorSymbol::Green => "G",
            ColorSymbol::Colorless => "C",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ColorSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// One brace-delimited cost symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostSymbol {
    /// Generic mana: any symbol that starts with digits, e.g. `{3}` or `{2/W}`.
    Generic(u32),
    /// A single color (or colorless) pip.
    Colored(ColorSymbol),
    /// Hybrid or Phyrexian symbol, e.g. `{W/U}` or `{R/P}`.
    Hybrid(String),
    /// Anything the tokenizer does not recognize (`{X}`, `{S}`, ...).
    Other(String),
}

impl CostSymbol {
    fn classify(content: &str) -> Self {
        if let Some(n) = leading_integer(content) {
            CostSymbol::Generic(n)
        } else if let Some(color) = ColorSymbol::from_letter(content) {
            CostSymbol::Colored(color)
        } else if content.contains('/') {
            CostSymbol::Hybrid(content.to_string())
        } else {
            CostSymbol::Other(content.to_string())
        }
    }

    /// Contribution of this symbol to the converted cost.
    #[must_use]
    pub fn converted_cost(&self) -> u32 {
        match self {
            CostSymbol::Generic(n) => *n,
            CostSymbol::Colored(_) | CostSymbol::Hybrid(_) => 1,
            CostSymbol::Other(_) => 0,
        }
    }
}

/// Integer value of the leading digits of a symbol, after optional
/// whitespace and `+`. Values too large for `u32` saturate.
fn leading_integer(content: &str) -> Option<u32> {
    let trimmed = content.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Split cost notation into symbols.
///
/// A symbol is the non-empty text between a `{` and the next `}`. Text
/// outside braces, empty braces and an unterminated trailing brace are
/// skipped.
#[must_use]
pub fn tokenize(notation: &str) -> SmallVec<[CostSymbol; 8]> {
    let mut symbols = SmallVec::new();
    let mut open: Option<usize> = None;

    for (i, ch) in notation.char_indices() {
        match ch {
            '{' => open = Some(i + 1),
            '}' => {
                if let Some(start) = open.take() {
                    let content = &notation[start..i];
                    if !content.is_empty() {
                        symbols.push(CostSymbol::classify(content));
                    }
                }
            }
            _ => {}
        }
    }

    symbols
}

/// Folded view of a cost: converted cost plus color pips.
///
/// ## Example
///
/// ```
/// use deck_engine::analysis::{ColorSymbol, ManaCost};
///
/// let cost = ManaCost::parse("{1}{U}{U}");
/// assert_eq!(cost.converted(), 3);
/// assert_eq!(cost.pips(ColorSymbol::Blue), 2);
///
/// let land = ManaCost::parse("");
/// assert_eq!(land.converted(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ManaCost {
    converted: u32,
    pips: [u32; 6],
}

impl ManaCost {
    /// Parse cost notation. Never fails.
    #[must_use]
    pub fn parse(notation: &str) -> Self {
        let mut cost = Self::default();

        for symbol in tokenize(notation) {
            cost.converted = cost.converted.saturating_add(symbol.converted_cost());
            match symbol {
                CostSymbol::Colored(color) => cost.pips[color.index()] += 1,
                CostSymbol::Other(ref unknown) => {
                    tracing::trace!(symbol = %unknown, "ignoring unrecognized cost symbol");
                }
                CostSymbol::Generic(_) | CostSymbol::Hybrid(_) => {}
            }
        }

        cost
    }

    /// Total converted cost.
    #[must_use]
    pub fn converted(&self) -> u32 {
        self.converted
    }

    /// Pip count for one color.
    #[must_use]
    pub fn pips(&self, color: ColorSymbol) -> u32 {
        self.pips[color.index()]
    }

    /// Colors with at least one pip, in WUBRG-then-colorless order.
    pub fn colors(&self) -> impl Iterator<Item = (ColorSymbol, u32)> + '_ {
        ColorSymbol::ALL
            .into_iter()
            .map(|c| (c, self.pips(c)))
            .filter(|&(_, n)| n > 0)
    }

    /// Sum of all color pips.
    #[must_use]
    pub fn total_pips(&self) -> u32 {
        self.pips.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let symbols = tokenize("{2}{W}{U/B}{X}");
        assert_eq!(
            symbols.as_slice(),
            &[
                CostSymbol::Generic(2),
                CostSymbol::Colored(ColorSymbol::White),
                CostSymbol::Hybrid("U/B".into()),
                CostSymbol::Other("X".into()),
            ]
        );
    }

    #[test]
    fn test_tokenize_malformed() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("RRG").is_empty());
        assert!(tokenize("{}").is_empty());
        assert_eq!(tokenize("{R}{G").as_slice(), &[CostSymbol::Colored(ColorSymbol::Red)]);
        assert_eq!(tokenize("{{R}").as_slice(), &[CostSymbol::Colored(ColorSymbol::Red)]);
    }

    #[test]
    fn test_generic_and_colored() {
        let cost = ManaCost::parse("{3}{R}{R}");
        assert_eq!(cost.converted(), 5);
        assert_eq!(cost.pips(ColorSymbol::Red), 2);
        assert_eq!(cost.total_pips(), 2);
    }

    #[test]
    fn test_colorless_pip() {
        let cost = ManaCost::parse("{C}{C}{4}");
        assert_eq!(cost.converted(), 6);
        assert_eq!(cost.pips(ColorSymbol::Colorless), 2);
    }

    #[test]
    fn test_hybrid_counts_cost_not_color() {
        let cost = ManaCost::parse("{W/U}{W/U}{R/P}");
        assert_eq!(cost.converted(), 3);
        assert_eq!(cost.total_pips(), 0);
    }

    #[test]
    fn test_number_first_symbols_use_leading_digits() {
        assert_eq!(tokenize("{2/W}").as_slice(), &[CostSymbol::Generic(2)]);
        assert_eq!(ManaCost::parse("{2/W}{2/W}").converted(), 4);
        assert_eq!(ManaCost::parse("{2/W}").total_pips(), 0);
        assert_eq!(ManaCost::parse("{3.5}").converted(), 3);
        assert_eq!(ManaCost::parse("{ 2}").converted(), 2);
        assert_eq!(ManaCost::parse("{+1}{G}").converted(), 2);
    }

    #[test]
    fn test_negative_numbers_are_unknown() {
        assert_eq!(ManaCost::parse("{-2}{R}").converted(), 1);
    }

    #[test]
    fn test_unknown_symbols_contribute_zero() {
        let cost = ManaCost::parse("{X}{X}{G}");
        assert_eq!(cost.converted(), 1);
        assert_eq!(cost.pips(ColorSymbol::Green), 1);
    }

    #[test]
    fn test_lowercase_letters_are_unknown() {
        let cost = ManaCost::parse("{r}");
        assert_eq!(cost.converted(), 0);
        assert_eq!(cost.total_pips(), 0);
    }

    #[test]
    fn test_zero_and_huge_generic() {
        assert_eq!(ManaCost::parse("{0}").converted(), 0);
        assert_eq!(ManaCost::parse("{1000000}").converted(), 1_000_000);
        // Does not fit in u32: saturates.
        assert_eq!(ManaCost::parse("{99999999999}").converted(), u32::MAX);
        assert_eq!(ManaCost::parse("{99999999999}{1}").converted(), u32::MAX);
    }

    #[test]
    fn test_colors_iterator_is_sparse_and_ordered() {
        let cost = ManaCost::parse("{G}{W}{G}");
        let colors: Vec<_> = cost.colors().collect();
        assert_eq!(colors, vec![(ColorSymbol::White, 1), (ColorSymbol::Green, 2)]);
    }

    #[test]
    fn test_color_letters() {
        for color in ColorSymbol::ALL {
            assert_eq!(ColorSymbol::from_letter(color.letter()), Some(color));
        }
        assert_eq!(ColorSymbol::from_letter("P"), None);
    }
}
