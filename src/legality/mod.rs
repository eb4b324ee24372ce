//! Format legality: the rule table and the validator that interprets it.
//!
//! Only deck construction is checked (deck size and copy limits), and only
//! the main deck counts. In-game rules are out of scope.

pub mod table;
pub mod validator;

pub use table::{FormatRule, FormatRuleTable};
pub use validator::{check_rule, validate, Legality, LegalityReport, Violation};
