use crate::token::{COMMA, LEFT_PAREN, PLACEHOLDER, RIGHT_PAREN};
use std::fmt;

/// Operator symbol with two literal forms.
///
/// Comparison operators render as `"op ?"` when bound to an argument and as
/// bare `"op"` otherwise, so the same symbol serves filter fragments
/// (`age = ?`) and assignment or inline contexts (`deleted = 0`). The
/// combinators [`Symbol::And`] and [`Symbol::Or`], as well as the null checks,
/// ignore the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    And,
    Or,
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    NotLike,
    In,
    NotIn,
    Between,
    IsNull,
    IsNotNull,
}

impl Symbol {
    /// Literal text, with placeholder(s) when `bound` is set.
    pub const fn literal(self, bound: bool) -> &'static str {
        match (self, bound) {
            (Symbol::And, _) => "AND",
            (Symbol::Or, _) => "OR",
            (Symbol::IsNull, _) => "IS NULL",
            (Symbol::IsNotNull, _) => "IS NOT NULL",
            (Symbol::Eq, true) => "= ?",
            (Symbol::Eq, false) => "=",
            (Symbol::Ne, true) => "<> ?",
            (Symbol::Ne, false) => "<>",
            (Symbol::Gt, true) => "> ?",
            (Symbol::Gt, false) => ">",
            (Symbol::Gte, true) => ">= ?",
            (Symbol::Gte, false) => ">=",
            (Symbol::Lt, true) => "< ?",
            (Symbol::Lt, false) => "<",
            (Symbol::Lte, true) => "<= ?",
            (Symbol::Lte, false) => "<=",
            (Symbol::Like, true) => "LIKE ?",
            (Symbol::Like, false) => "LIKE",
            (Symbol::NotLike, true) => "NOT LIKE ?",
            (Symbol::NotLike, false) => "NOT LIKE",
            (Symbol::In, true) => "IN (?)",
            (Symbol::In, false) => "IN",
            (Symbol::NotIn, true) => "NOT IN (?)",
            (Symbol::NotIn, false) => "NOT IN",
            (Symbol::Between, true) => "BETWEEN ? AND ?",
            (Symbol::Between, false) => "BETWEEN",
        }
    }

    /// The bound form, e.g. `= ?`.
    pub const fn with_placeholder(self) -> &'static str {
        self.literal(true)
    }

    /// The bare form, e.g. `=`.
    pub const fn bare(self) -> &'static str {
        self.literal(false)
    }

    /// Whether this symbol joins two predicates rather than comparing a field.
    pub const fn is_combinator(self) -> bool {
        matches!(self, Symbol::And | Symbol::Or)
    }

    /// Bound form for a leaf carrying `arity` arguments.
    ///
    /// Only the list operators depend on the count: `IN (?, ?, ?)`.
    pub(crate) fn write_bound(self, arity: usize, out: &mut String) {
        match self {
            Symbol::In | Symbol::NotIn => {
                out.push_str(self.bare());
                out.push(' ');
                out.push_str(LEFT_PAREN);
                for i in 0..arity {
                    if i > 0 {
                        out.push_str(COMMA);
                    }
                    out.push_str(PLACEHOLDER);
                }
                out.push_str(RIGHT_PAREN);
            }
            _ => out.push_str(self.with_placeholder()),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bare())
    }
}
