//! Literal tokens shared by every renderer.
//!
//! Plain punctuation lives in `const` items; SQL words live in [`Keyword`],
//! which doubles as the hint token type accepted by
//! [`EntityBuilder::hint`](crate::EntityBuilder::hint).

pub const SPACE: &str = " ";
pub const COMMA: &str = ", ";
pub const DOT: &str = ".";
pub const PLACEHOLDER: &str = "?";
pub const PLACEHOLDER_CHAR: char = '?';
pub const LEFT_PAREN: &str = "(";
pub const RIGHT_PAREN: &str = ")";
/// `=` padded for `column = value` fragments that carry inline values.
pub const PRETTY_EQUAL: &str = " = ";
pub const COUNT_ALL: &str = "COUNT(*)";
pub const STAR: &str = "*";

/// A fixed SQL word.
///
/// Clause keywords are written by the assembler itself; the remaining
/// variants are statement modifiers meant to be passed as hints, which are
/// inserted verbatim right after the statement verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    Insert,
    Update,
    Delete,
    From,
    Into,
    Values,
    Set,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
    And,
    Or,
    As,
    On,
    // Hints
    Distinct,
    All,
    Ignore,
    Quick,
    LowPriority,
    HighPriority,
    Delayed,
    StraightJoin,
    SqlNoCache,
    SqlCalcFoundRows,
}

impl Keyword {
    /// The literal text of this keyword.
    pub const fn literal(self) -> &'static str {
        match self {
            Keyword::Select => "SELECT",
            Keyword::Insert => "INSERT",
            Keyword::Update => "UPDATE",
            Keyword::Delete => "DELETE",
            Keyword::From => "FROM",
            Keyword::Into => "INTO",
            Keyword::Values => "VALUES",
            Keyword::Set => "SET",
            Keyword::Where => "WHERE",
            Keyword::GroupBy => "GROUP BY",
            Keyword::Having => "HAVING",
            Keyword::OrderBy => "ORDER BY",
            Keyword::Limit => "LIMIT",
            Keyword::Offset => "OFFSET",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::As => "AS",
            Keyword::On => "ON",
            Keyword::Distinct => "DISTINCT",
            Keyword::All => "ALL",
            Keyword::Ignore => "IGNORE",
            Keyword::Quick => "QUICK",
            Keyword::LowPriority => "LOW_PRIORITY",
            Keyword::HighPriority => "HIGH_PRIORITY",
            Keyword::Delayed => "DELAYED",
            Keyword::StraightJoin => "STRAIGHT_JOIN",
            Keyword::SqlNoCache => "SQL_NO_CACHE",
            Keyword::SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_keywords_render_with_single_space() {
        assert_eq!(Keyword::GroupBy.literal(), "GROUP BY");
        assert_eq!(Keyword::OrderBy.to_string(), "ORDER BY");
    }

    #[test]
    fn hint_keywords_render_verbatim() {
        assert_eq!(Keyword::SqlNoCache.literal(), "SQL_NO_CACHE");
        assert_eq!(Keyword::Distinct.literal(), "DISTINCT");
    }
}
