//! ORDER BY and GROUP BY items.

use crate::token::{COMMA, SPACE};

/// Anything that renders to one SQL fragment.
pub trait Fragment {
    fn render_sql(&self) -> String;
}

/// Render each fragment and join with `", "`.
pub fn join_fragments<F: Fragment>(items: &[F]) -> String {
    items
        .iter()
        .map(Fragment::render_sql)
        .collect::<Vec<_>>()
        .join(COMMA)
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub const fn literal(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// NULLS FIRST / NULLS LAST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nulls {
    First,
    Last,
}

impl Nulls {
    pub const fn literal(self) -> &'static str {
        match self {
            Nulls::First => "NULLS FIRST",
            Nulls::Last => "NULLS LAST",
        }
    }
}

/// One ORDER BY term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    expr: String,
    direction: Direction,
    nulls: Option<Nulls>,
}

impl Order {
    pub fn asc(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            direction: Direction::Asc,
            nulls: None,
        }
    }

    pub fn desc(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            direction: Direction::Desc,
            nulls: None,
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(Nulls::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(Nulls::Last);
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Fragment for Order {
    fn render_sql(&self) -> String {
        let mut out = String::with_capacity(self.expr.len() + 16);
        out.push_str(&self.expr);
        out.push_str(SPACE);
        out.push_str(self.direction.literal());
        if let Some(nulls) = self.nulls {
            out.push_str(SPACE);
            out.push_str(nulls.literal());
        }
        out
    }
}

/// One GROUP BY term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    expr: String,
}

impl Group {
    pub fn new(expr: impl Into<String>) -> Self {
        Self { expr: expr.into() }
    }
}

impl Fragment for Group {
    fn render_sql(&self) -> String {
        self.expr.clone()
    }
}
