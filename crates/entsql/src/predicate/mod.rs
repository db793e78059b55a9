//! Boolean predicate trees for WHERE/HAVING clauses.
//!
//! A [`Predicate`] is either a leaf (`field op ?`) or an AND/OR combinator over
//! two owned children. Combinators are built by left-folding peers onto an
//! accumulator, so `a.and(b).and(c)` is `((a AND b) AND c)`.
//!
//! Rendering uses `?` placeholders and returns the bound values in the same
//! left-to-right order. Parentheses are the only precedence mechanism: a child
//! is wrapped iff its mode differs from its parent's mode. Leaves take the mode
//! of the combinator holding them, so uniform chains render flat and only a
//! nested combinator of the other kind gets parentheses:
//!
//! ```
//! use entsql::Predicate;
//!
//! let p = Predicate::eq("a", 1).or(Predicate::eq("b", 2)).and(Predicate::eq("c", 3));
//! let (sql, values) = p.to_sql();
//! assert_eq!(sql, "(a = ? OR b = ?) AND c = ?");
//! assert_eq!(values.len(), 3);
//! ```

mod symbol;


pub use symbol::Symbol;

use crate::token::{LEFT_PAREN, RIGHT_PAREN, SPACE};
use crate::value::{Value, substitute_placeholders};
use std::fmt;

/// Combination mode of a predicate node.
///
/// Leaves are [`Mode::Default`]; combinators are [`Mode::And`] or [`Mode::Or`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Default,
    And,
    Or,
}

impl Mode {
    fn symbol(self) -> Symbol {
        match self {
            Mode::Or => Symbol::Or,
            _ => Symbol::And,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        field: String,
        op: Symbol,
        args: Vec<Value>,
    },
    Combine {
        mode: Mode,
        left: Box<Predicate>,
        right: Box<Predicate>,
    },
}

/// A boolean expression tree rendered to SQL with `?` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    node: Node,
}

impl Predicate {
    /// Create a leaf: `field op ?` bound to `args` in order.
    ///
    /// `op` must be a comparison; use [`and`](Self::and)/[`or`](Self::or) to
    /// combine. The null checks take no placeholder, so their `args` are
    /// dropped.
    pub fn leaf<I, V>(field: impl Into<String>, op: Symbol, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        debug_assert!(!op.is_combinator(), "{op} is not a leaf operator");
        let args = match op {
            Symbol::IsNull | Symbol::IsNotNull => Vec::new(),
            _ => args.into_iter().map(Into::into).collect(),
        };
        Self {
            node: Node::Leaf {
                field: field.into(),
                op,
                args,
            },
        }
    }

    /// Create an equality condition: field = ?
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(field, Symbol::Eq, [value])
    }

    /// Create an inequality condition: field <> ?
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(field, Symbol::Ne, [value])
    }

    /// Create a greater-than condition: field > ?
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(field, Symbol::Gt, [value])
    }

    /// Create a greater-than-or-equal condition: field >= ?
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(field, Symbol::Gte, [value])
    }

    /// Create a less-than condition: field < ?
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(field, Symbol::Lt, [value])
    }

    /// Create a less-than-or-equal condition: field <= ?
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::leaf(field, Symbol::Lte, [value])
    }

    /// Create a LIKE condition: field LIKE ?
    pub fn like(field: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::leaf(field, Symbol::Like, [pattern])
    }

    /// Create a NOT LIKE condition: field NOT LIKE ?
    pub fn not_like(field: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::leaf(field, Symbol::NotLike, [pattern])
    }

    /// Create an IN condition: field IN (?, ?, ...)
    ///
    /// An empty list renders as `1=0`.
    pub fn in_list<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::leaf(field, Symbol::In, values)
    }

    /// Create a NOT IN condition: field NOT IN (?, ?, ...)
    ///
    /// An empty list renders as `1=1`.
    pub fn not_in<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::leaf(field, Symbol::NotIn, values)
    }

    /// Create a BETWEEN condition: field BETWEEN ? AND ?
    pub fn between(field: impl Into<String>, from: impl Into<Value>, to: impl Into<Value>) -> Self {
        let bounds: [Value; 2] = [from.into(), to.into()];
        Self::leaf(field, Symbol::Between, bounds)
    }

    /// Create an IS NULL condition.
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::leaf(field, Symbol::IsNull, std::iter::empty::<Value>())
    }

    /// Create an IS NOT NULL condition.
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::leaf(field, Symbol::IsNotNull, std::iter::empty::<Value>())
    }

    /// `self AND peer`
    pub fn and(self, peer: Predicate) -> Self {
        self.fold(Mode::And, [peer])
    }

    /// `self OR peer`
    pub fn or(self, peer: Predicate) -> Self {
        self.fold(Mode::Or, [peer])
    }

    /// Left-fold every peer onto `self` with AND.
    pub fn and_all(self, peers: impl IntoIterator<Item = Predicate>) -> Self {
        self.fold(Mode::And, peers)
    }

    /// Left-fold every peer onto `self` with OR.
    pub fn or_all(self, peers: impl IntoIterator<Item = Predicate>) -> Self {
        self.fold(Mode::Or, peers)
    }

    fn fold(self, mode: Mode, peers: impl IntoIterator<Item = Predicate>) -> Self {
        peers.into_iter().fold(self, |acc, peer| Predicate {
            node: Node::Combine {
                mode,
                left: Box::new(acc),
                right: Box::new(peer),
            },
        })
    }

    /// The node's own mode: `Default` for leaves.
    pub fn mode(&self) -> Mode {
        match &self.node {
            Node::Leaf { .. } => Mode::Default,
            Node::Combine { mode, .. } => *mode,
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        matches!(self.node, Node::Leaf { .. })
    }

    /// The operator symbol: the comparison for a leaf, AND/OR for a combinator.
    pub fn symbol(&self) -> Symbol {
        match &self.node {
            Node::Leaf { op, .. } => *op,
            Node::Combine { mode, .. } => mode.symbol(),
        }
    }

    /// The field identifier of a leaf.
    pub fn field(&self) -> Option<&str> {
        match &self.node {
            Node::Leaf { field, .. } => Some(field),
            Node::Combine { .. } => None,
        }
    }

    /// Arguments bound directly to this node (empty for combinators).
    pub fn args(&self) -> &[Value] {
        match &self.node {
            Node::Leaf { args, .. } => args,
            Node::Combine { .. } => &[],
        }
    }

    /// Left and right children of a combinator.
    pub fn children(&self) -> Option<(&Predicate, &Predicate)> {
        match &self.node {
            Node::Leaf { .. } => None,
            Node::Combine { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Mode used for the parenthesization decision under a parent of mode
    /// `parent`: a leaf inherits the parent's mode, a combinator keeps its own.
    pub fn effective_mode(&self, parent: Mode) -> Mode {
        match self.mode() {
            Mode::Default => parent,
            own => own,
        }
    }

    /// Render to SQL with `?` placeholders and the values in placeholder order.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut values = Vec::new();
        self.write_sql(&mut sql, &mut values);
        (sql, values)
    }

    /// Render an optional predicate; `None` renders as `("", [])`.
    pub fn to_sql_opt(predicate: Option<&Predicate>) -> (String, Vec<Value>) {
        predicate.map(Predicate::to_sql).unwrap_or_default()
    }

    fn write_sql(&self, sql: &mut String, values: &mut Vec<Value>) {
        match &self.node {
            Node::Leaf { field, op, args } => {
                match op {
                    Symbol::In if args.is_empty() => sql.push_str("1=0"),
                    Symbol::NotIn if args.is_empty() => sql.push_str("1=1"),
                    _ => {
                        sql.push_str(field);
                        sql.push_str(SPACE);
                        op.write_bound(args.len(), sql);
                    }
                }
                values.extend(args.iter().cloned());
            }
            Node::Combine { mode, left, right } => {
                left.write_child(*mode, sql, values);
                sql.push_str(SPACE);
                sql.push_str(mode.symbol().with_placeholder());
                sql.push_str(SPACE);
                right.write_child(*mode, sql, values);
            }
        }
    }

    fn write_child(&self, parent: Mode, sql: &mut String, values: &mut Vec<Value>) {
        if self.effective_mode(parent) == parent {
            self.write_sql(sql, values);
        } else {
            sql.push_str(LEFT_PAREN);
            self.write_sql(sql, values);
            sql.push_str(RIGHT_PAREN);
        }
    }
}

/// Debug rendering: placeholders replaced by the bare text of each value.
///
/// Nothing is quoted or escaped. For logs only.
impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (sql, values) = self.to_sql();
        f.write_str(&substitute_placeholders(&sql, &values, false))
    }
}
