//! Statement text buffers and the finished [`Statement`].
//!
//! [`StatementBuf`] accumulates clause fragments and bound values. Every write
//! is unconditional from the caller's point of view: a fragment that is empty
//! after trimming contributes nothing, keywords included, so clauses can be
//! attempted without presence checks.
//!
//! ```
//! use entsql::StatementBuf;
//!
//! let mut buf = StatementBuf::new();
//! buf.write("id, name", &["SELECT"])
//!     .write("users", &["FROM"])
//!     .write("  ", &["WHERE"])
//!     .write("LIMIT 10", &[]);
//! assert_eq!(buf.as_str(), "SELECT id, name FROM users LIMIT 10");
//! ```

use crate::error::{BuildError, BuildResult};
use crate::token::{PLACEHOLDER_CHAR, SPACE};
use crate::value::{Value, substitute_placeholders};
use std::fmt;

/// Append `" kw1 kw2 fragment"` to `buf` unless `fragment` is blank.
///
/// Empty keywords are skipped.
pub fn write_fragment(buf: &mut String, fragment: &str, keywords: &[&str]) {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return;
    }
    for kw in keywords.iter().filter(|kw| !kw.is_empty()) {
        buf.push_str(SPACE);
        buf.push_str(kw);
    }
    buf.push_str(SPACE);
    buf.push_str(fragment);
}

/// Accumulating statement text plus the ordered bound values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatementBuf {
    sql: String,
    values: Vec<Value>,
}

impl StatementBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment behind its keywords.
    pub fn write(&mut self, fragment: &str, keywords: &[&str]) -> &mut Self {
        write_fragment(&mut self.sql, fragment, keywords);
        self
    }

    /// Write to this buffer and to `secondary`.
    pub fn write_mirrored(
        &mut self,
        secondary: &mut String,
        fragment: &str,
        keywords: &[&str],
    ) -> &mut Self {
        self.write_mirrored_if(true, secondary, fragment, keywords)
    }

    /// Write to this buffer, and to `secondary` only when `enabled`.
    pub fn write_mirrored_if(
        &mut self,
        enabled: bool,
        secondary: &mut String,
        fragment: &str,
        keywords: &[&str],
    ) -> &mut Self {
        write_fragment(&mut self.sql, fragment, keywords);
        if enabled {
            write_fragment(secondary, fragment, keywords);
        }
        self
    }

    /// Append bound values in the given order. Placeholder counts are not checked.
    pub fn with_values<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    /// The text written so far, without the leading separator.
    pub fn as_str(&self) -> &str {
        self.sql.trim_start()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Text with values substituted; see [`Statement::debug_sql`].
    pub fn debug_sql(&self) -> String {
        substitute_placeholders(self.as_str(), &self.values, true)
    }

    pub fn finish(self) -> Statement {
        let sql = match self.sql.strip_prefix(SPACE) {
            Some(rest) => rest.to_string(),
            None => self.sql,
        };
        Statement {
            sql,
            values: self.values,
        }
    }
}

/// Finished statement text with `?` placeholders and its bound values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    sql: String,
    values: Vec<Value>,
}

impl Statement {
    pub fn new(sql: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            values,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.values)
    }

    /// Whether nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.sql.chars().filter(|c| *c == PLACEHOLDER_CHAR).count()
    }

    /// Opt-in check that every placeholder has exactly one value.
    pub fn check(&self) -> BuildResult<()> {
        let placeholders = self.placeholder_count();
        let values = self.values.len();
        if placeholders != values {
            #[cfg(feature = "tracing")]
            tracing::warn!(placeholders, values, sql = %self.sql, "placeholder/value count mismatch");
            return Err(BuildError::PlaceholderMismatch {
                placeholders,
                values,
            });
        }
        Ok(())
    }

    /// Rewrite `?` placeholders as `$1, $2, ...` for PostgreSQL.
    pub fn numbered_sql(&self) -> String {
        let mut out = String::with_capacity(self.sql.len() + self.values.len() * 2);
        let mut idx = 0usize;
        for ch in self.sql.chars() {
            if ch == PLACEHOLDER_CHAR {
                idx += 1;
                out.push('$');
                out.push_str(&idx.to_string());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Human-readable text with each placeholder replaced by its value.
    ///
    /// Strings and timestamps are single-quoted, nothing is escaped. For logs
    /// only, never for execution.
    pub fn debug_sql(&self) -> String {
        substitute_placeholders(&self.sql, &self.values, true)
    }

    /// Parameter refs compatible with `tokio-postgres`.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.values
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_sql())
    }
}
