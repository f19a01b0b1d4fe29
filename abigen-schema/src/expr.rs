//! Type-expression grammar.
//!
//! ABI field types are strings such as `uint64`, `name[]`, `asset?` or
//! `pair_uint64_pair_name_asset`. [`TypeExpr::parse`] turns one of these into
//! an explicit tree once, so later stages never re-inspect suffix markers.
//!
//! Grammar, applied outermost-first:
//! - a trailing `[]` wraps the rest of the expression in [`TypeExpr::Array`];
//! - a trailing `?` wraps the rest of the expression in [`TypeExpr::Optional`];
//!   repeated `?` markers collapse into one;
//! - a `pair_` prefix splits the rest on the first `_` into key and value;
//!   the value may itself start with `pair_` (right-nested pairs);
//! - anything else is a [`TypeExpr::Named`] token.
//!
//! Pair members never carry their own `[]` / `?` markers; any found on a
//! member segment are dropped.

use std::fmt;

/// Prefix marking a keyed pair expression.
pub const PAIR_PREFIX: &str = "pair_";

/// Parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A bare token: struct, variant, alias, primitive or unknown.
    Named(String),
    /// `T[]`.
    Array(Box<TypeExpr>),
    /// `T?`.
    Optional(Box<TypeExpr>),
    /// `pair_K_V`.
    Pair(Box<TypeExpr>, Box<TypeExpr>),
}

impl TypeExpr {
    /// Parses a raw ABI type string. Parsing is total.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Some(inner) = raw.strip_suffix("[]") {
            return Self::Array(Box::new(Self::parse(inner)));
        }
        if let Some(inner) = raw.strip_suffix('?') {
            return Self::parse(inner.trim_end_matches('?')).optional();
        }
        if let Some(rest) = raw.strip_prefix(PAIR_PREFIX) {
            return Self::parse_pair(rest);
        }
        Self::Named(raw.to_string())
    }

    /// Parses the part of a pair expression after the `pair_` prefix.
    fn parse_pair(rest: &str) -> Self {
        let (key, value) = rest.split_once('_').unwrap_or((rest, ""));
        let key = strip_markers(key);
        let value = strip_markers(value);

        let value = match value.strip_prefix(PAIR_PREFIX) {
            Some(nested) => Self::parse_pair(nested),
            None => Self::Named(value.to_string()),
        };

        Self::Pair(Box::new(Self::Named(key.to_string())), Box::new(value))
    }

    /// Creates a named expression.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps `self` in an array.
    #[must_use]
    pub fn array(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Wraps `self` in an optional. Already-optional expressions are
    /// returned unchanged, so `T??` is the same as `T?`.
    #[must_use]
    pub fn optional(self) -> Self {
        match self {
            Self::Optional(_) => self,
            other => Self::Optional(Box::new(other)),
        }
    }

    /// Creates a pair expression.
    #[must_use]
    pub fn pair(key: Self, value: Self) -> Self {
        Self::Pair(Box::new(key), Box::new(value))
    }

    /// Collects every bare token in the expression, left to right.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Named(name) => out.push(name),
            Self::Array(inner) | Self::Optional(inner) => inner.collect_names(out),
            Self::Pair(key, value) => {
                key.collect_names(out);
                value.collect_names(out);
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Array(inner) => write!(f, "{inner}[]"),
            Self::Optional(inner) => write!(f, "{inner}?"),
            Self::Pair(key, value) => write!(f, "{PAIR_PREFIX}{key}_{value}"),
        }
    }
}

/// Strips any trailing `[]` and `?` markers.
fn strip_markers(mut segment: &str) -> &str {
    loop {
        if let Some(inner) = segment.strip_suffix("[]") {
            segment = inner;
        } else if let Some(inner) = segment.strip_suffix('?') {
            segment = inner;
        } else {
            return segment;
        }
    }
}
