//! Path addressing for tree locations
//!
//! A location in a payload is a sequence of tokens: object keys, or 1-based
//! array positions (so they read as "Item 1", "Item 2", ...). The canonical
//! [`Address`] of a path is `root` followed by the tokens, joined by `.`.
//! It is the only identity used by expansion and window lookups.

use std::fmt;

/// First segment of every canonical address
pub const ROOT_TOKEN: &str = "root";

/// Separator between address segments
pub const ADDRESS_SEPARATOR: char = '.';

const ESCAPE: char = '\\';

/// One step from a container into a child
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathToken {
    /// Object property key
    Key(String),
    /// 1-based array position
    Index(usize),
}

impl PathToken {
    /// Raw text of this token (the key itself, or the 1-based position)
    pub fn raw(&self) -> String {
        match self {
            PathToken::Key(key) => key.clone(),
            PathToken::Index(n) => n.to_string(),
        }
    }

    fn encode_into(&self, out: &mut String) {
        match self {
            PathToken::Key(key) => {
                for ch in key.chars() {
                    if ch == ADDRESS_SEPARATOR || ch == ESCAPE {
                        out.push(ESCAPE);
                    }
                    out.push(ch);
                }
            }
            PathToken::Index(n) => out.push_str(&n.to_string()),
        }
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathToken::Key(key) => write!(f, "{}", key),
            PathToken::Index(n) => write!(f, "{}", n),
        }
    }
}

/// Ordered token sequence from the root to a node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<PathToken>);

impl NodePath {
    /// The empty path (the payload root)
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn tokens(&self) -> &[PathToken] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&PathToken> {
        self.0.last()
    }

    /// Path extended by one token
    pub fn child(&self, token: PathToken) -> Self {
        let mut tokens = Vec::with_capacity(self.0.len() + 1);
        tokens.extend(self.0.iter().cloned());
        tokens.push(token);
        Self(tokens)
    }

    /// Path extended by an object key
    pub fn key(&self, key: &str) -> Self {
        self.child(PathToken::Key(key.to_string()))
    }

    /// Path extended by a 1-based array position
    pub fn index(&self, position: usize) -> Self {
        self.child(PathToken::Index(position))
    }

    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// Canonical address of this path
    pub fn address(&self) -> Address {
        let mut out = String::from(ROOT_TOKEN);
        for token in &self.0 {
            out.push(ADDRESS_SEPARATOR);
            token.encode_into(&mut out);
        }
        Address(out)
    }
}

impl From<Vec<PathToken>> for NodePath {
    fn from(tokens: Vec<PathToken>) -> Self {
        Self(tokens)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address())
    }
}

/// Canonical, order-preserving string identity of a tree location
///
/// Keys containing `.` or `\` are backslash-escaped, so `root.a.b` (key `a`
/// then key `b`) never collides with the single key `a.b` (`root.a\.b`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub fn root() -> Self {
        Self(ROOT_TOKEN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT_TOKEN
    }
}

impl From<&NodePath> for Address {
    fn from(path: &NodePath) -> Self {
        path.address()
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
