//! Repository name patterns
//!
//! Patterns use shell glob syntax: `*` matches any run of characters
//! (including `/`), `?` matches one character, and `[...]` / `{a,b}` work as
//! in a shell. Everything else is literal.

use std::fmt;
use std::hash::{Hash, Hasher};

use globset::{GlobBuilder, GlobMatcher};

use crate::error::{Error, Result};

/// The pattern that matches every repository name.
pub const ALL_PATTERN: &str = "*";

#[derive(Clone)]
enum Matcher {
    All,
    Glob(GlobMatcher),
}

/// A compiled repository name pattern.
///
/// A `Pattern` can only be obtained by compiling its text successfully.
/// Two patterns are equal when their text is equal.
#[derive(Clone)]
pub struct Pattern {
    text: String,
    matcher: Matcher,
}

impl Pattern {
    /// Compile a glob pattern.
    pub fn compile(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text == ALL_PATTERN {
            return Ok(Self::all());
        }

        let glob = match GlobBuilder::new(&text).literal_separator(false).build() {
            Ok(glob) => glob,
            Err(source) => {
                return Err(Error::PatternCompile {
                    pattern: text,
                    source,
                });
            }
        };

        Ok(Self {
            matcher: Matcher::Glob(glob.compile_matcher()),
            text,
        })
    }

    /// The pattern matching every name.
    pub fn all() -> Self {
        Self {
            text: ALL_PATTERN.to_string(),
            matcher: Matcher::All,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this is the all-matching wildcard.
    pub fn is_all(&self) -> bool {
        matches!(self.matcher, Matcher::All)
    }

    pub fn is_match(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::All => true,
            Matcher::Glob(matcher) => matcher.is_match(name),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.text).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
