//! # Key Paths
//!
//! Dotted paths addressing a subtree within a manifest, e.g.
//! `package.metadata.docs`. Quoted segments (single or double quotes) keep
//! dots and spaces literal: `dependencies."my.crate"`.

use crate::error::{PatchError, PatchResult};
use std::fmt;
use std::str::FromStr;

/// A non-empty sequence of mapping keys identifying a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Builds a key path from pre-split segments.
    pub fn new<I, S>(segments: I) -> PatchResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(PatchError::General("Key path has no segments".into()));
        }
        Ok(Self { segments })
    }

    /// All segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Renders the first `len` segments in dotted form, re-quoting segments
    /// that need it. Used for diagnostics naming a partial path.
    pub(crate) fn prefix(&self, len: usize) -> String {
        let end = len.min(self.segments.len());
        let mut out = String::new();
        for (idx, segment) in self.segments[..end].iter().enumerate() {
            if idx > 0 {
                out.push('.');
            }
            if needs_quoting(segment) {
                out.push('"');
                out.push_str(segment);
                out.push('"');
            } else {
                out.push_str(segment);
            }
        }
        out
    }
}

/// Checks whether a segment survives dotted notation unquoted.
fn needs_quoting(segment: &str) -> bool {
    segment.is_empty()
        || !segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix(self.segments.len()))
    }
}

impl FromStr for KeyPath {
    type Err = PatchError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        let mut chars = raw.chars().peekable();

        loop {
            let segment = match chars.peek() {
                Some(&(quote @ ('"' | '\''))) => {
                    chars.next();
                    let mut segment = String::new();
                    loop {
                        match chars.next() {
                            Some(c) if c == quote => break,
                            Some(c) => segment.push(c),
                            None => {
                                return Err(PatchError::General(format!(
                                    "Unterminated quote in key path '{}'",
                                    raw
                                )))
                            }
                        }
                    }
                    segment
                }
                _ => {
                    let mut segment = String::new();
                    while let Some(&c) = chars.peek() {
                        if c == '.' {
                            break;
                        }
                        segment.push(c);
                        chars.next();
                    }
                    if segment.is_empty() {
                        return Err(PatchError::General(format!(
                            "Empty segment in key path '{}'",
                            raw
                        )));
                    }
                    segment
                }
            };
            segments.push(segment);

            match chars.next() {
                Some('.') => {}
                Some(c) => {
                    return Err(PatchError::General(format!(
                        "Unexpected '{}' after segment in key path '{}'",
                        c, raw
                    )))
                }
                None => break,
            }
        }

        KeyPath::new(segments)
    }
}
