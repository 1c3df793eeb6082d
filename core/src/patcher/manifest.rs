//! # Manifest Documents
//!
//! The lossless in-memory manifest. Untouched nodes keep their original
//! bytes across a load/persist cycle (comments, blank lines, key ordering,
//! inline vs. block notation); replaced subtrees are rendered fresh.

use crate::error::{PatchError, PatchResult};
use crate::patcher::key_path::KeyPath;
use crate::patcher::patch::{canonicalize, Patch};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use toml_edit::{DocumentMut, InlineTable, Item, Table, Value};

/// An in-memory manifest retaining full formatting metadata.
#[derive(Debug, Clone)]
pub struct Manifest {
    doc: DocumentMut,
}

impl Manifest {
    /// Parses manifest text into a lossless document.
    pub fn parse(content: &str) -> PatchResult<Self> {
        let doc: DocumentMut = content.parse()?;
        Ok(Self { doc })
    }

    /// Loads the manifest at `path`.
    pub fn load(path: &Path) -> PatchResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(PatchError::NotFound(path.to_path_buf()))
            }
            Err(err) => return Err(PatchError::Io(err)),
        };
        Self::parse(&content)
    }

    /// Replaces the entire subtree at the patch's key path.
    ///
    /// Missing intermediate segments are created as empty tables appended
    /// at the end of their parent. An existing non-table intermediate
    /// aborts with `PathConflict` before anything is mutated: a created
    /// intermediate is empty, so every segment below it is also fresh, and
    /// the first conflicting node is always reached before the first
    /// insertion.
    pub fn apply(&mut self, patch: &Patch) -> PatchResult<()> {
        let segments = patch.path().segments();
        let (leaf, parents) = match segments.split_last() {
            Some((leaf, parents)) => (leaf.as_str(), parents),
            None => return Err(PatchError::General("Key path has no segments".into())),
        };

        let mut current: &mut Item = self.doc.as_item_mut();
        for (depth, segment) in parents.iter().enumerate() {
            current = descend(current, segment, || patch.path().prefix(depth + 1))?;
        }

        let inline = current.as_inline_table().is_some();
        let table = current
            .as_table_like_mut()
            .ok_or_else(|| PatchError::PathConflict(patch.path().prefix(parents.len())))?;

        // Sections cannot nest inside inline tables, so a replacement
        // landing there stays in value notation.
        let replacement = if inline {
            patch.value().clone()
        } else {
            canonicalize(patch.value().clone())
        };
        table.insert(leaf, replacement);
        Ok(())
    }

    /// Looks up the subtree at `path`, if present.
    pub fn get(&self, path: &KeyPath) -> Option<&Item> {
        let mut current: &Item = self.doc.as_item();
        for segment in path.segments() {
            current = current.as_table_like()?.get(segment)?;
        }
        Some(current)
    }

    /// Serializes the document and atomically replaces the file at `path`.
    ///
    /// The text goes to a temporary sibling first and is renamed over the
    /// destination, so an interrupted write never leaves a truncated file.
    pub fn persist(&self, path: &Path) -> PatchResult<()> {
        let rendered = self.doc.to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir).map_err(PatchError::Write)?;
        staged
            .write_all(rendered.as_bytes())
            .map_err(PatchError::Write)?;
        staged
            .persist(path)
            .map_err(|err| PatchError::Write(err.error))?;
        Ok(())
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.doc, f)
    }
}

/// Resolves `segment` under `item`, creating it as an empty mapping when
/// absent. An existing non-mapping node is a conflict, reported with the
/// dotted prefix built by `conflict_path`.
fn descend<'a>(
    item: &'a mut Item,
    segment: &str,
    conflict_path: impl Fn() -> String,
) -> PatchResult<&'a mut Item> {
    let inline = item.as_inline_table().is_some();
    let table = item
        .as_table_like_mut()
        .ok_or_else(|| PatchError::PathConflict(conflict_path()))?;

    match table.get(segment) {
        Some(existing) if existing.as_table_like().is_none() => {
            return Err(PatchError::PathConflict(conflict_path()));
        }
        Some(_) => {}
        None => {
            table.insert(segment, empty_mapping(inline));
        }
    }

    table
        .get_mut(segment)
        .ok_or_else(|| PatchError::General(format!("Failed to descend into '{}'", segment)))
}

/// A fresh empty mapping in the notation its parent supports.
fn empty_mapping(inline: bool) -> Item {
    if inline {
        Item::Value(Value::InlineTable(InlineTable::new()))
    } else {
        let mut table = Table::new();
        table.set_implicit(true);
        Item::Table(table)
    }
}
