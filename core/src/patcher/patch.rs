//! # Patches
//!
//! A patch pairs a key path with a replacement value. Applying it replaces
//! the entire subtree at that path; it never merges with the prior value.

use crate::error::PatchResult;
use crate::patcher::key_path::KeyPath;
use toml_edit::{Array, ArrayOfTables, InlineTable, Item, Table, Value};

/// A declarative subtree replacement.
#[derive(Debug, Clone)]
pub struct Patch {
    path: KeyPath,
    value: Item,
}

impl Patch {
    /// Creates a patch from an already-built replacement value.
    pub fn new(path: KeyPath, mut value: Value) -> Self {
        value.decor_mut().clear();
        Self {
            path,
            value: Item::Value(value),
        }
    }

    /// Parses `path` as a dotted key path and `value` as a TOML value
    /// literal, e.g. `"1.0"` or `[{ name = "pyw", path = "src/main.rs" }]`.
    pub fn parse(path: &str, value: &str) -> PatchResult<Self> {
        let path: KeyPath = path.parse()?;
        let value: Value = value.trim().parse()?;
        Ok(Self::new(path, value))
    }

    /// The target key path.
    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    /// The replacement subtree, in value notation.
    pub(crate) fn value(&self) -> &Item {
        &self.value
    }
}

/// Re-renders a fresh replacement for insertion into a standard table:
/// a mapping becomes a `[section]` table and a non-empty sequence of
/// mappings becomes a `[[section]]` array, matching hand-written manifest
/// convention. Everything else stays an inline `key = value`.
pub(crate) fn canonicalize(item: Item) -> Item {
    match item {
        Item::Value(Value::InlineTable(inline)) => Item::Table(build_table(inline)),
        Item::Value(Value::Array(array)) if is_table_sequence(&array) => {
            let mut tables = ArrayOfTables::new();
            let mut array = array;
            while !array.is_empty() {
                if let Value::InlineTable(inline) = array.remove(0) {
                    tables.push(build_table(inline));
                }
            }
            Item::ArrayOfTables(tables)
        }
        Item::Value(mut value) => {
            value.decor_mut().clear();
            Item::Value(value)
        }
        other => other,
    }
}

/// Rebuilds an inline table as a standard table with fresh keys, so no
/// literal-level spacing leaks into the rendered section.
fn build_table(inline: InlineTable) -> Table {
    let mut table = Table::new();
    for (key, value) in inline {
        table.insert(&key, canonicalize(Item::Value(value)));
    }
    table
}

/// A non-empty array whose every element is a mapping.
fn is_table_sequence(array: &Array) -> bool {
    !array.is_empty() && array.iter().all(|value| value.as_inline_table().is_some())
}
