//! Script-side value types
//!
//! These types model what an embedded script runtime exchanges with the host,
//! without depending on any particular engine. The central type is
//! [`ScriptTable`]: a single container that conflates ordered-list and
//! keyed-map semantics, exactly as script-language tables do. Tables have
//! shared identity (two handles may refer to the same allocation) and permit
//! self-reference; the conversion layer in [`crate::convert`] is responsible
//! for rejecting cycles.
//!
//! [`ScriptValue::Function`] and [`ScriptValue::Handle`] represent the
//! non-data kinds a runtime can hold (callables, runtime-internal handles).
//! They carry opaque ids and are never interpreted by this crate.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A dynamically-typed value as held by the script runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptValue {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
    Table(ScriptTable),
    Function(FunctionRef),
    Handle(HandleRef),
}

impl ScriptValue {
    /// The runtime-facing name of this value's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptValue::Nil => "nil",
            ScriptValue::Bool(_) => "boolean",
            ScriptValue::Number(_) => "number",
            ScriptValue::Str(_) => "string",
            ScriptValue::Table(_) => "table",
            ScriptValue::Function(_) => "function",
            ScriptValue::Handle(_) => "handle",
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        ScriptValue::Bool(value)
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        ScriptValue::Number(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::Str(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::Str(value)
    }
}

impl From<ScriptTable> for ScriptValue {
    fn from(table: ScriptTable) -> Self {
        ScriptValue::Table(table)
    }
}

/// An opaque reference to a callable defined inside the script runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionRef(u64);

impl FunctionRef {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// An opaque reference to a runtime-internal resource (stream, channel, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleRef(u64);

impl HandleRef {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A table key: script tables index by integers and strings alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKey {
    Int(i64),
    Str(String),
}

impl TableKey {
    /// Returns the key as a one-based index when it can take part in the
    /// sequence interpretation of a table, `None` otherwise.
    pub fn as_positive_int(&self) -> Option<i64> {
        match self {
            TableKey::Int(index) if *index >= 1 => Some(*index),
            _ => None,
        }
    }

    /// The key rendered as a mapping key. Integer keys stringify.
    pub fn as_mapping_key(&self) -> String {
        match self {
            TableKey::Int(index) => index.to_string(),
            TableKey::Str(key) => key.clone(),
        }
    }
}

impl From<i64> for TableKey {
    fn from(index: i64) -> Self {
        TableKey::Int(index)
    }
}

impl From<&str> for TableKey {
    fn from(key: &str) -> Self {
        TableKey::Str(key.to_string())
    }
}

impl From<String> for TableKey {
    fn from(key: String) -> Self {
        TableKey::Str(key)
    }
}

/// The conflated script container: one type for both ordered lists and
/// string-keyed maps.
///
/// A table is a shared, interiorly-mutable handle; cloning it clones the
/// handle, not the contents, and equality is identity equality, matching how
/// script runtimes compare tables. Entries keep insertion order. Inserting an
/// existing key replaces its value in place.
#[derive(Clone, Default)]
pub struct ScriptTable {
    entries: Rc<RefCell<Vec<(TableKey, ScriptValue)>>>,
}

impl ScriptTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing an existing entry for the same key.
    pub fn insert(&self, key: impl Into<TableKey>, value: impl Into<ScriptValue>) {
        let key = key.into();
        let value = value.into();
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => entries.push((key, value)),
        }
    }

    /// Appends `value` under the next unused positive integer key.
    pub fn push(&self, value: impl Into<ScriptValue>) {
        let mut entries = self.entries.borrow_mut();
        let next = entries
            .iter()
            .filter_map(|(key, _)| key.as_positive_int())
            .max()
            .unwrap_or(0)
            + 1;
        entries.push((TableKey::Int(next), value.into()));
    }

    pub fn get(&self, key: impl Into<TableKey>) -> Option<ScriptValue> {
        let key = key.into();
        self.entries
            .borrow()
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Snapshot of the table's direct entries in insertion order.
    pub fn entries(&self) -> Vec<(TableKey, ScriptValue)> {
        self.entries.borrow().clone()
    }

    /// A stable identity for this table's allocation, used to tell shared and
    /// self-referential tables apart from structurally equal ones.
    pub fn identity(&self) -> usize {
        Rc::as_ptr(&self.entries) as usize
    }
}

impl PartialEq for ScriptTable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl fmt::Debug for ScriptTable {
    // entries are elided: a table may reach itself, and Debug must not recurse
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptTable")
            .field("identity", &self.identity())
            .field("len", &self.len())
            .finish()
    }
}
