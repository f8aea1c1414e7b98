//! Marshalling between script values and the structured model
//!
//! The hard direction is [`to_structured`]: a [`ScriptTable`] does not say
//! whether it is a list or a map, so one classification rule decides for
//! every table, applied uniformly at every nesting depth:
//!
//! - any entry with a non-positive-integer key present → [`Value::Mapping`],
//!   built from those entries; integer-keyed entries of such a mixed table
//!   are dropped (documented, lossy)
//! - no entries at all → empty [`Value::Mapping`]
//! - otherwise → [`Value::Sequence`], ordered by increasing integer key
//!
//! The rule lives here, in one pure function, rather than being re-derived
//! ad hoc wherever a table crosses the boundary.
//!
//! Tables may reference themselves; the walk keeps the set of table
//! identities on the current recursion path and fails with
//! [`ConvertError::Cycle`] instead of recursing forever. Non-data kinds
//! (functions, handles) fail the whole conversion with
//! [`ConvertError::UnsupportedKind`].

use std::collections::{BTreeMap, HashSet};

use crate::error::ConvertError;
use crate::script::{ScriptTable, ScriptValue, TableKey};
use crate::Value;

/// How a table converts, per the classification rule above.
#[derive(Debug, PartialEq, Eq)]
enum Shape {
    Sequence,
    Mapping,
}

fn classify(entries: &[(TableKey, ScriptValue)]) -> Shape {
    if entries.is_empty() {
        // nothing distinguishes an empty list from an empty map; mapping is
        // the fixed default
        return Shape::Mapping;
    }
    if entries.iter().all(|(key, _)| key.as_positive_int().is_some()) {
        Shape::Sequence
    } else {
        Shape::Mapping
    }
}

/// Converts a script value into an independent structured tree.
pub fn to_structured(value: &ScriptValue) -> Result<Value, ConvertError> {
    let mut visiting = HashSet::new();
    convert_value(value, &mut visiting)
}

fn convert_value(value: &ScriptValue, visiting: &mut HashSet<usize>) -> Result<Value, ConvertError> {
    match value {
        ScriptValue::Nil => Ok(Value::Null),
        ScriptValue::Bool(value) => Ok(Value::Bool(*value)),
        ScriptValue::Number(value) => Ok(Value::Number(*value)),
        ScriptValue::Str(value) => Ok(Value::String(value.clone())),
        ScriptValue::Table(table) => convert_table(table, visiting),
        non_data @ (ScriptValue::Function(_) | ScriptValue::Handle(_)) => {
            Err(ConvertError::unsupported_kind(non_data.kind()))
        }
    }
}

fn convert_table(table: &ScriptTable, visiting: &mut HashSet<usize>) -> Result<Value, ConvertError> {
    let identity = table.identity();
    if !visiting.insert(identity) {
        return Err(ConvertError::cycle(identity));
    }

    let entries = table.entries();
    let converted = match classify(&entries) {
        Shape::Sequence => {
            let mut indexed: Vec<(i64, &ScriptValue)> = entries
                .iter()
                .filter_map(|(key, value)| key.as_positive_int().map(|index| (index, value)))
                .collect();
            indexed.sort_by_key(|(index, _)| *index);

            let mut sequence = Vec::with_capacity(indexed.len());
            for (_, value) in indexed {
                sequence.push(convert_value(value, visiting)?);
            }
            Value::Sequence(sequence)
        }
        Shape::Mapping => {
            let mut mapping = BTreeMap::new();
            for (key, value) in &entries {
                if key.as_positive_int().is_some() {
                    // integer keys do not survive a mixed table
                    continue;
                }
                mapping.insert(key.as_mapping_key(), convert_value(value, visiting)?);
            }
            Value::Mapping(mapping)
        }
    };

    visiting.remove(&identity);
    Ok(converted)
}

/// Converts a structured tree back into script values.
///
/// Sequences become tables with contiguous integer keys starting at 1,
/// mappings become tables with string keys. Always succeeds: every structured
/// value has a script representation.
pub fn from_structured(value: &Value) -> ScriptValue {
    match value {
        Value::Null => ScriptValue::Nil,
        Value::Bool(value) => ScriptValue::Bool(*value),
        Value::Number(value) => ScriptValue::Number(*value),
        Value::String(value) => ScriptValue::Str(value.clone()),
        Value::Sequence(items) => {
            let table = ScriptTable::new();
            for item in items {
                table.push(from_structured(item));
            }
            ScriptValue::Table(table)
        }
        Value::Mapping(fields) => {
            let table = ScriptTable::new();
            for (key, item) in fields {
                table.insert(key.as_str(), from_structured(item));
            }
            ScriptValue::Table(table)
        }
    }
}
