//! Structured values and script-container marshalling
//!
//! This crate provides the data-exchange layer between a host process and an
//! embedded script runtime. It is built around two value models:
//!
//! - [`Value`]: the canonical, unambiguous structured model (null, booleans,
//!   double-precision numbers, strings, sequences, string-keyed mappings).
//!   This is the shape JSON requires and the shape handler parameters and
//!   results travel in.
//! - [`ScriptValue`]: the engine-neutral model of what a script runtime
//!   actually holds, including its conflated table type ([`ScriptTable`],
//!   simultaneously array-like and map-like) and non-data kinds such as
//!   callable references and runtime handles.
//!
//! # Modules
//!
//! - [`json`]: encode/decode between [`Value`] and JSON bytes
//! - [`convert`]: the bidirectional marshalling between [`ScriptValue`] and
//!   [`Value`], including the table classification rule and cycle detection
//! - [`script`]: the script-side value and table types
//!
//! # Example
//!
//! ```
//! use scriptlet_value::{to_structured, ScriptTable, ScriptValue, Value};
//!
//! let table = ScriptTable::new();
//! table.push(ScriptValue::Str("a".to_string()));
//! table.push(ScriptValue::Str("b".to_string()));
//!
//! let value = to_structured(&ScriptValue::Table(table)).unwrap();
//! assert_eq!(
//!     value,
//!     Value::Sequence(vec![
//!         Value::String("a".to_string()),
//!         Value::String("b".to_string()),
//!     ])
//! );
//! ```

pub mod convert;
pub mod json;
pub mod script;

mod error;
mod value;

pub use convert::{from_structured, to_structured};
pub use error::{ConvertError, DecodeError};
pub use json::{decode, encode};
pub use script::{FunctionRef, HandleRef, ScriptTable, ScriptValue, TableKey};
pub use value::Value;
