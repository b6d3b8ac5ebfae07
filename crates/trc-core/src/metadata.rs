//! Decoded metadata record.
//!
//! A `Metadata` value is an immutable name-to-value mapping over the
//! WAVEDESC schema. The header decoder produces a raw record (numeric
//! codes intact); `translate::presentable` derives a second record with
//! enum codes replaced by labels. Iteration and serialization follow
//! schema order so output is deterministic.

use std::collections::HashMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::FormatError;
use crate::wavedesc::layout;

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
            Value::Tuple(parts) => {
                write!(f, "[")?;
                for (idx, part) in parts.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{part}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Immutable record of decoded WAVEDESC fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    fields: HashMap<&'static str, Value>,
}

impl Metadata {
    pub(crate) fn new(fields: HashMap<&'static str, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Integer value of a field, for extraction math.
    pub fn int(&self, name: &'static str) -> Result<i64, FormatError> {
        match self.fields.get(name) {
            Some(Value::Int(v)) => Ok(*v),
            Some(_) => Err(FormatError::NotNumeric { field: name }),
            None => Err(FormatError::MissingField(name)),
        }
    }

    /// Float value of a field; integer fields widen losslessly.
    pub fn float(&self, name: &'static str) -> Result<f64, FormatError> {
        match self.fields.get(name) {
            Some(Value::Float(v)) => Ok(*v),
            Some(Value::Int(v)) => Ok(*v as f64),
            Some(_) => Err(FormatError::NotNumeric { field: name }),
            None => Err(FormatError::MissingField(name)),
        }
    }

    /// Fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        layout::FIELDS
            .iter()
            .filter_map(|field| self.fields.get(field.name).map(|value| (field.name, value)))
    }

    pub(crate) fn replace(&mut self, name: &'static str, value: Value) {
        self.fields.insert(name, value);
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(layout::FIELDS.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
