//! Descriptor location and header decoding.

use std::collections::HashMap;

use crate::error::FormatError;
use crate::metadata::{Metadata, Value};

use super::layout;
use super::reader::{ByteOrder, WavedescReader, detect_byte_order};

/// Decoded descriptor block: base offset, resolved byte order and the raw
/// (untranslated) metadata record.
#[derive(Debug, Clone)]
pub struct Wavedesc {
    pub base: usize,
    pub order: ByteOrder,
    pub metadata: Metadata,
}

/// Find the descriptor base, i.e. the offset of the `WAVEDESC` marker.
pub fn locate_wavedesc(raw: &[u8]) -> Result<usize, FormatError> {
    raw.windows(layout::WAVEDESC_MARKER.len())
        .position(|window| window == layout::WAVEDESC_MARKER)
        .ok_or(FormatError::MarkerNotFound)
}

/// Decode every schema field into a raw metadata record.
pub fn parse_wavedesc(raw: &[u8]) -> Result<Wavedesc, FormatError> {
    let base = locate_wavedesc(raw)?;
    let order = detect_byte_order(raw, base)?;
    let reader = WavedescReader::new(raw, base, order);

    let mut fields = HashMap::with_capacity(layout::FIELDS.len());
    for field in layout::FIELDS {
        let mut value = reader.read_value(field.name, field.offset, field.layout)?;
        if field.name == "trigger_time" {
            value = normalize_trigger_time(value);
        }
        fields.insert(field.name, value);
    }

    Ok(Wavedesc {
        base,
        order,
        metadata: Metadata::new(fields),
    })
}

/// The on-disk TRIGGER_TIME tuple runs finest-to-coarsest and ends with an
/// unused word. Drop the trailing word and reverse, so the exposed tuple
/// reads year, months, days, hours, minutes, seconds.
fn normalize_trigger_time(value: Value) -> Value {
    match value {
        Value::Tuple(mut parts) => {
            parts.pop();
            parts.reverse();
            Value::Tuple(parts)
        }
        other => other,
    }
}
