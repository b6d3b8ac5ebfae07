//! Safe, byte-order-aware access to descriptor bytes.

use crate::error::FormatError;
use crate::metadata::Value;

use super::layout::{self, Layout};

/// Multi-byte field ordering, resolved from COMM_ORDER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    pub fn i16(self, bytes: [u8; 2]) -> i16 {
        match self {
            ByteOrder::Big => i16::from_be_bytes(bytes),
            ByteOrder::Little => i16::from_le_bytes(bytes),
        }
    }

    pub fn i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::Big => i32::from_be_bytes(bytes),
            ByteOrder::Little => i32::from_le_bytes(bytes),
        }
    }

    pub fn f32(self, bytes: [u8; 4]) -> f32 {
        match self {
            ByteOrder::Big => f32::from_be_bytes(bytes),
            ByteOrder::Little => f32::from_le_bytes(bytes),
        }
    }

    pub fn f64(self, bytes: [u8; 8]) -> f64 {
        match self {
            ByteOrder::Big => f64::from_be_bytes(bytes),
            ByteOrder::Little => f64::from_le_bytes(bytes),
        }
    }
}

/// Resolve the byte order from the two COMM_ORDER bytes.
///
/// COMM_ORDER cannot be read like other fields because it defines the order
/// the others are read with. Both encodings of the word are tried; the one
/// yielding 0 means big-endian, 1 means little-endian, anything else is a
/// corrupt or foreign file.
pub fn detect_byte_order(raw: &[u8], base: usize) -> Result<ByteOrder, FormatError> {
    let start = base + layout::COMM_ORDER_OFFSET;
    let span = raw
        .get(start..start + 2)
        .ok_or(FormatError::Truncated {
            field: "comm_order",
            needed: start + 2,
            actual: raw.len(),
        })?;
    let bytes = [span[0], span[1]];
    for value in [i16::from_le_bytes(bytes), i16::from_be_bytes(bytes)] {
        match value {
            0 => return Ok(ByteOrder::Big),
            1 => return Ok(ByteOrder::Little),
            _ => {}
        }
    }
    Err(FormatError::InvalidByteOrder { bytes })
}

/// Strip trailing NUL padding from a fixed-length text field.
pub fn decode_padded_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\0')
        .trim()
        .to_string()
}

/// Bounded reads relative to the descriptor base.
pub struct WavedescReader<'a> {
    raw: &'a [u8],
    base: usize,
    order: ByteOrder,
}

impl<'a> WavedescReader<'a> {
    pub fn new(raw: &'a [u8], base: usize, order: ByteOrder) -> Self {
        Self { raw, base, order }
    }

    pub fn order(&self) -> ByteOrder {
        self.order
    }

    fn span(
        &self,
        field: &'static str,
        offset: usize,
        len: usize,
    ) -> Result<&'a [u8], FormatError> {
        let start = self.base + offset;
        let end = start + len;
        self.raw.get(start..end).ok_or(FormatError::Truncated {
            field,
            needed: end,
            actual: self.raw.len(),
        })
    }

    /// Decode one layout at the given relative offset.
    ///
    /// This is the single interpreter for the schema table; composites
    /// recurse over their parts in declared order.
    pub fn read_value(
        &self,
        field: &'static str,
        offset: usize,
        layout: Layout,
    ) -> Result<Value, FormatError> {
        match layout {
            Layout::Int8 => {
                let span = self.span(field, offset, 1)?;
                Ok(Value::Int(span[0] as i8 as i64))
            }
            Layout::Int16 => {
                let span = self.span(field, offset, 2)?;
                Ok(Value::Int(self.order.i16([span[0], span[1]]) as i64))
            }
            Layout::Int32 => {
                let span = self.span(field, offset, 4)?;
                let bytes = [span[0], span[1], span[2], span[3]];
                Ok(Value::Int(self.order.i32(bytes) as i64))
            }
            Layout::Float32 => {
                let span = self.span(field, offset, 4)?;
                let bytes = [span[0], span[1], span[2], span[3]];
                Ok(Value::Float(self.order.f32(bytes) as f64))
            }
            Layout::Float64 => {
                let span = self.span(field, offset, 8)?;
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(span);
                Ok(Value::Float(self.order.f64(bytes)))
            }
            Layout::Str(len) => {
                let span = self.span(field, offset, len)?;
                Ok(Value::Str(decode_padded_string(span)))
            }
            Layout::Composite(parts) => {
                let mut values = Vec::with_capacity(parts.len());
                let mut cursor = offset;
                for part in parts {
                    values.push(self.read_value(field, cursor, *part)?);
                    cursor += part.size();
                }
                Ok(Value::Tuple(values))
            }
        }
    }
}
