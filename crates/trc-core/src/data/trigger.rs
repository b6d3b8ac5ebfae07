//! Trigger-time array extraction.

use serde::Serialize;

use crate::error::FormatError;
use crate::wavedesc::{Wavedesc, layout};

use super::nonnegative;

/// Trigger bookkeeping for one acquisition segment, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentTime {
    /// Trigger instant of the segment, relative to the first trigger.
    pub start: f64,
    /// Offset from the trigger to the first sample of the segment.
    pub duration: f64,
}

/// Byte offset of the trigger-time array: the arrays are appended right
/// after the descriptor block and the free-text comment block.
pub(crate) fn trigger_array_start(desc: &Wavedesc) -> Result<usize, FormatError> {
    let descriptor_len = nonnegative(&desc.metadata, "wave_descriptor")?;
    let text_len = nonnegative(&desc.metadata, "user_text")?;
    Ok(desc.base + descriptor_len + text_len)
}

/// Decode one (start, duration) pair per acquisition segment.
///
/// The block holds `trig_time_array` bytes of doubles, interleaved per
/// segment: segment j is doubles 2j and 2j+1.
pub fn extract_trigger_times(
    raw: &[u8],
    desc: &Wavedesc,
) -> Result<Vec<SegmentTime>, FormatError> {
    let start = trigger_array_start(desc)?;
    let block_len = nonnegative(&desc.metadata, "trig_time_array")?;
    let end = start + block_len;
    if end > raw.len() {
        return Err(FormatError::Truncated {
            field: "trig_time_array",
            needed: end,
            actual: raw.len(),
        });
    }

    let count = block_len / layout::TRIGGER_DOUBLE_SIZE;
    if count % 2 != 0 {
        return Err(FormatError::OddTriggerCount { count });
    }

    let mut doubles = Vec::with_capacity(count);
    for chunk in raw[start..end]
        .chunks_exact(layout::TRIGGER_DOUBLE_SIZE)
        .take(count)
    {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        doubles.push(desc.order.f64(bytes));
    }

    Ok(doubles
        .chunks_exact(2)
        .map(|pair| SegmentTime {
            start: pair[0],
            duration: pair[1],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{SegmentTime, extract_trigger_times, trigger_array_start};
    use crate::error::FormatError;
    use crate::metadata::{Metadata, Value};
    use crate::wavedesc::{ByteOrder, Wavedesc};
    use std::collections::HashMap;

    fn desc(base: usize, descriptor_len: i64, text_len: i64, block_len: i64) -> Wavedesc {
        let mut fields = HashMap::new();
        fields.insert("wave_descriptor", Value::Int(descriptor_len));
        fields.insert("user_text", Value::Int(text_len));
        fields.insert("trig_time_array", Value::Int(block_len));
        Wavedesc {
            base,
            order: ByteOrder::Little,
            metadata: Metadata::new(fields),
        }
    }

    #[test]
    fn start_sums_descriptor_and_comment() {
        let desc = desc(10, 346, 20, 0);
        assert_eq!(trigger_array_start(&desc).unwrap(), 376);
    }

    #[test]
    fn pairs_are_interleaved_consecutive_doubles() {
        // Distinguishable values per slot so row/column mixups fail loudly.
        let mut raw = vec![0u8; 4 + 32];
        for (slot, value) in [10.0f64, 0.25, 20.0, 0.5].iter().enumerate() {
            raw[4 + slot * 8..4 + (slot + 1) * 8].copy_from_slice(&value.to_le_bytes());
        }
        let desc = desc(0, 4, 0, 32);
        let times = extract_trigger_times(&raw, &desc).unwrap();
        assert_eq!(
            times,
            vec![
                SegmentTime {
                    start: 10.0,
                    duration: 0.25
                },
                SegmentTime {
                    start: 20.0,
                    duration: 0.5
                },
            ]
        );
    }

    #[test]
    fn empty_block_yields_no_segments() {
        let raw = vec![0u8; 8];
        let desc = desc(0, 8, 0, 0);
        assert!(extract_trigger_times(&raw, &desc).unwrap().is_empty());
    }

    #[test]
    fn block_past_end_of_file() {
        let raw = vec![0u8; 16];
        let desc = desc(0, 8, 0, 32);
        let err = extract_trigger_times(&raw, &desc).unwrap_err();
        assert!(matches!(err, FormatError::Truncated { .. }));
    }

    #[test]
    fn odd_double_count_is_rejected() {
        let raw = vec![0u8; 16];
        let desc = desc(0, 8, 0, 8);
        let err = extract_trigger_times(&raw, &desc).unwrap_err();
        assert!(matches!(err, FormatError::OddTriggerCount { count: 1 }));
    }

    #[test]
    fn negative_block_length_is_rejected() {
        let raw = vec![0u8; 16];
        let desc = desc(0, 8, 0, -16);
        let err = extract_trigger_times(&raw, &desc).unwrap_err();
        assert!(matches!(err, FormatError::NegativeLength { .. }));
    }
}
