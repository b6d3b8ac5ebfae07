//! Sample-array extraction, voltage scaling and segment reshaping.

use serde::Serialize;

use crate::error::FormatError;
use crate::wavedesc::Wavedesc;

use super::nonnegative;
use super::trigger::trigger_array_start;

/// Decoded sample values. The integer variants keep the native element
/// width chosen by COMM_TYPE; `Volts` holds scaled values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SampleValues {
    Int8(Vec<i8>),
    Int16(Vec<i16>),
    Volts(Vec<f64>),
}

impl SampleValues {
    pub fn len(&self) -> usize {
        match self {
            SampleValues::Int8(values) => values.len(),
            SampleValues::Int16(values) => values.len(),
            SampleValues::Volts(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Flat sample storage with its segment shape.
///
/// A single-sweep capture has one segment spanning the whole array; a
/// sequence capture exposes `subarray_count` segments of equal length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Samples {
    pub segments: usize,
    pub points_per_segment: usize,
    pub values: SampleValues,
}

impl Samples {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Scaled voltages of one segment; `None` when out of range or when
    /// scaling was not requested.
    pub fn volts_segment(&self, index: usize) -> Option<&[f64]> {
        if index >= self.segments {
            return None;
        }
        match &self.values {
            SampleValues::Volts(values) => {
                let start = index * self.points_per_segment;
                values.get(start..start + self.points_per_segment)
            }
            _ => None,
        }
    }
}

/// Decode the sample array, optionally scaling counts to volts.
pub fn extract_samples(
    raw: &[u8],
    desc: &Wavedesc,
    scale: bool,
) -> Result<Samples, FormatError> {
    let metadata = &desc.metadata;
    let count = nonnegative(metadata, "wave_array_count")?;
    // COMM_TYPE: 0 -> byte samples, otherwise 16-bit words.
    let width = if metadata.int("comm_type")? == 0 { 1 } else { 2 };
    let block_len = nonnegative(metadata, "trig_time_array")?;
    let start = trigger_array_start(desc)? + block_len;
    let end = start + count * width;
    if end > raw.len() {
        return Err(FormatError::Truncated {
            field: "wave_array_count",
            needed: end,
            actual: raw.len(),
        });
    }

    let (segments, points_per_segment) = segment_shape(count, metadata.int("subarray_count")?)?;

    let bytes = &raw[start..end];
    let values = if scale {
        let gain = metadata.float("vertical_gain")?;
        let offset = metadata.float("vertical_offset")?;
        let volts = if width == 1 {
            bytes
                .iter()
                .map(|&byte| byte as i8 as f64 * gain + offset)
                .collect()
        } else {
            bytes
                .chunks_exact(2)
                .map(|chunk| desc.order.i16([chunk[0], chunk[1]]) as f64 * gain + offset)
                .collect()
        };
        SampleValues::Volts(volts)
    } else if width == 1 {
        SampleValues::Int8(bytes.iter().map(|&byte| byte as i8).collect())
    } else {
        SampleValues::Int16(
            bytes
                .chunks_exact(2)
                .map(|chunk| desc.order.i16([chunk[0], chunk[1]]))
                .collect(),
        )
    };

    Ok(Samples {
        segments,
        points_per_segment,
        values,
    })
}

/// Segment shape: `subarray_count` rows when in sequence mode, requiring
/// an exact division of the flat array.
fn segment_shape(count: usize, subarray_count: i64) -> Result<(usize, usize), FormatError> {
    if subarray_count > 1 {
        let segments = subarray_count as usize;
        if count % segments != 0 {
            return Err(FormatError::SegmentMismatch {
                count: count as i64,
                segments: subarray_count,
            });
        }
        Ok((segments, count / segments))
    } else {
        Ok((1, count))
    }
}

/// Derived time axis over the innermost dimension.
pub fn time_axis(desc: &Wavedesc, points: usize) -> Result<Vec<f64>, FormatError> {
    let interval = desc.metadata.float("horiz_interval")?;
    let offset = desc.metadata.float("horiz_offset")?;
    Ok((0..points).map(|index| index as f64 * interval + offset).collect())
}
