//! Core library for decoding LeCroy `.trc` oscilloscope traces.
//!
//! The crate implements a single synchronous pipeline: locate the WAVEDESC
//! descriptor, decode its fixed-offset fields (`wavedesc`), translate enum
//! codes to labels (`translate`), then slice and decode the trailing
//! trigger-time and sample arrays (`data`). Parsing is byte-oriented and
//! side-effect free; the only I/O is the whole-file read in the `*_file`
//! entry points. Each parse call is independent, so callers may decode
//! files concurrently without coordination.
//!
//! Invariants:
//! - The raw record is never mutated; the presentable record is derived.
//! - Array extraction uses numeric raw fields only.
//! - Metadata iteration and serialization follow schema order.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! let trace = trc_core::read_trace_file(Path::new("capture.trc"), true)?;
//! println!("segments: {}", trace.samples.segments);
//! # Ok::<(), trc_core::TrcError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;

pub mod data;
pub mod error;
pub mod format;
pub mod metadata;
pub mod translate;
pub mod wavedesc;

pub use data::{SampleValues, Samples, SegmentTime};
pub use error::{FormatError, TrcError};
pub use format::{KeyFilter, MAIN_KEYS, format_metadata};
pub use metadata::{Metadata, Value};
pub use wavedesc::{ByteOrder, Wavedesc, parse_wavedesc};

/// Fully decoded trace. Constructed once, read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    /// Presentable metadata record (enum codes translated to labels).
    pub metadata: Metadata,
    /// One (start, duration) pair per acquisition segment.
    pub trigger_times: Vec<SegmentTime>,
    /// Sample data with its segment shape.
    pub samples: Samples,
    /// Derived time axis over the innermost dimension.
    pub time: Vec<f64>,
}

/// Decode a complete trace from a byte buffer.
///
/// With `scale` set, samples are converted to volts via
/// `v * vertical_gain + vertical_offset`; otherwise they keep the native
/// integer width chosen by `comm_type`.
pub fn parse_trace(raw: &[u8], scale: bool) -> Result<Trace, FormatError> {
    let desc = wavedesc::parse_wavedesc(raw)?;
    // Arrays first: extraction depends on numeric fields of the raw record.
    let trigger_times = data::extract_trigger_times(raw, &desc)?;
    let samples = data::extract_samples(raw, &desc, scale)?;
    let time = data::time_axis(&desc, samples.points_per_segment)?;
    let metadata = translate::presentable(&desc.metadata)?;
    Ok(Trace {
        metadata,
        trigger_times,
        samples,
        time,
    })
}

/// Decode the presentable metadata record only; the data arrays are never
/// touched, so this succeeds even when they are truncated or absent.
pub fn parse_metadata(raw: &[u8]) -> Result<Metadata, FormatError> {
    let desc = wavedesc::parse_wavedesc(raw)?;
    translate::presentable(&desc.metadata)
}

/// Read a `.trc` file into memory and decode the complete trace.
pub fn read_trace_file(path: &Path, scale: bool) -> Result<Trace, TrcError> {
    let raw = fs::read(path)?;
    Ok(parse_trace(&raw, scale)?)
}

/// Read a `.trc` file into memory and decode metadata only.
pub fn read_metadata_file(path: &Path) -> Result<Metadata, TrcError> {
    let raw = fs::read(path)?;
    Ok(parse_metadata(&raw)?)
}
