use thiserror::Error;

/// Errors raised while decoding a `.trc` byte buffer.
///
/// Every variant names the field and bound that was violated; a format
/// error is fatal to the current parse and no partial result is returned.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("WAVEDESC marker not found")]
    MarkerNotFound,
    #[error("file too short for {field}: need {needed} bytes, got {actual}")]
    Truncated {
        field: &'static str,
        needed: usize,
        actual: usize,
    },
    #[error("comm_order bytes {bytes:?} decode to neither 0 nor 1")]
    InvalidByteOrder { bytes: [u8; 2] },
    #[error("unknown {field} code {code} (table holds {entries} entries)")]
    UnknownCode {
        field: &'static str,
        code: i64,
        entries: usize,
    },
    #[error("negative length in {field}: {value}")]
    NegativeLength { field: &'static str, value: i64 },
    #[error("trigger time block holds {count} doubles, expected an even count")]
    OddTriggerCount { count: usize },
    #[error("wave_array_count {count} is not divisible by subarray_count {segments}")]
    SegmentMismatch { count: i64, segments: i64 },
    #[error("missing metadata field {0}")]
    MissingField(&'static str),
    #[error("metadata field {field} is not numeric")]
    NotNumeric { field: &'static str },
}

/// Top-level error for file-reading entry points.
#[derive(Debug, Error)]
pub enum TrcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}
