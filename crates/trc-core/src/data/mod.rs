//! Trailing-array extraction, scaling and reshaping.
//!
//! Both arrays sit directly after the descriptor and its free-text comment
//! block; their position, length and element type come from numeric fields
//! of the raw record. Extraction therefore runs against the raw record
//! only, never the presentable one.

pub mod samples;
pub mod trigger;

pub use samples::{SampleValues, Samples, extract_samples, time_axis};
pub use trigger::{SegmentTime, extract_trigger_times};

use crate::error::FormatError;
use crate::metadata::Metadata;

/// Read a length field, rejecting negative values.
pub(crate) fn nonnegative(metadata: &Metadata, field: &'static str) -> Result<usize, FormatError> {
    let value = metadata.int(field)?;
    usize::try_from(value).map_err(|_| FormatError::NegativeLength { field, value })
}

#[cfg(test)]
mod tests {
    use super::nonnegative;
    use crate::error::FormatError;
    use crate::metadata::{Metadata, Value};
    use std::collections::HashMap;

    #[test]
    fn negative_length_is_rejected() {
        let mut fields = HashMap::new();
        fields.insert("user_text", Value::Int(-4));
        let meta = Metadata::new(fields);
        let err = nonnegative(&meta, "user_text").unwrap_err();
        match err {
            FormatError::NegativeLength { field, value } => {
                assert_eq!(field, "user_text");
                assert_eq!(value, -4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
