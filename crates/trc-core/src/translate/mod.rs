//! Enum-code and unit translation.
//!
//! Derives a presentable record from a raw one: the five coded fields are
//! replaced by label strings, everything else is carried over unchanged.
//! The transform is pure; the raw record stays intact for extraction math.
//! Out-of-range codes are format errors, never wrapped or defaulted.

pub mod tables;

use crate::error::FormatError;
use crate::metadata::{Metadata, Value};

/// Derive the presentable record from a raw one.
pub fn presentable(raw: &Metadata) -> Result<Metadata, FormatError> {
    let mut out = raw.clone();
    out.replace(
        "record_type",
        Value::Str(lookup(&tables::RECORD_TYPES, raw.int("record_type")?, "record_type")?),
    );
    out.replace(
        "processing_done",
        Value::Str(lookup(
            &tables::PROCESSING_KINDS,
            raw.int("processing_done")?,
            "processing_done",
        )?),
    );
    out.replace(
        "vert_coupling",
        Value::Str(lookup(
            &tables::VERT_COUPLINGS,
            raw.int("vert_coupling")?,
            "vert_coupling",
        )?),
    );
    out.replace(
        "time_base",
        Value::Str(time_base_label(raw.int("time_base")?)?),
    );
    out.replace(
        "fixed_vert_gain",
        Value::Str(fixed_vert_gain_label(raw.int("fixed_vert_gain")?)?),
    );
    Ok(out)
}

/// Label for a TIME_BASE code, e.g. `"1 ns/div"` or `"external"`.
pub fn time_base_label(code: i64) -> Result<String, FormatError> {
    if code == tables::TIME_BASE_EXTERNAL {
        return Ok("external".to_string());
    }
    scaled_label(code, &tables::TIME_BASE_PREFIXES, "s/div", "time_base")
}

/// Label for a FIXED_VERT_GAIN code, e.g. `"50 mV/div"`.
pub fn fixed_vert_gain_label(code: i64) -> Result<String, FormatError> {
    scaled_label(code, &tables::VERT_GAIN_PREFIXES, "V/div", "fixed_vert_gain")
}

fn lookup(
    table: &'static [&'static str],
    code: i64,
    field: &'static str,
) -> Result<String, FormatError> {
    usize::try_from(code)
        .ok()
        .and_then(|index| table.get(index))
        .map(|label| label.to_string())
        .ok_or(FormatError::UnknownCode {
            field,
            code,
            entries: table.len(),
        })
}

/// Split a code into magnitude step (mod 9) and decade prefix (div 9).
fn scaled_label(
    code: i64,
    prefixes: &'static [&'static str],
    unit: &str,
    field: &'static str,
) -> Result<String, FormatError> {
    let entries = prefixes.len() * tables::GAIN_STEPS.len();
    let out_of_range = FormatError::UnknownCode {
        field,
        code,
        entries,
    };
    let index = usize::try_from(code).map_err(|_| out_of_range)?;
    let step = tables::GAIN_STEPS[index % tables::GAIN_STEPS.len()];
    let prefix = prefixes
        .get(index / tables::GAIN_STEPS.len())
        .ok_or(FormatError::UnknownCode {
            field,
            code,
            entries,
        })?;
    Ok(format!("{step} {prefix}{unit}"))
}
