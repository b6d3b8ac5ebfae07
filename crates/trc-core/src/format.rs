//! Text presentation of metadata records.

use crate::metadata::Metadata;
use crate::metadata::Value;

/// Curated subset of commonly useful fields (the `main` preset).
pub const MAIN_KEYS: &[&str] = &[
    "instrument_name",
    "trigger_time",
    "vert_coupling",
    "time_base",
    "horiz_interval",
    "horiz_offset",
    "fixed_vert_gain",
    "vertical_gain",
    "vertical_offset",
    "wave_array_count",
    "subarray_count",
];

/// Which fields to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFilter {
    /// Every schema field, in schema order.
    All,
    /// The [`MAIN_KEYS`] preset.
    Main,
    /// An explicit list; unknown names are skipped.
    Keys(Vec<String>),
}

/// Render one `"<key> <padding> <value>"` line per selected field.
pub fn format_metadata(metadata: &Metadata, filter: &KeyFilter) -> Vec<String> {
    match filter {
        KeyFilter::All => metadata
            .iter()
            .map(|(name, value)| line(name, value))
            .collect(),
        KeyFilter::Main => MAIN_KEYS
            .iter()
            .filter_map(|name| metadata.get(name).map(|value| line(name, value)))
            .collect(),
        KeyFilter::Keys(keys) => keys
            .iter()
            .filter_map(|name| metadata.get(name).map(|value| line(name, value)))
            .collect(),
    }
}

fn line(key: &str, value: &Value) -> String {
    format!("{key:<21} {value}")
}

#[cfg(test)]
mod tests {
    use super::{KeyFilter, MAIN_KEYS, format_metadata};
    use crate::metadata::{Metadata, Value};
    use std::collections::HashMap;

    fn record() -> Metadata {
        let mut fields = HashMap::new();
        fields.insert("time_base", Value::Str("1 ns/div".to_string()));
        fields.insert("wave_array_count", Value::Int(1000));
        fields.insert("comm_type", Value::Int(0));
        Metadata::new(fields)
    }

    #[test]
    fn all_filter_uses_schema_order() {
        let lines = format_metadata(&record(), &KeyFilter::All);
        assert_eq!(
            lines,
            vec![
                "comm_type             0",
                "wave_array_count      1000",
                "time_base             1 ns/div",
            ]
        );
    }

    #[test]
    fn main_filter_keeps_preset_order_and_skips_absent() {
        let lines = format_metadata(&record(), &KeyFilter::Main);
        assert_eq!(
            lines,
            vec![
                "time_base             1 ns/div",
                "wave_array_count      1000",
            ]
        );
        assert!(MAIN_KEYS.contains(&"time_base"));
    }

    #[test]
    fn explicit_keys_filter() {
        let filter = KeyFilter::Keys(vec!["wave_array_count".to_string(), "nope".to_string()]);
        let lines = format_metadata(&record(), &filter);
        assert_eq!(lines, vec!["wave_array_count      1000"]);
    }
}
