//! WAVEDESC byte layout (source of truth).
//!
//! Offsets are relative to the descriptor base, i.e. the position of the
//! `WAVEDESC` marker inside the file. The schema follows the LeCroy
//! template for `.trc` traces.

use self::Layout::{Float32, Float64, Int16, Int32};

/// Literal marker that opens the descriptor block.
pub const WAVEDESC_MARKER: &[u8; 8] = b"WAVEDESC";

/// Offset of COMM_ORDER, the byte-order field, relative to the base.
pub const COMM_ORDER_OFFSET: usize = 34;

/// Width in bytes of one trigger-time array element.
pub const TRIGGER_DOUBLE_SIZE: usize = 8;

/// Binary layout of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Int8,
    Int16,
    Int32,
    Float32,
    Float64,
    /// Fixed-length text, NUL padded.
    Str(usize),
    /// Ordered record of primitive sub-fields.
    Composite(&'static [Layout]),
}

impl Layout {
    pub fn size(&self) -> usize {
        match self {
            Layout::Int8 => 1,
            Layout::Int16 => 2,
            Layout::Int32 => 4,
            Layout::Float32 => 4,
            Layout::Float64 => 8,
            Layout::Str(len) => *len,
            Layout::Composite(parts) => parts.iter().map(Layout::size).sum(),
        }
    }
}

/// One entry of the descriptor schema.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub offset: usize,
    pub layout: Layout,
}

const fn field(name: &'static str, offset: usize, layout: Layout) -> Field {
    Field {
        name,
        offset,
        layout,
    }
}

/// TRIGGER_TIME sub-fields: seconds, minutes, hours, days, months, year,
/// then an unused trailing word.
pub const TRIGGER_TIME_PARTS: &[Layout] = &[
    Float64,
    Layout::Int8,
    Layout::Int8,
    Layout::Int8,
    Layout::Int8,
    Int16,
    Int16,
];

/// The full descriptor schema in offset order.
pub const FIELDS: &[Field] = &[
    field("descriptor_name", 0, Layout::Str(16)),
    field("template_name", 16, Layout::Str(16)),
    field("comm_type", 32, Int16),
    field("comm_order", 34, Int16),
    field("wave_descriptor", 36, Int32),
    field("user_text", 40, Int32),
    field("res_desc1", 44, Int32),
    field("trig_time_array", 48, Int32),
    field("ris_time_array", 52, Int32),
    field("res_array1", 56, Int32),
    field("wave_array1", 60, Int32),
    field("wave_array2", 64, Int32),
    field("res_array2", 68, Int32),
    field("res_array3", 72, Int32),
    field("instrument_name", 76, Layout::Str(16)),
    field("instrument_number", 92, Int32),
    field("trace_label", 96, Layout::Str(16)),
    field("reserved1", 112, Int16),
    field("reserved2", 114, Int16),
    field("wave_array_count", 116, Int32),
    field("points_per_screen", 120, Int32),
    field("first_valid_point", 124, Int32),
    field("last_valid_point", 128, Int32),
    field("first_point", 132, Int32),
    field("sparsing_factor", 136, Int32),
    field("segment_index", 140, Int32),
    field("subarray_count", 144, Int32),
    field("sweeps_per_acq", 148, Int32),
    field("points_per_pair", 152, Int16),
    field("pair_offset", 154, Int16),
    field("vertical_gain", 156, Float32),
    field("vertical_offset", 160, Float32),
    field("max_value", 164, Float32),
    field("min_value", 168, Float32),
    field("nominal_bits", 172, Int16),
    field("nom_subarray_count", 174, Int16),
    field("horiz_interval", 176, Float32),
    field("horiz_offset", 180, Float64),
    field("pixel_offset", 188, Float64),
    field("vert_unit", 196, Layout::Str(48)),
    field("horiz_unit", 244, Layout::Str(48)),
    field("horiz_uncertainty", 292, Float32),
    field("trigger_time", 296, Layout::Composite(TRIGGER_TIME_PARTS)),
    field("acq_duration", 312, Float32),
    field("record_type", 316, Int16),
    field("processing_done", 318, Int16),
    field("reserved5", 320, Int16),
    field("ris_sweeps", 322, Int16),
    field("time_base", 324, Int16),
    field("vert_coupling", 326, Int16),
    field("probe_att", 328, Float32),
    field("fixed_vert_gain", 332, Int16),
    field("bandwidth_limit", 334, Int16),
    field("vertical_vernier", 336, Float32),
    field("acq_vert_offset", 340, Float32),
    field("wave_source", 344, Int16),
];
