//! Static code-to-label tables (index = code value).

pub const RECORD_TYPES: [&str; 10] = [
    "single sweep",
    "interleaved",
    "histogram",
    "graph",
    "filter coefficient",
    "complex",
    "extrema",
    "sequence obsolete",
    "centered RIS",
    "peak detect",
];

pub const PROCESSING_KINDS: [&str; 8] = [
    "no processing",
    "fir filter",
    "interpolated",
    "sparsed",
    "autoscaled",
    "no result",
    "rolling",
    "cumulative",
];

pub const VERT_COUPLINGS: [&str; 5] = [
    "DC 50 Ohm",
    "ground",
    "DC 1 MOhm",
    "ground",
    "AC 1 MOhm",
];

/// 1-2-5 style magnitude steps shared by time base and vertical gain.
pub const GAIN_STEPS: [u16; 9] = [1, 2, 5, 10, 20, 50, 100, 200, 500];

pub const TIME_BASE_PREFIXES: [&str; 6] = ["p", "n", "u", "m", "", "k"];

pub const VERT_GAIN_PREFIXES: [&str; 4] = ["u", "m", "", "k"];

/// TIME_BASE code reserved for an externally supplied clock.
pub const TIME_BASE_EXTERNAL: i64 = 100;
