//! WAVEDESC descriptor decoding.
//!
//! The descriptor is a fixed-layout header located by its literal marker.
//! Byte offsets live in `layout` (source of truth), safe byte-order-aware
//! reads in `reader`, and the locator plus header decoder in `parser`. The
//! decoder yields the raw record; enum-code translation is a separate,
//! later step so extraction math always sees numeric fields.

pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{Wavedesc, locate_wavedesc, parse_wavedesc};
pub use reader::{ByteOrder, WavedescReader, detect_byte_order};
