//! Opcode maps bundled with the library.

/// Sharp SM83 (Game Boy CPU) primary and `0xCB`-prefixed tables.
pub const SM83: &str = include_str!("presets/sm83.opmap");

/// Names accepted by [`preset`], in display order.
pub const PRESET_NAMES: &[&str] = &["sm83"];

/// Source text of a bundled opcode map.
pub fn preset(name: &str) -> Option<&'static str> {
    match name {
        "sm83" => Some(SM83),
        _ => None,
    }
}
