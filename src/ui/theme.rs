//! Design tokens for modbuild terminal output.
//!
//! Only the semantic colors below may be used for styling.

pub mod colors {
    use crossterm::style::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Prefix of every per-item diagnostic line
pub const ITEM_PREFIX: &str = "----";
