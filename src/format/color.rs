use crate::domain::LogLevel;
use colored::Color;

/// Fixed level-to-color table. Levels missing from the table fall back to
/// `DEFAULT_COLOR`; with the current five-level set that path never fires,
/// but the lookup keeps the registry contract explicit.
const LEVEL_COLORS: &[(LogLevel, Color)] = &[
    (
        LogLevel::Debug,
        Color::TrueColor {
            r: 0xFF,
            g: 0xB8,
            b: 0x6C,
        },
    ),
    (
        LogLevel::Info,
        Color::TrueColor {
            r: 0x50,
            g: 0xFA,
            b: 0x7B,
        },
    ),
    (
        LogLevel::Warn,
        Color::TrueColor {
            r: 0xF1,
            g: 0xFA,
            b: 0x8C,
        },
    ),
    (
        LogLevel::Error,
        Color::TrueColor {
            r: 0xFF,
            g: 0x55,
            b: 0x55,
        },
    ),
    (
        LogLevel::Fatal,
        Color::TrueColor {
            r: 0xDC,
            g: 0x00,
            b: 0x00,
        },
    ),
];

const DEFAULT_COLOR: Color = Color::TrueColor {
    r: 0xFF,
    g: 0xFF,
    b: 0xFF,
};

/// Returns the display color for `level`.
pub fn color_for(level: LogLevel) -> Color {
    LEVEL_COLORS
        .iter()
        .find(|(entry, _)| *entry == level)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}
