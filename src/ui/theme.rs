use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xed, 0xc2, 0x2e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

const EMPTY_CELL: Color = Color::Rgb(0x3a, 0x35, 0x30);
const DARK_TEXT: Color = Color::Rgb(0x77, 0x6e, 0x65);
const LIGHT_TEXT: Color = Color::Rgb(0xf9, 0xf6, 0xf2);

/// Background and foreground for a cell holding `value` (0 = empty).
pub fn tile_colors(value: u64) -> (Color, Color) {
    let bg = match value {
        0 => EMPTY_CELL,
        2 => Color::Rgb(0xee, 0xe4, 0xda),
        4 => Color::Rgb(0xed, 0xe0, 0xc8),
        8 => Color::Rgb(0xf2, 0xb1, 0x79),
        16 => Color::Rgb(0xf5, 0x95, 0x63),
        32 => Color::Rgb(0xf6, 0x7c, 0x5f),
        64 => Color::Rgb(0xf6, 0x5e, 0x3b),
        128 => Color::Rgb(0xed, 0xcf, 0x72),
        256 => Color::Rgb(0xed, 0xcc, 0x61),
        512 => Color::Rgb(0xed, 0xc8, 0x50),
        1024 => Color::Rgb(0xed, 0xc5, 0x3f),
        2048 => ACCENT,
        _ => Color::Rgb(0x3c, 0x3a, 0x32),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    (bg, fg)
}
