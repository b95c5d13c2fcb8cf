use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x4a, 0xa8, 0x5e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const EDITING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
