use ratatui::style::Color;

pub const TMDB_TEAL: Color = Color::Rgb(0x01, 0xb4, 0xe4);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const RATING_GOLD: Color = Color::Rgb(0xf5, 0xc5, 0x18);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TOAST_WARNING_BG: Color = Color::Rgb(0x3f, 0x3f, 0x3f);
pub const TOAST_EMPTY_BG: Color = Color::Rgb(0xff, 0x97, 0x97);
