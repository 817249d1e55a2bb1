use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 83, g: 179, b: 203 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 165, b: 0 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 192, g: 192, b: 192 };

pub const IPV4_ADDR: Color = Color::TrueColor { r: 83, g: 179, b: 203 };
pub const IPV4_PREFIX: Color = Color::TrueColor { r: 58, g: 125, b: 142 };
pub const GATEWAY: Color = Color::Magenta;

pub const UP: Color = Color::Green;
pub const DOWN: Color = Color::Red;
pub const LATENCY: Color = Color::Yellow;
