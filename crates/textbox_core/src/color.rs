//! RGBA colors and color parsing
//!
//! Colors are stored as straight (non-premultiplied) `f32` channels in the
//! `0.0..=1.0` range. Setters across the widgets accept anything that
//! converts into a [`Color`], including strings:
//!
//! - X11 names with numbered gray scales (`"gray97"`, `"grey3"`)
//! - CSS-style names (`"tan"`, `"steelblue"`)
//! - Hex (`"#rgb"`, `"#rrggbb"`, `"#rrggbbaa"`)
//! - Functional forms (`"rgb(255, 128, 0)"`, `"rgba(1.0, 0.5, 0.0, 0.5)"`)

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::TextBoxError;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// X11 gray scale: `gray0` is black, `gray100` is white.
    ///
    /// Levels above 100 saturate to white. Channel values match the X11
    /// color database, which rounds half-way levels down (`gray50` is
    /// `#7f7f7f`).
    pub fn gray(level: u8) -> Self {
        let level = level.min(100) as u32;
        let value = ((level * 255 + 49) / 100) as u8;
        Self::from_rgba8(value, value, value, 255)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Quantize to 8-bit channels
    pub fn to_rgba8(&self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

impl FromStr for Color {
    type Err = TextBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).ok_or_else(|| {
            tracing::trace!(input = s, "unrecognized color");
            TextBoxError::InvalidColor(s.to_string())
        })
    }
}

impl TryFrom<&str> for Color {
    type Error = TextBoxError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Color {
    type Error = TextBoxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&String> for Color {
    type Error = TextBoxError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::from_rgba8(r, g, b, a)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::from_rgba8(r, g, b, a)
    }
}

/// Parse a color string (hex, named, or rgb/rgba)
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    if let Some(args) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        return parse_rgba(args);
    }

    if let Some(args) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        return parse_rgb(args);
    }

    parse_named_color(s)
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => {
            // Short form: #RGB -> #RRGGBB
            let short = |i: usize| u8::from_str_radix(&hex[i..i + 1].repeat(2), 16).ok();
            Some(Color::from_rgba8(short(0)?, short(1)?, short(2)?, 255))
        }
        6 => Some(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            255,
        )),
        8 => Some(Color::from_rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

fn parse_components(s: &str, count: usize) -> Option<Vec<f32>> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<_, _>>()
        .ok()?;
    (parts.len() == count && parts.iter().all(|v| v.is_finite() && *v >= 0.0)).then_some(parts)
}

fn parse_rgba(s: &str) -> Option<Color> {
    let parts = parse_components(s, 4)?;
    let (r, g, b, a) = (parts[0], parts[1], parts[2], parts[3]);

    // Normalize if values are 0-255 range
    if r > 1.0 || g > 1.0 || b > 1.0 {
        Some(Color::rgba(r / 255.0, g / 255.0, b / 255.0, a.min(1.0)))
    } else {
        Some(Color::rgba(r, g, b, a.min(1.0)))
    }
}

fn parse_rgb(s: &str) -> Option<Color> {
    let parts = parse_components(s, 3)?;
    let (r, g, b) = (parts[0], parts[1], parts[2]);

    if r > 1.0 || g > 1.0 || b > 1.0 {
        Some(Color::rgb(r / 255.0, g / 255.0, b / 255.0))
    } else {
        Some(Color::rgb(r, g, b))
    }
}

/// Numbered X11 grays: `gray0` through `gray100` (either spelling)
fn parse_gray_level(name: &str) -> Option<Color> {
    let digits = name
        .strip_prefix("gray")
        .or_else(|| name.strip_prefix("grey"))?;
    if digits.is_empty() || digits.len() > 3 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let level: u8 = digits.parse().ok()?;
    (level <= 100).then(|| Color::gray(level))
}

fn parse_named_color(name: &str) -> Option<Color> {
    let name = name.to_lowercase().replace([' ', '_'], "");
    if let Some(color) = parse_gray_level(&name) {
        return Some(color);
    }

    // X11 values where they differ from CSS (gray, green) follow X11
    let rgb = |hex: u32| Some(Color::from_hex(hex));
    match name.as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "red" => Some(Color::RED),
        "green" | "lime" => Some(Color::GREEN),
        "blue" => Some(Color::BLUE),
        "yellow" => Some(Color::YELLOW),
        "cyan" | "aqua" => Some(Color::CYAN),
        "magenta" | "fuchsia" => Some(Color::MAGENTA),
        "gray" | "grey" => rgb(0xBEBEBE),
        "darkgray" | "darkgrey" => rgb(0xA9A9A9),
        "lightgray" | "lightgrey" => rgb(0xD3D3D3),
        "dimgray" | "dimgrey" => rgb(0x696969),
        "silver" => rgb(0xC0C0C0),
        "maroon" => rgb(0xB03060),
        "olive" => rgb(0x808000),
        "navy" | "navyblue" => rgb(0x000080),
        "purple" => rgb(0xA020F0),
        "teal" => rgb(0x008080),
        "orange" => rgb(0xFFA500),
        "pink" => rgb(0xFFC0CB),
        "brown" => rgb(0xA52A2A),
        "tan" => rgb(0xD2B48C),
        "beige" => rgb(0xF5F5DC),
        "ivory" => rgb(0xFFFFF0),
        "wheat" => rgb(0xF5DEB3),
        "khaki" => rgb(0xF0E68C),
        "coral" => rgb(0xFF7F50),
        "gold" => rgb(0xFFD700),
        "indigo" => rgb(0x4B0082),
        "violet" => rgb(0xEE82EE),
        "crimson" => rgb(0xDC143C),
        "salmon" => rgb(0xFA8072),
        "tomato" => rgb(0xFF6347),
        "skyblue" => rgb(0x87CEEB),
        "steelblue" => rgb(0x4682B4),
        "royalblue" => rgb(0x4169E1),
        "dodgerblue" => rgb(0x1E90FF),
        "forestgreen" => rgb(0x228B22),
        "darkgreen" => rgb(0x006400),
        "darkred" => rgb(0x8B0000),
        "darkblue" => rgb(0x00008B),
        "transparent" => Some(Color::TRANSPARENT),
        _ => None,
    }
}
