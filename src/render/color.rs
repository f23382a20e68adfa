//! Color tokens: the user's spelling plus the RGBA value it names

use crate::io::error::VasarelyError;
use crate::render::palette::NAMED_COLORS;
use std::fmt;
use std::str::FromStr;

/// Fill color as typed by the user, resolved to an opaque RGBA value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorToken {
    token: String,
    rgba: [u8; 4],
}

impl ColorToken {
    /// Token exactly as supplied
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Resolved color, always fully opaque
    pub const fn rgba(&self) -> [u8; 4] {
        self.rgba
    }

    /// Token reduced to characters that are safe inside a file name
    pub fn file_label(&self) -> String {
        self.token
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
            .collect()
    }
}

impl FromStr for ColorToken {
    type Err = VasarelyError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let trimmed = token.trim();
        let rgb = trimmed
            .strip_prefix('#')
            .map_or_else(|| named_color(trimmed), parse_hex)
            .ok_or_else(|| VasarelyError::InvalidColor {
                token: token.to_string(),
            })?;
        let [r, g, b] = rgb;

        Ok(Self {
            token: trimmed.to_string(),
            rgba: [r, g, b, u8::MAX],
        })
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

fn named_color(name: &str) -> Option<[u8; 3]> {
    let lowered: String = name
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_ascii_lowercase())
        .collect();
    NAMED_COLORS
        .binary_search_by(|(known, _)| (*known).cmp(lowered.as_str()))
        .ok()
        .and_then(|index| NAMED_COLORS.get(index))
        .map(|(_, rgb)| *rgb)
}

fn parse_hex(digits: &str) -> Option<[u8; 3]> {
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    // #rgb expands each digit, so #f80 == #ff8800
    if digits.len() == 3 {
        let mut rgb = [0_u8; 3];
        for (channel, ch) in rgb.iter_mut().zip(digits.chars()) {
            *channel = u8::from_str_radix(&ch.to_string(), 16).ok()? * 17;
        }
        return Some(rgb);
    }
    // Longer forms keep the most significant byte of each channel
    let width = match digits.len() {
        6 => 2,
        9 => 3,
        12 => 4,
        _ => return None,
    };
    let mut rgb = [0_u8; 3];
    for (channel, index) in rgb.iter_mut().zip([0, width, 2 * width]) {
        let high_byte = digits.get(index..index + 2)?;
        *channel = u8::from_str_radix(high_byte, 16).ok()?;
    }
    Some(rgb)
}
