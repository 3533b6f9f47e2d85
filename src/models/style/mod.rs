// Style primitives
// FontSpec plus colour parsing and formatting for the picker's styling surface

use egui::{Color32, FontId, RichText};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Size and weight of a label font.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
}

impl FontSpec {
    pub const fn system(size: f32) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold_system(size: f32) -> Self {
        Self { size, bold: true }
    }

    pub fn font_id(&self) -> FontId {
        FontId::proportional(self.size)
    }

    /// Build a label in this font.
    pub fn rich_text(&self, text: impl Into<String>, color: Color32) -> RichText {
        let text = RichText::new(text).size(self.size).color(color);
        if self.bold {
            text.strong()
        } else {
            text
        }
    }
}

/// Greyscale colour with the given white level and alpha, both in `0.0..=1.0`.
pub fn white_alpha(white: f32, alpha: f32) -> Color32 {
    let level = (white.clamp(0.0, 1.0) * 255.0).round() as u8;
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(level, level, level, alpha)
}

pub fn color_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 255 {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

/// Parse `#RRGGBB`, `#RRGGBBAA` or `r,g,b`.
pub fn parse_color(s: &str) -> Result<Color32, CalendarError> {
    let trimmed = s.trim();
    let invalid = || CalendarError::InvalidColor(s.to_string());

    if trimmed.contains(',') {
        let parts = trimmed
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<u8>, _>>()?;
        return match parts.as_slice() {
            [r, g, b] => Ok(Color32::from_rgb(*r, *g, *b)),
            _ => Err(invalid()),
        };
    }

    let hex = trimmed.trim_start_matches('#');
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return Err(invalid());
    }
    let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Color32::from_rgba_unmultiplied(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#FF8040").unwrap(), Color32::from_rgb(255, 128, 64));
        assert_eq!(parse_color("FF8040").unwrap(), Color32::from_rgb(255, 128, 64));
    }

    #[test]
    fn test_parse_hex_color_with_alpha() {
        assert_eq!(
            parse_color("#000000DE").unwrap(),
            Color32::from_rgba_unmultiplied(0, 0, 0, 222)
        );
    }

    #[test]
    fn test_parse_rgb_triplet() {
        assert_eq!(parse_color("255, 59, 48").unwrap(), Color32::from_rgb(255, 59, 48));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_color("#FFF").is_err());
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("300,0,0").is_err());
        assert!(parse_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_color_to_hex() {
        assert_eq!(color_to_hex(Color32::from_rgb(255, 128, 64)), "#FF8040");
    }

    #[test]
    fn test_white_alpha() {
        assert_eq!(white_alpha(0.0, 0.87), Color32::from_rgba_unmultiplied(0, 0, 0, 222));
        assert_eq!(white_alpha(1.0, 1.0), Color32::WHITE);
    }
}
