use ratatui::style::Color;
use thiserror::Error;

/// Errors produced while reading colour values out of design tokens
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("hex colour '{0}' must start with '#'")]
    MissingHash(String),
    #[error("hex colour '{0}' must have 6 digits")]
    BadLength(String),
    #[error("hex colour '{0}' contains a non-hex digit")]
    BadDigit(String),
}

/// Parse a `#RRGGBB` string into a terminal RGB colour
pub fn parse_hex(hex: &str) -> Result<Color, ColorError> {
    let digits = hex.strip_prefix('#').ok_or_else(|| ColorError::MissingHash(hex.to_string()))?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorError::BadLength(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::BadDigit(hex.to_string()))
    };

    Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Convert named palette entries used by the component styles to terminal colors
#[must_use]
pub fn palette(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "brand-orange" | "primary" => Color::Rgb(236, 103, 38),
        "brand-success" | "success" => Color::Rgb(76, 175, 80),
        "brand-warning" | "warning" => Color::Rgb(255, 193, 7),
        "brand-danger" | "danger" | "destructive" => Color::Rgb(211, 47, 47),
        "brand-info" | "info" => Color::Rgb(33, 150, 243),
        "blue-500" => Color::Rgb(59, 130, 246),
        "blue-100" => Color::Rgb(219, 234, 254),
        "blue-700" => Color::Rgb(29, 78, 216),
        "amber-100" => Color::Rgb(254, 243, 199),
        "amber-700" => Color::Rgb(180, 83, 9),
        "amber-900" => Color::Rgb(120, 53, 15),
        "emerald-100" => Color::Rgb(209, 250, 229),
        "emerald-700" => Color::Rgb(4, 120, 87),
        "emerald-900" => Color::Rgb(6, 78, 59),
        "rose-900" => Color::Rgb(136, 19, 55),
        "sky-900" => Color::Rgb(12, 74, 110),
        "slate-100" | "secondary" => Color::Rgb(241, 245, 249),
        "slate-200" | "border" => Color::Rgb(226, 232, 240),
        "slate-400" => Color::Rgb(148, 163, 184),
        "slate-500" | "muted" => Color::Rgb(100, 116, 139),
        "slate-600" => Color::Rgb(71, 85, 105),
        "slate-900" | "foreground" => Color::Rgb(15, 23, 42),
        "white" => Color::White,
        "black" => Color::Black,
        _ => Color::Rgb(236, 103, 38), // Default to brand orange
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_brand_orange() {
        assert_eq!(parse_hex("#EC6726"), Ok(Color::Rgb(236, 103, 38)));
        assert_eq!(parse_hex("#ec6726"), Ok(Color::Rgb(236, 103, 38)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_hex("EC6726"), Err(ColorError::MissingHash("EC6726".into())));
        assert_eq!(parse_hex("#EC672"), Err(ColorError::BadLength("#EC672".into())));
        assert_eq!(parse_hex("#GG6726"), Err(ColorError::BadDigit("#GG6726".into())));
    }

    #[test]
    fn test_palette_matches_tokens() {
        assert_eq!(palette("brand-orange"), parse_hex("#EC6726").unwrap());
        assert_eq!(palette("danger"), parse_hex("#D32F2F").unwrap());
    }
}
