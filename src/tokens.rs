//! Design tokens exposed by the documentation pages.
//!
//! Colour tokens keep their source hex strings so they can be shown verbatim
//! on the Colors page and exported with `--dump-tokens`.

use crate::i18n::Language;
use crate::utils::color::{parse_hex, ColorError};
use ratatui::style::{Color, Modifier};
use serde::Serialize;

/// A brand or status colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorToken {
    pub id: &'static str,
    pub hex: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oklch: Option<&'static str>,
}

impl ColorToken {
    pub fn color(&self) -> Result<Color, ColorError> {
        parse_hex(self.hex)
    }

    /// Localized (name, description) pair
    #[must_use]
    pub fn copy(&self, lang: Language) -> (&'static str, &'static str) {
        let t = &lang.strings().colors;
        match self.id {
            "brand-orange" => (t.brand_orange, t.brand_orange_desc),
            "success" => (t.success, t.success_desc),
            "warning" => (t.warning, t.warning_desc),
            "danger" => (t.danger, t.danger_desc),
            _ => (t.info, t.info_desc),
        }
    }
}

pub const COLOR_TOKENS: [ColorToken; 5] = [
    ColorToken {
        id: "brand-orange",
        hex: "#EC6726",
        oklch: Some("0.6698 0.1803 42.9750"),
    },
    ColorToken {
        id: "success",
        hex: "#4CAF50",
        oklch: None,
    },
    ColorToken {
        id: "warning",
        hex: "#FFC107",
        oklch: None,
    },
    ColorToken {
        id: "danger",
        hex: "#D32F2F",
        oklch: None,
    },
    ColorToken {
        id: "info",
        hex: "#2196F3",
        oklch: None,
    },
];

/// Type scale entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeToken {
    pub id: &'static str,
    /// Font size in pixels on the web scale
    pub size_px: u16,
    /// CSS font weight
    pub weight: u16,
}

impl TypeToken {
    /// Terminal approximation of the weight
    #[must_use]
    pub fn modifier(&self) -> Modifier {
        if self.weight >= 700 {
            Modifier::BOLD
        } else {
            Modifier::empty()
        }
    }
}

pub const TYPE_SCALE: [TypeToken; 3] = [
    TypeToken {
        id: "h1",
        size_px: 36,
        weight: 900,
    },
    TypeToken {
        id: "h2",
        size_px: 30,
        weight: 700,
    },
    TypeToken {
        id: "body",
        size_px: 16,
        weight: 400,
    },
];

#[derive(Debug, Serialize)]
pub struct TokenSet {
    pub colors: &'static [ColorToken],
    pub typography: &'static [TypeToken],
}

#[must_use]
pub fn token_set() -> TokenSet {
    TokenSet {
        colors: &COLOR_TOKENS,
        typography: &TYPE_SCALE,
    }
}

/// Serialize every token to pretty JSON
pub fn dump_tokens() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&token_set())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_color_token_parses() {
        for token in COLOR_TOKENS {
            assert!(token.color().is_ok(), "{} should parse", token.hex);
        }
    }

    #[test]
    fn test_only_brand_orange_has_oklch() {
        let with_oklch: Vec<_> = COLOR_TOKENS.iter().filter(|t| t.oklch.is_some()).collect();
        assert_eq!(with_oklch.len(), 1);
        assert_eq!(with_oklch[0].id, "brand-orange");
    }

    #[test]
    fn test_dump_contains_hex_values() {
        let json = dump_tokens().unwrap();
        assert!(json.contains("#EC6726"));
        assert!(json.contains("\"oklch\": \"0.6698 0.1803 42.9750\""));
        assert!(!json.contains("\"oklch\": null"));
    }
}
