use clinids::tokens::COLOR_TOKENS;
use clinids::utils::color::{palette, parse_hex};
use ratatui::style::Color;

#[test]
fn test_palette_agrees_with_color_tokens() {
    // Status palette names are the token ids
    for token in COLOR_TOKENS {
        assert_eq!(palette(token.id), parse_hex(token.hex).unwrap(), "{}", token.id);
    }
}

#[test]
fn test_palette_aliases() {
    assert_eq!(palette("primary"), palette("brand-orange"));
    assert_eq!(palette("destructive"), palette("danger"));
    assert_eq!(palette("Slate-500"), palette("muted"));
    assert_eq!(palette("white"), Color::White);
}

#[test]
fn test_unknown_palette_name_falls_back_to_brand() {
    assert_eq!(palette("chartreuse"), Color::Rgb(236, 103, 38));
}
