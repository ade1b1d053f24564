use clinids::utils::text::{contains_ignore_case, initials, truncate, width, wrapped_height};

#[test]
fn test_accented_search() {
    assert!(contains_ignore_case("Ortodontia", "ORTO"));
    assert!(contains_ignore_case("Implantodontia", "DONT"));
    assert!(contains_ignore_case("Cirurgião", "gião"));
}

#[test]
fn test_truncate_counts_chars_not_bytes() {
    assert_eq!(truncate("Instalação", 10), "Instalação");
    assert_eq!(truncate("Instalação", 6), "Insta…");
    assert_eq!(width("ção"), 3);
}

#[test]
fn test_initials_for_avatar_names() {
    assert_eq!(initials("Dra. Ana Paula"), "DA");
    assert_eq!(initials("élio"), "É");
}

#[test]
fn test_wrapped_height_of_card_copy() {
    let text = "Patients waiting for confirmation are listed first.";
    assert_eq!(wrapped_height(text, 80), 1);
    // "Patients waiting for" / "confirmation are" / "listed first."
    assert_eq!(wrapped_height(text, 20), 3);
    assert_eq!(wrapped_height("confirmation", 4), 3);
}
