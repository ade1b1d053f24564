use clinids::config::Config;
use clinids::i18n::Language;
use clinids::icons::IconTheme;
use clinids::ui::core::Page;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.language, Language::Pt);
    assert_eq!(config.ui.start_page, "intro");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.sidebar_width, 26);
    assert_eq!(config.display.icon_theme, IconTheme::Unicode);
    assert!(config.display.show_footer);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test an unknown start page
    config.ui.sidebar_width = 30;
    config.ui.start_page = "tables".to_string();
    let error = config.validate().unwrap_err().to_string();
    assert!(error.contains("tables"));
    assert!(error.contains("combobox"));
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("language = \"pt\""));
    assert!(toml_str.contains("icon_theme = \"unicode\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
language = "en"
start_page = "colors"

[display]
icon_theme = "ascii"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.language, Language::En);
    assert_eq!(config.start_page(), Page::Colors);
    assert_eq!(config.display.icon_theme, IconTheme::Ascii);

    // Check that unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.sidebar_width, 26);
    assert!(config.display.show_footer);
    assert!(!config.logging.enabled);
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.language, default_config.ui.language);
    assert_eq!(config.ui.start_page, default_config.ui.start_page);
    assert_eq!(config.display.icon_theme, default_config.display.icon_theme);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_unknown_language_is_rejected() {
    let result: Result<Config, _> = toml::from_str("[ui]\nlanguage = \"fr\"\n");
    assert!(result.is_err());
}

#[test]
fn test_load_from_file_validates() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("clinids_test_invalid_config");
    fs::create_dir_all(&temp_dir).unwrap();
    let config_path = temp_dir.join("config.toml");
    fs::write(&config_path, "[ui]\nsidebar_width = 99\n").unwrap();

    let error = Config::load_from_file(&config_path).unwrap_err().to_string();
    assert!(error.contains("sidebar_width"));

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("clinids_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# CliniDS Configuration File"));
    assert!(content.contains("start_page = \"intro\""));
    assert!(Config::load_from_file(&config_path).is_ok());

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}
