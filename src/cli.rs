//! Command-line arguments for the `clinids` binary.

use crate::config::Config;
use crate::i18n::Language;
use crate::ui::core::Page;
use crate::ui::LaunchOptions;
use clap::{ColorChoice, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "clinids",
    version,
    about = "Browse the CliniDS design system in the terminal",
    color = ColorChoice::Auto
)]
pub struct CliArgs {
    /// Configuration file to load instead of the default lookup
    #[arg(short, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Interface language: en or pt
    #[arg(short, long = "lang", value_name = "LANG")]
    pub lang: Option<Language>,

    /// Page to open, e.g. intro, colors, combobox
    #[arg(short, long, value_name = "ID")]
    pub page: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub generate_config: Option<Option<PathBuf>>,

    /// Print the design tokens as JSON and exit
    #[arg(long)]
    pub dump_tokens: bool,
}

impl CliArgs {
    /// Load the configuration file named on the command line, or the default one
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from_file(path),
            None => Config::load(),
        }
    }

    /// Command-line flags win over the configuration file
    pub fn launch_options(&self, config: &Config) -> LaunchOptions {
        let mut options = LaunchOptions::from_config(config);
        if let Some(language) = self.lang {
            options.language = language;
        }
        if let Some(page) = &self.page {
            options.start_page = Page::resolve(page);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::parse_from(["clinids", "--lang", "en", "--page", "combobox"]);
        let options = args.launch_options(&Config::default());
        assert_eq!(options.language, Language::En);
        assert_eq!(options.start_page, Page::Combobox);
    }

    #[test]
    fn test_unknown_page_falls_back_to_intro() {
        let args = CliArgs::parse_from(["clinids", "--page", "nope"]);
        assert_eq!(args.launch_options(&Config::default()).start_page, Page::Intro);
    }

    #[test]
    fn test_generate_config_path_is_optional() {
        let bare = CliArgs::parse_from(["clinids", "--generate-config"]);
        assert_eq!(bare.generate_config, Some(None));
        let with_path = CliArgs::parse_from(["clinids", "--generate-config", "/tmp/c.toml"]);
        assert_eq!(with_path.generate_config, Some(Some(PathBuf::from("/tmp/c.toml"))));
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(CliArgs::try_parse_from(["clinids", "--lang", "fr"]).is_err());
    }
}
