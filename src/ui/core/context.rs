use crate::{i18n::Language, i18n::Translations, icons::IconService, logger::Logger, ui::core::pointer::PointerWatch};

/// Shared state every component reads while rendering
#[derive(Clone, Debug)]
pub struct AppContext {
    pub language: Language,
    pub icons: IconService,
    pub logger: Logger,
    pub pointer: PointerWatch,
    /// Event loop ticks, drives spinner frames
    pub tick: usize,
}

impl AppContext {
    pub fn new(language: Language, icons: IconService, logger: Logger) -> Self {
        Self {
            language,
            icons,
            logger,
            pointer: PointerWatch::new(),
            tick: 0,
        }
    }

    pub fn t(&self) -> &'static Translations {
        self.language.strings()
    }

    pub fn spinner(&self) -> &'static str {
        self.icons.spinner_frame(self.tick)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Language::default(), IconService::default(), Logger::new())
    }
}
