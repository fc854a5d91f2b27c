/// Session-wide interface preferences
///
/// One explicit struct owned by the application, passed to every screen.
/// Nothing here is persisted: a fresh run always starts in English with
/// the light theme.

use crate::i18n::Language;

/// The two interface themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    /// The other theme, for the toggle button
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }

    /// Map to the iced theme used for rendering
    pub fn to_iced(self) -> iced::Theme {
        match self {
            ThemeChoice::Light => iced::Theme::Light,
            ThemeChoice::Dark => iced::Theme::Dark,
        }
    }
}

/// Language and theme for the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub language: Language,
    pub theme: ThemeChoice,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert_eq!(session.language, Language::En);
        assert_eq!(session.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_toggle_theme_round_trips() {
        let mut session = Session::new();
        session.toggle_theme();
        assert_eq!(session.theme, ThemeChoice::Dark);
        session.toggle_theme();
        assert_eq!(session.theme, ThemeChoice::Light);
    }

    #[test]
    fn test_set_language() {
        let mut session = Session::new();
        session.set_language(Language::Ta);
        assert_eq!(session.language, Language::Ta);
    }
}
