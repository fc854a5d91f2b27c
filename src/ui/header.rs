/// Shared screen chrome: back link, language picker, theme toggle

use iced::widget::{button, horizontal_space, pick_list, row, text, Row};
use iced::Alignment;

use crate::i18n::ALL_LANGUAGES;
use crate::state::session::{Session, ThemeChoice};
use crate::{Message, Screen};

pub fn header(session: &Session, back_label: Option<&'static str>) -> Row<'static, Message> {
    let mut bar = row![].spacing(10).align_y(Alignment::Center);

    if let Some(label) = back_label {
        bar = bar.push(
            button(text(format!("← {label}")))
                .style(button::text)
                .on_press(Message::Navigate(Screen::Landing)),
        );
    }

    let language_picker = pick_list(
        ALL_LANGUAGES,
        Some(session.language),
        Message::LanguageSelected,
    );

    // Button shows the theme a press switches to
    let theme_label = match session.theme {
        ThemeChoice::Light => "🌙",
        ThemeChoice::Dark => "☀",
    };
    let theme_toggle = button(text(theme_label))
        .style(button::text)
        .on_press(Message::ToggleTheme);

    bar.push(horizontal_space())
        .push(language_picker)
        .push(theme_toggle)
}
