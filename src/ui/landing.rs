/// Landing screen: hero copy plus the two feature cards

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::i18n;
use crate::state::session::Session;
use crate::ui::header;
use crate::{Message, Screen};

pub fn view(session: &Session) -> Element<'static, Message> {
    let strings = i18n::landing(session.language);

    let hero = column![
        text(strings.app_title).size(42),
        text(strings.tagline).size(26),
        text(strings.description).size(16),
    ]
    .spacing(12)
    .max_width(700)
    .align_x(Alignment::Center);

    let hero_buttons = row![
        button(text(strings.get_started)).on_press(Message::Navigate(Screen::DiseaseDetection)),
        // No destination yet
        button(text(strings.learn_more)).style(button::secondary),
    ]
    .spacing(12);

    let cards = row![
        feature_card(
            strings.disease_detection,
            strings.disease_desc,
            strings.get_started,
            Screen::DiseaseDetection,
        ),
        feature_card(
            strings.yield_prediction,
            strings.yield_desc,
            strings.get_started,
            Screen::YieldPrediction,
        ),
    ]
    .spacing(20);

    let content = column![header::header(session, None), hero, hero_buttons, cards]
        .spacing(28)
        .padding(30)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    scrollable(content).into()
}

fn feature_card(
    title: &'static str,
    description: &'static str,
    cta: &'static str,
    target: Screen,
) -> Element<'static, Message> {
    let body = column![
        text(title).size(22),
        text(description).size(15),
        button(text(cta)).on_press(Message::Navigate(target)),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    container(body)
        .padding(24)
        .width(Length::FillPortion(1))
        .style(container::bordered_box)
        .into()
}
