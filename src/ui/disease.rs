/// Disease detection screen: photo intake, preview and analysis

use iced::widget::{
    button, column, container, image, row, scrollable, text, tooltip, Column,
};
use iced::{Alignment, Element, Length, Theme};

use crate::i18n::{self, DiseaseStrings};
use crate::state::intake::{ImageIntake, IntakeStatus};
use crate::state::session::Session;
use crate::ui::{busy_banner, header};
use crate::{Message, Notice};

pub fn view<'a>(
    session: &Session,
    intake: &'a ImageIntake,
    notice: Option<Notice>,
) -> Element<'a, Message> {
    let strings = i18n::disease(session.language);

    let heading = column![text(strings.title).size(32), text(strings.subtitle).size(16)]
        .spacing(8)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    let mut content = column![
        header::header(session, Some(strings.back_to_home)),
        heading,
        row![instructions_card(strings), upload_card(strings, intake)].spacing(20),
    ]
    .spacing(24)
    .padding(30);

    if let Some(line) = notice_line(strings, notice) {
        content = content.push(line);
    }
    if intake.status() == IntakeStatus::Submitting {
        content = content.push(busy_banner(strings.analysis_banner, strings.analysis_detail));
    }

    scrollable(content.width(Length::Fill)).into()
}

fn instructions_card(strings: &'static DiseaseStrings) -> Element<'static, Message> {
    let mut items = Column::new().spacing(10);
    for (index, instruction) in strings.instructions.iter().enumerate() {
        items = items.push(text(format!("{}. {}", index + 1, instruction)).size(15));
    }

    let tips = tooltip(
        text(strings.photo_tips).size(14),
        container(tips_list(strings))
            .padding(8)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    );

    container(
        column![text(strings.instructions_title).size(20), items, tips].spacing(14),
    )
    .padding(20)
    .width(Length::FillPortion(1))
    .style(container::bordered_box)
    .into()
}

fn tips_list(strings: &'static DiseaseStrings) -> Element<'static, Message> {
    let mut items = Column::new().spacing(4);
    for tip in strings.tips_content {
        items = items.push(text(format!("• {tip}")).size(13));
    }
    items.into()
}

fn upload_card<'a>(
    strings: &'static DiseaseStrings,
    intake: &'a ImageIntake,
) -> Element<'a, Message> {
    let drop_zone_body: Element<'a, Message> = match intake.image() {
        Some(selected) => column![
            text(strings.file_selected).size(18),
            text(&selected.name).size(15),
            text(selected.size_display()).size(13),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into(),
        None => column![
            text(strings.upload_area).size(16),
            text(strings.supported_formats).size(13),
        ]
        .spacing(6)
        .align_x(Alignment::Center)
        .into(),
    };

    let drop_zone = container(drop_zone_body)
        .padding(40)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(drop_zone_style(intake.drag_active()));

    let analyze_label = if intake.status() == IntakeStatus::Submitting {
        strings.uploading
    } else {
        strings.upload_button
    };
    // Submit is only offered for a fresh selection
    let analyze_enabled = intake.status() == IntakeStatus::Selected;

    let mut actions = row![
        button(text(strings.browse))
            .style(button::secondary)
            .on_press(Message::BrowsePhoto),
        button(text(analyze_label))
            .on_press_maybe(analyze_enabled.then_some(Message::AnalyzePhoto)),
    ]
    .spacing(12);

    if intake.image().is_some() {
        actions = actions.push(
            button(text(strings.clear))
                .style(button::secondary)
                .on_press(Message::ClearPhoto),
        );
    }

    let mut body = column![drop_zone].spacing(16).align_x(Alignment::Center);

    if let Some(selected) = intake.image() {
        body = body.push(image(image::Handle::from_path(&selected.path)).height(280));
    }
    body = body.push(actions);

    container(body)
        .padding(20)
        .width(Length::FillPortion(2))
        .style(container::bordered_box)
        .into()
}

/// The drop target highlights while a file drag hovers the window
fn drop_zone_style(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let mut style = container::bordered_box(theme);
        if active {
            style.border.color = theme.extended_palette().primary.strong.color;
            style.border.width = 2.0;
        }
        style
    }
}

fn notice_line(
    strings: &'static DiseaseStrings,
    notice: Option<Notice>,
) -> Option<Element<'static, Message>> {
    let (message, failed) = match notice? {
        Notice::UnsupportedFile => (strings.unsupported_file, true),
        Notice::AnalysisFailed => (strings.analysis_failed, true),
        Notice::AnalysisDone => (strings.analysis_done, false),
        _ => return None,
    };
    let style = if failed { text::danger } else { text::success };
    Some(text(message).size(14).style(style).into())
}
