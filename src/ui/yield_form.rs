/// Yield prediction screen: the nine-field form

use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, text_input, tooltip, Column,
};
use iced::{Alignment, Element, Length};

use crate::i18n::{self, YieldStrings};
use crate::state::form::{self, Field, FieldError, YieldForm};
use crate::state::session::Session;
use crate::ui::{busy_banner, header};
use crate::{Message, Notice};

/// One selectable option: stable key plus localized label
#[derive(Debug, Clone, PartialEq)]
struct Choice {
    key: &'static str,
    label: &'static str,
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label)
    }
}

pub fn view<'a>(
    session: &Session,
    form: &'a YieldForm,
    notice: Option<Notice>,
) -> Element<'a, Message> {
    let strings = i18n::yield_form(session.language);

    let heading = column![text(strings.title).size(32), text(strings.subtitle).size(16)]
        .spacing(8)
        .width(Length::Fill)
        .align_x(Alignment::Center);

    let metrics = section(
        strings.plant_metrics,
        vec![
            numeric_field(form, strings, Field::PlantHeight, strings.plant_height, strings.cm, strings.plant_height_desc),
            numeric_field(form, strings, Field::StemDiameter, strings.stem_diameter, strings.cm, strings.stem_diameter_desc),
            numeric_field(form, strings, Field::LeafCount, strings.leaf_count, "", strings.leaf_count_desc),
            numeric_field(form, strings, Field::PlantAge, strings.plant_age, strings.months, strings.plant_age_desc),
        ],
    );

    let environment = section(
        strings.environmental_factors,
        vec![
            choice_field(
                form,
                strings,
                Field::SoilMoisture,
                strings.soil_moisture,
                strings.soil_moisture_desc,
                &form::SOIL_MOISTURE_LEVELS,
                &strings.moisture_labels,
            ),
            numeric_field(form, strings, Field::Temperature, strings.temperature, strings.celsius, strings.temperature_desc),
        ],
    );

    let practices = section(
        strings.farming_practices,
        vec![
            choice_field(
                form,
                strings,
                Field::Fertilizer,
                strings.fertilizer,
                strings.fertilizer_desc,
                &form::FERTILIZER_TYPES,
                &strings.fertilizer_labels,
            ),
            numeric_field(
                form,
                strings,
                Field::PlantingDensity,
                strings.planting_density,
                strings.plants_per_hectare,
                strings.planting_density_desc,
            ),
            choice_field(
                form,
                strings,
                Field::Variety,
                strings.variety,
                strings.variety_desc,
                &form::VARIETIES,
                &strings.variety_labels,
            ),
        ],
    );

    let predict_label = if form.is_predicting() {
        strings.predicting
    } else {
        strings.predict_yield
    };
    let actions = row![
        button(text(predict_label))
            .on_press_maybe((!form.is_predicting()).then_some(Message::PredictYield)),
        button(text(strings.reset))
            .style(button::secondary)
            .on_press(Message::ResetForm),
    ]
    .spacing(12);

    let mut content = column![
        header::header(session, Some(strings.back_to_home)),
        heading,
        metrics,
        environment,
        practices,
        actions,
    ]
    .spacing(20)
    .padding(30);

    if let Some(line) = notice_line(strings, notice) {
        content = content.push(line);
    }
    if form.is_predicting() {
        content = content.push(busy_banner(strings.prediction_banner, strings.prediction_detail));
    }

    scrollable(content.width(Length::Fill)).into()
}

fn section<'a>(title: &'static str, fields: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut body = Column::new().spacing(14).push(text(title).size(20));
    for field in fields {
        body = body.push(field);
    }

    container(body)
        .padding(20)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn numeric_field<'a>(
    form: &'a YieldForm,
    strings: &'static YieldStrings,
    field: Field,
    label: &'static str,
    unit: &'static str,
    description: &'static str,
) -> Element<'a, Message> {
    let title = if unit.is_empty() {
        label.to_string()
    } else {
        format!("{label} ({unit})")
    };

    let input = text_input(label, form.value(field))
        .on_input(move |value| Message::FieldEdited(field, value))
        .padding(8);

    let mut block = column![labeled(title, description), input].spacing(6);
    if let Some(line) = error_line(strings, form.error(field)) {
        block = block.push(line);
    }
    block.into()
}

fn choice_field<'a>(
    form: &'a YieldForm,
    strings: &'static YieldStrings,
    field: Field,
    label: &'static str,
    description: &'static str,
    keys: &'static [&'static str],
    labels: &'static [&'static str],
) -> Element<'a, Message> {
    let options: Vec<Choice> = keys
        .iter()
        .copied()
        .zip(labels.iter().copied())
        .map(|(key, label)| Choice { key, label })
        .collect();
    let selected = options
        .iter()
        .find(|choice| choice.key == form.value(field))
        .cloned();

    let picker = pick_list(options, selected, move |choice: Choice| {
        Message::FieldEdited(field, choice.key.to_string())
    })
    .placeholder(label)
    .width(Length::Fill)
    .padding(8);

    let mut block = column![labeled(label.to_string(), description), picker].spacing(6);
    if let Some(line) = error_line(strings, form.error(field)) {
        block = block.push(line);
    }
    block.into()
}

fn labeled(title: String, description: &'static str) -> Element<'static, Message> {
    row![
        text(title).size(14),
        tooltip(
            text("ⓘ").size(12),
            container(text(description).size(13))
                .padding(8)
                .max_width(280)
                .style(container::rounded_box),
            tooltip::Position::Right,
        ),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

fn error_line(
    strings: &'static YieldStrings,
    error: Option<FieldError>,
) -> Option<Element<'static, Message>> {
    let message = match error? {
        FieldError::Required => strings.required,
        FieldError::InvalidNumber => strings.invalid_number,
    };
    Some(text(message).size(13).style(text::danger).into())
}

fn notice_line(
    strings: &'static YieldStrings,
    notice: Option<Notice>,
) -> Option<Element<'static, Message>> {
    let (message, failed) = match notice? {
        Notice::PredictionFailed => (strings.prediction_failed, true),
        Notice::PredictionDone => (strings.prediction_done, false),
        _ => return None,
    };
    let style = if failed { text::danger } else { text::success };
    Some(text(message).size(14).style(style).into())
}
