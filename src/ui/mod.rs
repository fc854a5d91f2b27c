/// UI module: one view builder per screen plus shared chrome

pub mod disease;
pub mod header;
pub mod landing;
pub mod yield_form;

use iced::widget::{column, container, text};
use iced::{Element, Length};

use crate::Message;

/// Progress banner shown while a simulated backend call runs
fn busy_banner(title: &'static str, detail: &'static str) -> Element<'static, Message> {
    container(column![text(title).size(16), text(detail).size(14)].spacing(4))
        .padding(16)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
