use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length, Theme};

use super::layout::NAV_HEIGHT;
use crate::state::data::Section;
use crate::Message;

/// Top navigation bar; the link for `active` is highlighted
pub fn nav_bar(brand: &str, active: Option<Section>) -> Element<'_, Message> {
    let mut bar = row![text(brand).size(20), Space::with_width(Length::Fill)]
        .spacing(8)
        .padding([0, 24])
        .align_y(Alignment::Center)
        .height(Length::Fill);

    for section in Section::ALL {
        bar = bar.push(nav_link(section, Some(section) == active));
    }

    container(bar)
        .width(Length::Fill)
        .height(NAV_HEIGHT)
        .style(container::dark)
        .into()
}

fn nav_link<'a>(section: Section, active: bool) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if active {
        button::primary
    } else {
        button::text
    };

    button(text(section.label()).size(15))
        .on_press(Message::NavigateTo(section))
        .padding([6, 14])
        .style(style)
        .into()
}
