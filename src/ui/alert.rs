use iced::widget::{button, column, container, text};
use iced::{Alignment, Element};

use crate::Message;

/// A short message with an OK button, like a browser alert
pub fn alert_box(message: &str) -> Element<'_, Message> {
    container(
        column![
            text(message).size(16),
            button(text("OK").size(15))
                .on_press(Message::DismissAlert)
                .padding([6, 24])
                .style(button::primary),
        ]
        .spacing(20)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .max_width(440)
    .style(container::rounded_box)
    .into()
}
