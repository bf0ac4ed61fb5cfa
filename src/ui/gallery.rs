use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::gallery::Gallery;
use crate::Message;

/// What the popup knows about the image on screen
pub enum Slide<'a> {
    Ready(&'a image::Handle),
    Loading,
    Failed,
}

/// Popup contents: close control, the current image between prev/next
/// controls, and a position counter.
pub fn gallery_popup<'a>(gallery: &Gallery, slide: Slide<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match slide {
        Slide::Ready(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        Slide::Loading => text("Loading image...").into(),
        Slide::Failed => text("This image could not be loaded.").into(),
    };

    let stage = container(picture)
        .center_x(Length::Fixed(900.0))
        .center_y(Length::Fixed(600.0));

    let controls = row![
        button(text("‹").size(32))
            .on_press(Message::PrevImage)
            .style(button::secondary),
        stage,
        button(text("›").size(32))
            .on_press(Message::NextImage)
            .style(button::secondary),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let header = row![
        Space::with_width(Length::Fill),
        button(text("✕").size(18))
            .on_press(Message::CloseGallery)
            .style(button::text),
    ];

    let counter = text(format!("{} / {}", gallery.index() + 1, gallery.len())).size(14);

    container(
        column![header, controls, counter]
            .spacing(8)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .style(container::rounded_box)
    .into()
}
