use iced::widget::{button, column, container, image, mouse_area, text, Space};
use iced::{ContentFit, Element, Length};

use super::layout::{CARD_HEIGHT, CARD_WIDTH};
use crate::state::data::Project;
use crate::Message;

const THUMBNAIL_HEIGHT: f32 = 180.0;

/// One project card.
///
/// Clicking anywhere on the card opens the gallery. The source button
/// captures its own click, so it opens the link without the gallery.
pub fn project_card(project: &Project) -> Element<'_, Message> {
    let thumbnail: Element<'_, Message> = match &project.thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(THUMBNAIL_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(text("No preview").size(14))
            .center_x(Length::Fill)
            .center_y(THUMBNAIL_HEIGHT)
            .style(container::bordered_box)
            .into(),
    };

    let body = column![
        thumbnail,
        text(project.title.as_str()).size(22),
        text(project.summary.as_str()).size(14),
        Space::with_height(Length::Fill),
        button(text("Source Code").size(14))
            .on_press_maybe(
                (!project.source_url.is_empty())
                    .then(|| Message::OpenSource(project.source_url.clone())),
            )
            .padding([6, 14])
            .style(button::primary),
    ]
    .spacing(12);

    let card = container(body)
        .width(CARD_WIDTH)
        .height(CARD_HEIGHT)
        .padding(16)
        .clip(true)
        .style(container::rounded_box);

    mouse_area(card)
        .on_press(Message::OpenGallery(project.folder.clone()))
        .into()
}
