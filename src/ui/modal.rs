use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

/// Draw `content` centered over a dimmed `base`.
///
/// Clicks on the dimmed backdrop produce `on_blur`; clicks inside `content`
/// never reach the backdrop or the page below.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let base: Element<'a, Message> = base.into();

    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.85,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
