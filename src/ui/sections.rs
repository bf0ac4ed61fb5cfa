//! Page sections, top to bottom: hero, about, projects, contact

use iced::widget::{button, column, container, text, text_editor, text_input, Column};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::card::project_card;
use super::layout::{PageLayout, CARD_SPACING, SECTION_PADDING};
use crate::config::Profile;
use crate::state::contact::ContactForm;
use crate::state::data::Section;
use crate::state::grid::{ProjectGrid, LOAD_ERROR};
use crate::Message;

/// The whole scrollable page
pub fn page<'a>(
    profile: &'a Profile,
    grid: &'a ProjectGrid,
    form: &'a ContactForm,
    layout: PageLayout,
) -> Element<'a, Message> {
    Column::new()
        .push(section(Section::Home, &layout, hero(profile)))
        .push(section(Section::About, &layout, about(profile)))
        .push(section(Section::Projects, &layout, projects(grid, &layout)))
        .push(section(Section::Contact, &layout, contact(form)))
        .width(Length::Fill)
        .into()
}

/// Wrap a section's content at the height the layout assigns it
fn section<'a>(
    section: Section,
    layout: &PageLayout,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(layout.section_height(section))
        .padding([0.0, SECTION_PADDING])
        .clip(true)
        .into()
}

fn heading(label: &str) -> Element<'_, Message> {
    text(label).size(34).into()
}

fn hero(profile: &Profile) -> Element<'_, Message> {
    let content = column![
        text(profile.name.as_str()).size(56),
        text(profile.tagline.as_str()).size(22),
        button(text("View My Work").size(16))
            .on_press(Message::NavigateTo(Section::Projects))
            .padding([10, 22])
            .style(button::primary),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn about(profile: &Profile) -> Element<'_, Message> {
    column![
        heading("About Me"),
        text(profile.about.as_str()).size(17),
        button(text("Get in touch").size(15))
            .on_press(Message::NavigateTo(Section::Contact))
            .padding([8, 18])
            .style(button::secondary),
    ]
    .spacing(20)
    .padding([48, 0])
    .max_width(760)
    .into()
}

fn projects<'a>(grid: &'a ProjectGrid, layout: &PageLayout) -> Element<'a, Message> {
    let body: Element<'a, Message> = match grid {
        ProjectGrid::Loading => text("Loading projects...").size(16).into(),
        ProjectGrid::Failed => text(LOAD_ERROR).size(16).into(),
        ProjectGrid::Cards(cards) if cards.is_empty() => {
            text("No projects to show yet.").size(16).into()
        }
        ProjectGrid::Cards(cards) => {
            let cards = cards.iter().map(project_card).collect();
            container(
                Wrap::with_elements(cards)
                    .spacing(Pixels(CARD_SPACING))
                    .line_spacing(Pixels(CARD_SPACING)),
            )
            .width(layout.grid_width())
            .into()
        }
    };

    column![heading("Projects"), container(body).center_x(Length::Fill)]
        .spacing(24)
        .padding([40, 0])
        .into()
}

fn contact(form: &ContactForm) -> Element<'_, Message> {
    let fields = column![
        text_input("Name", &form.name)
            .on_input(Message::NameChanged)
            .on_submit(Message::SubmitContact)
            .padding(10),
        text_input("Email", &form.email)
            .on_input(Message::EmailChanged)
            .on_submit(Message::SubmitContact)
            .padding(10),
        text("Message").size(14),
        text_editor(&form.message)
            .on_action(Message::MessageEdited)
            .height(180)
            .padding(10),
        button(text("Send Message").size(16))
            .on_press(Message::SubmitContact)
            .padding([10, 22])
            .style(button::primary),
    ]
    .spacing(14)
    .max_width(560);

    column![heading("Contact"), fields]
        .spacing(24)
        .padding([40, 0])
        .into()
}
