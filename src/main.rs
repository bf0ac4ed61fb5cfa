use clap::Parser;
use iced::event::{self, Event};
use iced::keyboard::{self, key::Named};
use iced::time::Instant;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{column, image, scrollable, text_editor};
use iced::window;
use iced::{Element, Length, Size, Subscription, Task, Theme};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::{debug, error, info};

mod config;
mod error;
mod logging;
mod site;
mod state;
mod ui;

use config::{Args, Config, Profile};
use site::{ProjectEvent, Site};
use state::contact::{ContactForm, ACKNOWLEDGMENT};
use state::data::Section;
use state::gallery::Gallery;
use state::grid::ProjectGrid;
use state::nav::{self, ScrollAnimation};
use ui::gallery::Slide;
use ui::layout::{PageLayout, NAV_HEIGHT};

const WINDOW_WIDTH: f32 = 1280.0;
const WINDOW_HEIGHT: f32 = 860.0;

/// Roughly one frame at 60 Hz
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

fn page_scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// Main application state
struct Portfolio {
    site: Site,
    profile: Profile,
    nav_offset: f32,
    /// Cards (or the error message) shown in the projects section
    grid: ProjectGrid,
    contact: ContactForm,
    /// Fixed acknowledgment shown after a contact submission
    alert: Option<&'static str>,
    /// Current vertical scroll offset of the page
    scroll_y: f32,
    viewport: Size,
    scroll_animation: Option<ScrollAnimation>,
    /// Open gallery popup, if any
    gallery: Option<Gallery>,
    /// Folder whose gallery listing was requested last
    pending_gallery: Option<String>,
    /// Gallery images fetched this session, by URL
    images: HashMap<String, image::Handle>,
    images_loading: HashSet<String>,
    images_failed: HashSet<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// In-page anchor activated
    NavigateTo(Section),
    Scrolled(Viewport),
    AnimationTick(Instant),
    WindowResized(Size),
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    SubmitContact,
    DismissAlert,
    Projects(ProjectEvent),
    OpenSource(String),
    /// A project card was clicked
    OpenGallery(String),
    GalleryLoaded(String, Vec<String>),
    GalleryImageLoaded(String, Result<image::Handle, String>),
    NextImage,
    PrevImage,
    CloseGallery,
    /// Escape pressed; dismisses the top-most popup
    Escape,
}

impl Portfolio {
    /// Create the application and start loading projects
    fn new(config: Config, site: Site) -> (Self, Task<Message>) {
        info!("🎨 Portfolio starting against {}", site.root());

        let load = Task::run(site::project_stream(site.clone()), Message::Projects);

        (
            Portfolio {
                site,
                profile: config.profile,
                nav_offset: config.nav_offset,
                grid: ProjectGrid::default(),
                contact: ContactForm::default(),
                alert: None,
                scroll_y: 0.0,
                viewport: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT - NAV_HEIGHT),
                scroll_animation: None,
                gallery: None,
                pending_gallery: None,
                images: HashMap::new(),
                images_loading: HashSet::new(),
                images_failed: HashSet::new(),
            },
            load,
        )
    }

    fn title(&self) -> String {
        self.profile.name.clone()
    }

    fn layout(&self) -> PageLayout {
        PageLayout::new(self.viewport.width, self.grid.cards().len())
    }

    fn active_section(&self) -> Option<Section> {
        nav::active_section(&self.layout().section_tops(), self.scroll_y, self.nav_offset)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(section) => {
                let layout = self.layout();
                let target = layout
                    .top_of(section)
                    .min(layout.max_scroll(self.viewport.height));

                debug!("Scrolling to #{} at {}", section.id(), target);
                self.scroll_animation =
                    Some(ScrollAnimation::new(self.scroll_y, target, Instant::now()));
                Task::none()
            }
            Message::AnimationTick(now) => {
                let Some(animation) = self.scroll_animation else {
                    return Task::none();
                };

                if animation.is_finished(now) {
                    self.scroll_animation = None;
                }

                self.scroll_y = animation.offset_at(now);
                scrollable::scroll_to(
                    page_scroll_id(),
                    AbsoluteOffset {
                        x: 0.0,
                        y: self.scroll_y,
                    },
                )
            }
            Message::Scrolled(viewport) => {
                self.scroll_y = viewport.absolute_offset().y;
                self.viewport = viewport.bounds().size();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.viewport = Size::new(size.width, (size.height - NAV_HEIGHT).max(0.0));
                Task::none()
            }
            Message::NameChanged(name) => {
                self.contact.name = name;
                Task::none()
            }
            Message::EmailChanged(email) => {
                self.contact.email = email;
                Task::none()
            }
            Message::MessageEdited(action) => {
                self.contact.message.perform(action);
                Task::none()
            }
            Message::SubmitContact => {
                let submission = self.contact.submit();
                info!(
                    name = %submission.name,
                    email = %submission.email,
                    message = %submission.message,
                    submitted_at = %submission.submitted_at,
                    "📨 Form submitted"
                );
                self.alert = Some(ACKNOWLEDGMENT);
                Task::none()
            }
            Message::DismissAlert => {
                self.alert = None;
                Task::none()
            }
            Message::Projects(event) => {
                match event {
                    ProjectEvent::Loaded(project) => {
                        info!("✅ Loaded project {} ({})", project.title, project.thumbnail_url);
                        self.grid.push(project);
                    }
                    ProjectEvent::Failed(reason) => {
                        error!("❌ Error loading projects: {}", reason);
                        self.grid.fail();
                    }
                    ProjectEvent::Finished => {
                        self.grid.finish();
                        info!("📊 {} projects on the page", self.grid.cards().len());
                    }
                }
                Task::none()
            }
            Message::OpenSource(url) => {
                if let Err(e) = open::that_detached(&url) {
                    error!("❌ Cannot open {}: {}", url, e);
                }
                Task::none()
            }
            Message::OpenGallery(folder) => {
                // Opening another project discards the current gallery
                self.gallery = None;
                self.pending_gallery = Some(folder.clone());

                let site = self.site.clone();
                Task::perform(load_gallery(site, folder), |(folder, images)| {
                    Message::GalleryLoaded(folder, images)
                })
            }
            Message::GalleryLoaded(folder, images) => {
                if self.pending_gallery.as_deref() != Some(folder.as_str()) {
                    return Task::none();
                }
                self.pending_gallery = None;

                self.gallery = Gallery::open(folder, images);
                if let Some(gallery) = &self.gallery {
                    info!("🖼️  Opened gallery for {} ({} images)", gallery.folder(), gallery.len());
                }
                self.load_current_image()
            }
            Message::GalleryImageLoaded(url, result) => {
                self.images_loading.remove(&url);
                match result {
                    Ok(handle) => {
                        self.images.insert(url, handle);
                    }
                    Err(e) => {
                        error!("❌ Error loading gallery image {}: {}", url, e);
                        self.images_failed.insert(url);
                    }
                }
                Task::none()
            }
            Message::NextImage => {
                if self.alert.is_some() {
                    return Task::none();
                }
                if let Some(gallery) = &mut self.gallery {
                    gallery.next();
                }
                self.load_current_image()
            }
            Message::PrevImage => {
                if self.alert.is_some() {
                    return Task::none();
                }
                if let Some(gallery) = &mut self.gallery {
                    gallery.prev();
                }
                self.load_current_image()
            }
            Message::CloseGallery => {
                self.gallery = None;
                Task::none()
            }
            Message::Escape => {
                // The alert is drawn above the gallery
                if self.alert.is_some() {
                    self.alert = None;
                } else {
                    self.gallery = None;
                }
                Task::none()
            }
        }
    }

    /// Fetch the image on screen unless it is cached or already in flight
    fn load_current_image(&mut self) -> Task<Message> {
        let Some(url) = self.gallery.as_ref().map(|g| g.current().to_string()) else {
            return Task::none();
        };

        if self.images.contains_key(&url)
            || self.images_loading.contains(&url)
            || self.images_failed.contains(&url)
        {
            return Task::none();
        }

        self.images_loading.insert(url.clone());
        let site = self.site.clone();
        Task::perform(load_image(site, url), |(url, result)| {
            Message::GalleryImageLoaded(url, result)
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = scrollable(ui::sections::page(
            &self.profile,
            &self.grid,
            &self.contact,
            self.layout(),
        ))
        .id(page_scroll_id())
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fill);

        let content: Element<Message> = column![
            ui::nav::nav_bar(&self.profile.name, self.active_section()),
            page,
        ]
        .into();

        let content = match &self.gallery {
            Some(gallery) => {
                let url = gallery.current();
                let slide = match self.images.get(url) {
                    Some(handle) => Slide::Ready(handle),
                    None if self.images_failed.contains(url) => Slide::Failed,
                    None => Slide::Loading,
                };
                ui::modal::modal(
                    content,
                    ui::gallery::gallery_popup(gallery, slide),
                    Message::CloseGallery,
                )
            }
            None => content,
        };

        match self.alert {
            Some(alert) => ui::modal::modal(content, ui::alert::alert_box(alert), Message::DismissAlert),
            None => content,
        }
    }

    /// Keyboard, window and animation events
    fn subscription(&self) -> Subscription<Message> {
        let events = event::listen_with(handle_event);

        if self.scroll_animation.is_some() {
            Subscription::batch([
                events,
                iced::time::every(ANIMATION_FRAME).map(Message::AnimationTick),
            ])
        } else {
            events
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Map raw events to messages.
///
/// Keys are always forwarded; `update` decides which popup, if any, they
/// act on.
fn handle_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => match named {
            Named::Escape => Some(Message::Escape),
            Named::ArrowLeft => Some(Message::PrevImage),
            Named::ArrowRight => Some(Message::NextImage),
            _ => None,
        },
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    }
}

/// Gallery listing for a folder; failures are logged and give no images
async fn load_gallery(site: Site, folder: String) -> (String, Vec<String>) {
    match site.load_gallery(&folder).await {
        Ok(images) => (folder, images),
        Err(e) => {
            error!("❌ Error loading gallery for {}: {}", folder, e);
            (folder, Vec::new())
        }
    }
}

async fn load_image(site: Site, url: String) -> (String, Result<image::Handle, String>) {
    let result = site.load_image(&url).await.map_err(|e| e.to_string());
    (url, result)
}

fn main() -> iced::Result {
    let args = Args::parse();

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            logging::setup_tracing(args.log_level.as_deref());
            error!("❌ {}", e);
            std::process::exit(2);
        }
    };
    logging::setup_tracing(config.log_level.as_deref());

    let site = match Site::new(&config) {
        Ok(site) => site,
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(2);
        }
    };

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .centered()
        .run_with(move || Portfolio::new(config, site))
}
