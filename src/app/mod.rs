// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the tour window.
//!
//! The `App` struct wires together the page components (navigation, reveals,
//! notifications, modals) and translates messages into side effects like
//! config persistence or scroll tasks. This file intentionally keeps policy
//! decisions (window sizing, persistence keys, layout thresholds) close to
//! the main update loop so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod section;
mod subscription;
mod view;

pub use message::{ContactField, Flags, Message};
pub use section::Section;
pub use view::{INSTALL_COMMAND, PAGE_SCROLLABLE_ID};

use crate::config::{self, Config};
use crate::debounce::Debouncer;
use crate::storage::Store;
use crate::ui::form::{self, Field};
use crate::ui::navbar;
use crate::ui::notifications::{Kind, Manager};
use crate::ui::reveal::Observer;
use crate::ui::scroll::{self, SmoothScroll};
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Subscription, Task, Theme};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Store key remembering that the welcome dialog was acknowledged.
const WELCOME_SEEN_KEY: &str = "welcome_seen";

/// Store key remembering the last submitted contact address.
const CONTACT_EMAIL_KEY: &str = "contact.email";

/// Modal dialogs the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Welcome,
    Contact,
}

/// State of the contact dialog's form.
#[derive(Debug)]
pub struct ContactForm {
    pub name: Field,
    pub email: Field,
    pub details: Field,
}

impl ContactForm {
    fn new() -> Self {
        Self {
            name: Field::required("Name"),
            email: Field::required("Email"),
            details: Field::optional("What can we help with?"),
        }
    }

    fn field_mut(&mut self, field: ContactField) -> &mut Field {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Details => &mut self.details,
        }
    }

    fn validate(&mut self) -> bool {
        form::validate(&mut [&mut self.name, &mut self.email, &mut self.details])
    }

    fn reset(&mut self) {
        self.name.reset();
        self.email.reset();
        self.details.reset();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Ensures the compact-layout threshold stays inside the supported range so
/// persisted configs cannot request nonsensical breakpoints.
fn clamp_compact_width(value: f32) -> f32 {
    value.clamp(config::MIN_COMPACT_WIDTH_PX, config::MAX_COMPACT_WIDTH_PX)
}

/// Root Iced application state bridging the page components and persisted
/// preferences.
#[derive(Debug)]
pub struct App {
    theme: AppTheme,
    store: Store,
    notifications: Manager,
    observer: Observer,
    smooth_scroll: Option<SmoothScroll>,
    resize_debounce: Debouncer,
    /// Current page scroll offset, fed by the scrollable.
    scroll_offset: f32,
    /// Current window width, fed by resize events.
    window_width: f32,
    /// Window width below which the layout goes compact.
    compact_width: f32,
    compact: bool,
    modal: Option<Modal>,
    contact: ContactForm,
    /// Instant carried by the most recent tick or input; views sample
    /// animations at this time.
    now: Instant,
}

impl Default for App {
    fn default() -> Self {
        Self {
            theme: AppTheme::new(ThemeMode::System),
            store: Store::new(),
            notifications: Manager::new(),
            observer: Observer::new(Section::spans()),
            smooth_scroll: None,
            resize_debounce: Debouncer::new(Duration::from_millis(config::RESIZE_DEBOUNCE_MS)),
            scroll_offset: 0.0,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            compact_width: config::DEFAULT_COMPACT_WIDTH_PX,
            compact: false,
            modal: None,
            contact: ContactForm::new(),
            now: Instant::now(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and persisted data.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir, flags.config_dir);

        let config = match config::load() {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Failed to load config: {:?}", error);
                Config::default()
            }
        };

        let mut app = App::default();

        // CLI theme flag wins over the persisted preference.
        let mode = flags
            .theme
            .as_deref()
            .and_then(ThemeMode::parse)
            .or(config.theme)
            .unwrap_or_default();
        app.theme = AppTheme::new(mode);

        app.compact_width = clamp_compact_width(
            config
                .compact_width
                .unwrap_or(config::DEFAULT_COMPACT_WIDTH_PX),
        );
        app.compact = app.window_width < app.compact_width;

        let (store, warning) = Store::load();
        app.store = store;
        if let Some(message) = warning {
            app.notifications.notify(message, Kind::WARNING);
        }

        if !app.store.get::<bool>(WELCOME_SEEN_KEY).unwrap_or(false) {
            app.modal = Some(Modal::Welcome);
        }

        // The hero section sits above the fold before any scrolling happens.
        app.observer
            .update(0.0, WINDOW_DEFAULT_HEIGHT as f32, app.now);

        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar::Message::Go(section)) => self.jump_to(section),
            Message::Navbar(navbar::Message::ToggleTheme) => {
                self.theme = AppTheme::new(self.theme.mode.cycled());
                self.persist_preferences();
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::JumpTo(section) => self.jump_to(section),
            Message::PageScrolled {
                offset,
                viewport_height,
            } => {
                self.now = Instant::now();
                self.scroll_offset = offset;
                self.observer.update(offset, viewport_height, self.now);
                Task::none()
            }
            Message::CopyInstallCommand => {
                self.notifications
                    .notify("Copied to clipboard!", Kind::SUCCESS);
                iced::clipboard::write::<Message>(INSTALL_COMMAND.to_string()).discard()
            }
            Message::OpenContact => {
                self.modal = Some(Modal::Contact);
                Task::none()
            }
            Message::DismissModal => {
                if self.modal.take() == Some(Modal::Welcome) {
                    self.acknowledge_welcome();
                }
                Task::none()
            }
            Message::ContactFieldChanged(field, value) => {
                self.contact.field_mut(field).set_value(value);
                Task::none()
            }
            Message::SubmitContact => {
                self.submit_contact();
                Task::none()
            }
            Message::Tick(now) => self.tick(now),
            Message::WindowResized(size) => {
                self.now = Instant::now();
                self.window_width = size.width;
                self.resize_debounce.trigger(self.now);
                Task::none()
            }
        }
    }

    /// Starts a smooth scroll toward the given section.
    fn jump_to(&mut self, section: Section) -> Task<Message> {
        self.now = Instant::now();
        let target = scroll::target_for(section.span().top);
        self.smooth_scroll = Some(SmoothScroll::start(self.scroll_offset, target, self.now));
        Task::none()
    }

    /// Periodic tick: notification lifecycles, the resize debouncer, and the
    /// smooth-scroll animation all advance here.
    fn tick(&mut self, now: Instant) -> Task<Message> {
        self.now = now;
        self.notifications.tick(now);

        if self.resize_debounce.poll(now) {
            self.compact = self.window_width < self.compact_width;
        }

        if let Some(animation) = self.smooth_scroll {
            let offset = animation.offset_at(now);
            if animation.is_complete(now) {
                self.smooth_scroll = None;
            }
            return operation::scroll_to(
                Id::new(PAGE_SCROLLABLE_ID),
                AbsoluteOffset { x: 0.0, y: offset },
            );
        }

        Task::none()
    }

    fn submit_contact(&mut self) {
        if self.contact.validate() {
            let email = self.contact.email.value().trim().to_string();
            if let Err(error) = self.store.set(CONTACT_EMAIL_KEY, &email) {
                eprintln!("Failed to record contact address: {:?}", error);
            } else if let Some(warning) = self.store.save() {
                self.notifications.notify(warning, Kind::WARNING);
            }
            self.contact.reset();
            self.modal = None;
            self.notifications
                .notify("Thanks! We'll be in touch.", Kind::SUCCESS);
        } else {
            self.notifications
                .notify("Please fill in the required fields.", Kind::ERROR);
        }
    }

    /// Persists the one-time welcome flag once the dialog is dismissed.
    fn acknowledge_welcome(&mut self) {
        if let Err(error) = self.store.set(WELCOME_SEEN_KEY, &true) {
            eprintln!("Failed to record welcome flag: {:?}", error);
            return;
        }
        if let Some(warning) = self.store.save() {
            self.notifications.notify(warning, Kind::WARNING);
        }
    }

    fn persist_preferences(&self) {
        let config = Config {
            theme: Some(self.theme.mode),
            compact_width: Some(self.compact_width),
        };
        if let Err(error) = config::save(&config) {
            eprintln!("Failed to save config: {:?}", error);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            scheme: &self.theme.colors,
            theme_mode: self.theme.mode,
            compact: self.compact,
            elevated: self.scroll_offset > config::NAV_ELEVATION_SCROLL_PX,
            notifications: &self.notifications,
            observer: &self.observer,
            modal: self.modal,
            contact: &self.contact,
            now: self.now,
        })
    }

    fn theme(&self) -> Theme {
        if self.theme.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn title(&self) -> String {
        "Beacon".to_string()
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::create_event_subscription();
        let ticks = subscription::create_tick_subscription(
            !self.notifications.is_empty(),
            self.smooth_scroll.is_some(),
            self.observer.is_animating(self.now),
            self.resize_debounce.is_pending(),
        );
        Subscription::batch([events, ticks])
    }
}
