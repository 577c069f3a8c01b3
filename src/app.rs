// SPDX-License-Identifier: MPL-2.0
//! Application root state and the slideshow update loop.
//!
//! The `App` struct wires together the deck, playback state, and the render
//! stage, and translates messages into side effects like asynchronous diagram
//! layout. This file intentionally keeps the slideshow policy (boundary
//! clamping, play-mode chaining, stale-render handling) close to the main
//! update loop so it is easy to audit user-facing behavior.

use crate::config;
use crate::deck::Deck;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::playback::PlaybackState;
use crate::render::{graphviz, RenderedGraph, Transition};
use crate::ui::controls;
use crate::ui::pane;
use crate::ui::theming::ThemeMode;
use iced::{event, keyboard, time, widget::Column, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// How often the crossfade is advanced while a transition is in flight.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    deck: Deck,
    playback: PlaybackState,
    stage: Stage,
    theme_mode: ThemeMode,
    /// Pause before each crossfade starts.
    transition_delay: Duration,
}

/// The render surface: what is on screen and what is fading in.
///
/// `seq` tags render requests; an asynchronous layout result carrying an older
/// tag belongs to a superseded navigation and is dropped.
struct Stage {
    current: Option<RenderedGraph>,
    incoming: Option<RenderedGraph>,
    transition: Option<Transition>,
    fade: f32,
    error: Option<Error>,
    seq: u64,
}

impl Stage {
    fn new() -> Self {
        Self {
            current: None,
            incoming: None,
            transition: None,
            fade: 0.0,
            error: None,
            seq: 0,
        }
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("deck_len", &self.deck.len())
            .field("index", &self.playback.index())
            .field("playing", &self.playback.playing())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Deck loading finished (startup or file dialog).
    DeckLoaded(Result<Deck, Error>),
    Controls(controls::Message),
    Pane(pane::Message),
    /// Asynchronous diagram layout finished.
    GraphRendered {
        seq: u64,
        result: Result<RenderedGraph, Error>,
    },
    /// Periodic tick driving the crossfade while a transition is in flight.
    Tick(Instant),
    /// Result of the "open deck" file dialog.
    DeckPicked(Option<PathBuf>),
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional deck path (JSON file, `.dot`/`.gv` file, or directory) to
    /// preload on startup.
    pub deck_path: Option<String>,
    /// Optional override for the inter-transition delay in milliseconds.
    pub delay_ms: Option<u64>,
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
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            deck: Deck::new(),
            playback: PlaybackState::new(),
            stage: Stage::new(),
            theme_mode: ThemeMode::System,
            transition_delay: Duration::from_millis(config::DEFAULT_TRANSITION_DELAY_MS),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// deck loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.theme_mode;

        let delay_ms = flags
            .delay_ms
            .or(config.transition_delay_ms)
            .unwrap_or(config::DEFAULT_TRANSITION_DELAY_MS);
        app.transition_delay = Duration::from_millis(delay_ms);

        let task = if let Some(path_str) = flags.deck_path {
            let path = PathBuf::from(path_str);
            Task::perform(async move { Deck::load(&path) }, Message::DeckLoaded)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Drive the crossfade only while one is in flight.
        let tick_subscription = if self.stage.transition.is_some() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let event_subscription = event::listen_with(|event, status, window_id| {
            if let event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) = &event {
                return match status {
                    event::Status::Ignored => Some(Message::RawEvent {
                        window: window_id,
                        event: event.clone(),
                    }),
                    event::Status::Captured => None,
                };
            }
            None
        });

        Subscription::batch([tick_subscription, event_subscription])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DeckLoaded(Ok(deck)) => {
                self.deck = deck;
                self.playback = PlaybackState::new();
                self.stage = Stage::new();
                if self.deck.is_empty() {
                    return Task::none();
                }
                // First render once the deck is ready.
                self.request_render()
            }
            Message::DeckLoaded(Err(err)) => {
                eprintln!("Failed to load deck: {err}");
                self.stage.error = Some(err);
                Task::none()
            }
            Message::Controls(controls_message) => self.handle_controls(controls_message),
            Message::Pane(pane::Message::OpenDeckRequested) => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("Deck", &["json", "dot", "gv"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::DeckPicked,
            ),
            Message::DeckPicked(Some(path)) => {
                Task::perform(async move { Deck::load(&path) }, Message::DeckLoaded)
            }
            Message::DeckPicked(None) => Task::none(),
            Message::GraphRendered { seq, result } => self.handle_rendered(seq, result),
            Message::Tick(now) => self.tick(now),
            Message::RawEvent { event, .. } => self.handle_raw_event(event),
        }
    }

    fn handle_controls(&mut self, message: controls::Message) -> Task<Message> {
        if self.deck.is_empty() {
            return Task::none();
        }

        match message {
            controls::Message::Next => {
                self.playback.show_next(self.deck.len());
                self.request_render()
            }
            controls::Message::Previous => {
                self.playback.show_previous();
                self.request_render()
            }
            controls::Message::TogglePlay => {
                self.playback.toggle();
                self.request_render()
            }
            controls::Message::SliderMoved(value) => {
                let target = value.round().max(0.0) as usize;
                // Dedup: an unchanged value while paused fires nothing, so a
                // drag emits exactly once per distinct position.
                if target == self.playback.index() && !self.playback.playing() {
                    return Task::none();
                }
                self.playback.seek(target, self.deck.len());
                self.request_render()
            }
            // The drag already applied its final value; the release commit has
            // nothing left to do.
            controls::Message::SliderReleased => Task::none(),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return Task::none();
        };

        match key {
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                self.handle_controls(controls::Message::Next)
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                self.handle_controls(controls::Message::Previous)
            }
            keyboard::Key::Named(keyboard::key::Named::Space) => {
                self.handle_controls(controls::Message::TogglePlay)
            }
            _ => Task::none(),
        }
    }

    /// Requests an asynchronous layout of the diagram at the current index.
    /// Each request gets a fresh sequence number; completions carrying an older
    /// one are dropped in [`App::handle_rendered`].
    fn request_render(&mut self) -> Task<Message> {
        let Some(source) = self.deck.get(self.playback.index()) else {
            return Task::none();
        };
        let source = source.to_owned();

        self.stage.seq += 1;
        let seq = self.stage.seq;

        Task::perform(
            async move { graphviz::render(&source) },
            move |result| Message::GraphRendered { seq, result },
        )
    }

    fn handle_rendered(&mut self, seq: u64, result: Result<RenderedGraph, Error>) -> Task<Message> {
        if seq != self.stage.seq {
            // A newer navigation superseded this render.
            return Task::none();
        }

        match result {
            Ok(rendered) => {
                // If a crossfade was still running, its incoming diagram
                // becomes the base layer so the new fade starts from what is
                // actually on screen.
                if let Some(previous_incoming) = self.stage.incoming.take() {
                    self.stage.current = Some(previous_incoming);
                }
                self.stage.incoming = Some(rendered);
                self.stage.transition = Some(Transition::start(self.transition_delay));
                self.stage.fade = 0.0;
                self.stage.error = None;
            }
            Err(err) => {
                eprintln!("Failed to render diagram: {err}");
                self.stage.error = Some(err);
                self.stage.transition = None;
            }
        }
        Task::none()
    }

    /// Advances the crossfade. When it completes, the incoming diagram is
    /// promoted and play mode is checked fresh: if it is still active at that
    /// moment, the next render is requested, chaining the slideshow.
    fn tick(&mut self, now: Instant) -> Task<Message> {
        let Some(transition) = self.stage.transition else {
            return Task::none();
        };

        self.stage.fade = transition.opacity_at(now);

        if !transition.is_finished_at(now) {
            return Task::none();
        }

        if let Some(incoming) = self.stage.incoming.take() {
            self.stage.current = Some(incoming);
        }
        self.stage.transition = None;
        self.stage.fade = 0.0;

        if self.playback.advance(self.deck.len()) {
            return self.request_render();
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let stage = pane::view(
            pane::ViewContext { i18n: &self.i18n },
            pane::StageView {
                current: self.stage.current.as_ref(),
                incoming: self.stage.incoming.as_ref(),
                incoming_opacity: self.stage.fade,
                error: self.stage.error.as_ref(),
            },
        )
        .map(Message::Pane);

        let mut column = Column::new().push(stage);

        if !self.deck.is_empty() {
            let transport = controls::view(
                controls::ViewContext { i18n: &self.i18n },
                &self.playback,
                &self.deck,
            )
            .map(Message::Controls);
            column = column.push(transport);
        }

        column.width(Length::Fill).height(Length::Fill).into()
    }
}
