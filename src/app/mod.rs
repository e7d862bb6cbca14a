// SPDX-License-Identifier: MPL-2.0
//! Page runtime wiring the controllers to the document.
//!
//! The [`Page`] owns the [`Document`] and one instance of every controller.
//! Events arrive as [`Message`]s, timers and the language lookup are driven
//! by [`Page::run`], and each controller only ever touches its own state plus
//! the parts of the document it is responsible for.

pub mod message;
pub mod paths;
pub mod persisted_state;

pub use message::{ClickTarget, Message};

use crate::config::Config;
use crate::dom::Document;
use crate::error::Result;
use crate::i18n::{
    system_locale, FileStore, GeoLocator, IpApiLocator, Localization, PreferenceStore, Resolver,
    TranslationTable,
};
use crate::ui::navigation::{self, Navigation, Propagation};
use crate::ui::project_cards::{self, ProjectCards};
use crate::ui::typing::TypingAnimator;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time;
use unic_langid::LanguageIdentifier;

pub struct Page<S: PreferenceStore, G: GeoLocator> {
    doc: Document,
    navigation: Navigation,
    cards: ProjectCards,
    localization: Localization<S>,
    typing: Option<TypingAnimator>,
    geo: Arc<G>,
    browser_locale: Option<String>,
    /// Set once the visitor picks a language by hand; a late detection
    /// result must not override it.
    language_chosen: bool,
}

impl<S: PreferenceStore, G: GeoLocator> Page<S, G> {
    /// Attaches the controllers to `doc`, in the order Navigation,
    /// ProjectCards, Localization.
    ///
    /// The typing animation is only created when the page has a typing
    /// element. Language detection does not start until [`Self::run`] or
    /// [`Self::initialize_language`].
    pub fn new(
        doc: Document,
        config: &Config,
        store: S,
        geo: G,
        browser_locale: Option<String>,
    ) -> Self {
        let navigation = Navigation::new(config.navigation);
        let cards = ProjectCards::new(config.tooltip);
        let localization = Localization::new(TranslationTable::load(), &config.localization, store);

        let typing = if doc.typing_text.is_some() {
            TypingAnimator::new(
                config.typing.texts.clone(),
                config.typing.speed(),
                config.typing.pause(),
            )
        } else {
            None
        };

        tracing::debug!(
            sections = doc.sections.len(),
            cards = doc.project_cards.len(),
            typing = typing.is_some(),
            "page initialized"
        );

        Self {
            doc,
            navigation,
            cards,
            localization,
            typing,
            geo: Arc::new(geo),
            browser_locale,
            language_chosen: false,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.doc
    }

    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    #[must_use]
    pub fn localization(&self) -> &Localization<S> {
        &self.localization
    }

    pub fn localization_mut(&mut self) -> &mut Localization<S> {
        &mut self.localization
    }

    #[must_use]
    pub fn typing(&self) -> Option<&TypingAnimator> {
        self.typing.as_ref()
    }

    /// Handles one event.
    ///
    /// For clicks the target's handler runs first and the document-level
    /// tooltip dismissal second, the order in which a click bubbles.
    pub fn update(&mut self, message: Message, now: Instant) -> Propagation {
        match message {
            Message::Scrolled(y) => self
                .navigation
                .update(navigation::Message::Scrolled(y), &mut self.doc),
            Message::Click { target, x, y } => {
                let propagation = self.on_click(target, (x, y), now);
                self.cards.on_document_click(now, &mut self.doc);
                propagation
            }
            Message::CardHovered(index) => {
                self.cards.on_hover(index, &mut self.doc);
                Propagation::Continue
            }
            Message::CardLeft(index) => {
                self.cards.on_leave(index, &mut self.doc);
                Propagation::Continue
            }
            Message::ProfileImageFailed => {
                self.cards.on_profile_image_error(&mut self.doc);
                Propagation::Continue
            }
            Message::Tick => {
                self.cards.tick(now, &mut self.doc);
                Propagation::Continue
            }
        }
    }

    fn on_click(&mut self, target: ClickTarget, pointer: (f64, f64), now: Instant) -> Propagation {
        match target {
            ClickTarget::Hamburger => self
                .navigation
                .update(navigation::Message::HamburgerClicked, &mut self.doc),
            ClickTarget::NavLink(index) => self
                .navigation
                .update(navigation::Message::LinkClicked(index), &mut self.doc),
            ClickTarget::CardBody(index) => {
                self.cards.on_click(
                    index,
                    project_cards::ClickTarget::Body,
                    pointer,
                    now,
                    &mut self.doc,
                );
                Propagation::Continue
            }
            ClickTarget::CardLink(index) => {
                self.cards.on_click(
                    index,
                    project_cards::ClickTarget::Link,
                    pointer,
                    now,
                    &mut self.doc,
                );
                Propagation::Continue
            }
            ClickTarget::LanguageOption(code) => {
                if self.localization.change_language(&code, &mut self.doc) {
                    self.language_chosen = true;
                }
                Propagation::Continue
            }
            ClickTarget::Elsewhere => Propagation::Continue,
        }
    }

    /// Runs one typing tick and returns the delay until the next one.
    pub fn typing_step(&mut self) -> Option<Duration> {
        let step = self.typing.as_mut()?.step();
        self.doc.typing_text = Some(step.visible);
        Some(step.delay)
    }

    /// Applies a finished language detection.
    ///
    /// A language picked by hand in the meantime stays, but the switcher is
    /// rendered either way.
    pub fn on_language_detected(&mut self, language: LanguageIdentifier) {
        if self.language_chosen {
            tracing::debug!(%language, "visitor already picked a language, ignoring detection");
            self.localization.render_language_switcher(&mut self.doc);
            return;
        }
        self.localization.start(language, &mut self.doc);
    }

    /// Detects and applies the language without running the event loop.
    pub async fn initialize_language(&mut self) {
        let language = self.detection().await;
        self.on_language_detected(language);
    }

    /// A detection future that borrows nothing from the page.
    fn detection(&self) -> impl std::future::Future<Output = LanguageIdentifier> {
        detect_language(
            self.localization.resolver().clone(),
            self.localization.saved_preference(),
            Arc::clone(&self.geo),
            self.browser_locale.clone(),
        )
    }

    /// Drives the page until `events` closes, then hands it back.
    ///
    /// Multiplexes incoming events, the typing timer, the tooltip timer and
    /// the in-flight language detection on the current task. The first
    /// typing tick happens immediately.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<Message>) -> Self {
        let detection = self.detection();
        tokio::pin!(detection);
        let mut detecting = true;

        let typing_timer = time::sleep_until(time::Instant::now());
        tokio::pin!(typing_timer);
        let typing_active = self.typing.is_some();

        loop {
            let tooltip_at = self.cards.tooltip_deadline().map(time::Instant::from_std);

            tokio::select! {
                event = events.recv() => match event {
                    Some(message) => {
                        self.update(message, time::Instant::now().into_std());
                    }
                    None => break,
                },
                language = &mut detection, if detecting => {
                    detecting = false;
                    self.on_language_detected(language);
                }
                () = &mut typing_timer, if typing_active => {
                    if let Some(delay) = self.typing_step() {
                        typing_timer.as_mut().reset(time::Instant::now() + delay);
                    }
                }
                () = time::sleep_until(tooltip_at.unwrap_or_else(time::Instant::now)), if tooltip_at.is_some() => {
                    self.update(Message::Tick, time::Instant::now().into_std());
                }
            }
        }

        tracing::debug!("event channel closed, page runtime stopped");
        self
    }
}

impl Page<FileStore, IpApiLocator> {
    /// The page as a visitor's machine runs it.
    ///
    /// The choice is kept in `state.cbor` under `data_dir` (`None` for the
    /// platform data directory), the country comes from the configured
    /// lookup service and the host locale stands in for the browser's.
    pub fn for_visitor(doc: Document, config: &Config, data_dir: Option<PathBuf>) -> Result<Self> {
        let geo = IpApiLocator::new(&config.localization)?;
        Ok(Self::new(
            doc,
            config,
            FileStore::new(data_dir),
            geo,
            system_locale(),
        ))
    }
}

async fn detect_language<G: GeoLocator>(
    resolver: Resolver,
    saved: Option<String>,
    geo: Arc<G>,
    browser_locale: Option<String>,
) -> LanguageIdentifier {
    resolver
        .resolve(saved.as_deref(), geo.as_ref(), browser_locale.as_deref())
        .await
}
