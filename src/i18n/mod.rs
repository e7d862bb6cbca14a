// SPDX-License-Identifier: MPL-2.0
//! Internationalization for the page.
//!
//! Translations are Fluent files embedded in the binary. On load the visit's
//! language is resolved from, in order, the visitor's saved choice, their
//! country, their browser locale and finally the configured default. Every
//! node carrying a translation key is then rewritten in place.
//!
//! Nothing in here fails loudly. Network and storage problems are logged and
//! the next fallback is used; missing keys leave the original text alone.

pub mod fluent;
pub mod geo;
pub mod preference;
pub mod resolve;

pub use fluent::TranslationTable;
pub use geo::{country_to_language, GeoLocator, IpApiLocator, NoGeoLocator};
pub use preference::{FileStore, MemoryStore, PreferenceStore};
pub use resolve::{system_locale, Resolver};

use crate::config::LocalizationConfig;
use crate::dom::Document;
use crate::ui::language_switcher;
use unic_langid::LanguageIdentifier;

pub struct Localization<S: PreferenceStore> {
    table: TranslationTable,
    resolver: Resolver,
    current: LanguageIdentifier,
    store: S,
}

impl<S: PreferenceStore> Localization<S> {
    /// Starts out in the default language; nothing is applied yet.
    pub fn new(table: TranslationTable, config: &LocalizationConfig, store: S) -> Self {
        let resolver = Resolver::new(&table, &config.default_language);
        let current = resolver.default_language().clone();
        Self {
            table,
            resolver,
            current,
            store,
        }
    }

    #[must_use]
    pub fn current(&self) -> &LanguageIdentifier {
        &self.current
    }

    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    #[must_use]
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The stored choice. Storage errors count as "nothing saved".
    #[must_use]
    pub fn saved_preference(&self) -> Option<String> {
        match self.store.load() {
            Ok(saved) => saved,
            Err(err) => {
                tracing::warn!(%err, "could not read saved language");
                None
            }
        }
    }

    pub async fn resolve_language<G: GeoLocator>(
        &self,
        geo: &G,
        browser_locale: Option<&str>,
    ) -> LanguageIdentifier {
        let saved = self.saved_preference();
        self.resolver
            .resolve(saved.as_deref(), geo, browser_locale)
            .await
    }

    /// Switches to an already resolved language and renders everything.
    ///
    /// Unlike [`Self::change_language`] this does not persist the choice.
    pub fn start(&mut self, language: LanguageIdentifier, doc: &mut Document) {
        if self.table.supports(&language) {
            self.current = language;
        }
        tracing::info!(language = %self.current, "page language selected");
        self.apply_translations(doc);
        self.render_language_switcher(doc);
    }

    /// Resolves the language, then applies it.
    pub async fn initialize<G: GeoLocator>(
        &mut self,
        geo: &G,
        browser_locale: Option<&str>,
        doc: &mut Document,
    ) {
        let language = self.resolve_language(geo, browser_locale).await;
        self.start(language, doc);
    }

    /// Rewrites every keyed node that has a translation and sets `<html lang>`.
    pub fn apply_translations(&self, doc: &mut Document) {
        for node in &mut doc.translatable {
            if let Some(text) = self.table.get(&self.current, &node.key) {
                node.text = text;
            }
        }
        doc.lang = self.table.lang_tag(&self.current);
    }

    pub fn render_language_switcher(&self, doc: &mut Document) {
        doc.language_switcher = Some(language_switcher::render(&self.table, &self.current));
    }

    /// Switches language on explicit request and remembers the choice.
    ///
    /// Returns `false`, changing nothing, when `code` is not supported.
    pub fn change_language(&mut self, code: &str, doc: &mut Document) -> bool {
        let Some(language) = self.resolver.supported(code) else {
            tracing::debug!(code, "ignoring unsupported language");
            return false;
        };

        self.current = language;
        self.apply_translations(doc);
        if let Some(switcher) = doc.language_switcher.as_mut() {
            switcher.label = language_switcher::label(&self.current);
        }

        if let Err(err) = self.store.save(&self.current.to_string()) {
            tracing::warn!(%err, "could not persist language choice");
        }
        true
    }

    /// Forgets the saved choice so the next visit detects again.
    pub fn clear_preference(&mut self) {
        if let Err(err) = self.store.clear() {
            tracing::warn!(%err, "could not clear saved language");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::TranslatableNode;
    use crate::error::{Error, Result};

    fn lang(code: &str) -> LanguageIdentifier {
        code.parse().expect("valid language id")
    }

    fn service(store: MemoryStore) -> Localization<MemoryStore> {
        Localization::new(TranslationTable::load(), &LocalizationConfig::default(), store)
    }

    fn page() -> Document {
        Document {
            translatable: vec![
                TranslatableNode::new("nav-home", "Início"),
                TranslatableNode::new("hero-greeting", "Olá, eu sou"),
                TranslatableNode::new("not-a-key", "Texto original"),
            ],
            ..Document::default()
        }
    }

    /// A store whose backend is gone.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<String>> {
            Err(Error::Storage("unavailable".to_string()))
        }
        fn save(&mut self, _code: &str) -> Result<()> {
            Err(Error::Storage("unavailable".to_string()))
        }
        fn clear(&mut self) -> Result<()> {
            Err(Error::Storage("unavailable".to_string()))
        }
    }

    #[test]
    fn starts_in_default_language() {
        assert_eq!(service(MemoryStore::default()).current(), &lang("pt"));
    }

    #[test]
    fn apply_translations_rewrites_known_keys_only() {
        let mut loc = service(MemoryStore::default());
        let mut doc = page();
        loc.start(lang("en"), &mut doc);

        assert_eq!(doc.text_of("nav-home"), Some("Home"));
        assert_eq!(doc.text_of("hero-greeting"), Some("Hello, I am"));
        assert_eq!(doc.text_of("not-a-key"), Some("Texto original"));
        assert_eq!(doc.lang, "en");
    }

    #[test]
    fn apply_translations_is_idempotent() {
        let mut loc = service(MemoryStore::default());
        let mut doc = page();
        loc.start(lang("en"), &mut doc);
        let once = doc.clone();
        loc.apply_translations(&mut doc);
        assert_eq!(doc, once);
    }

    #[test]
    fn start_renders_switcher_with_all_languages() {
        let mut loc = service(MemoryStore::default());
        let mut doc = page();
        loc.start(lang("pt"), &mut doc);

        let switcher = doc.language_switcher.expect("switcher rendered");
        assert_eq!(switcher.label, "PT");
        let codes: Vec<_> = switcher.options.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, ["en", "pt"]);
        assert_eq!(doc.lang, "pt-BR");
    }

    #[test]
    fn change_language_applies_and_persists() {
        let mut loc = service(MemoryStore::default());
        let mut doc = page();
        loc.start(lang("pt"), &mut doc);

        assert!(loc.change_language("en", &mut doc));
        assert_eq!(loc.current(), &lang("en"));
        assert_eq!(doc.text_of("nav-home"), Some("Home"));
        assert_eq!(doc.language_switcher.map(|s| s.label).as_deref(), Some("EN"));
        assert_eq!(loc.saved_preference().as_deref(), Some("en"));
    }

    #[test]
    fn unsupported_language_changes_nothing() {
        let mut loc = service(MemoryStore::default());
        let mut doc = page();
        loc.start(lang("en"), &mut doc);
        let before = doc.clone();

        assert!(!loc.change_language("xx", &mut doc));
        assert_eq!(loc.current(), &lang("en"));
        assert_eq!(doc, before);
        assert!(loc.saved_preference().is_none());
    }

    #[test]
    fn clear_preference_forgets_choice() {
        let mut loc = service(MemoryStore::with_value("en"));
        loc.clear_preference();
        assert!(loc.saved_preference().is_none());
    }

    #[tokio::test]
    async fn saved_preference_drives_initialization() {
        let mut loc = service(MemoryStore::with_value("en"));
        let mut doc = page();
        loc.initialize(&NoGeoLocator, Some("pt-BR"), &mut doc).await;
        assert_eq!(loc.current(), &lang("en"));
        assert_eq!(doc.text_of("nav-home"), Some("Home"));
    }

    #[tokio::test]
    async fn broken_storage_degrades_silently() {
        let mut loc = Localization::new(
            TranslationTable::load(),
            &LocalizationConfig::default(),
            BrokenStore,
        );
        let mut doc = page();
        loc.initialize(&NoGeoLocator, Some("en-US"), &mut doc).await;
        assert_eq!(loc.current(), &lang("en"));

        assert!(loc.change_language("pt", &mut doc));
        assert_eq!(loc.current(), &lang("pt"));
        loc.clear_preference();
    }
}
