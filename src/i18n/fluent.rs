// SPDX-License-Identifier: MPL-2.0
//! The translation table, backed by embedded Fluent files.
//!
//! Each `assets/i18n/<lang>.ftl` file becomes one bundle. The table is built
//! once at startup and never changes afterwards.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Message holding the value of the `<html lang>` attribute.
const LANG_TAG_KEY: &str = "lang-tag";
/// Message holding the language's own name, for the switcher.
const LANGUAGE_NAME_KEY: &str = "language-name";
/// Message holding a flag glyph, for the switcher.
const LANGUAGE_FLAG_KEY: &str = "language-flag";

pub struct TranslationTable {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available: Vec<LanguageIdentifier>,
}

impl Default for TranslationTable {
    fn default() -> Self {
        Self::load()
    }
}

impl TranslationTable {
    /// Builds the table from the embedded `.ftl` files.
    ///
    /// Files whose name is not a language identifier are skipped; syntax
    /// errors are logged and the messages that did parse are kept.
    pub fn load() -> Self {
        let sources = Asset::iter().filter_map(|file| {
            let filename = file.as_ref();
            let locale = filename
                .strip_suffix(".ftl")?
                .parse::<LanguageIdentifier>()
                .ok()?;
            let content = Asset::get(filename)?;
            Some((
                locale,
                String::from_utf8_lossy(content.data.as_ref()).to_string(),
            ))
        });
        Self::from_sources(sources)
    }

    /// Builds the table from `(language, ftl source)` pairs.
    pub fn from_sources(sources: impl IntoIterator<Item = (LanguageIdentifier, String)>) -> Self {
        let mut bundles = HashMap::new();
        let mut available = Vec::new();

        for (locale, source) in sources {
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((partial, errors)) => {
                    tracing::warn!(%locale, ?errors, "translation file has syntax errors");
                    partial
                }
            };

            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%locale, ?errors, "duplicate translation keys");
            }

            if !available.contains(&locale) {
                available.push(locale.clone());
            }
            bundles.insert(locale, bundle);
        }

        available.sort_by_key(ToString::to_string);
        tracing::debug!(languages = ?available, "translation table loaded");

        Self { bundles, available }
    }

    /// Supported languages, sorted by code.
    #[must_use]
    pub fn available(&self) -> &[LanguageIdentifier] {
        &self.available
    }

    #[must_use]
    pub fn supports(&self, language: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(language)
    }

    /// Looks up `key` for `language`.
    ///
    /// Returns `None` when the language or the key is unknown, or when the
    /// message fails to format.
    #[must_use]
    pub fn get(&self, language: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            None
        }
    }

    /// Value for `<html lang>`, e.g. `pt-BR`. Falls back to the code itself.
    #[must_use]
    pub fn lang_tag(&self, language: &LanguageIdentifier) -> String {
        self.get(language, LANG_TAG_KEY)
            .unwrap_or_else(|| language.to_string())
    }

    /// Human label for the switcher, e.g. `🇧🇷 Português`.
    #[must_use]
    pub fn display_name(&self, language: &LanguageIdentifier) -> String {
        let name = self
            .get(language, LANGUAGE_NAME_KEY)
            .unwrap_or_else(|| language.to_string());
        match self.get(language, LANGUAGE_FLAG_KEY) {
            Some(flag) => format!("{flag} {name}"),
            None => name,
        }
    }
}
