// SPDX-License-Identifier: MPL-2.0
//! Picks the language a visit starts in.
//!
//! Sources are tried in order and the first usable answer wins:
//!
//! 1. the language the visitor chose earlier, if still supported
//! 2. the visitor's country, as reported by a [`GeoLocator`]
//! 3. the primary subtag of the browser locale
//! 4. the configured default

use super::fluent::TranslationTable;
use super::geo::{country_to_language, GeoLocator};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub struct Resolver {
    supported: Vec<LanguageIdentifier>,
    default: LanguageIdentifier,
}

impl Resolver {
    /// Builds a resolver over the languages of `table`.
    ///
    /// An unparseable or unsupported `default_code` is replaced by the first
    /// supported language.
    #[must_use]
    pub fn new(table: &TranslationTable, default_code: &str) -> Self {
        Self::with_languages(table.available().to_vec(), default_code)
    }

    #[must_use]
    pub fn with_languages(supported: Vec<LanguageIdentifier>, default_code: &str) -> Self {
        let default = match default_code.parse::<LanguageIdentifier>() {
            Ok(lang) if supported.contains(&lang) => lang,
            _ => {
                let fallback = supported.first().cloned().unwrap_or_default();
                tracing::warn!(
                    default_code,
                    %fallback,
                    "default language is not supported, using fallback"
                );
                fallback
            }
        };
        Self { supported, default }
    }

    #[must_use]
    pub fn default_language(&self) -> &LanguageIdentifier {
        &self.default
    }

    /// `code` as a supported language, if it is one.
    #[must_use]
    pub fn supported(&self, code: &str) -> Option<LanguageIdentifier> {
        let lang = code.trim().parse::<LanguageIdentifier>().ok()?;
        self.supported.contains(&lang).then_some(lang)
    }

    /// Runs the whole precedence chain.
    ///
    /// The geo lookup is only awaited when there is no usable saved choice.
    /// Its failures are logged and treated as "no answer".
    pub async fn resolve<G: GeoLocator>(
        &self,
        saved: Option<&str>,
        geo: &G,
        browser_locale: Option<&str>,
    ) -> LanguageIdentifier {
        if let Some(lang) = self.from_saved(saved) {
            tracing::debug!(%lang, "using saved language");
            return lang;
        }

        match geo.country_code().await {
            Ok(country) => {
                let lang = self.from_country(&country);
                tracing::debug!(%country, %lang, "using language of visitor's country");
                lang
            }
            Err(err) => {
                tracing::debug!(%err, "geo lookup unavailable, using browser locale");
                self.from_browser(browser_locale)
            }
        }
    }

    pub fn from_saved(&self, saved: Option<&str>) -> Option<LanguageIdentifier> {
        saved.and_then(|code| self.supported(code))
    }

    /// Country mapping; a mapped language we don't ship becomes the default.
    #[must_use]
    pub fn from_country(&self, country_code: &str) -> LanguageIdentifier {
        self.supported(country_to_language(country_code))
            .unwrap_or_else(|| self.default.clone())
    }

    /// Primary subtag of the browser locale, else the default.
    #[must_use]
    pub fn from_browser(&self, browser_locale: Option<&str>) -> LanguageIdentifier {
        browser_locale
            .and_then(|locale| locale.parse::<LanguageIdentifier>().ok())
            .and_then(|locale| self.supported(locale.language.as_str()))
            .unwrap_or_else(|| self.default.clone())
    }
}

/// The host's locale, standing in for the browser's `navigator.language`.
#[must_use]
pub fn system_locale() -> Option<String> {
    sys_locale::get_locale()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    struct FixedCountry(&'static str);

    impl GeoLocator for FixedCountry {
        async fn country_code(&self) -> Result<String, NetworkError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGeo;

    impl GeoLocator for FailingGeo {
        async fn country_code(&self) -> Result<String, NetworkError> {
            Err(NetworkError::Request("connection refused".to_string()))
        }
    }

    /// Fails the test if consulted.
    struct UnreachableGeo;

    impl GeoLocator for UnreachableGeo {
        async fn country_code(&self) -> Result<String, NetworkError> {
            panic!("geo lookup must not run when a saved language exists");
        }
    }

    fn lang(code: &str) -> LanguageIdentifier {
        code.parse().expect("valid language id")
    }

    fn resolver() -> Resolver {
        Resolver::with_languages(vec![lang("en"), lang("pt")], "pt")
    }

    #[tokio::test]
    async fn saved_choice_wins_over_everything() {
        let r = resolver();
        let got = r.resolve(Some("en"), &UnreachableGeo, Some("pt-BR")).await;
        assert_eq!(got, lang("en"));
    }

    #[tokio::test]
    async fn unsupported_saved_choice_is_ignored() {
        let r = resolver();
        let got = r.resolve(Some("fr"), &FixedCountry("BR"), Some("en-US")).await;
        assert_eq!(got, lang("pt"));
    }

    #[tokio::test]
    async fn geo_country_maps_to_language() {
        let r = resolver();
        assert_eq!(r.resolve(None, &FixedCountry("BR"), Some("en-US")).await, lang("pt"));
        assert_eq!(r.resolve(None, &FixedCountry("GB"), Some("pt-BR")).await, lang("en"));
        assert_eq!(r.resolve(None, &FixedCountry("JP"), Some("pt-BR")).await, lang("en"));
    }

    #[tokio::test]
    async fn geo_failure_falls_back_to_browser_locale() {
        let r = resolver();
        assert_eq!(r.resolve(None, &FailingGeo, Some("en-GB")).await, lang("en"));
        assert_eq!(r.resolve(None, &FailingGeo, Some("de-DE")).await, lang("pt"));
        assert_eq!(r.resolve(None, &FailingGeo, None).await, lang("pt"));
    }

    #[test]
    fn country_mapping_to_unshipped_language_uses_default() {
        let r = Resolver::with_languages(vec![lang("pt")], "pt");
        assert_eq!(r.from_country("US"), lang("pt"));
    }

    #[test]
    fn browser_locale_uses_primary_subtag() {
        let r = resolver();
        assert_eq!(r.from_browser(Some("pt-PT")), lang("pt"));
        assert_eq!(r.from_browser(Some("not a locale!")), lang("pt"));
    }

    #[test]
    fn unsupported_default_falls_back_to_first_language() {
        let r = Resolver::with_languages(vec![lang("en"), lang("pt")], "xx");
        assert_eq!(r.default_language(), &lang("en"));
    }

    #[test]
    fn supported_rejects_unknown_codes() {
        let r = resolver();
        assert_eq!(r.supported(" en "), Some(lang("en")));
        assert!(r.supported("fr").is_none());
        assert!(r.supported("").is_none());
    }
}
