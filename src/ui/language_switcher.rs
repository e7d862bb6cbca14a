// SPDX-License-Identifier: MPL-2.0
//! The language selector pinned to the page corner.
//!
//! Shows the current language code and a dropdown with every shipped
//! language. Picking an entry is handled by
//! [`Localization::change_language`](crate::i18n::Localization::change_language).

use crate::dom::{LanguageOption, LanguageSwitcher};
use crate::i18n::TranslationTable;
use unic_langid::LanguageIdentifier;

/// Builds the switcher for `current`.
#[must_use]
pub fn render(table: &TranslationTable, current: &LanguageIdentifier) -> LanguageSwitcher {
    LanguageSwitcher {
        label: label(current),
        options: table
            .available()
            .iter()
            .map(|language| LanguageOption {
                code: language.to_string(),
                label: table.display_name(language),
            })
            .collect(),
    }
}

/// Visible label of the toggle button, e.g. `PT`.
#[must_use]
pub fn label(current: &LanguageIdentifier) -> String {
    current.language.as_str().to_uppercase()
}
