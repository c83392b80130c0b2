// SPDX-License-Identifier: MPL-2.0
//! Persisting user preferences back to the config file.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;

/// Writes the current preferences into `settings.toml`.
///
/// Load-modify-save so unrelated sections survive. A failed save is a
/// diagnostic, not an error: the in-memory preference already applies for
/// this session.
pub fn persist_preferences(theme_mode: &ThemeMode, i18n: &I18n) {
    let (mut config, _warning) = config::load();
    config.general.theme_mode = *theme_mode;
    config.general.language = Some(i18n.current_locale().to_string());

    if let Err(error) = config::save(&config) {
        eprintln!("Failed to save config: {:?}", error);
    }
}
