// SPDX-License-Identifier: MPL-2.0
//! Localization backed by Fluent.
//!
//! Locale files are embedded `.ftl` resources. The active locale is
//! resolved in order: CLI flag, config file, OS locale, then `en-US`.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Builds the bundle set from the embedded locale files and resolves
    /// the active locale.
    #[must_use]
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                let res =
                    FluentResource::try_new(source).expect("embedded FTL file failed to parse");
                let mut bundle = FluentBundle::new(vec![locale.clone()]);
                bundle
                    .add_resource(res)
                    .expect("embedded FTL resource conflicts with itself");
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }

        let fallback: LanguageIdentifier = FALLBACK_LOCALE
            .parse()
            .expect("fallback locale is well-formed");
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(fallback);

        Self {
            bundles,
            current_locale,
        }
    }

    /// Returns the locale the bundle set resolved to.
    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates a message key for the current locale.
    ///
    /// Unknown keys render as `MISSING: {key}` so they are visible in the
    /// UI instead of silently blank.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let parse_known = |lang: &str| {
        lang.parse::<LanguageIdentifier>()
            .ok()
            .filter(|parsed| available.contains(parsed))
    };

    if let Some(lang) = cli_lang.as_deref().and_then(parse_known) {
        return Some(lang);
    }
    if let Some(lang) = config.language.as_deref().and_then(parse_known) {
        return Some(lang);
    }
    if let Some(lang) = sys_locale::get_locale().as_deref().and_then(parse_known) {
        return Some(lang);
    }
    None
}
