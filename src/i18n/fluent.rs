// SPDX-License-Identifier: MPL-2.0
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches, and for keys a locale lacks.
pub const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the display locale.
    ///
    /// Resolution order: `cli_lang`, then `config_lang`, then the OS locale,
    /// then [`DEFAULT_LOCALE`].
    pub fn new(cli_lang: Option<&str>, config_lang: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match build_bundle(&locale, &content.data) {
                Ok(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                Err(reason) => {
                    tracing::warn!(file = filename, %reason, "skipping translation file");
                }
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let os_locale = sys_locale::get_locale();
        let current_locale = resolve_locale(
            [cli_lang, config_lang, os_locale.as_deref()],
            &available_locales,
        )
        .unwrap_or(DEFAULT_LOCALE);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Switches locale. Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key` with named arguments (`{ $name }` placeables).
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        [&self.current_locale, &DEFAULT_LOCALE]
            .into_iter()
            .filter_map(|locale| self.bundles.get(locale))
            .find_map(|bundle| {
                let pattern = bundle.get_message(key)?.value()?;
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                errors.is_empty().then(|| value.into_owned())
            })
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }
}

fn build_bundle(
    locale: &LanguageIdentifier,
    data: &[u8],
) -> Result<FluentBundle<FluentResource>, String> {
    let source = String::from_utf8_lossy(data).into_owned();
    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| format!("{} parse error(s)", errors.len()))?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Bidi isolation marks would show up as stray glyphs in iced text.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| format!("{} duplicate message(s)", errors.len()))?;
    Ok(bundle)
}

/// Returns the first candidate that parses and has a bundle.
///
/// A candidate also matches a bundle with the same language and no region
/// (`fr-CA` falls back to `fr`).
fn resolve_locale<'a>(
    candidates: impl IntoIterator<Item = Option<&'a str>>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| {
            if available.contains(&wanted) {
                return Some(wanted);
            }
            available
                .iter()
                .find(|locale| locale.language == wanted.language && locale.region.is_none())
                .cloned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec![langid!("en-US"), langid!("fr")]
    }

    #[test]
    fn cli_beats_config() {
        let lang = resolve_locale([Some("fr"), Some("en-US")], &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn config_used_when_cli_missing() {
        let lang = resolve_locale([None, Some("fr")], &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn unknown_and_invalid_candidates_are_skipped() {
        let lang = resolve_locale([Some("not a locale!"), Some("de"), Some("en-US")], &available());
        assert_eq!(lang, Some(langid!("en-US")));
    }

    #[test]
    fn regional_variant_falls_back_to_language() {
        let lang = resolve_locale([Some("fr-CA")], &available());
        assert_eq!(lang, Some(langid!("fr")));
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(resolve_locale([None, Some("ja")], &available()), None);
    }

    #[test]
    fn embedded_bundles_are_loaded() {
        let i18n = I18n::new(Some("en-US"), None);
        assert!(i18n.available_locales().contains(&langid!("en-US")));
        assert!(i18n.available_locales().contains(&langid!("fr")));
        assert_eq!(i18n.tr("emotion-happy"), "Happy");
    }

    #[test]
    fn french_translation_is_used() {
        let i18n = I18n::new(Some("fr"), None);
        assert_eq!(i18n.tr("video-button-start"), "Démarrer la vidéo");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::new(Some("en-US"), None);
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn arguments_are_substituted() {
        let i18n = I18n::new(Some("en-US"), None);
        assert_eq!(
            i18n.tr_with_args("emotion-current", &[("label", "Sad")]),
            "Detected Emotion: Sad"
        );
    }

    #[test]
    fn set_locale_ignores_unknown() {
        let mut i18n = I18n::new(Some("en-US"), None);
        i18n.set_locale(langid!("ja"));
        assert_eq!(i18n.current_locale(), &langid!("en-US"));
        i18n.set_locale(langid!("fr"));
        assert_eq!(i18n.current_locale(), &langid!("fr"));
    }
}
