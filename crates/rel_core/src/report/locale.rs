//! Report Label Localization
//!
//! Fluent (FTL) based lookup for report section titles. The analysis core
//! only supplies message keys plus interpolation values; the localizer turns
//! them into display text for the negotiated locale.

use crate::error::{AnalysisError, Result};
use fluent::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Locales shipped with the crate.
pub const SUPPORTED_LOCALES: &[&str] = &["en-US"];

/// Fallback locale, always loaded.
pub const DEFAULT_LOCALE: &str = "en-US";

const EN_US_FTL: &str = "\
report-scale-reliability = Reliability analysis of scales
report-correlation-matrix = Correlation matrix for { $name }
report-pca = PCA for { $name }
report-principal-axis = Principal Axis for { $name }
";

/// Report label localizer.
///
/// Keeps one `FluentBundle` per loaded locale; lookups try the current
/// locale, then the fallback, then return the bracketed key.
pub struct Localizer {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
    current_locale: String,
    fallback_locale: String,
}

impl Localizer {
    /// Create a localizer with the embedded `en-US` resource loaded.
    pub fn new() -> Result<Self> {
        let mut localizer = Self {
            bundles: HashMap::new(),
            current_locale: DEFAULT_LOCALE.to_string(),
            fallback_locale: DEFAULT_LOCALE.to_string(),
        };
        localizer.load_locale(DEFAULT_LOCALE, EN_US_FTL)?;
        Ok(localizer)
    }

    /// Load (or replace) a locale from FTL content.
    pub fn load_locale(&mut self, locale: &str, ftl_content: &str) -> Result<()> {
        let resource = FluentResource::try_new(ftl_content.to_string()).map_err(|_| {
            AnalysisError::LocaleParse(format!("invalid FTL content for locale {}", locale))
        })?;

        let lang_id: LanguageIdentifier = locale
            .parse()
            .map_err(|_| AnalysisError::LocaleParse(format!("invalid locale: {}", locale)))?;

        let mut bundle = FluentBundle::new(vec![lang_id]);
        // Keep interpolated titles free of Unicode isolation marks
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|_| {
            AnalysisError::LocaleParse(format!("conflicting messages in locale {}", locale))
        })?;

        self.bundles.insert(locale.to_string(), bundle);
        Ok(())
    }

    /// Switch the current locale; it must have been loaded.
    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        if !self.bundles.contains_key(locale) {
            return Err(AnalysisError::LocaleNotFound(locale.to_string()));
        }
        self.current_locale = locale.to_string();
        Ok(())
    }

    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }

    /// Negotiate the best loaded locale for a requested preference list.
    pub fn negotiate_locale(&self, requested: &[&str]) -> String {
        let available: Vec<LanguageIdentifier> =
            self.bundles.keys().filter_map(|k| k.parse().ok()).collect();

        let requested: Vec<LanguageIdentifier> =
            requested.iter().filter_map(|l| l.parse().ok()).collect();

        let default: Option<LanguageIdentifier> = self.fallback_locale.parse().ok();

        let negotiated = negotiate_languages(
            &requested,
            &available,
            default.as_ref(),
            NegotiationStrategy::Filtering,
        );

        negotiated
            .first()
            .map(|l| l.to_string())
            .unwrap_or_else(|| self.fallback_locale.clone())
    }

    /// Look up a message, interpolating `args` as Fluent variables.
    ///
    /// Falls back to the fallback locale, then to the bracketed key.
    pub fn label(&self, key: &str, args: &[(&str, &str)]) -> String {
        if let Some(text) = self.format_in(&self.current_locale, key, args) {
            return text;
        }
        if self.current_locale != self.fallback_locale {
            if let Some(text) = self.format_in(&self.fallback_locale, key, args) {
                return text;
            }
        }
        format!("[{}]", key)
    }

    fn format_in(&self, locale: &str, key: &str, args: &[(&str, &str)]) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }

        let mut errors = vec![];
        let formatted = bundle.format_pattern(pattern, Some(&fluent_args), &mut errors);
        Some(formatted.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_label() {
        let localizer = Localizer::new().unwrap();
        assert_eq!(
            localizer.label("report-scale-reliability", &[]),
            "Reliability analysis of scales"
        );
    }

    #[test]
    fn test_interpolated_label_has_no_isolation_marks() {
        let localizer = Localizer::new().unwrap();
        let label = localizer.label("report-correlation-matrix", &[("name", "Burnout")]);
        assert_eq!(label, "Correlation matrix for Burnout");
    }

    #[test]
    fn test_missing_key_returns_bracketed_key() {
        let localizer = Localizer::new().unwrap();
        assert_eq!(localizer.label("no-such-key", &[]), "[no-such-key]");
    }

    #[test]
    fn test_set_locale_requires_loaded_bundle() {
        let mut localizer = Localizer::new().unwrap();
        assert!(matches!(
            localizer.set_locale("ko-KR"),
            Err(AnalysisError::LocaleNotFound(_))
        ));
        localizer.load_locale("ko-KR", "report-pca = { $name } PCA\n").unwrap();
        localizer.set_locale("ko-KR").unwrap();
        assert_eq!(localizer.label("report-pca", &[("name", "X")]), "X PCA");
    }

    #[test]
    fn test_fallback_to_default_locale() {
        let mut localizer = Localizer::new().unwrap();
        localizer.load_locale("ko-KR", "report-pca = { $name } PCA\n").unwrap();
        localizer.set_locale("ko-KR").unwrap();
        // Key absent from ko-KR falls back to en-US
        assert_eq!(
            localizer.label("report-scale-reliability", &[]),
            "Reliability analysis of scales"
        );
    }

    #[test]
    fn test_negotiate_prefers_loaded_locale() {
        let mut localizer = Localizer::new().unwrap();
        localizer.load_locale("ko-KR", "report-pca = PCA\n").unwrap();
        assert_eq!(localizer.negotiate_locale(&["ko-KR", "en-US"]), "ko-KR");
        assert_eq!(localizer.negotiate_locale(&["ja-JP"]), "en-US");
    }
}
