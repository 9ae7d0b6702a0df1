use std::str::FromStr;

pub use model::{Country, Language};

mod model;

/// Maps a country code to the language replies are rendered in.
pub trait LocaleResolver: Send + Sync {
    /// Total: unrecognized codes resolve to [`Language::English`].
    fn resolve(&self, country_code: &str) -> Language;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CountryLocaleResolver;

impl LocaleResolver for CountryLocaleResolver {
    fn resolve(&self, country_code: &str) -> Language {
        Country::from_str(country_code)
            .map(|country| country.language())
            .unwrap_or_default()
    }
}
