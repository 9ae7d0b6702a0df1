use super::locale::Language;

/// Renders a localized template. The language is always explicit, so two chats
/// rendering at the same time never see each other's locale.
pub trait Translator: Send + Sync {
    fn render(&self, language: Language, key: &str, params: &[(&str, &str)]) -> String;
}

/// Looks templates up in the `locales/*.yml` tables compiled in by `rust-i18n`.
/// Missing keys fall back to English, then to the key itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct I18nTranslator;

impl Translator for I18nTranslator {
    fn render(&self, language: Language, key: &str, params: &[(&str, &str)]) -> String {
        let template = t!(key, locale = language.tag());
        interpolate(&template, params)
    }
}

/// Replaces `%{name}` placeholders verbatim. Values are not escaped.
fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("%{{{}}}", name), value)
    })
}
